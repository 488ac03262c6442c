//! SemAddr Core Library
//!
//! Derives a compact, error-tolerant 24-bit semantic identifier (SemId) from
//! an embedding vector and provides the codec machinery around it.
//!
//! # Architecture
//!
//! This crate defines:
//! - Domain types ([`Message12`], [`SemId`])
//! - The binary Golay[24,12,8] encoder/decoder ([`golay`])
//! - The embedding quantizer ([`quantizer::Quantizer`])
//! - The text-to-SemId pipeline and the [`traits::EmbeddingProvider`] seam
//! - Error types and the [`error::Result`] alias
//! - Configuration structures
//!
//! # Data flow
//!
//! ```text
//! text -> (external embedding) -> Quantizer -> Message12
//!      -> golay::encode -> SemId (24-bit codeword)
//! ```
//!
//! # Example
//!
//! ```
//! use semaddr_core::golay;
//! use semaddr_core::types::Message12;
//!
//! let msg = Message12::new(0xABC).unwrap();
//! let id = golay::encode(msg);
//! let decoded = golay::decode(id.as_u32()).unwrap();
//! assert_eq!(decoded.message, msg);
//! assert_eq!(decoded.corrected_bits, 0);
//! ```

pub mod config;
pub mod error;
pub mod golay;
pub mod pipeline;
pub mod quantizer;
pub mod stubs;
pub mod traits;
pub mod types;

// Re-exports for convenience
pub use config::{QuantizerConfig, SemAddrConfig};
pub use error::{Result, SemAddrError};
pub use pipeline::SemIdPipeline;
pub use quantizer::Quantizer;
pub use types::{Message12, SemId};
