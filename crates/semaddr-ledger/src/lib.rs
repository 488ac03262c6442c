//! SemAddr Ledger Library
//!
//! Deterministic content-address derivation for SemId-keyed storage records,
//! plus the client seam to an actual ledger.
//!
//! # The interoperability contract
//!
//! Two independent parties that agree on a deployer, a record code body, and
//! a SemId must compute the same address with no coordination:
//!
//! ```text
//! address = keccak256(0xff || deployer || salt || keccak256(code_body))[12..]
//! ```
//!
//! where `salt` is the SemId expanded to 32 bytes (big-endian, low-order
//! bytes 29..32; see [`Salt::from_semid`]). [`create2::derive_address`] must
//! match the external verifier byte-for-byte — a mismatch is an integrity
//! failure, never retried or auto-corrected.
//!
//! # Modules
//!
//! - [`address`] — 20-byte addresses with EIP-55 checksum display
//! - [`salt`] — the fixed SemId-to-32-byte expansion convention
//! - [`create2`] — the two-stage hash formula
//! - [`client`] — the async [`client::LedgerClient`] collaborator trait
//! - [`deployment`] — predict/broadcast/verify orchestration
//! - [`memory`] — in-memory ledger stub with initialize-once records

pub mod address;
pub mod client;
pub mod create2;
pub mod deployment;
pub mod hash;
pub mod memory;
pub mod salt;

pub use address::Address;
pub use client::{LedgerClient, RecordInfo, TxHash};
pub use create2::{derive_address, CodeHash};
pub use deployment::{Deployer, DeploymentReport, DeploymentStatus, LedgerConfig};
pub use hash::keccak256;
pub use memory::MemoryLedger;
pub use salt::Salt;
