//! Error types for the semaddr workspace.
//!
//! This module defines the central error types used across the crates:
//!
//! - [`SemAddrError`]: top-level unified error
//! - Sub-error types: [`QuantizeError`], [`CodecError`], [`LedgerError`],
//!   [`IndexError`], [`ConfigError`]
//!
//! All sub-errors live here (including those raised by the ledger and index
//! crates) so every crate converges on one `Result` alias and `From`
//! conversions stay in a single place.
//!
//! Library code never panics on bad input; everything is a typed `Result`.

mod sub_errors;
mod unified;

#[cfg(test)]
mod tests;

pub use sub_errors::{CodecError, ConfigError, IndexError, LedgerError, QuantizeError};
pub use unified::{Result, SemAddrError};
