//! Top-level unified error type for the semaddr workspace.

use thiserror::Error;

use super::sub_errors::{CodecError, ConfigError, IndexError, LedgerError, QuantizeError};

/// Top-level unified error type.
///
/// All workspace errors convert into this type via `From` implementations,
/// so cross-crate call chains can use one [`Result`] alias and `?`
/// throughout.
///
/// # Integrity failures
///
/// [`LedgerError::AddressMismatch`] is classified as critical: it indicates
/// a broken interoperability contract (wrong code body or hash
/// construction), not a transient fault.
#[derive(Debug, Error)]
pub enum SemAddrError {
    /// Embedding quantization error.
    #[error("quantize error: {0}")]
    Quantize(#[from] QuantizeError),

    /// Golay codec error.
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),

    /// Address derivation / ledger interaction error.
    #[error("ledger error: {0}")]
    Ledger(#[from] LedgerError),

    /// Similarity index error.
    #[error("index error: {0}")]
    Index(#[from] IndexError),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// External embedding provider failure.
    #[error("embedding provider error: {0}")]
    Embedding(String),

    /// Internal error indicating a bug.
    ///
    /// Invariant violations and unrecoverable state; these should be
    /// investigated, not retried.
    #[error("internal error: {0}")]
    Internal(String),
}

impl SemAddrError {
    /// Whether this error indicates a broken interoperability or internal
    /// invariant, as opposed to bad input or a transient fault.
    #[inline]
    pub fn is_critical(&self) -> bool {
        matches!(
            self,
            Self::Ledger(LedgerError::AddressMismatch { .. }) | Self::Internal(_)
        )
    }

    /// Create an internal error from a message.
    #[inline]
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Create an embedding-provider error from a message.
    #[inline]
    pub fn embedding(msg: impl Into<String>) -> Self {
        Self::Embedding(msg.into())
    }
}

/// Result type alias for semaddr operations.
pub type Result<T> = std::result::Result<T, SemAddrError>;
