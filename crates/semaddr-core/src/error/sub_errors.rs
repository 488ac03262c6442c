//! Sub-error types, one enum per concern.

use thiserror::Error;

/// Errors raised while quantizing an embedding vector into a 12-bit message.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuantizeError {
    /// Embedding vector length does not match the configured dimension.
    ///
    /// A caller contract violation; rejected before any projection runs and
    /// never retried.
    #[error("invalid input shape: expected {expected} dimensions, got {actual}")]
    InvalidInputShape {
        /// Dimension the quantizer was configured for.
        expected: usize,
        /// Dimension of the vector actually supplied.
        actual: usize,
    },

    /// Embedding vector contains NaN or infinity.
    #[error("non-finite value {value} at index {index} in embedding vector")]
    NonFiniteValue {
        /// Index of the offending component.
        index: usize,
        /// The non-finite value.
        value: f32,
    },
}

/// Errors raised by the Golay[24,12,8] codec and identifier parsing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CodecError {
    /// Message value exceeds 12 bits.
    #[error("message 0x{value:x} exceeds 12 bits")]
    MessageOutOfRange {
        /// The rejected value.
        value: u16,
    },

    /// Word value exceeds 24 bits.
    #[error("word 0x{value:x} exceeds 24 bits")]
    WordOutOfRange {
        /// The rejected value.
        value: u32,
    },

    /// Received word is more than 3 bit errors away from every codeword.
    ///
    /// No unique correction exists; the identifier must be treated as
    /// unrecoverable rather than silently guessed.
    #[error(
        "word 0x{word:06x} is ambiguous: nearest codeword is {nearest_distance} bit errors away (max correctable: 3)"
    )]
    Ambiguous {
        /// The uncorrectable 24-bit word.
        word: u32,
        /// Hamming distance to the nearest codeword.
        nearest_distance: u32,
    },

    /// Identifier string is not valid hex.
    #[error("invalid hex identifier: {input:?}")]
    InvalidHex {
        /// The rejected input.
        input: String,
    },
}

/// Errors raised by address derivation and ledger interaction.
///
/// Addresses are carried as EIP-55 checksum strings so this enum stays free
/// of ledger-crate types.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// The ledger reported a deployment address different from the locally
    /// derived one. A correctness-critical integrity failure: it means the
    /// code body or the hash construction does not match the on-chain
    /// factory. Never auto-corrected.
    #[error("address mismatch: derived {expected}, ledger reported {actual}")]
    AddressMismatch {
        /// Locally derived address.
        expected: String,
        /// Address reported by the ledger.
        actual: String,
    },

    /// Second initialization attempt on a deployed record.
    ///
    /// Idempotent failure: the record keeps the data from the first call.
    #[error("record at {address} is already initialized")]
    AlreadyInitialized {
        /// Address of the record.
        address: String,
    },

    /// No record is deployed at the given address.
    #[error("no record deployed at {address}")]
    NotDeployed {
        /// The queried address.
        address: String,
    },

    /// Address string could not be parsed.
    #[error("invalid address: {input:?} ({reason})")]
    InvalidAddress {
        /// The rejected input.
        input: String,
        /// Why parsing failed.
        reason: String,
    },

    /// Salt bytes do not follow the SemId expansion convention.
    #[error("invalid salt: {reason}")]
    InvalidSalt {
        /// Why the salt was rejected.
        reason: String,
    },

    /// Broadcasting is not possible with the current configuration
    /// (e.g. no signing key or factory address).
    #[error("ledger is in read-only mode: {reason}")]
    ReadOnly {
        /// What is missing.
        reason: String,
    },

    /// Transport-level failure from the underlying client.
    #[error("ledger client error: {0}")]
    Client(String),
}

/// Errors raised by the similarity index.
///
/// Note that an exact lookup missing its target is *not* an error; that is
/// expressed as `Option::None`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IndexError {
    /// A SemId was re-registered with a different address.
    ///
    /// Address derivation is a pure function of the SemId (for a fixed
    /// deployer and code body), so this indicates corrupted input or mixed
    /// deployment conventions.
    #[error("semid {semid} already recorded with address {existing}, refusing conflicting {offered}")]
    AddressConflict {
        /// Hex form of the conflicting SemId.
        semid: String,
        /// Address already recorded.
        existing: String,
        /// Address offered by the new registration.
        offered: String,
    },

    /// Radius larger than the 24-bit space allows.
    #[error("radius {radius} exceeds the 24-bit identifier width")]
    RadiusTooLarge {
        /// The rejected radius.
        radius: u32,
    },
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A field holds a value outside its allowed range.
    #[error("invalid config value for {field}: {reason}")]
    InvalidValue {
        /// Dotted path of the field.
        field: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// A required field is missing for the requested mode.
    #[error("missing config value {field}: {reason}")]
    Missing {
        /// Dotted path of the field.
        field: String,
        /// What the field gates.
        reason: String,
    },
}
