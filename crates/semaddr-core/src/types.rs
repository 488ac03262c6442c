//! Core domain types: the 12-bit semantic payload and the 24-bit identifier.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CodecError;

/// A 12-bit semantic message, the quantized payload before error coding.
///
/// Invariant: the wrapped value is always in `0..=0xFFF`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Message12(u16);

impl Message12 {
    /// Number of message bits.
    pub const BITS: u32 = 12;
    /// Largest representable message.
    pub const MAX: u16 = 0xFFF;

    /// Wrap a raw value, rejecting anything above 12 bits.
    pub fn new(value: u16) -> Result<Self, CodecError> {
        if value > Self::MAX {
            return Err(CodecError::MessageOutOfRange { value });
        }
        Ok(Self(value))
    }

    /// Build from the low 12 bits of a wider value, discarding the rest.
    ///
    /// Used internally where the source is already masked.
    #[inline]
    pub(crate) fn from_truncated(value: u32) -> Self {
        Self((value & u32::from(Self::MAX)) as u16)
    }

    #[inline]
    #[must_use]
    pub fn as_u16(self) -> u16 {
        self.0
    }
}

impl fmt::Display for Message12 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:03x}", self.0)
    }
}

/// The 24-bit semantic identifier: a codeword of the Golay[24,12,8] code.
///
/// Values produced by this crate are always valid codewords (encoding is a
/// bijection between [`Message12`] and the 4096-entry codeword table).
/// Externally supplied 24-bit words may be arbitrary; feed those through
/// [`crate::golay::decode`] rather than trusting them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SemId(u32);

impl SemId {
    /// Number of identifier bits.
    pub const BITS: u32 = 24;
    /// Largest representable identifier.
    pub const MAX: u32 = 0xFF_FFFF;

    /// Wrap a raw 24-bit value.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::WordOutOfRange`] if the value does not fit in
    /// 24 bits. Validity as a Golay codeword is *not* checked here.
    pub fn new(value: u32) -> Result<Self, CodecError> {
        if value > Self::MAX {
            return Err(CodecError::WordOutOfRange { value });
        }
        Ok(Self(value))
    }

    /// Wrap a value already known to fit in 24 bits.
    #[inline]
    pub(crate) fn from_codeword(value: u32) -> Self {
        debug_assert!(value <= Self::MAX);
        Self(value)
    }

    #[inline]
    #[must_use]
    pub fn as_u32(self) -> u32 {
        self.0
    }

    /// Big-endian 3-byte representation, e.g. `0xABCDEF -> [0xAB, 0xCD, 0xEF]`.
    #[inline]
    #[must_use]
    pub fn to_be_bytes(self) -> [u8; 3] {
        let b = self.0.to_be_bytes();
        [b[1], b[2], b[3]]
    }

    /// Reconstruct from the big-endian 3-byte representation.
    #[inline]
    #[must_use]
    pub fn from_be_bytes(bytes: [u8; 3]) -> Self {
        Self(u32::from_be_bytes([0, bytes[0], bytes[1], bytes[2]]))
    }

    /// Lowercase 6-digit hex string without prefix, e.g. `"abcdef"`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("{:06x}", self.0)
    }

    /// Parse from a hex string, with or without a `0x` prefix.
    pub fn from_hex(s: &str) -> Result<Self, CodecError> {
        let trimmed = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")).unwrap_or(s);
        let value = u32::from_str_radix(trimmed, 16)
            .map_err(|_| CodecError::InvalidHex { input: s.to_string() })?;
        Self::new(value)
    }

    /// Hamming distance to another identifier.
    #[inline]
    #[must_use]
    pub fn hamming_distance(self, other: SemId) -> u32 {
        (self.0 ^ other.0).count_ones()
    }
}

impl fmt::Display for SemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:06x}", self.0)
    }
}

impl FromStr for SemId {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

// SemIds travel as hex strings in JSON so they are recognizable in logs and
// interchangeable with the on-chain salt tooling.
impl Serialize for SemId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for SemId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        SemId::from_hex(&s).map_err(D::Error::custom)
    }
}
