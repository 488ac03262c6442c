//! The fixed SemId-to-salt expansion convention.
//!
//! A CREATE2 salt is 32 bytes. A SemId is 24 bits. The convention, fixed
//! here and applied everywhere, is big-endian expansion: the three SemId
//! bytes occupy the low-order bytes 29..32 and the remaining 29 high-order
//! bytes are zero — i.e. the salt is the SemId as a 256-bit big-endian
//! integer. Any other expansion silently derives a different,
//! non-interoperable address, which is why arbitrary salts are also
//! accepted but SemId extraction is strict.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use semaddr_core::error::LedgerError;
use semaddr_core::types::SemId;

/// A 32-byte CREATE2 salt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Salt([u8; 32]);

impl Salt {
    /// Expand a SemId into a salt: big-endian, low-order bytes 29..32.
    #[must_use]
    pub fn from_semid(semid: SemId) -> Self {
        let mut bytes = [0u8; 32];
        bytes[29..].copy_from_slice(&semid.to_be_bytes());
        Self(bytes)
    }

    /// Wrap arbitrary salt bytes (e.g. a user-supplied digest).
    #[inline]
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// The raw bytes.
    #[inline]
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Extract the SemId if this salt follows the expansion convention
    /// (bytes 0..29 all zero).
    ///
    /// # Errors
    ///
    /// [`LedgerError::InvalidSalt`] when high-order bytes are non-zero; the
    /// low 24 bits of such a salt are *not* a trustworthy identifier.
    pub fn semid(&self) -> Result<SemId, LedgerError> {
        if self.0[..29].iter().any(|&b| b != 0) {
            return Err(LedgerError::InvalidSalt {
                reason: "high-order bytes are non-zero; not a SemId expansion".to_string(),
            });
        }
        Ok(SemId::from_be_bytes([self.0[29], self.0[30], self.0[31]]))
    }

    /// Lowercase hex without prefix.
    #[must_use]
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }

    /// Parse from 64 hex digits, with or without a `0x` prefix.
    pub fn from_hex(s: &str) -> Result<Self, LedgerError> {
        let trimmed = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        if trimmed.len() != 64 {
            return Err(LedgerError::InvalidSalt {
                reason: format!("expected 64 hex digits, got {}", trimmed.len()),
            });
        }
        let mut bytes = [0u8; 32];
        for (i, slot) in bytes.iter_mut().enumerate() {
            let pair = &trimmed[2 * i..2 * i + 2];
            *slot = u8::from_str_radix(pair, 16).map_err(|_| LedgerError::InvalidSalt {
                reason: format!("invalid hex at position {}", 2 * i),
            })?;
        }
        Ok(Self(bytes))
    }
}

impl fmt::Display for Salt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.to_hex())
    }
}

impl FromStr for Salt {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for Salt {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("0x{}", self.to_hex()))
    }
}

impl<'de> Deserialize<'de> for Salt {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Salt::from_hex(&s).map_err(D::Error::custom)
    }
}
