//! 20-byte ledger addresses.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use semaddr_core::error::LedgerError;

use crate::hash::keccak256;

/// A 20-byte ledger address.
///
/// Displays with the EIP-55 mixed-case checksum; parsing accepts any case,
/// with or without a `0x` prefix, but rejects wrong lengths and non-hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address([u8; 20]);

impl Address {
    /// The all-zero address.
    pub const ZERO: Address = Address([0u8; 20]);

    /// Wrap raw bytes.
    #[inline]
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// The raw bytes.
    #[inline]
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Parse from hex, with or without a `0x` prefix, any case.
    pub fn from_hex(s: &str) -> Result<Self, LedgerError> {
        let trimmed = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        if trimmed.len() != 40 {
            return Err(LedgerError::InvalidAddress {
                input: s.to_string(),
                reason: format!("expected 40 hex digits, got {}", trimmed.len()),
            });
        }
        let mut bytes = [0u8; 20];
        for (i, slot) in bytes.iter_mut().enumerate() {
            let pair = &trimmed[2 * i..2 * i + 2];
            *slot = u8::from_str_radix(pair, 16).map_err(|_| LedgerError::InvalidAddress {
                input: s.to_string(),
                reason: format!("invalid hex at position {}", 2 * i),
            })?;
        }
        Ok(Self(bytes))
    }

    /// Plain lowercase hex without prefix.
    #[must_use]
    pub fn to_lower_hex(&self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }

    /// EIP-55 mixed-case checksum string with `0x` prefix.
    ///
    /// A hex letter is uppercased iff the corresponding nibble of
    /// `keccak256(lowercase_hex_ascii)` is >= 8.
    #[must_use]
    pub fn to_checksum(&self) -> String {
        let lower = self.to_lower_hex();
        let digest = keccak256(lower.as_bytes());
        let mut out = String::with_capacity(42);
        out.push_str("0x");
        for (i, ch) in lower.chars().enumerate() {
            let nibble = (digest[i / 2] >> (if i % 2 == 0 { 4 } else { 0 })) & 0xF;
            if ch.is_ascii_alphabetic() && nibble >= 8 {
                out.push(ch.to_ascii_uppercase());
            } else {
                out.push(ch);
            }
        }
        out
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_checksum())
    }
}

impl FromStr for Address {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_checksum())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Address::from_hex(&s).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_prefix_and_case() {
        let a = Address::from_hex("0xF39Fd6e51aad88F6F4ce6aB8827279cffFb92266").unwrap();
        let b = Address::from_hex("f39fd6e51aad88f6f4ce6ab8827279cfffb92266").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert!(Address::from_hex("0x1234").is_err());
        assert!(Address::from_hex("zz39fd6e51aad88f6f4ce6ab8827279cfffb9226").is_err());
    }

    #[test]
    fn eip55_published_vectors() {
        for expected in [
            "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
            "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359",
            "0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB",
            "0xD1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDb",
        ] {
            let addr = Address::from_hex(expected).unwrap();
            assert_eq!(addr.to_checksum(), *expected);
        }
    }

    #[test]
    fn serde_as_checksum_string() {
        let addr = Address::from_hex("0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed").unwrap();
        let json = serde_json::to_string(&addr).unwrap();
        assert_eq!(json, "\"0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed\"");
        let back: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(back, addr);
    }

    #[test]
    fn zero_address_display() {
        assert_eq!(
            Address::ZERO.to_checksum(),
            "0x0000000000000000000000000000000000000000"
        );
    }
}
