//! Keccak-256, the ledger's standard 256-bit hash.

use sha3::{Digest, Keccak256};

/// Keccak-256 digest of `data`.
///
/// Note this is the original Keccak padding as used by the ledger, not
/// NIST SHA3-256.
#[must_use]
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hasher.finalize().into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(bytes: &[u8]) -> String {
        bytes.iter().map(|b| format!("{b:02x}")).collect()
    }

    #[test]
    fn empty_input_digest() {
        // The well-known ledger empty hash.
        assert_eq!(
            hex(&keccak256(b"")),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }

    #[test]
    fn abc_digest() {
        assert_eq!(
            hex(&keccak256(b"abc")),
            "4e03657aea45a94fc7d47ba826c8d667c0d1e6e33a64a036ec44f58fa12d6c45"
        );
    }

    #[test]
    fn hello_semid_world_digest() {
        // The salt used by the fixed round-trip scenario.
        assert_eq!(
            hex(&keccak256(b"Hello SemID World")),
            "53a2a2e78c629f2af882717fd6d670f81d3a0dac094e1d8d885cedf042aa0f39"
        );
    }
}
