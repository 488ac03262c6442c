//! The two-stage CREATE2 address formula.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::address::Address;
use crate::hash::keccak256;
use crate::salt::Salt;

/// Keccak-256 digest of a record type's creation bytecode.
///
/// Fixed per deployment convention: every party must hash the identical
/// code body or addresses will disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CodeHash([u8; 32]);

impl CodeHash {
    /// Hash a creation bytecode body.
    #[must_use]
    pub fn of_code(code_body: &[u8]) -> Self {
        Self(keccak256(code_body))
    }

    /// Wrap an already-known digest.
    #[inline]
    #[must_use]
    pub const fn from_digest(digest: [u8; 32]) -> Self {
        Self(digest)
    }

    /// The raw digest bytes.
    #[inline]
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for CodeHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for b in &self.0 {
            write!(f, "{b:02x}")?;
        }
        Ok(())
    }
}

/// Derive the deterministic record address:
/// `keccak256(0xff || deployer || salt || code_hash)[12..]`.
///
/// Pure function of its inputs — no hidden state, no I/O. This must match
/// the external verifier's `computeCreate2Address` byte-for-byte; it is the
/// system's interoperability contract.
#[must_use]
pub fn derive_address(deployer: &Address, salt: &Salt, code_hash: &CodeHash) -> Address {
    let mut preimage = [0u8; 1 + 20 + 32 + 32];
    preimage[0] = 0xff;
    preimage[1..21].copy_from_slice(deployer.as_bytes());
    preimage[21..53].copy_from_slice(salt.as_bytes());
    preimage[53..].copy_from_slice(code_hash.as_bytes());

    let digest = keccak256(&preimage);
    let mut out = [0u8; 20];
    out.copy_from_slice(&digest[12..]);
    let address = Address::from_bytes(out);

    trace!(
        target: "semaddr::create2",
        %deployer,
        %salt,
        %address,
        "derived address"
    );
    address
}
