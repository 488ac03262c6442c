//! The async ledger client seam.

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use semaddr_core::error::Result;

use crate::address::Address;
use crate::salt::Salt;

/// A transaction hash, opaque to the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TxHash(pub [u8; 32]);

impl fmt::Display for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for b in &self.0 {
            write!(f, "{b:02x}")?;
        }
        Ok(())
    }
}

/// Contents of a deployed knowledge record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordInfo {
    /// Record address.
    pub address: Address,
    /// Stored binary payload.
    pub data: Vec<u8>,
    /// How to decode the payload.
    pub decode_info: String,
    /// Free-form context, conventionally the source text.
    pub arbitrary_info: String,
}

/// External ledger collaborator.
///
/// The core treats every method as an opaque asynchronous completion; it
/// contributes the address computation and the bookkeeping of results, not
/// the transaction lifecycle. Implementations wrap an RPC transport — or,
/// for tests, [`crate::memory::MemoryLedger`].
#[async_trait]
pub trait LedgerClient: Send + Sync {
    /// The on-chain factory's own address prediction for `salt`.
    ///
    /// Equality with [`crate::create2::derive_address`] for identical inputs
    /// is the system's core compatibility check.
    async fn compute_create2_address(&self, salt: &Salt) -> Result<Address>;

    /// Deploy (and, when any payload field is non-empty, initialize) the
    /// record for `salt`. Returns the transaction hash and the address the
    /// ledger reports.
    async fn broadcast_deployment(
        &self,
        salt: &Salt,
        data: &[u8],
        decode_info: &str,
        arbitrary_info: &str,
    ) -> Result<(TxHash, Address)>;

    /// Whether code exists at `address`.
    async fn is_deployed(&self, address: &Address) -> Result<bool>;

    /// Read back a deployed record.
    async fn record_info(&self, address: &Address) -> Result<RecordInfo>;
}
