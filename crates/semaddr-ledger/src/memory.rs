//! In-memory ledger stub.
//!
//! Computes real CREATE2 addresses and enforces the knowledge record's
//! write-once initialization, so tests exercise the exact external-contract
//! semantics the core must interoperate with. No real chain behavior
//! (blocks, gas, reorgs) is modeled.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::debug;

use semaddr_core::error::{LedgerError, Result};

use crate::address::Address;
use crate::client::{LedgerClient, RecordInfo, TxHash};
use crate::create2::{derive_address, CodeHash};
use crate::hash::keccak256;
use crate::salt::Salt;

/// A deployed knowledge record. Initialization is write-once.
#[derive(Debug, Clone, Default)]
struct KnowledgeRecord {
    initialized: bool,
    data: Vec<u8>,
    decode_info: String,
    arbitrary_info: String,
}

impl KnowledgeRecord {
    /// First call stores the payload; any later call is rejected and leaves
    /// the stored data untouched.
    fn initialize(
        &mut self,
        address: &Address,
        data: &[u8],
        decode_info: &str,
        arbitrary_info: &str,
    ) -> Result<()> {
        if self.initialized {
            return Err(LedgerError::AlreadyInitialized {
                address: address.to_checksum(),
            }
            .into());
        }
        self.initialized = true;
        self.data = data.to_vec();
        self.decode_info = decode_info.to_string();
        self.arbitrary_info = arbitrary_info.to_string();
        Ok(())
    }
}

struct LedgerState {
    records: HashMap<Address, KnowledgeRecord>,
    nonce: u64,
}

/// In-memory [`LedgerClient`] implementation.
pub struct MemoryLedger {
    factory: Address,
    code_hash: CodeHash,
    state: Mutex<LedgerState>,
}

impl MemoryLedger {
    /// Create a ledger whose factory deploys records with the given code
    /// hash.
    #[must_use]
    pub fn new(factory: Address, code_hash: CodeHash) -> Self {
        Self {
            factory,
            code_hash,
            state: Mutex::new(LedgerState {
                records: HashMap::new(),
                nonce: 0,
            }),
        }
    }

    /// The factory address acting as the CREATE2 deployer.
    #[must_use]
    pub fn factory(&self) -> Address {
        self.factory
    }

    /// Initialize an already-deployed record directly, mirroring the
    /// on-chain `initialize` call.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::NotDeployed`] when nothing lives at `address`.
    /// - [`LedgerError::AlreadyInitialized`] on a second call; the stored
    ///   payload is unchanged.
    pub fn initialize_record(
        &self,
        address: &Address,
        data: &[u8],
        decode_info: &str,
        arbitrary_info: &str,
    ) -> Result<()> {
        let mut state = self.state.lock();
        let record = state
            .records
            .get_mut(address)
            .ok_or_else(|| LedgerError::NotDeployed {
                address: address.to_checksum(),
            })?;
        record.initialize(address, data, decode_info, arbitrary_info)
    }
}

#[async_trait]
impl LedgerClient for MemoryLedger {
    async fn compute_create2_address(&self, salt: &Salt) -> Result<Address> {
        // Independent computation over the same formula as the local
        // deriver; the equality of the two is what integration tests check.
        Ok(derive_address(&self.factory, salt, &self.code_hash))
    }

    async fn broadcast_deployment(
        &self,
        salt: &Salt,
        data: &[u8],
        decode_info: &str,
        arbitrary_info: &str,
    ) -> Result<(TxHash, Address)> {
        let address = derive_address(&self.factory, salt, &self.code_hash);

        let mut state = self.state.lock();
        if state.records.contains_key(&address) {
            // CREATE2 to an occupied address reverts on a real chain.
            return Err(LedgerError::Client(format!(
                "create2 collision: record already exists at {address}"
            ))
            .into());
        }

        state.nonce += 1;
        let mut preimage = Vec::with_capacity(40);
        preimage.extend_from_slice(salt.as_bytes());
        preimage.extend_from_slice(&state.nonce.to_be_bytes());
        let tx_hash = TxHash(keccak256(&preimage));

        let mut record = KnowledgeRecord::default();
        if !data.is_empty() || !decode_info.is_empty() || !arbitrary_info.is_empty() {
            record.initialize(&address, data, decode_info, arbitrary_info)?;
        }
        state.records.insert(address, record);

        debug!(
            target: "semaddr::memory_ledger",
            %address,
            tx = %tx_hash,
            "record deployed"
        );
        Ok((tx_hash, address))
    }

    async fn is_deployed(&self, address: &Address) -> Result<bool> {
        Ok(self.state.lock().records.contains_key(address))
    }

    async fn record_info(&self, address: &Address) -> Result<RecordInfo> {
        let state = self.state.lock();
        let record = state
            .records
            .get(address)
            .ok_or_else(|| LedgerError::NotDeployed {
                address: address.to_checksum(),
            })?;
        Ok(RecordInfo {
            address: *address,
            data: record.data.clone(),
            decode_info: record.decode_info.clone(),
            arbitrary_info: record.arbitrary_info.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use semaddr_core::error::SemAddrError;
    use semaddr_core::types::SemId;

    fn ledger() -> MemoryLedger {
        MemoryLedger::new(
            Address::from_hex("0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266").unwrap(),
            CodeHash::of_code(&[0x60, 0x80, 0x60, 0x40]),
        )
    }

    #[tokio::test]
    async fn predicted_and_deployed_addresses_agree() {
        let ledger = ledger();
        let salt = Salt::from_semid(SemId::new(0x55E21E).unwrap());
        let predicted = ledger.compute_create2_address(&salt).await.unwrap();
        let (_, deployed) = ledger
            .broadcast_deployment(&salt, b"payload", "utf-8", "origin text")
            .await
            .unwrap();
        assert_eq!(predicted, deployed);
        assert!(ledger.is_deployed(&deployed).await.unwrap());
    }

    #[tokio::test]
    async fn compute_address_is_idempotent_across_deployment() {
        let ledger = ledger();
        let salt = Salt::from_semid(SemId::new(0x800AE3).unwrap());
        let before = ledger.compute_create2_address(&salt).await.unwrap();
        ledger
            .broadcast_deployment(&salt, b"", "", "")
            .await
            .unwrap();
        let after = ledger.compute_create2_address(&salt).await.unwrap();
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn double_initialize_fails_and_preserves_data() {
        let ledger = ledger();
        let salt = Salt::from_semid(SemId::new(0xAD2D89).unwrap());
        let (_, address) = ledger
            .broadcast_deployment(&salt, b"first", "utf-8", "origin")
            .await
            .unwrap();

        let err = ledger
            .initialize_record(&address, b"second", "json", "rewrite attempt")
            .unwrap_err();
        assert!(matches!(
            err,
            SemAddrError::Ledger(LedgerError::AlreadyInitialized { .. })
        ));

        let info = ledger.record_info(&address).await.unwrap();
        assert_eq!(info.data, b"first");
        assert_eq!(info.decode_info, "utf-8");
        assert_eq!(info.arbitrary_info, "origin");
    }

    #[tokio::test]
    async fn bare_deploy_then_initialize_once() {
        let ledger = ledger();
        let salt = Salt::from_semid(SemId::new(0x000000).unwrap());
        let (_, address) = ledger
            .broadcast_deployment(&salt, b"", "", "")
            .await
            .unwrap();

        ledger
            .initialize_record(&address, b"late", "utf-8", "late init")
            .unwrap();
        let err = ledger
            .initialize_record(&address, b"again", "", "")
            .unwrap_err();
        assert!(matches!(
            err,
            SemAddrError::Ledger(LedgerError::AlreadyInitialized { .. })
        ));
    }

    #[tokio::test]
    async fn redeploying_same_salt_reverts() {
        let ledger = ledger();
        let salt = Salt::from_semid(SemId::new(0xFFFFFF).unwrap());
        ledger
            .broadcast_deployment(&salt, b"x", "", "")
            .await
            .unwrap();
        let err = ledger
            .broadcast_deployment(&salt, b"y", "", "")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            SemAddrError::Ledger(LedgerError::Client(_))
        ));
    }

    #[tokio::test]
    async fn record_info_on_empty_address_is_not_deployed() {
        let ledger = ledger();
        let err = ledger.record_info(&Address::ZERO).await.unwrap_err();
        assert!(matches!(
            err,
            SemAddrError::Ledger(LedgerError::NotDeployed { .. })
        ));
    }
}
