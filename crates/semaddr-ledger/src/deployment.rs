//! Predict / broadcast / verify orchestration.
//!
//! The locally predicted address and the externally observed deployment are
//! two independent computations over the same formula. They are treated as
//! a consistency check — a tagged status — rather than trusting either
//! alone.

use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument};

use semaddr_core::error::{LedgerError, Result};
use semaddr_core::types::SemId;

use crate::address::Address;
use crate::client::{LedgerClient, TxHash};
use crate::create2::{derive_address, CodeHash};
use crate::salt::Salt;

/// Relationship between the locally derived address and what the ledger
/// reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeploymentStatus {
    /// Derived locally; not yet observed on the ledger.
    Predicted,
    /// Ledger-reported address equals the local derivation.
    Confirmed,
    /// Ledger-reported address differs from the local derivation.
    /// Correctness-critical: the code body or hash construction is wrong.
    Mismatched {
        /// Locally derived address.
        expected: Address,
        /// Address the ledger reported.
        actual: Address,
    },
}

impl DeploymentStatus {
    /// Compare a prediction with a ledger report.
    #[must_use]
    pub fn verify(predicted: Address, reported: Address) -> Self {
        if predicted == reported {
            Self::Confirmed
        } else {
            Self::Mismatched {
                expected: predicted,
                actual: reported,
            }
        }
    }
}

/// Outcome of a deployment attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentReport {
    /// The identifier the record is keyed by.
    pub semid: SemId,
    /// The salt broadcast to the ledger.
    pub salt: Salt,
    /// Locally derived address.
    pub predicted_address: Address,
    /// Address the deployment landed at (equals prediction when confirmed).
    pub deployed_address: Address,
    /// Consistency status after the post-condition check.
    pub status: DeploymentStatus,
    /// `true` when the record already existed and no transaction was sent.
    pub already_deployed: bool,
    /// Transaction hash hex, absent for already-deployed records.
    pub transaction_hash: Option<String>,
}

/// Ledger-facing configuration.
///
/// `rpc_url`, `private_key` and `factory_address` gate whether broadcasting
/// is possible; prediction works identically without them (read-only mode).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// RPC endpoint, if any.
    pub rpc_url: Option<String>,
    /// Signing key, if any. Never logged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_key: Option<String>,
    /// Pre-deployed factory address, if any.
    pub factory_address: Option<Address>,
    /// The deploying party's address the derivation is keyed by.
    pub deployer: Address,
    /// Digest of the record creation bytecode.
    pub code_hash: CodeHash,
}

impl LedgerConfig {
    /// Whether this configuration permits broadcasting.
    #[must_use]
    pub fn can_broadcast(&self) -> bool {
        self.rpc_url.is_some() && self.private_key.is_some() && self.factory_address.is_some()
    }
}

/// Deployment orchestrator: derives the address, short-circuits when the
/// record already exists, broadcasts otherwise, and verifies the reported
/// address as a post-condition.
pub struct Deployer<'a, C> {
    client: &'a C,
    deployer: Address,
    code_hash: CodeHash,
}

impl<'a, C: LedgerClient> Deployer<'a, C> {
    /// Bind a client to a deployment convention (deployer + code hash).
    pub fn new(client: &'a C, deployer: Address, code_hash: CodeHash) -> Self {
        Self {
            client,
            deployer,
            code_hash,
        }
    }

    /// Locally predict the record address for a SemId. Pure; no network.
    #[must_use]
    pub fn predict(&self, semid: SemId) -> Address {
        derive_address(&self.deployer, &Salt::from_semid(semid), &self.code_hash)
    }

    /// Deploy the record for `semid`, storing the given payload.
    ///
    /// When `arbitrary_info` is empty it defaults to `source_text`, so the
    /// originating text travels with the record.
    ///
    /// # Errors
    ///
    /// [`LedgerError::AddressMismatch`] if the ledger reports a different
    /// address than locally derived — surfaced with both addresses, never
    /// auto-corrected. Client/transport failures pass through.
    #[instrument(skip_all, fields(%semid))]
    pub async fn deploy(
        &self,
        semid: SemId,
        data: &[u8],
        decode_info: &str,
        arbitrary_info: &str,
        source_text: &str,
    ) -> Result<DeploymentReport> {
        let salt = Salt::from_semid(semid);
        let predicted = self.predict(semid);

        if self.client.is_deployed(&predicted).await? {
            info!(
                target: "semaddr::deploy",
                address = %predicted,
                "record already deployed"
            );
            return Ok(DeploymentReport {
                semid,
                salt,
                predicted_address: predicted,
                deployed_address: predicted,
                status: DeploymentStatus::Confirmed,
                already_deployed: true,
                transaction_hash: None,
            });
        }

        let info = if arbitrary_info.is_empty() {
            source_text
        } else {
            arbitrary_info
        };
        let (tx_hash, reported) = self
            .client
            .broadcast_deployment(&salt, data, decode_info, info)
            .await?;

        let status = DeploymentStatus::verify(predicted, reported);
        if let DeploymentStatus::Mismatched { expected, actual } = status {
            error!(
                target: "semaddr::deploy",
                expected = %expected,
                actual = %actual,
                tx = %tx_hash,
                "deployment address mismatch"
            );
            return Err(LedgerError::AddressMismatch {
                expected: expected.to_checksum(),
                actual: actual.to_checksum(),
            }
            .into());
        }

        info!(
            target: "semaddr::deploy",
            address = %reported,
            tx = %tx_hash,
            "deployment confirmed"
        );
        Ok(DeploymentReport {
            semid,
            salt,
            predicted_address: predicted,
            deployed_address: reported,
            status,
            already_deployed: false,
            transaction_hash: Some(tx_hash.to_string()),
        })
    }
}
