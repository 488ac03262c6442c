//! Batch registration.
//!
//! Each entry is processed independently: one malformed text or conflicting
//! record never aborts the rest of the batch. The batch is therefore not
//! atomic; callers get one outcome per entry, in input order.

use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use semaddr_core::error::Result;
use semaddr_core::pipeline::SemIdPipeline;
use semaddr_core::traits::EmbeddingProvider;
use semaddr_core::types::SemId;
use semaddr_ledger::{derive_address, Address, CodeHash, Salt};

use crate::index::{RegisterOutcome, SimilarityIndex};

/// One batch entry: either raw text (run through the pipeline) or an
/// already-derived SemId.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistrationRequest {
    /// Derive the SemId from text.
    Text(String),
    /// Use the identifier as given.
    SemId(SemId),
}

/// Per-entry outcome of a batch registration.
#[derive(Debug)]
pub struct RegistrationOutcome {
    /// Position of the entry in the input batch.
    pub input_index: usize,
    /// Success: the derived identifier, its address, and how the index took
    /// it. Failure: the entry's own error.
    pub result: Result<(SemId, Address, RegisterOutcome)>,
}

/// Derives addresses for incoming entries and records them in the index.
///
/// Combines the text pipeline, the deterministic address derivation
/// convention (deployer + code hash), and a shared [`SimilarityIndex`].
pub struct Registrar<'a, P> {
    pipeline: &'a SemIdPipeline<P>,
    index: &'a SimilarityIndex,
    deployer: Address,
    code_hash: CodeHash,
}

impl<'a, P: EmbeddingProvider> Registrar<'a, P> {
    /// Bind a pipeline and index to a deployment convention.
    pub fn new(
        pipeline: &'a SemIdPipeline<P>,
        index: &'a SimilarityIndex,
        deployer: Address,
        code_hash: CodeHash,
    ) -> Self {
        Self {
            pipeline,
            index,
            deployer,
            code_hash,
        }
    }

    /// Resolve one request to a SemId.
    fn resolve(&self, request: &RegistrationRequest) -> Result<SemId> {
        match request {
            RegistrationRequest::Text(text) => self.pipeline.derive(text),
            RegistrationRequest::SemId(semid) => Ok(*semid),
        }
    }

    /// Register a single entry: derive the SemId if needed, derive its
    /// address, record the association.
    pub fn register_one(&self, request: &RegistrationRequest) -> Result<(SemId, Address, RegisterOutcome)> {
        let semid = self.resolve(request)?;
        let address = derive_address(&self.deployer, &Salt::from_semid(semid), &self.code_hash);
        let outcome = self.index.register(semid, address)?;
        Ok((semid, address, outcome))
    }

    /// Register a batch, isolating failures per entry.
    #[instrument(skip_all, fields(batch_len = requests.len()))]
    pub fn register_batch(&self, requests: &[RegistrationRequest]) -> Vec<RegistrationOutcome> {
        let outcomes: Vec<RegistrationOutcome> = requests
            .iter()
            .enumerate()
            .map(|(input_index, request)| {
                let result = self.register_one(request);
                if let Err(error) = &result {
                    warn!(
                        target: "semaddr::registrar",
                        input_index,
                        %error,
                        "batch entry failed"
                    );
                }
                RegistrationOutcome {
                    input_index,
                    result,
                }
            })
            .collect();

        let failed = outcomes.iter().filter(|o| o.result.is_err()).count();
        info!(
            target: "semaddr::registrar",
            total = outcomes.len(),
            failed,
            "batch registration complete"
        );
        outcomes
    }
}

impl RegistrationOutcome {
    /// Convenience predicate for callers tallying a batch.
    #[must_use]
    pub fn is_err(&self) -> bool {
        self.result.is_err()
    }
}
