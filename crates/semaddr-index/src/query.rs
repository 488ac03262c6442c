//! Query request and result values.

use serde::{Deserialize, Serialize};

use semaddr_core::error::IndexError;
use semaddr_core::types::SemId;
use semaddr_ledger::Address;

/// An ephemeral radius query: target identifier, Hamming radius in bits,
/// and a cap on returned neighbors. Not persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DistanceQuery {
    /// Center of the search.
    pub target: SemId,
    /// Maximum Hamming distance, inclusive.
    pub radius: u32,
    /// Maximum number of neighbors returned.
    pub limit: usize,
}

impl DistanceQuery {
    /// Query with the conventional defaults (radius 3 — the code's
    /// correction capability — and a 64-result cap).
    #[must_use]
    pub fn new(target: SemId) -> Self {
        Self {
            target,
            radius: 3,
            limit: 64,
        }
    }

    /// Set the radius.
    #[must_use]
    pub fn with_radius(mut self, radius: u32) -> Self {
        self.radius = radius;
        self
    }

    /// Set the result cap.
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Reject radii wider than the identifier itself.
    pub fn validate(&self) -> Result<(), IndexError> {
        if self.radius > SemId::BITS {
            return Err(IndexError::RadiusTooLarge {
                radius: self.radius,
            });
        }
        Ok(())
    }
}

/// One radius-query hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Neighbor {
    /// The recorded identifier.
    pub semid: SemId,
    /// Its deployed address.
    pub address: Address,
    /// Hamming distance from the query target.
    pub distance: u32,
    /// Insertion order of the underlying record.
    pub sequence: u64,
}
