//! The similarity index proper.

use std::collections::HashMap;

use chrono::Utc;
use parking_lot::RwLock;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use semaddr_core::config::IndexConfig;
use semaddr_core::error::IndexError;
use semaddr_core::types::SemId;
use semaddr_ledger::Address;

use crate::query::{DistanceQuery, Neighbor};
use crate::record::AddressRecord;

/// Result of registering one association.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegisterOutcome {
    /// New record appended at this sequence number.
    Inserted {
        /// Assigned insertion order.
        sequence: u64,
    },
    /// The SemId was already recorded with the same address; counted as a
    /// collision observation, the original record stands.
    Duplicate {
        /// Sequence of the existing record.
        existing_sequence: u64,
    },
}

/// Read-only index statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    /// Number of stored records (distinct SemIds).
    pub records: usize,
    /// Registrations that hit an already-recorded SemId — two different
    /// inputs mapping to the same identifier.
    pub collisions: u64,
}

#[derive(Default)]
struct IndexState {
    records: Vec<AddressRecord>,
    by_semid: HashMap<u32, usize>,
    collisions: u64,
}

/// Append-only mapping from SemId to deployed address with Hamming-distance
/// queries.
///
/// Thread-safe: registration takes the write lock, queries the read lock,
/// so concurrent readers run against the last consistent snapshot and a
/// lookup issued strictly after a registration completes observes it.
pub struct SimilarityIndex {
    state: RwLock<IndexState>,
    parallel_threshold: usize,
    default_radius: u32,
    default_limit: usize,
}

impl SimilarityIndex {
    /// Empty index with default tuning.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&IndexConfig::default())
    }

    /// Empty index with explicit tuning.
    #[must_use]
    pub fn with_config(config: &IndexConfig) -> Self {
        Self {
            state: RwLock::new(IndexState::default()),
            parallel_threshold: config.parallel_threshold.max(1),
            default_radius: config.default_radius,
            default_limit: config.default_limit,
        }
    }

    /// A query around `target` with this index's configured radius and
    /// result cap.
    #[must_use]
    pub fn default_query(&self, target: SemId) -> DistanceQuery {
        DistanceQuery::new(target)
            .with_radius(self.default_radius)
            .with_limit(self.default_limit)
    }

    /// Record an observed SemId -> address association.
    ///
    /// Re-registering a recorded SemId with the same address is a collision
    /// observation ([`RegisterOutcome::Duplicate`]), not an error. A
    /// *different* address for a recorded SemId is rejected: derivation is a
    /// pure function, so a conflict means corrupted input or mixed
    /// deployment conventions.
    pub fn register(
        &self,
        semid: SemId,
        address: Address,
    ) -> Result<RegisterOutcome, IndexError> {
        let mut state = self.state.write();

        if let Some(&slot) = state.by_semid.get(&semid.as_u32()) {
            let existing = &state.records[slot];
            if existing.address != address {
                return Err(IndexError::AddressConflict {
                    semid: semid.to_string(),
                    existing: existing.address.to_checksum(),
                    offered: address.to_checksum(),
                });
            }
            let existing_sequence = existing.sequence;
            state.collisions += 1;
            debug!(
                target: "semaddr::index",
                %semid,
                existing_sequence,
                "duplicate registration"
            );
            return Ok(RegisterOutcome::Duplicate { existing_sequence });
        }

        let sequence = state.records.len() as u64;
        let slot = state.records.len();
        state.records.push(AddressRecord {
            semid,
            address,
            sequence,
            registered_at: Utc::now(),
        });
        state.by_semid.insert(semid.as_u32(), slot);
        debug!(target: "semaddr::index", %semid, sequence, "record registered");
        Ok(RegisterOutcome::Inserted { sequence })
    }

    /// Exact lookup. `None` is the normal "not recorded" outcome, not an
    /// error.
    #[must_use]
    pub fn lookup_exact(&self, semid: SemId) -> Option<Address> {
        let state = self.state.read();
        state
            .by_semid
            .get(&semid.as_u32())
            .map(|&slot| state.records[slot].address)
    }

    /// Full record for a SemId, if recorded.
    #[must_use]
    pub fn lookup_record(&self, semid: SemId) -> Option<AddressRecord> {
        let state = self.state.read();
        state
            .by_semid
            .get(&semid.as_u32())
            .map(|&slot| state.records[slot].clone())
    }

    /// All recorded SemIds within `query.radius` bits of the target,
    /// ordered by ascending distance, then insertion order, capped at
    /// `query.limit`.
    ///
    /// Scans recorded entries only — never the 16M-point identifier space —
    /// and partitions across the rayon pool above the configured threshold.
    pub fn radius_query(&self, query: &DistanceQuery) -> Result<Vec<Neighbor>, IndexError> {
        query.validate()?;
        let state = self.state.read();

        let matches = |record: &AddressRecord| -> Option<Neighbor> {
            let distance = query.target.hamming_distance(record.semid);
            (distance <= query.radius).then(|| Neighbor {
                semid: record.semid,
                address: record.address,
                distance,
                sequence: record.sequence,
            })
        };

        let mut neighbors: Vec<Neighbor> = if state.records.len() >= self.parallel_threshold {
            state.records.par_iter().filter_map(matches).collect()
        } else {
            state.records.iter().filter_map(matches).collect()
        };

        // Records are stored in insertion order, so a stable sort by
        // distance alone would suffice; the explicit key keeps the contract
        // independent of the merge order of parallel partitions.
        neighbors.sort_unstable_by_key(|n| (n.distance, n.sequence));
        neighbors.truncate(query.limit);
        Ok(neighbors)
    }

    /// Entry and collision counts.
    #[must_use]
    pub fn stats(&self) -> IndexStats {
        let state = self.state.read();
        IndexStats {
            records: state.records.len(),
            collisions: state.collisions,
        }
    }

    /// Pairwise Hamming-distance distribution over recorded entries:
    /// bucket `d` counts pairs at distance `d`, for `d` in 0..=24.
    ///
    /// O(n^2) over recorded entries; computed on demand, read-only.
    #[must_use]
    pub fn distance_histogram(&self) -> [u64; 25] {
        let state = self.state.read();
        let mut histogram = [0u64; 25];
        for (i, a) in state.records.iter().enumerate() {
            for b in &state.records[i + 1..] {
                histogram[a.semid.hamming_distance(b.semid) as usize] += 1;
            }
        }
        histogram
    }

    /// Number of recorded entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.read().records.len()
    }

    /// Whether the index is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every record and reset collision counting — the only
    /// destructive transition, for explicit re-initialization.
    pub fn clear(&self) {
        let mut state = self.state.write();
        let dropped = state.records.len();
        *state = IndexState::default();
        info!(target: "semaddr::index", dropped, "index cleared");
    }
}

impl Default for SimilarityIndex {
    fn default() -> Self {
        Self::new()
    }
}
