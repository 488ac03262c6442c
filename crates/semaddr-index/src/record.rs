//! Observed deployment records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use semaddr_core::types::SemId;
use semaddr_ledger::Address;

/// An observed association of a SemId with a deployed address.
///
/// Created when a deployment is observed or confirmed; never mutated;
/// removed only by an explicit index reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressRecord {
    /// The identifier.
    pub semid: SemId,
    /// The address hosting (or predicted to host) the record.
    pub address: Address,
    /// Insertion order within the index, starting at 0. Stable tie-breaker
    /// for equal-distance query results.
    pub sequence: u64,
    /// When the index first saw this association.
    pub registered_at: DateTime<Utc>,
}
