//! SemAddr Similarity Index
//!
//! Maintains the observed SemId -> deployed-address mapping and answers
//! exact-match and radius-bounded nearest-neighbor queries over the 24-bit
//! identifier space using Hamming distance.
//!
//! # Design
//!
//! The identifier space has 2^24 points; the index never scans it. Queries
//! iterate only over *recorded* entries, computing
//! `popcount(target XOR candidate)`, and partition the scan across the
//! rayon pool once the record count is large enough to pay for it.
//!
//! The index is the only shared mutable state in the workspace: an
//! append-only record list behind a `parking_lot::RwLock`. Writers
//! serialize; readers see the last consistent snapshot. `clear` is the one
//! destructive transition.

pub mod batch;
pub mod index;
pub mod query;
pub mod record;

pub use batch::{RegistrationOutcome, RegistrationRequest, Registrar};
pub use index::{IndexStats, RegisterOutcome, SimilarityIndex};
pub use query::{DistanceQuery, Neighbor};
pub use record::AddressRecord;
