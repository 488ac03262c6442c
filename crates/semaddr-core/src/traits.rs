//! External collaborator seams.

use crate::error::Result;

/// Text embedding provider (external).
///
/// The core depends only on the shape and determinism contract: the same
/// text must produce the same fixed-length vector. Model internals are
/// entirely the provider's business.
pub trait EmbeddingProvider: Send + Sync {
    /// Length of the vectors this provider produces.
    fn dimension(&self) -> usize;

    /// Embed (already normalized) text into a fixed-length real vector.
    ///
    /// # Errors
    ///
    /// Providers surface their own failures as
    /// [`crate::error::SemAddrError::Embedding`].
    fn embed(&self, text: &str) -> Result<Vec<f32>>;
}
