//! Stub implementations for tests and offline use.

use sha2::{Digest, Sha256};

use crate::error::Result;
use crate::traits::EmbeddingProvider;

/// Deterministic hash-based embedding provider.
///
/// Expands SHA-256 of the text into a pseudo-embedding in `[-1, 1]`. Carries
/// no semantics — nearby texts do *not* land near each other — but satisfies
/// the shape and determinism contract, which is all the codec and index
/// tests need.
#[derive(Debug, Clone)]
pub struct HashEmbedding {
    dimension: usize,
}

impl HashEmbedding {
    /// Create a provider producing vectors of the given length.
    #[must_use]
    pub fn new(dimension: usize) -> Self {
        Self { dimension }
    }
}

impl EmbeddingProvider for HashEmbedding {
    fn dimension(&self) -> usize {
        self.dimension
    }

    fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let mut out = Vec::with_capacity(self.dimension);
        let mut counter: u64 = 0;
        while out.len() < self.dimension {
            let mut hasher = Sha256::new();
            hasher.update(text.as_bytes());
            hasher.update(counter.to_be_bytes());
            let digest = hasher.finalize();
            for byte in digest {
                if out.len() == self.dimension {
                    break;
                }
                out.push(f32::from(byte) / 127.5 - 1.0);
            }
            counter += 1;
        }
        Ok(out)
    }
}
