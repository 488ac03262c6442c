//! Embedding quantizer: fixed random projections + sign test.
//!
//! Reduces a real-valued embedding vector to a 12-bit binary message. Each
//! bit is the sign of the dot product with one of 12 fixed unit-norm random
//! projection rows. The rows are derived deterministically from a seed
//! string, so every party configured with the same seed and dimension
//! computes the same message for the same vector — and vectors that are
//! close in embedding space disagree on few projections, which is what the
//! downstream Golay code's 3-bit tolerance relies on.

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use rand_distr::{Distribution, Normal};
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::config::QuantizerConfig;
use crate::error::QuantizeError;
use crate::types::Message12;

/// Deterministic sign-projection quantizer.
///
/// Construction cost is one seeded RNG pass over a 12 x `dimension` matrix;
/// quantization afterwards is pure, total over well-shaped finite vectors,
/// and safe to share across threads (the matrix is never mutated).
#[derive(Debug, Clone)]
pub struct Quantizer {
    /// Unit-norm projection rows, one per message bit.
    rows: Vec<Vec<f32>>,
    dimension: usize,
}

impl Quantizer {
    /// Build the projection matrix for the given configuration.
    ///
    /// The RNG is `ChaCha20` seeded with `SHA-256("<seed_base>::projection")`,
    /// rows drawn from `Normal(0, 1)` and L2-normalized. Identical configs
    /// yield bit-identical matrices on every platform.
    #[must_use]
    pub fn new(config: &QuantizerConfig) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(config.seed_base.as_bytes());
        hasher.update(b"::projection");
        let seed: [u8; 32] = hasher.finalize().into();

        let mut rng = ChaCha20Rng::from_seed(seed);
        // Normal(0, 1) cannot fail to construct.
        let normal = Normal::new(0.0f32, 1.0).unwrap_or_else(|_| unreachable!());

        let rows = (0..Message12::BITS)
            .map(|_| {
                let mut row: Vec<f32> = (0..config.dimension)
                    .map(|_| normal.sample(&mut rng))
                    .collect();
                let norm = row.iter().map(|x| x * x).sum::<f32>().sqrt();
                if norm > 0.0 {
                    for x in &mut row {
                        *x /= norm;
                    }
                }
                row
            })
            .collect();

        debug!(
            target: "semaddr::quantizer",
            dimension = config.dimension,
            seed_base = %config.seed_base,
            "projection matrix ready"
        );

        Self {
            rows,
            dimension: config.dimension,
        }
    }

    /// Embedding dimension this quantizer accepts.
    #[inline]
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Quantize an embedding vector into a 12-bit message.
    ///
    /// Bit `i` is set iff the dot product with projection row `i` is
    /// non-negative. Bit 0 of the message corresponds to row 0.
    ///
    /// # Errors
    ///
    /// - [`QuantizeError::InvalidInputShape`] if the vector length differs
    ///   from the configured dimension.
    /// - [`QuantizeError::NonFiniteValue`] if any component is NaN or
    ///   infinite.
    pub fn quantize(&self, embedding: &[f32]) -> Result<Message12, QuantizeError> {
        if embedding.len() != self.dimension {
            return Err(QuantizeError::InvalidInputShape {
                expected: self.dimension,
                actual: embedding.len(),
            });
        }
        for (index, &value) in embedding.iter().enumerate() {
            if !value.is_finite() {
                return Err(QuantizeError::NonFiniteValue { index, value });
            }
        }

        let mut message: u16 = 0;
        for (bit, row) in self.rows.iter().enumerate() {
            let dot: f32 = row
                .iter()
                .zip(embedding.iter())
                .map(|(w, x)| w * x)
                .sum();
            if dot >= 0.0 {
                message |= 1 << bit;
            }
        }

        // The mask keeps the invariant obvious; bits above 11 are never set.
        Ok(Message12::from_truncated(u32::from(message)))
    }
}
