//! Text-to-SemId pipeline: normalize -> embed -> quantize -> encode.

use tracing::{debug, instrument};

use crate::config::QuantizerConfig;
use crate::error::{Result, SemAddrError};
use crate::golay;
use crate::quantizer::Quantizer;
use crate::traits::EmbeddingProvider;
use crate::types::{Message12, SemId};

/// Collapse whitespace so trivially different renderings of the same text
/// embed identically: tabs and newlines become spaces, runs of spaces
/// collapse, ends are trimmed. Full Unicode normalization (NFC) is the
/// embedding provider's concern.
#[must_use]
pub fn normalize_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last_was_space = false;
    for ch in text.chars() {
        let ch = if ch == '\t' || ch == '\n' || ch == '\r' { ' ' } else { ch };
        if ch == ' ' {
            if !last_was_space {
                out.push(' ');
            }
            last_was_space = true;
        } else {
            out.push(ch);
            last_was_space = false;
        }
    }
    out.trim().to_string()
}

/// Intermediate stages of a derivation, exposed for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedParts {
    /// Text after normalization, exactly as embedded.
    pub normalized_text: String,
    /// Quantized 12-bit payload.
    pub message: Message12,
    /// Final 24-bit identifier.
    pub semid: SemId,
}

/// Wires an [`EmbeddingProvider`] through the quantizer and the Golay
/// encoder.
///
/// Stateless after construction; concurrent callers share it freely.
#[derive(Debug)]
pub struct SemIdPipeline<P> {
    provider: P,
    quantizer: Quantizer,
}

impl<P: EmbeddingProvider> SemIdPipeline<P> {
    /// Build a pipeline, checking that the provider and quantizer agree on
    /// the embedding dimension.
    ///
    /// # Errors
    ///
    /// Returns [`SemAddrError::Embedding`] on a dimension mismatch — a
    /// wiring mistake best caught at startup rather than per call.
    pub fn new(provider: P, config: &QuantizerConfig) -> Result<Self> {
        if provider.dimension() != config.dimension {
            return Err(SemAddrError::embedding(format!(
                "provider dimension {} does not match quantizer dimension {}",
                provider.dimension(),
                config.dimension
            )));
        }
        Ok(Self {
            provider,
            quantizer: Quantizer::new(config),
        })
    }

    /// Derive the SemId for a text.
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    pub fn derive(&self, text: &str) -> Result<SemId> {
        Ok(self.derive_parts(text)?.semid)
    }

    /// Derive the SemId, keeping the intermediate stages.
    pub fn derive_parts(&self, text: &str) -> Result<DerivedParts> {
        let normalized = normalize_text(text);
        let embedding = self.provider.embed(&normalized)?;
        let message = self.quantizer.quantize(&embedding)?;
        let semid = golay::encode(message);
        debug!(
            target: "semaddr::pipeline",
            %semid,
            message = %message,
            "derived identifier"
        );
        Ok(DerivedParts {
            normalized_text: normalized,
            message,
            semid,
        })
    }

    /// The wrapped provider.
    #[inline]
    pub fn provider(&self) -> &P {
        &self.provider
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stubs::HashEmbedding;

    fn pipeline() -> SemIdPipeline<HashEmbedding> {
        let config = QuantizerConfig::default();
        SemIdPipeline::new(HashEmbedding::new(config.dimension), &config).unwrap()
    }

    #[test]
    fn normalize_collapses_whitespace() {
        assert_eq!(normalize_text("  a\tb\n\nc  "), "a b c");
        assert_eq!(normalize_text("already clean"), "already clean");
        assert_eq!(normalize_text("\n\t "), "");
    }

    #[test]
    fn derivation_is_deterministic() {
        let p = pipeline();
        let a = p.derive("It is sunny in Tokyo today.").unwrap();
        let b = p.derive("It is sunny in Tokyo today.").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn whitespace_variants_share_an_identifier() {
        let p = pipeline();
        let a = p.derive("sunny\ttokyo  today").unwrap();
        let b = p.derive("sunny tokyo today").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn derived_semid_is_a_valid_codeword() {
        let p = pipeline();
        let parts = p.derive_parts("some arbitrary knowledge").unwrap();
        let decoded = golay::decode(parts.semid.as_u32()).unwrap();
        assert_eq!(decoded.message, parts.message);
        assert_eq!(decoded.corrected_bits, 0);
    }

    #[test]
    fn dimension_mismatch_is_caught_at_construction() {
        let config = QuantizerConfig::default();
        let err = SemIdPipeline::new(HashEmbedding::new(7), &config).unwrap_err();
        assert!(matches!(err, SemAddrError::Embedding(_)));
    }
}
