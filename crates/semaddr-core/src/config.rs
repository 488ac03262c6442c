//! Configuration structures.
//!
//! Everything is serde-deserializable so deployments can ship a single JSON
//! or TOML document. Defaults match the reference convention: 384-dim
//! MiniLM-class embeddings and the `semaddr-v1` projection seed. Changing
//! either value changes every derived identifier, so they are fixed per
//! deployment, not per call.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default embedding dimension (all-MiniLM-L6-v2).
pub const DEFAULT_DIMENSION: usize = 384;

/// Default projection seed base. All cooperating nodes must share it.
pub const DEFAULT_SEED_BASE: &str = "semaddr-v1";

/// Quantizer configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuantizerConfig {
    /// Seed string the projection matrix is derived from.
    pub seed_base: String,
    /// Embedding dimension the quantizer accepts.
    pub dimension: usize,
}

impl Default for QuantizerConfig {
    fn default() -> Self {
        Self {
            seed_base: DEFAULT_SEED_BASE.to_string(),
            dimension: DEFAULT_DIMENSION,
        }
    }
}

impl QuantizerConfig {
    /// Validate field ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dimension == 0 {
            return Err(ConfigError::InvalidValue {
                field: "quantizer.dimension".to_string(),
                reason: "must be non-zero".to_string(),
            });
        }
        if self.seed_base.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "quantizer.seed_base".to_string(),
                reason: "must be non-empty".to_string(),
            });
        }
        Ok(())
    }
}

/// Similarity index tuning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Default radius for nearest-neighbor queries (bits).
    pub default_radius: u32,
    /// Default cap on returned neighbors.
    pub default_limit: usize,
    /// Record count above which radius scans are partitioned across the
    /// rayon pool.
    pub parallel_threshold: usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            default_radius: 3,
            default_limit: 64,
            parallel_threshold: 4096,
        }
    }
}

impl IndexConfig {
    /// Validate field ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_radius > 24 {
            return Err(ConfigError::InvalidValue {
                field: "index.default_radius".to_string(),
                reason: "identifier width is 24 bits".to_string(),
            });
        }
        Ok(())
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SemAddrConfig {
    /// Quantizer settings.
    pub quantizer: QuantizerConfig,
    /// Similarity index settings.
    pub index: IndexConfig,
}

impl SemAddrConfig {
    /// Validate all sections.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.quantizer.validate()?;
        self.index.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        SemAddrConfig::default().validate().unwrap();
    }

    #[test]
    fn zero_dimension_rejected() {
        let cfg = QuantizerConfig {
            dimension: 0,
            ..Default::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "quantizer.dimension"
        ));
    }

    #[test]
    fn oversized_radius_rejected() {
        let cfg = IndexConfig {
            default_radius: 25,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn serde_roundtrip_with_defaults() {
        let cfg: SemAddrConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, SemAddrConfig::default());
        assert_eq!(cfg.quantizer.dimension, DEFAULT_DIMENSION);
    }
}
