//! Engine configuration, loaded from TOML. Every section falls back to
//! defaults from [`defaults`].

pub mod defaults;
mod embedding_config;
mod observability_config;
mod recommend_config;
mod scoring_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use embedding_config::EmbeddingConfig;
pub use observability_config::ObservabilityConfig;
pub use recommend_config::RecommendConfig;
pub use scoring_config::{CollaborativeNormalization, ScoringConfig};

use crate::errors::{ShelfError, ShelfResult};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShelfConfig {
    pub recommend: RecommendConfig,
    pub scoring: ScoringConfig,
    pub embedding: EmbeddingConfig,
    pub observability: ObservabilityConfig,
}

impl ShelfConfig {
    /// Parse config from a TOML string. Missing keys keep their defaults.
    pub fn from_toml(toml_str: &str) -> ShelfResult<Self> {
        let config: Self =
            toml::from_str(toml_str).map_err(|e| ShelfError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> ShelfResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| ShelfError::ConfigError(format!("{}: {e}", path.display())))?;
        Self::from_toml(&content)
    }

    pub fn to_toml(&self) -> ShelfResult<String> {
        toml::to_string(self).map_err(|e| ShelfError::ConfigError(e.to_string()))
    }

    fn validate(&self) -> ShelfResult<()> {
        if self.recommend.default_top_k == 0 {
            return Err(ShelfError::ConfigError(
                "recommend.default_top_k must be at least 1".to_string(),
            ));
        }
        if self.scoring.rating_scale.is_nan() || self.scoring.rating_scale <= 0.0 {
            return Err(ShelfError::ConfigError(format!(
                "scoring.rating_scale must be positive, got {}",
                self.scoring.rating_scale
            )));
        }
        if self.embedding.dimensions == 0 {
            return Err(ShelfError::ConfigError(
                "embedding.dimensions must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
