use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::Algorithm;

/// Request-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendConfig {
    /// Top-K used when the caller does not pass one.
    pub default_top_k: usize,
    /// Algorithm to rerun with when multi-modal scoring is unavailable.
    /// `None` surfaces the failure instead.
    pub multimodal_fallback: Option<Algorithm>,
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            default_top_k: defaults::DEFAULT_TOP_K,
            multimodal_fallback: defaults::DEFAULT_MULTIMODAL_FALLBACK.parse().ok(),
        }
    }
}
