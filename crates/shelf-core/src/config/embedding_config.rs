use serde::{Deserialize, Serialize};

use super::defaults;

/// Multi-modal embedding configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Embedding model: "hash" or "none".
    pub model: String,
    /// Output dimensions of the built-in hash model.
    pub dimensions: usize,
    /// Model calls slower than this are logged as degraded.
    pub latency_budget_ms: u64,
    /// Pass a user→item relation graph built from the event logs.
    pub relation_graph: bool,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            model: defaults::DEFAULT_EMBEDDING_MODEL.to_string(),
            dimensions: defaults::DEFAULT_EMBEDDING_DIMENSIONS,
            latency_budget_ms: defaults::DEFAULT_LATENCY_BUDGET_MS,
            relation_graph: defaults::DEFAULT_RELATION_GRAPH,
        }
    }
}
