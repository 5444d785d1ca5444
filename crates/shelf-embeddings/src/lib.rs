//! # shelf-embeddings
//!
//! Embedding models for multi-modal scoring. The engine only depends on the
//! `IEmbeddingModel` contract; this crate supplies the built-in
//! deterministic model and the config-driven factory.
//!
//! ```text
//! create_model(config)
//! ├── "hash" → HashEmbeddingModel (feature hashing + blake3 identity seeds)
//! └── "none" → no model (multi-modal reports DependencyUnavailable)
//! ```

pub mod hash_model;

pub use hash_model::HashEmbeddingModel;

use shelf_core::config::EmbeddingConfig;
use shelf_core::traits::IEmbeddingModel;
use tracing::{info, warn};

/// Build the embedding model named in config, if any.
pub fn create_model(config: &EmbeddingConfig) -> Option<Box<dyn IEmbeddingModel>> {
    match config.model.as_str() {
        "hash" => {
            info!(dims = config.dimensions, "using hash embedding model");
            Some(Box::new(HashEmbeddingModel::new(config.dimensions)))
        }
        "none" | "" => None,
        other => {
            warn!(model = other, "unknown embedding model, multi-modal scoring disabled");
            None
        }
    }
}
