//! Error taxonomy for the engine.
//!
//! Each subsystem owns a `thiserror` enum; [`ShelfError`] wraps them all so
//! callers handle one type at the `recommend` boundary.

mod data_error;
mod embedding_error;
mod scoring_error;

pub use data_error::DataError;
pub use embedding_error::EmbeddingError;
pub use scoring_error::ScoringError;

use crate::models::UserId;

/// Result alias used across the workspace.
pub type ShelfResult<T> = Result<T, ShelfError>;

/// Top-level engine error.
///
/// An empty recommendation list is not an error; see
/// [`crate::models::Recommendations::is_empty`].
#[derive(Debug, thiserror::Error)]
pub enum ShelfError {
    #[error("unknown user: {user_id}")]
    UnknownUser { user_id: UserId },

    #[error("invalid algorithm: {name} (expected one of collaborative, content-based, hybrid, multi-modal)")]
    InvalidAlgorithm { name: String },

    #[error("invalid top_k: {top_k} (must be at least 1)")]
    InvalidTopK { top_k: usize },

    #[error("dependency unavailable: {component}: {reason}")]
    DependencyUnavailable { component: String, reason: String },

    #[error("scoring error: {0}")]
    ScoringError(#[from] ScoringError),

    #[error("embedding error: {0}")]
    EmbeddingError(#[from] EmbeddingError),

    #[error("data error: {0}")]
    DataError(#[from] DataError),

    #[error("config error: {0}")]
    ConfigError(String),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl ShelfError {
    /// Whether this error means a scorer's inputs or model could not be used,
    /// so a caller may retry the request with a different algorithm.
    pub fn is_dependency_unavailable(&self) -> bool {
        matches!(
            self,
            ShelfError::DependencyUnavailable { .. } | ShelfError::EmbeddingError(_)
        )
    }
}
