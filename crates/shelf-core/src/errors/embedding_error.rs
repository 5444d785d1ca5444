/// Embedding model errors.
#[derive(Debug, thiserror::Error)]
pub enum EmbeddingError {
    #[error("model unavailable: {model}")]
    ModelUnavailable { model: String },

    #[error("missing model input: {input}")]
    MissingInput { input: String },

    #[error("inference failed: {reason}")]
    InferenceFailed { reason: String },

    #[error("row count mismatch: expected {expected} item rows, got {actual}")]
    RowCountMismatch { expected: usize, actual: usize },

    #[error("identifier {id} cannot be mapped to a zero-based model index")]
    IndexOutOfRange { id: u64 },
}
