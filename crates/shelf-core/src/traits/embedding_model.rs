use crate::errors::ShelfResult;
use crate::models::{ImageTable, RelationGraph};

/// One embedding row per requested item, in `item_indices` order.
pub type EmbeddingMatrix = Vec<Vec<f32>>;

/// Inputs of one embedding model call. All indices are zero-based.
#[derive(Debug, Clone)]
pub struct ModelInput<'a> {
    pub user_index: usize,
    pub item_indices: Vec<usize>,
    /// Item description per entry of `item_indices`; empty when missing.
    pub item_texts: Vec<&'a str>,
    pub relation_graph: Option<&'a RelationGraph>,
    /// Image metadata keyed by catalog item id, passed through untouched.
    pub images: &'a ImageTable,
}

/// External multi-modal embedding model.
///
/// The engine treats implementations as a synchronous black box and never
/// retries a failed call.
pub trait IEmbeddingModel: Send + Sync {
    /// Produce one embedding vector per item in `input.item_indices`.
    fn embed(&self, input: &ModelInput<'_>) -> ShelfResult<EmbeddingMatrix>;

    /// Human-readable model name.
    fn name(&self) -> &str;

    /// Whether this model can currently be called.
    fn is_available(&self) -> bool;
}
