mod embedding_model;
mod scorer;

pub use embedding_model::{EmbeddingMatrix, IEmbeddingModel, ModelInput};
pub use scorer::{IScorer, ScoringRequest};
