//! Deterministic feature-hashing embedding model.
//!
//! Builds fixed-dimension item vectors from hashed description terms and a
//! blake3-derived user/item identity component. No learned weights, so it is
//! always available and produces identical output for identical input.

use std::collections::HashMap;

use shelf_core::constants::MODEL_INDEX_OFFSET;
use shelf_core::errors::{EmbeddingError, ShelfResult};
use shelf_core::models::ItemId;
use shelf_core::traits::{EmbeddingMatrix, IEmbeddingModel, ModelInput};

/// Weight of the description component in each dimension.
const TEXT_WEIGHT: f32 = 0.6;
/// Weight of the identity component in each dimension.
const IDENTITY_WEIGHT: f32 = 0.4;
/// Per-view boost for items with image metadata, capped at three views.
const IMAGE_VIEW_BOOST: f32 = 0.05;
const MAX_IMAGE_VIEWS: usize = 3;
/// Scale of the relation-graph degree term.
const DEGREE_WEIGHT: f32 = 0.02;

/// Hash embedding model.
pub struct HashEmbeddingModel {
    dimensions: usize,
}

impl HashEmbeddingModel {
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions: dimensions.max(1),
        }
    }

    /// Hash a term into a bucket index using FNV-1a.
    fn hash_term(term: &str, dims: usize) -> usize {
        let mut h: u64 = 0xcbf29ce484222325;
        for b in term.as_bytes() {
            h ^= *b as u64;
            h = h.wrapping_mul(0x100000001b3);
        }
        (h as usize) % dims
    }

    /// Tokenize text into lowercase alphanumeric terms.
    fn tokenize(text: &str) -> Vec<String> {
        text.split(|c: char| !c.is_alphanumeric())
            .filter(|s| s.len() >= 2)
            .map(|s| s.to_lowercase())
            .collect()
    }

    /// L2-normalized term-frequency vector for a description.
    fn text_vector(&self, text: &str) -> Vec<f32> {
        let tokens = Self::tokenize(text);
        let mut vec = vec![0.0f32; self.dimensions];
        if tokens.is_empty() {
            return vec;
        }

        let mut tf: HashMap<&str, f32> = HashMap::new();
        for tok in &tokens {
            *tf.entry(tok.as_str()).or_default() += 1.0;
        }

        let total = tokens.len() as f32;
        for (term, count) in &tf {
            let idf = 1.0 + (term.len() as f32).ln();
            vec[Self::hash_term(term, self.dimensions)] += (count / total) * idf;
        }

        let norm: f32 = vec.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > f32::EPSILON {
            for v in &mut vec {
                *v /= norm;
            }
        }
        vec
    }

    /// Identity component in [0, 1] seeded by the (user, item) index pair.
    fn identity_vector(&self, user_index: usize, item_index: usize) -> Vec<f32> {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&(user_index as u64).to_le_bytes());
        hasher.update(&(item_index as u64).to_le_bytes());
        let mut bytes = vec![0u8; self.dimensions];
        hasher.finalize_xof().fill(&mut bytes);
        bytes.into_iter().map(|b| b as f32 / 255.0).collect()
    }
}

impl IEmbeddingModel for HashEmbeddingModel {
    fn embed(&self, input: &ModelInput<'_>) -> ShelfResult<EmbeddingMatrix> {
        if input.item_texts.len() != input.item_indices.len() {
            return Err(EmbeddingError::MissingInput {
                input: format!(
                    "item_texts has {} entries for {} items",
                    input.item_texts.len(),
                    input.item_indices.len()
                ),
            }
            .into());
        }

        let rows = input
            .item_indices
            .iter()
            .zip(&input.item_texts)
            .map(|(&item_index, text)| {
                let text_vec = self.text_vector(text);
                let identity = self.identity_vector(input.user_index, item_index);

                // The image table is keyed by catalog id, not model index.
                let item_id = item_index as ItemId + MODEL_INDEX_OFFSET;
                let views = input.images.for_item(item_id).count().min(MAX_IMAGE_VIEWS);
                let image_boost = 1.0 + IMAGE_VIEW_BOOST * views as f32;

                let degree_term = input
                    .relation_graph
                    .map(|g| DEGREE_WEIGHT * (1.0 + g.item_degree(item_index) as f32).ln())
                    .unwrap_or(0.0);

                text_vec
                    .iter()
                    .zip(&identity)
                    .map(|(t, id)| (TEXT_WEIGHT * t + IDENTITY_WEIGHT * id) * image_boost + degree_term)
                    .collect()
            })
            .collect();

        Ok(rows)
    }

    fn name(&self) -> &str {
        "hash"
    }

    fn is_available(&self) -> bool {
        true
    }
}
