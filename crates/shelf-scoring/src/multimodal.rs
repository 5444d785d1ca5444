//! Multi-modal scorer: delegates to an external embedding model and reduces
//! each item's embedding to its arithmetic mean.

use std::collections::HashSet;
use std::time::{Duration, Instant};

use shelf_core::config::EmbeddingConfig;
use shelf_core::constants::{MISSING_SCORE, MODEL_INDEX_OFFSET};
use shelf_core::errors::{EmbeddingError, ShelfError, ShelfResult};
use shelf_core::models::{Candidate, RelationGraph, Snapshot, Source};
use shelf_core::traits::{IEmbeddingModel, IScorer, ModelInput, ScoringRequest};
use tracing::{debug, warn};

const COMPONENT: &str = "multi-modal";

/// Embedding-backed scorer. Without a usable model or inputs it reports
/// `DependencyUnavailable`, never zero scores.
pub struct MultiModalScorer<'a> {
    model: Option<&'a dyn IEmbeddingModel>,
    config: EmbeddingConfig,
}

impl<'a> MultiModalScorer<'a> {
    pub fn new(model: Option<&'a dyn IEmbeddingModel>, config: EmbeddingConfig) -> Self {
        Self { model, config }
    }

    fn usable_model(&self) -> ShelfResult<&'a dyn IEmbeddingModel> {
        match self.model {
            Some(model) if model.is_available() => Ok(model),
            Some(model) => Err(unavailable(
                EmbeddingError::ModelUnavailable {
                    model: model.name().to_string(),
                }
                .to_string(),
            )),
            None => Err(unavailable("no embedding model configured")),
        }
    }
}

impl IScorer for MultiModalScorer<'_> {
    fn name(&self) -> &str {
        COMPONENT
    }

    fn source(&self) -> Source {
        Source::MultiModal
    }

    fn score(&self, request: &ScoringRequest<'_>) -> ShelfResult<Vec<Candidate>> {
        let model = self.usable_model()?;
        let snapshot = request.snapshot;
        let catalog = &snapshot.catalog;

        if !catalog.has_descriptions() {
            return Err(unavailable(
                EmbeddingError::MissingInput {
                    input: "item descriptions".to_string(),
                }
                .to_string(),
            ));
        }
        if snapshot.images.is_empty() {
            return Err(unavailable(
                EmbeddingError::MissingInput {
                    input: "item image table".to_string(),
                }
                .to_string(),
            ));
        }

        let user_index = model_index(request.user_id)?;
        let item_indices = catalog
            .iter()
            .map(|item| model_index(item.item_id))
            .collect::<ShelfResult<Vec<_>>>()?;
        let item_texts: Vec<&str> = catalog
            .iter()
            .map(|item| item.description.as_deref().unwrap_or(""))
            .collect();
        let graph = self.config.relation_graph.then(|| relation_graph(snapshot));

        let input = ModelInput {
            user_index,
            item_indices,
            item_texts,
            relation_graph: graph.as_ref(),
            images: &snapshot.images,
        };

        let started = Instant::now();
        let matrix = model.embed(&input).map_err(|e| {
            warn!(model = model.name(), error = %e, "embedding model call failed");
            unavailable(e.to_string())
        })?;
        let elapsed = started.elapsed();
        if elapsed > Duration::from_millis(self.config.latency_budget_ms) {
            warn!(
                model = model.name(),
                elapsed_ms = elapsed.as_millis() as u64,
                budget_ms = self.config.latency_budget_ms,
                "embedding model exceeded latency budget"
            );
        }

        if matrix.len() != catalog.len() {
            return Err(unavailable(
                EmbeddingError::RowCountMismatch {
                    expected: catalog.len(),
                    actual: matrix.len(),
                }
                .to_string(),
            ));
        }

        // Rows are keyed by the original catalog ids, not the shifted indices.
        let mut candidates: Vec<Candidate> = catalog
            .iter()
            .zip(&matrix)
            .map(|(item, row)| Candidate::new(item.item_id, row_mean(row), Source::MultiModal))
            .collect();
        candidates.sort_by(|a, b| {
            let (a, b) = (ranking_key(a), ranking_key(b));
            b.partial_cmp(&a).unwrap_or(std::cmp::Ordering::Equal)
        });

        debug!(
            model = model.name(),
            items = candidates.len(),
            unscored = candidates.iter().filter(|c| c.score.is_none()).count(),
            elapsed_ms = elapsed.as_millis() as u64,
            "multi-modal scoring complete"
        );
        Ok(candidates)
    }
}

fn ranking_key(candidate: &Candidate) -> f64 {
    candidate.score.unwrap_or(MISSING_SCORE)
}

fn unavailable(reason: impl Into<String>) -> ShelfError {
    ShelfError::DependencyUnavailable {
        component: COMPONENT.to_string(),
        reason: reason.into(),
    }
}

/// Shift a 1-based catalog id to a 0-based model index.
fn model_index(id: u64) -> ShelfResult<usize> {
    id.checked_sub(MODEL_INDEX_OFFSET)
        .and_then(|i| usize::try_from(i).ok())
        .ok_or_else(|| unavailable(EmbeddingError::IndexOutOfRange { id }.to_string()))
}

/// Arithmetic mean of one embedding row. `None` for an empty or
/// non-finite row.
pub fn row_mean(row: &[f32]) -> Option<f64> {
    if row.is_empty() {
        return None;
    }
    let mean = row.iter().map(|&v| v as f64).sum::<f64>() / row.len() as f64;
    mean.is_finite().then_some(mean)
}

/// Zero-based user→item edges from the purchase and browse logs. Only
/// catalog items are linked.
pub fn relation_graph(snapshot: &Snapshot) -> RelationGraph {
    let mut seen = HashSet::new();
    let edges = snapshot
        .purchases
        .iter()
        .map(|e| (e.user_id, e.item_id))
        .chain(snapshot.browsing.iter().map(|e| (e.user_id, e.item_id)))
        .filter(|(_, item_id)| snapshot.catalog.contains(*item_id))
        .filter_map(|(user_id, item_id)| {
            Some((model_index(user_id).ok()?, model_index(item_id).ok()?))
        })
        .filter(|edge| seen.insert(*edge))
        .collect();
    RelationGraph { edges }
}
