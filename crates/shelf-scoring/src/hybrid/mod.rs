//! Hybrid aggregator: collaborative + content → popularity fallback → dedup.

pub mod deduplication;
pub mod popularity;

use shelf_core::config::ScoringConfig;
use shelf_core::errors::ShelfResult;
use shelf_core::models::{Candidate, ScoredRecommendation, Snapshot, Source, UserId, UserSignals};
use shelf_core::traits::{IScorer, ScoringRequest};
use tracing::debug;

use crate::collaborative::CollaborativeScorer;
use crate::content::ContentScorer;

/// Fuses the collaborative and content scorers without re-normalizing
/// across them.
#[derive(Debug, Clone, Copy)]
pub struct HybridScorer {
    collaborative: CollaborativeScorer,
    content: ContentScorer,
    fallback_size: usize,
    fallback_score: f64,
}

impl HybridScorer {
    pub fn new(collaborative: CollaborativeScorer, content: ContentScorer, config: &ScoringConfig) -> Self {
        Self {
            collaborative,
            content,
            fallback_size: config.popular_fallback_size,
            fallback_score: config.popular_fallback_score,
        }
    }

    pub fn from_config(config: &ScoringConfig) -> Self {
        Self::new(
            CollaborativeScorer::new(config.collaborative_normalization),
            ContentScorer::new(config.rating_scale),
            config,
        )
    }

    /// Fused ranking for `user_id`, best first, one row per item.
    pub fn rank(
        &self,
        user_id: UserId,
        snapshot: &Snapshot,
        signals: &UserSignals,
    ) -> Vec<ScoredRecommendation> {
        // Stage 1: independent scorers, concatenated with their own scores and tags.
        let mut combined = self.collaborative.rank(user_id, snapshot, signals);
        let from_collaborative = combined.len();
        combined.extend(self.content.rank(user_id, snapshot, signals));
        debug!(
            user_id,
            collaborative = from_collaborative,
            content = combined.len() - from_collaborative,
            "hybrid contributions combined"
        );

        // Stage 2: popularity fallback when neither scorer found anything.
        if combined.is_empty() {
            debug!(user_id, "no hybrid contributions, adding popular items");
            combined = popularity::fallback(
                snapshot,
                signals,
                self.fallback_size,
                self.fallback_score,
            );
        }

        // Stage 3: keep each item's highest-scored row.
        let fused = deduplication::deduplicate(combined);
        debug!(user_id, rows = fused.len(), "hybrid ranking complete");
        fused
    }
}

impl Default for HybridScorer {
    fn default() -> Self {
        Self::from_config(&ScoringConfig::default())
    }
}

impl IScorer for HybridScorer {
    fn name(&self) -> &str {
        "hybrid"
    }

    fn source(&self) -> Source {
        Source::HybridMerged
    }

    fn score(&self, request: &ScoringRequest<'_>) -> ShelfResult<Vec<Candidate>> {
        Ok(self
            .rank(request.user_id, request.snapshot, request.signals)
            .into_iter()
            .map(Candidate::from)
            .collect())
    }
}
