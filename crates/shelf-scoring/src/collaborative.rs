//! Collaborative scorer: items bought by users who share a purchase with the
//! target user, weighted by co-purchase frequency and rating.

use std::collections::{HashMap, HashSet};

use shelf_core::config::CollaborativeNormalization;
use shelf_core::errors::ShelfResult;
use shelf_core::models::{
    Candidate, ItemId, ScoredRecommendation, Snapshot, Source, UserId, UserSignals,
};
use shelf_core::traits::{IScorer, ScoringRequest};
use tracing::debug;

use crate::normalize::{max_of, normalize};

/// Co-purchase collaborative filtering.
#[derive(Debug, Clone, Copy, Default)]
pub struct CollaborativeScorer {
    normalization: CollaborativeNormalization,
}

impl CollaborativeScorer {
    pub fn new(normalization: CollaborativeNormalization) -> Self {
        Self { normalization }
    }

    /// Rank catalog items for `user_id`, best first. Empty when the user has
    /// no purchases, no neighbors, or every candidate scores zero.
    pub fn rank(
        &self,
        user_id: UserId,
        snapshot: &Snapshot,
        signals: &UserSignals,
    ) -> Vec<ScoredRecommendation> {
        let purchased = &signals.purchased;
        if purchased.is_empty() {
            debug!(user_id, "no purchases, collaborative result empty");
            return Vec::new();
        }

        // Neighbors: other users sharing at least one purchase. Self never counts.
        let neighbors: HashSet<UserId> = snapshot
            .purchases
            .iter()
            .filter(|e| e.user_id != user_id && purchased.contains(&e.item_id))
            .map(|e| e.user_id)
            .collect();
        if neighbors.is_empty() {
            debug!(user_id, "no neighbors, collaborative result empty");
            return Vec::new();
        }

        let mut frequency: HashMap<ItemId, usize> = HashMap::new();
        for event in snapshot
            .purchases
            .iter()
            .filter(|e| neighbors.contains(&e.user_id))
        {
            *frequency.entry(event.item_id).or_default() += 1;
        }

        // Candidates in catalog order; dangling event ids never match an item.
        let candidates: Vec<(ItemId, usize, f64)> = snapshot
            .catalog
            .iter()
            .filter(|item| !purchased.contains(&item.item_id))
            .filter_map(|item| {
                frequency
                    .get(&item.item_id)
                    .filter(|&&count| count > 0)
                    .map(|&count| (item.item_id, count, count as f64 * item.rating))
            })
            .collect();

        let denominator = match self.normalization {
            CollaborativeNormalization::MaxRawScore => max_of(candidates.iter().map(|c| c.2)),
            CollaborativeNormalization::MaxFrequency => {
                max_of(candidates.iter().map(|c| c.1 as f64))
            }
        }
        .unwrap_or(0.0);

        debug!(
            user_id,
            neighbors = neighbors.len(),
            candidates = candidates.len(),
            denominator,
            "collaborative candidates gathered"
        );

        let raw = candidates.into_iter().map(|(id, _, raw)| (id, raw)).collect();
        match normalize(raw, denominator, Source::Collaborative) {
            Ok(scored) => scored,
            Err(e) => {
                debug!(user_id, error = %e, "collaborative scoring yielded nothing");
                Vec::new()
            }
        }
    }
}

impl IScorer for CollaborativeScorer {
    fn name(&self) -> &str {
        "collaborative"
    }

    fn source(&self) -> Source {
        Source::Collaborative
    }

    fn score(&self, request: &ScoringRequest<'_>) -> ShelfResult<Vec<Candidate>> {
        Ok(self
            .rank(request.user_id, request.snapshot, request.signals)
            .into_iter()
            .map(Candidate::from)
            .collect())
    }
}
