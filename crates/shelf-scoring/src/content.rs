//! Content scorer: items sharing a category with the user's browsing history.

use std::collections::HashSet;

use shelf_core::config::defaults::DEFAULT_RATING_SCALE;
use shelf_core::errors::ShelfResult;
use shelf_core::models::{Candidate, Item, ScoredRecommendation, Snapshot, Source, UserId, UserSignals};
use shelf_core::traits::{IScorer, ScoringRequest};
use tracing::debug;

use crate::normalize::{max_of, normalize};

/// Category-affinity content-based filtering.
#[derive(Debug, Clone, Copy)]
pub struct ContentScorer {
    rating_scale: f64,
}

impl Default for ContentScorer {
    fn default() -> Self {
        Self::new(DEFAULT_RATING_SCALE)
    }
}

impl ContentScorer {
    pub fn new(rating_scale: f64) -> Self {
        Self { rating_scale }
    }

    /// Rank catalog items for `user_id`, best first. Empty when nothing
    /// browsed is in the catalog or the catalog has no categories.
    pub fn rank(
        &self,
        user_id: UserId,
        snapshot: &Snapshot,
        signals: &UserSignals,
    ) -> Vec<ScoredRecommendation> {
        let catalog = &snapshot.catalog;
        let browsed: Vec<&Item> = catalog
            .iter()
            .filter(|item| signals.browsed.contains(&item.item_id))
            .collect();

        if browsed.is_empty() || !catalog.has_categories() {
            debug!(
                user_id,
                browsed = browsed.len(),
                has_categories = catalog.has_categories(),
                "no content-based recommendations"
            );
            return Vec::new();
        }

        let categories: HashSet<&str> = browsed
            .iter()
            .filter_map(|item| item.category.as_deref())
            .collect();
        let avg_rating = browsed.iter().map(|item| item.rating).sum::<f64>() / browsed.len() as f64;

        let raw: Vec<_> = catalog
            .iter()
            .filter(|item| !signals.browsed.contains(&item.item_id))
            .filter(|item| {
                item.category
                    .as_deref()
                    .is_some_and(|c| categories.contains(c))
            })
            .map(|item| (item.item_id, item.rating / self.rating_scale * avg_rating))
            .collect();

        let denominator = max_of(raw.iter().map(|(_, score)| *score)).unwrap_or(0.0);

        debug!(
            user_id,
            categories = categories.len(),
            avg_rating,
            candidates = raw.len(),
            "content candidates gathered"
        );

        match normalize(raw, denominator, Source::ContentBased) {
            Ok(scored) => scored,
            Err(e) => {
                debug!(user_id, error = %e, "content scoring yielded nothing");
                Vec::new()
            }
        }
    }
}

impl IScorer for ContentScorer {
    fn name(&self) -> &str {
        "content-based"
    }

    fn source(&self) -> Source {
        Source::ContentBased
    }

    fn score(&self, request: &ScoringRequest<'_>) -> ShelfResult<Vec<Candidate>> {
        Ok(self
            .rank(request.user_id, request.snapshot, request.signals)
            .into_iter()
            .map(Candidate::from)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signals;
    use shelf_core::models::{BrowseEvent, Catalog, ImageTable, ItemId, User};

    fn snapshot(items: Vec<Item>, browsing: Vec<BrowseEvent>) -> Snapshot {
        Snapshot::new(
            vec![User { user_id: 1 }, User { user_id: 2 }],
            Catalog::new(items).unwrap(),
            Vec::new(),
            browsing,
            ImageTable::default(),
        )
        .unwrap()
    }

    fn rank(snap: &Snapshot, user_id: UserId) -> Vec<ScoredRecommendation> {
        let s = signals::extract(user_id, &snap.purchases, &snap.browsing);
        ContentScorer::default().rank(user_id, snap, &s)
    }

    fn shop() -> Vec<Item> {
        vec![
            Item::new(1, "trail shoe", 80.0, 4.0).with_category("shoes"),
            Item::new(2, "road shoe", 90.0, 5.0).with_category("shoes"),
            Item::new(3, "sandal", 30.0, 2.5).with_category("shoes"),
            Item::new(4, "beanie", 15.0, 4.5).with_category("hats"),
            Item::new(5, "mystery box", 10.0, 5.0),
        ]
    }

    #[test]
    fn scores_same_category_items_relative_to_best() {
        let snap = snapshot(shop(), vec![BrowseEvent::new(1, 1)]);
        let out = rank(&snap, 1);
        let ids: Vec<ItemId> = out.iter().map(|r| r.item_id).collect();
        assert_eq!(ids, vec![2, 3]);
        assert!((out[0].score - 1.0).abs() < 1e-12);
        // (2.5 / 5 × 4) / (5 / 5 × 4)
        assert!((out[1].score - 0.5).abs() < 1e-12);
        assert!(out.iter().all(|r| r.source == Source::ContentBased));
    }

    #[test]
    fn multiple_browsed_categories_are_all_used() {
        let snap = snapshot(shop(), vec![BrowseEvent::new(1, 1), BrowseEvent::new(1, 4)]);
        let ids: Vec<ItemId> = rank(&snap, 1).iter().map(|r| r.item_id).collect();
        assert_eq!(ids, vec![2, 3]);

        let snap = snapshot(shop(), vec![BrowseEvent::new(1, 2), BrowseEvent::new(1, 4)]);
        let ids: Vec<ItemId> = rank(&snap, 1).iter().map(|r| r.item_id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn uncategorized_items_never_match() {
        let snap = snapshot(shop(), vec![BrowseEvent::new(1, 5)]);
        assert!(rank(&snap, 1).is_empty());
    }

    #[test]
    fn no_browsing_yields_nothing() {
        let snap = snapshot(shop(), vec![BrowseEvent::new(2, 1)]);
        assert!(rank(&snap, 1).is_empty());
    }

    #[test]
    fn catalog_without_categories_yields_nothing() {
        let items = vec![Item::new(1, "a", 1.0, 4.0), Item::new(2, "b", 1.0, 4.0)];
        let snap = snapshot(items, vec![BrowseEvent::new(1, 1)]);
        assert!(rank(&snap, 1).is_empty());
    }

    #[test]
    fn zero_rated_browsing_is_degenerate() {
        let items = vec![
            Item::new(1, "a", 1.0, 0.0).with_category("x"),
            Item::new(2, "b", 1.0, 4.0).with_category("x"),
        ];
        let snap = snapshot(items, vec![BrowseEvent::new(1, 1)]);
        assert!(rank(&snap, 1).is_empty());
    }
}
