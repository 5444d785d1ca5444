//! Property tests for the result filter and the scorers feeding it.

use std::collections::HashSet;

use proptest::prelude::*;
use shelf_core::config::ShelfConfig;
use shelf_core::models::{
    Algorithm, BrowseEvent, Candidate, Catalog, ImageTable, Item, PurchaseEvent, Snapshot, Source,
    User, UserSignals,
};
use shelf_scoring::ranking::filter_and_rank;
use shelf_scoring::RecommendationEngine;

const USERS: u64 = 6;
const ITEMS: u64 = 10;

fn arb_source() -> impl Strategy<Value = Source> {
    prop_oneof![
        Just(Source::Collaborative),
        Just(Source::ContentBased),
        Just(Source::MultiModal),
        Just(Source::Popular),
    ]
}

fn arb_candidate() -> impl Strategy<Value = Candidate> {
    (
        1u64..=ITEMS,
        prop_oneof![
            3 => (0.0f64..1.0).prop_map(Some),
            1 => Just(None),
            1 => Just(Some(f64::NAN)),
        ],
        arb_source(),
    )
        .prop_map(|(item_id, score, source)| Candidate::new(item_id, score, source))
}

fn arb_signals() -> impl Strategy<Value = UserSignals> {
    (
        prop::collection::hash_set(1u64..=ITEMS, 0..4),
        prop::collection::hash_set(1u64..=ITEMS, 0..4),
    )
        .prop_map(|(purchased, browsed)| UserSignals { purchased, browsed })
}

fn arb_snapshot() -> impl Strategy<Value = Snapshot> {
    (
        prop::collection::vec((1u64..=USERS, 1u64..=ITEMS), 0..30),
        prop::collection::vec((1u64..=USERS, 1u64..=ITEMS + 2), 0..20),
        prop::collection::vec((0.0f64..=5.0, 0usize..3), ITEMS as usize),
    )
        .prop_map(|(purchases, browsing, attrs)| {
            let categories = ["shoes", "hats", "gear"];
            let items = attrs
                .into_iter()
                .enumerate()
                .map(|(i, (rating, cat))| {
                    Item::new(i as u64 + 1, format!("item {}", i + 1), 10.0, rating)
                        .with_category(categories[cat])
                })
                .collect();
            Snapshot::new(
                (1..=USERS).map(|user_id| User { user_id }).collect(),
                Catalog::new(items).unwrap(),
                purchases.into_iter().map(|(u, i)| PurchaseEvent::new(u, i)).collect(),
                browsing.into_iter().map(|(u, i)| BrowseEvent::new(u, i)).collect(),
                ImageTable::default(),
            )
            .unwrap()
        })
}

// ── Result filter ────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn filter_output_is_clean(
        candidates in prop::collection::vec(arb_candidate(), 0..40),
        signals in arb_signals(),
        top_k in 1usize..15,
    ) {
        let out = filter_and_rank(candidates, &signals, top_k);

        prop_assert!(out.len() <= top_k);
        prop_assert!(out.iter().all(|r| !signals.has_interacted(r.item_id)));
        prop_assert!(out.iter().all(|r| r.score.is_finite()));
        prop_assert!(out.windows(2).all(|w| w[0].score >= w[1].score));

        let ids: HashSet<_> = out.iter().map(|r| r.item_id).collect();
        prop_assert_eq!(ids.len(), out.len());
    }

    #[test]
    fn filter_keeps_everything_eligible_up_to_top_k(
        candidates in prop::collection::vec(arb_candidate(), 0..40),
        signals in arb_signals(),
    ) {
        let eligible: HashSet<_> = candidates
            .iter()
            .map(|c| c.item_id)
            .filter(|id| !signals.has_interacted(*id))
            .collect();
        let out = filter_and_rank(candidates, &signals, ITEMS as usize);
        prop_assert_eq!(out.len(), eligible.len());
    }
}

// ── Engine over random snapshots ─────────────────────────────────────────

proptest! {
    #[test]
    fn recommendations_respect_invariants(
        snapshot in arb_snapshot(),
        user_id in 1u64..=USERS,
        top_k in 1usize..8,
    ) {
        let engine = RecommendationEngine::new(&snapshot, ShelfConfig::default());
        let signals = engine.signals(user_id);

        for algorithm in [Algorithm::Collaborative, Algorithm::ContentBased, Algorithm::Hybrid] {
            let recs = engine.recommend(user_id, algorithm, top_k).unwrap();

            prop_assert!(recs.len() <= top_k);
            prop_assert!(recs.items.iter().all(|r| !signals.has_interacted(r.item_id)));
            prop_assert!(recs.items.iter().all(|r| snapshot.catalog.contains(r.item_id)));
            prop_assert!(recs.items.windows(2).all(|w| w[0].score >= w[1].score));

            let ids: HashSet<_> = recs.items.iter().map(|r| r.item_id).collect();
            prop_assert_eq!(ids.len(), recs.len());
        }
    }

    #[test]
    fn collaborative_scores_are_normalized(
        snapshot in arb_snapshot(),
        user_id in 1u64..=USERS,
    ) {
        let engine = RecommendationEngine::new(&snapshot, ShelfConfig::default());
        let recs = engine.recommend(user_id, Algorithm::Collaborative, ITEMS as usize).unwrap();
        prop_assert!(recs.items.iter().all(|r| r.score >= 0.0 && r.score <= 1.0 + 1e-12));
    }
}
