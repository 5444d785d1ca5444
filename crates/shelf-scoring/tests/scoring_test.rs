//! End-to-end engine behaviour, including the multi-modal path with the
//! hash embedding model.

use shelf_core::config::{CollaborativeNormalization, ShelfConfig};
use shelf_core::errors::ShelfError;
use shelf_core::models::{
    Algorithm, Catalog, ImageTable, Item, ItemId, PurchaseEvent, Snapshot, Source, User,
};
use shelf_embeddings::HashEmbeddingModel;
use shelf_scoring::RecommendationEngine;
use test_fixtures::{load_snapshot, STOREFRONT};

const A: ItemId = 1;
const B: ItemId = 2;
const C: ItemId = 3;

fn worked_example() -> Snapshot {
    let catalog = Catalog::new(vec![
        Item::new(A, "A", 10.0, 4.0),
        Item::new(B, "B", 10.0, 5.0),
        Item::new(C, "C", 10.0, 3.0),
    ])
    .unwrap();
    Snapshot::new(
        (1..=3).map(|user_id| User { user_id }).collect(),
        catalog,
        vec![
            PurchaseEvent::new(1, A),
            PurchaseEvent::new(2, A),
            PurchaseEvent::new(2, B),
            PurchaseEvent::new(3, A),
            PurchaseEvent::new(3, B),
            PurchaseEvent::new(3, C),
        ],
        Vec::new(),
        ImageTable::default(),
    )
    .unwrap()
}

#[test]
fn worked_example_collaborative() {
    let snapshot = worked_example();
    let engine = RecommendationEngine::new(&snapshot, ShelfConfig::default());
    let recs = engine.recommend(1, Algorithm::Collaborative, 5).unwrap();

    assert_eq!(recs.item_ids(), vec![B, C]);
    assert!((recs.items[0].score - 1.0).abs() < 1e-12);
    assert!((recs.items[1].score - 0.3).abs() < 1e-12);
}

#[test]
fn max_frequency_mode_is_configurable() {
    let snapshot = worked_example();
    let mut config = ShelfConfig::default();
    config.scoring.collaborative_normalization = CollaborativeNormalization::MaxFrequency;
    let engine = RecommendationEngine::new(&snapshot, config);
    let recs = engine.recommend(1, Algorithm::Collaborative, 5).unwrap();

    assert_eq!(recs.item_ids(), vec![B, C]);
    assert!((recs.items[0].score - 5.0).abs() < 1e-12);
}

#[test]
fn top_k_truncates() {
    let snapshot = worked_example();
    let engine = RecommendationEngine::new(&snapshot, ShelfConfig::default());
    let recs = engine.recommend(1, Algorithm::Collaborative, 1).unwrap();
    assert_eq!(recs.item_ids(), vec![B]);
    assert_eq!(recs.top_k, 1);
}

#[test]
fn empty_result_is_not_an_error() {
    let snapshot = worked_example();
    let engine = RecommendationEngine::new(&snapshot, ShelfConfig::default());
    // User 3 bought everything.
    let recs = engine.recommend(3, Algorithm::Hybrid, 5).unwrap();
    assert!(recs.is_empty());
}

#[test]
fn recommendations_serialize_with_display_labels() {
    let snapshot = worked_example();
    let engine = RecommendationEngine::new(&snapshot, ShelfConfig::default());
    let recs = engine.recommend(1, Algorithm::Collaborative, 5).unwrap();

    let json = serde_json::to_value(&recs).unwrap();
    assert_eq!(json["algorithm"], "collaborative");
    assert_eq!(json["items"][0]["item_id"], B);
    assert_eq!(json["items"][0]["source"], "Collaborative");

    let back: shelf_core::models::Recommendations = serde_json::from_value(json).unwrap();
    assert_eq!(back.request_id, recs.request_id);
    assert_eq!(back.items, recs.items);
    assert!(back.fallback.is_none());
}

#[test]
fn request_ids_are_unique() {
    let snapshot = worked_example();
    let engine = RecommendationEngine::new(&snapshot, ShelfConfig::default());
    let a = engine.recommend(1, Algorithm::Hybrid, 5).unwrap();
    let b = engine.recommend(1, Algorithm::Hybrid, 5).unwrap();
    assert_ne!(a.request_id, b.request_id);
}

#[test]
fn multimodal_with_hash_model_scores_every_unseen_item() {
    let snapshot = load_snapshot(STOREFRONT);
    let model = HashEmbeddingModel::new(32);
    let engine = RecommendationEngine::new(&snapshot, ShelfConfig::default()).with_model(&model);

    let recs = engine.recommend(1, Algorithm::MultiModal, 10).unwrap();
    let signals = engine.signals(1);
    // Six catalog items, three already touched by user 1.
    assert_eq!(recs.len(), 3);
    assert!(recs.items.iter().all(|r| !signals.has_interacted(r.item_id)));
    assert!(recs.items.iter().all(|r| r.source == Source::MultiModal));
    assert!(recs.items.windows(2).all(|w| w[0].score >= w[1].score));
    assert!(recs.fallback.is_none());
}

#[test]
fn multimodal_is_deterministic() {
    let snapshot = load_snapshot(STOREFRONT);
    let model = HashEmbeddingModel::new(32);
    let engine = RecommendationEngine::new(&snapshot, ShelfConfig::default()).with_model(&model);

    let a = engine.recommend(5, Algorithm::MultiModal, 10).unwrap();
    let b = engine.recommend(5, Algorithm::MultiModal, 10).unwrap();
    assert_eq!(a.items, b.items);
}

#[test]
fn multimodal_without_images_is_unavailable() {
    let snapshot = worked_example();
    let model = HashEmbeddingModel::new(16);
    let engine = RecommendationEngine::new(&snapshot, ShelfConfig::default()).with_model(&model);
    let err = engine.recommend(1, Algorithm::MultiModal, 5).unwrap_err();
    assert!(matches!(err, ShelfError::DependencyUnavailable { .. }));
}

#[test]
fn every_algorithm_rejects_unknown_users() {
    let snapshot = worked_example();
    let engine = RecommendationEngine::new(&snapshot, ShelfConfig::default());
    for algorithm in Algorithm::ALL {
        assert!(matches!(
            engine.recommend(99, algorithm, 5),
            Err(ShelfError::UnknownUser { user_id: 99 })
        ));
    }
}
