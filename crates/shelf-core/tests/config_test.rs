use shelf_core::config::*;
use shelf_core::models::Algorithm;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = ShelfConfig::from_toml("").unwrap();

    // Recommend defaults
    assert_eq!(config.recommend.default_top_k, 10);
    assert_eq!(config.recommend.multimodal_fallback, Some(Algorithm::Hybrid));

    // Scoring defaults
    assert_eq!(config.scoring.rating_scale, 5.0);
    assert_eq!(config.scoring.popular_fallback_size, 3);
    assert_eq!(config.scoring.popular_fallback_score, 0.5);
    assert_eq!(
        config.scoring.collaborative_normalization,
        CollaborativeNormalization::MaxRawScore
    );

    // Embedding defaults
    assert_eq!(config.embedding.model, "hash");
    assert_eq!(config.embedding.dimensions, 64);
    assert_eq!(config.embedding.latency_budget_ms, 2_000);
    assert!(!config.embedding.relation_graph);

    // Observability defaults
    assert_eq!(config.observability.log_level, "info");
    assert!(!config.observability.json_logs);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[recommend]
default_top_k = 25
multimodal_fallback = "content-based"

[scoring]
collaborative_normalization = "max_frequency"
popular_fallback_size = 5
"#;
    let config = ShelfConfig::from_toml(toml).unwrap();
    assert_eq!(config.recommend.default_top_k, 25);
    assert_eq!(
        config.recommend.multimodal_fallback,
        Some(Algorithm::ContentBased)
    );
    assert_eq!(
        config.scoring.collaborative_normalization,
        CollaborativeNormalization::MaxFrequency
    );
    assert_eq!(config.scoring.popular_fallback_size, 5);
    // Non-overridden fields keep defaults
    assert_eq!(config.scoring.popular_fallback_score, 0.5);
    assert_eq!(config.embedding.dimensions, 64);
}

#[test]
fn config_rejects_zero_top_k() {
    let err = ShelfConfig::from_toml("[recommend]\ndefault_top_k = 0\n").unwrap_err();
    assert!(err.to_string().contains("default_top_k"));
}

#[test]
fn config_rejects_non_positive_rating_scale() {
    assert!(ShelfConfig::from_toml("[scoring]\nrating_scale = 0.0\n").is_err());
}

#[test]
fn config_rejects_malformed_toml() {
    assert!(ShelfConfig::from_toml("[scoring\n").is_err());
}

#[test]
fn config_serde_roundtrip() {
    let config = ShelfConfig::default();
    let toml_str = config.to_toml().unwrap();
    let roundtripped = ShelfConfig::from_toml(&toml_str).unwrap();
    assert_eq!(
        roundtripped.recommend.default_top_k,
        config.recommend.default_top_k
    );
    assert_eq!(
        roundtripped.recommend.multimodal_fallback,
        config.recommend.multimodal_fallback
    );
    assert_eq!(
        roundtripped.embedding.dimensions,
        config.embedding.dimensions
    );
}
