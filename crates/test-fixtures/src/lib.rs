//! Test fixture loader for shelf golden datasets.
//!
//! Provides typed deserialization of the fixture JSON files and helpers for
//! loading them in tests and benches across crates.

use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use shelf_core::models::{Interaction, ScoredRecommendation, Snapshot, UserId};

/// Golden storefront snapshot shared by the scoring tests.
pub const STOREFRONT: &str = "golden/storefront.json";
/// Expected rankings over [`STOREFRONT`].
pub const EXPECTED_RECOMMENDATIONS: &str = "golden/expected_recommendations.json";

/// Root directory of the fixture data.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a fixture file as raw JSON Value.
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// Load a snapshot fixture through the same loader the CLI uses.
///
/// # Panics
/// Panics if the snapshot can't be loaded.
pub fn load_snapshot(relative_path: &str) -> Snapshot {
    let path = fixture_path(relative_path);
    Snapshot::load(&path)
        .unwrap_or_else(|e| panic!("Failed to load snapshot {}: {}", path.display(), e))
}

/// One expected ranking.
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationCase {
    pub name: String,
    pub user_id: UserId,
    pub algorithm: String,
    pub top_k: usize,
    pub expected: Vec<ScoredRecommendation>,
}

/// Expected interaction listing for one user.
#[derive(Debug, Clone, Deserialize)]
pub struct InteractionCase {
    pub user_id: UserId,
    pub expected: Vec<Interaction>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoldenRecommendations {
    pub snapshot: String,
    pub cases: Vec<RecommendationCase>,
    pub interactions: Vec<InteractionCase>,
}

/// Load the expected rankings over the storefront snapshot.
pub fn golden_recommendations() -> GoldenRecommendations {
    load_fixture(EXPECTED_RECOMMENDATIONS)
}
