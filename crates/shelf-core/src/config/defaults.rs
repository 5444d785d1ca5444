// Single source of truth for all default values.

// --- Recommend ---
pub const DEFAULT_TOP_K: usize = 10;
pub const DEFAULT_MULTIMODAL_FALLBACK: &str = "hybrid";

// --- Scoring ---
pub const DEFAULT_RATING_SCALE: f64 = 5.0;
pub const DEFAULT_POPULAR_FALLBACK_SIZE: usize = 3;
pub const DEFAULT_POPULAR_FALLBACK_SCORE: f64 = 0.5;

// --- Embedding ---
pub const DEFAULT_EMBEDDING_MODEL: &str = "hash";
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 64;
pub const DEFAULT_LATENCY_BUDGET_MS: u64 = 2_000;
pub const DEFAULT_RELATION_GRAPH: bool = false;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
