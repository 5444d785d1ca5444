/// Shelf engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Score assigned to a candidate whose score is missing.
pub const MISSING_SCORE: f64 = 0.0;

/// Offset between catalog identifiers (1-based) and embedding model indices (0-based).
pub const MODEL_INDEX_OFFSET: u64 = 1;
