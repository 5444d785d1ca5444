use serde::{Deserialize, Serialize};

use super::defaults;

/// Denominator used to normalize collaborative raw scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollaborativeNormalization {
    /// Divide by the largest raw score (frequency × rating); the top candidate scores 1.0.
    /// When every candidate is rated 0 the denominator is 0 and the result is
    /// empty, where `MaxFrequency` returns those rows scored 0.0.
    #[default]
    MaxRawScore,
    /// Divide by the largest co-purchase frequency among candidates.
    MaxFrequency,
}

/// Scorer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Upper bound of the rating scale used by content scoring.
    pub rating_scale: f64,
    /// How many best sellers the hybrid popularity fallback considers.
    pub popular_fallback_size: usize,
    /// Fixed score given to popularity fallback rows.
    pub popular_fallback_score: f64,
    pub collaborative_normalization: CollaborativeNormalization,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            rating_scale: defaults::DEFAULT_RATING_SCALE,
            popular_fallback_size: defaults::DEFAULT_POPULAR_FALLBACK_SIZE,
            popular_fallback_score: defaults::DEFAULT_POPULAR_FALLBACK_SCORE,
            collaborative_normalization: CollaborativeNormalization::default(),
        }
    }
}
