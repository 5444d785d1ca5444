use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Algorithm, FallbackEvent, ItemId, Source, UserId};

/// A fully scored recommendation row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoredRecommendation {
    pub item_id: ItemId,
    /// Relevance score. Intended range [0.0, 1.0], not enforced by every path.
    pub score: f64,
    pub source: Source,
}

impl ScoredRecommendation {
    pub fn new(item_id: ItemId, score: f64, source: Source) -> Self {
        Self {
            item_id,
            score,
            source,
        }
    }
}

/// A scorer output row before filtering. Externally sourced rows may carry
/// no score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub item_id: ItemId,
    pub score: Option<f64>,
    pub source: Source,
}

impl Candidate {
    pub fn new(item_id: ItemId, score: Option<f64>, source: Source) -> Self {
        Self {
            item_id,
            score,
            source,
        }
    }
}

impl From<ScoredRecommendation> for Candidate {
    fn from(rec: ScoredRecommendation) -> Self {
        Self {
            item_id: rec.item_id,
            score: Some(rec.score),
            source: rec.source,
        }
    }
}

/// The answer to one `recommend` request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendations {
    pub request_id: String,
    pub user_id: UserId,
    /// Algorithm that produced `items`.
    pub algorithm: Algorithm,
    pub top_k: usize,
    /// Ranked rows, best first. Empty is a valid answer.
    pub items: Vec<ScoredRecommendation>,
    /// Set when `algorithm` differs from the requested one.
    pub fallback: Option<FallbackEvent>,
    pub generated_at: DateTime<Utc>,
}

impl Recommendations {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn item_ids(&self) -> Vec<ItemId> {
        self.items.iter().map(|r| r.item_id).collect()
    }
}
