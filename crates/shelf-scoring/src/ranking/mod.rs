//! Ordering and the post-scoring result filter.

pub mod filter;

use std::cmp::Ordering;

use shelf_core::models::ScoredRecommendation;

pub use filter::filter_and_rank;

/// Sort rows by score descending. Stable: equal scores keep their input order.
pub fn sort_by_score_desc(rows: &mut [ScoredRecommendation]) {
    rows.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
}
