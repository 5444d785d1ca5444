//! Result filter applied to every scorer's output before it reaches the caller.

use std::collections::HashSet;

use shelf_core::constants::MISSING_SCORE;
use shelf_core::models::{Candidate, ScoredRecommendation, UserSignals};
use tracing::debug;

use super::sort_by_score_desc;

/// Drop interacted items, default missing scores, sort, deduplicate, and
/// truncate to `top_k`.
///
/// Non-finite scores are treated as missing.
pub fn filter_and_rank(
    candidates: Vec<Candidate>,
    signals: &UserSignals,
    top_k: usize,
) -> Vec<ScoredRecommendation> {
    let total = candidates.len();

    let mut rows: Vec<ScoredRecommendation> = candidates
        .into_iter()
        .filter(|c| !signals.has_interacted(c.item_id))
        .map(|c| {
            let score = c.score.filter(|s| s.is_finite()).unwrap_or(MISSING_SCORE);
            ScoredRecommendation::new(c.item_id, score, c.source)
        })
        .collect();
    let kept = rows.len();

    sort_by_score_desc(&mut rows);

    // Rows are sorted, so the first occurrence is the highest-scored one.
    let mut seen = HashSet::with_capacity(rows.len());
    rows.retain(|r| seen.insert(r.item_id));
    rows.truncate(top_k);

    debug!(
        candidates = total,
        after_interaction_filter = kept,
        returned = rows.len(),
        top_k,
        "result filter applied"
    );
    rows
}
