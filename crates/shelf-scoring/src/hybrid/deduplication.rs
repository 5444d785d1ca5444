//! Score-ordered deduplication by item id.

use std::collections::HashSet;

use shelf_core::models::ScoredRecommendation;

use crate::ranking::sort_by_score_desc;

/// Sort best first, then keep only the first row for each item id, so the
/// surviving row is the item's highest-scored, earliest-ranked one.
pub fn deduplicate(mut rows: Vec<ScoredRecommendation>) -> Vec<ScoredRecommendation> {
    sort_by_score_desc(&mut rows);
    let mut seen = HashSet::with_capacity(rows.len());
    rows.retain(|r| seen.insert(r.item_id));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelf_core::models::Source;

    #[test]
    fn higher_score_survives_regardless_of_source_order() {
        let rows = vec![
            ScoredRecommendation::new(7, 0.3, Source::Collaborative),
            ScoredRecommendation::new(8, 0.6, Source::Collaborative),
            ScoredRecommendation::new(7, 0.8, Source::ContentBased),
        ];
        let out = deduplicate(rows);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].item_id, 7);
        assert_eq!(out[0].source, Source::ContentBased);
        assert_eq!(out[1].item_id, 8);
    }

    #[test]
    fn equal_scores_keep_the_earlier_row() {
        let rows = vec![
            ScoredRecommendation::new(7, 0.5, Source::Collaborative),
            ScoredRecommendation::new(7, 0.5, Source::ContentBased),
        ];
        let out = deduplicate(rows);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].source, Source::Collaborative);
    }
}
