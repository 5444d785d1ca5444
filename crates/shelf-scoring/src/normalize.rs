//! Max-normalization shared by the collaborative and content scorers.

use shelf_core::errors::ScoringError;
use shelf_core::models::{ItemId, ScoredRecommendation, Source};

use crate::ranking;

/// Divide every raw score by `denominator` and sort best first.
///
/// A zero, negative or non-finite denominator is degenerate: nothing is
/// scored rather than emitting NaN or infinite scores.
pub fn normalize(
    raw: Vec<(ItemId, f64)>,
    denominator: f64,
    source: Source,
) -> Result<Vec<ScoredRecommendation>, ScoringError> {
    if raw.is_empty() {
        return Err(ScoringError::NoCandidates {
            scorer: source.label().to_string(),
        });
    }
    if !denominator.is_finite() || denominator <= 0.0 {
        return Err(ScoringError::NormalizationDegenerate {
            scorer: source.label().to_string(),
            denominator,
        });
    }

    let mut scored: Vec<ScoredRecommendation> = raw
        .into_iter()
        .map(|(item_id, raw_score)| ScoredRecommendation::new(item_id, raw_score / denominator, source))
        .collect();
    ranking::sort_by_score_desc(&mut scored);
    Ok(scored)
}

/// Largest value in `values`, or `None` when empty.
pub fn max_of(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    values.into_iter().fold(None, |acc, v| match acc {
        Some(m) if m >= v => Some(m),
        _ => Some(v),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_candidate_scores_one() {
        let out = normalize(vec![(1, 3.0), (2, 10.0)], 10.0, Source::Collaborative).unwrap();
        assert_eq!(out[0].item_id, 2);
        assert!((out[0].score - 1.0).abs() < 1e-12);
        assert!((out[1].score - 0.3).abs() < 1e-12);
    }

    #[test]
    fn zero_denominator_is_degenerate() {
        let err = normalize(vec![(1, 0.0)], 0.0, Source::ContentBased).unwrap_err();
        assert!(matches!(err, ScoringError::NormalizationDegenerate { .. }));
    }

    #[test]
    fn nan_denominator_is_degenerate() {
        assert!(normalize(vec![(1, 1.0)], f64::NAN, Source::ContentBased).is_err());
    }

    #[test]
    fn empty_input_has_no_candidates() {
        let err = normalize(Vec::new(), 1.0, Source::Collaborative).unwrap_err();
        assert!(matches!(err, ScoringError::NoCandidates { .. }));
    }

    #[test]
    fn max_of_handles_empty() {
        assert_eq!(max_of(Vec::<f64>::new()), None);
        assert_eq!(max_of(vec![1.0, 4.0, 2.0]), Some(4.0));
    }
}
