/// Scoring subsystem errors.
///
/// These are internal guards: scorers convert them into an empty result
/// rather than surfacing them to the caller.
#[derive(Debug, thiserror::Error)]
pub enum ScoringError {
    #[error("normalization degenerate in {scorer}: denominator {denominator}")]
    NormalizationDegenerate { scorer: String, denominator: f64 },

    #[error("no candidates for {scorer}")]
    NoCandidates { scorer: String },
}
