use crate::errors::ShelfResult;
use crate::models::{Candidate, Snapshot, Source, UserId, UserSignals};

/// Everything a scorer may read for one request.
#[derive(Debug, Clone, Copy)]
pub struct ScoringRequest<'a> {
    pub user_id: UserId,
    pub snapshot: &'a Snapshot,
    /// The user's collapsed purchase and browse sets.
    pub signals: &'a UserSignals,
}

/// A recommendation scorer: turns a snapshot into ranked candidates for one user.
///
/// An empty vector is a valid answer. Errors are reserved for unusable
/// dependencies.
pub trait IScorer: Send + Sync {
    /// Human-readable scorer name, used in logs.
    fn name(&self) -> &str;

    /// Source tag this scorer stamps on its rows.
    fn source(&self) -> Source;

    /// Score candidates for `request.user_id`, best first.
    fn score(&self, request: &ScoringRequest<'_>) -> ShelfResult<Vec<Candidate>>;
}
