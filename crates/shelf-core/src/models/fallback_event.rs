use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Algorithm;

/// Recorded when a request was answered by a different algorithm than the
/// one requested.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FallbackEvent {
    pub requested: Algorithm,
    pub used: Algorithm,
    pub reason: String,
    pub timestamp: DateTime<Utc>,
}
