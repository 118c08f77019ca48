//! Error types for gm-rank.

use gm_core::ImageId;
use thiserror::Error;

/// Errors surfaced by a ranking call.
///
/// These propagate to the caller; the ranker never catches broadly and
/// returns an empty list.  Presentation-layer fallbacks belong to the caller.
#[derive(Debug, Error)]
pub enum RankError {
    /// The injected similarity scorer failed for one candidate.
    #[error("scorer failed for {id}: {reason}")]
    Scorer { id: ImageId, reason: String },

    /// The scorer returned a confidence outside `[0, 1]` (or NaN).
    #[error("scorer returned confidence {confidence} for {id}, outside [0, 1]")]
    ConfidenceOutOfRange { id: ImageId, confidence: f64 },
}

/// Alias for `Result<T, RankError>`.
pub type RankResult<T> = Result<T, RankError>;
