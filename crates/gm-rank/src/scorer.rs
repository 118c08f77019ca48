//! The `SimilarityScorer` trait — the extension point for real models.

use gm_catalog::Candidate;

use crate::RankResult;

/// Pluggable visual-similarity scoring.
///
/// One scorer instance represents one query: `score` returns how similar a
/// candidate is to that query, as a confidence in `[0, 1]`.  The ranker
/// validates every returned value and fails fast on violations rather than
/// silently clamping.  Failures inside a model (I/O, inference) are reported
/// as [`RankError::Scorer`][crate::RankError::Scorer].
///
/// # Thread safety
///
/// With the `parallel` Cargo feature the ranker scores candidates on Rayon's
/// thread pool, so implementations must be `Send + Sync`.  Per-query state
/// belongs in the scorer instance built for that query, not in shared mutable
/// fields.
pub trait SimilarityScorer: Send + Sync {
    /// Similarity of `candidate` to the query this scorer was built for.
    fn score(&self, candidate: &Candidate) -> RankResult<f64>;
}
