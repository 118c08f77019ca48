//! `gm-rank` — similarity scoring seam and top-K ranking.
//!
//! | Module     | Contents                                           |
//! |------------|----------------------------------------------------|
//! | [`scorer`] | `SimilarityScorer` trait                           |
//! | [`mock`]   | `MockScorer` — deterministic placeholder model     |
//! | [`ranker`] | `Ranker<S>` — score, annotate, sort, truncate      |
//! | [`result`] | `MatchResult`, `RelativePosition`                  |
//! | [`error`]  | `RankError`, `RankResult<T>`                       |
//!
//! # Design notes
//!
//! Ranking is a single pure pass over a catalog snapshot:
//!
//! 1. **Annotate** (optionally parallel with the `parallel` feature): call
//!    the injected scorer for every candidate and attach geospatial metrics
//!    computed against the query point.  No mutation, no I/O.
//! 2. **Order**: stable sort by confidence descending, truncate to the
//!    configured top-K.
//!
//! Errors propagate: a failing scorer aborts the call instead of degrading to
//! an empty result list.  Persistence of the returned matches belongs to the
//! caller (see `gm-output`).

pub mod error;
pub mod mock;
pub mod ranker;
pub mod result;
pub mod scorer;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{RankError, RankResult};
pub use mock::MockScorer;
pub use ranker::{DEFAULT_TOP_K, Ranker};
pub use result::{MatchResult, RelativePosition};
pub use scorer::SimilarityScorer;
