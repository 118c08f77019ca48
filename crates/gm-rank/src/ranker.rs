//! The `Ranker` — scores, annotates, sorts, and truncates a catalog.

use gm_catalog::Candidate;
use gm_core::GeoPoint;

use crate::{MatchResult, RankError, RankResult, RelativePosition, SimilarityScorer};

/// Matches returned per query unless overridden with [`Ranker::with_top_k`].
pub const DEFAULT_TOP_K: usize = 5;

/// Ranks a candidate catalog against one query.
///
/// The ranker holds only the injected scorer and the result-list cap; it is
/// stateless between calls, so one instance may serve concurrent queries as
/// long as each call receives a catalog snapshot that is not mutated during
/// the call.
///
/// # Example
///
/// ```rust,ignore
/// let ranker = Ranker::new(MockScorer::new(seed));
/// let matches = ranker.rank(Some(user_point), &catalog.list()?)?;
/// ```
pub struct Ranker<S: SimilarityScorer> {
    scorer: S,
    top_k:  usize,
}

impl<S: SimilarityScorer> Ranker<S> {
    /// Create a ranker returning at most [`DEFAULT_TOP_K`] matches.
    pub fn new(scorer: S) -> Self {
        Self { scorer, top_k: DEFAULT_TOP_K }
    }

    /// Override the result-list cap.  Zero yields empty results.
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Score and annotate every candidate, then return the top matches
    /// ordered by confidence descending.
    ///
    /// Candidates without a coordinate stay in the ranking; they simply carry
    /// no geospatial annotations.  `user_point` controls whether
    /// [`RelativePosition`] metrics are computed at all.
    ///
    /// Equal confidences keep catalog order (the sort is stable).  An empty
    /// catalog returns an empty list; a `top_k` past the end returns the
    /// whole catalog, sorted.  The first scorer failure aborts the call.
    pub fn rank(
        &self,
        user_point: Option<GeoPoint>,
        catalog: &[Candidate],
    ) -> RankResult<Vec<MatchResult>> {
        let mut matches = self.annotate_all(user_point, catalog)?;

        // Descending confidence; stable sort keeps catalog order on ties.
        matches.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
        matches.truncate(self.top_k);
        Ok(matches)
    }

    /// Annotate the full catalog, preserving catalog order in the output.
    ///
    /// With the `parallel` Cargo feature the per-candidate work runs on
    /// Rayon's thread pool; the order-preserving collect keeps results in
    /// catalog order either way, so the stable tie-break is unaffected.
    fn annotate_all(
        &self,
        user_point: Option<GeoPoint>,
        catalog: &[Candidate],
    ) -> RankResult<Vec<MatchResult>> {
        #[cfg(not(feature = "parallel"))]
        {
            catalog
                .iter()
                .map(|candidate| self.annotate(user_point, candidate))
                .collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            catalog
                .par_iter()
                .map(|candidate| self.annotate(user_point, candidate))
                .collect()
        }
    }

    /// Score and annotate one candidate.
    fn annotate(
        &self,
        user_point: Option<GeoPoint>,
        candidate: &Candidate,
    ) -> RankResult<MatchResult> {
        let confidence = self.scorer.score(candidate)?;
        if !(0.0..=1.0).contains(&confidence) {
            return Err(RankError::ConfidenceOutOfRange {
                id: candidate.id,
                confidence,
            });
        }

        let polar = candidate.point.map(GeoPoint::polar_distances);
        let relative = match (user_point, candidate.point) {
            (Some(user), Some(point)) => Some(RelativePosition {
                distance_km: user.distance_km(point),
                bearing_deg: user.initial_bearing_deg(point),
            }),
            _ => None,
        };

        Ok(MatchResult {
            id: candidate.id,
            confidence,
            relative,
            polar,
        })
    }
}
