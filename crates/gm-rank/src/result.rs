//! The annotated match record produced per ranked candidate.

use gm_core::{ImageId, PolarDistances};

/// Query→candidate metrics, computable only when both ends are located.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RelativePosition {
    pub distance_km: f64,
    /// Initial bearing from the query point toward the candidate, `[0, 360)`.
    pub bearing_deg: f64,
}

/// One ranked match, immutable once produced.
///
/// The presence rules are carried by the type: `polar` is `Some` exactly when
/// the candidate has a coordinate, and `relative` is `Some` exactly when both
/// the candidate and the query do.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchResult {
    pub id: ImageId,
    /// Similarity confidence in `[0, 1]`.
    pub confidence: f64,
    pub relative: Option<RelativePosition>,
    pub polar: Option<PolarDistances>,
}
