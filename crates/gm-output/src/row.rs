//! Plain data row types written by result sinks.

use gm_core::{ImageId, SessionId};
use gm_rank::MatchResult;

/// One persisted match, flattened for tabular storage.
///
/// Optional metrics stay optional end to end: an empty CSV field, an SQL
/// NULL.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchRow {
    pub query:         u32,
    pub matched:       u32,
    pub confidence:    f64,
    pub distance_km:   Option<f64>,
    pub bearing_deg:   Option<f64>,
    pub north_pole_km: Option<f64>,
    pub south_pole_km: Option<f64>,
}

impl MatchRow {
    /// Flatten one ranked match for persistence.
    pub fn from_match(query: ImageId, result: &MatchResult) -> Self {
        Self {
            query:         query.0,
            matched:       result.id.0,
            confidence:    result.confidence,
            distance_km:   result.relative.map(|r| r.distance_km),
            bearing_deg:   result.relative.map(|r| r.bearing_deg),
            north_pole_km: result.polar.map(|p| p.north_km),
            south_pole_km: result.polar.map(|p| p.south_km),
        }
    }
}

/// Summary of one completed analysis session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionRow {
    pub session:       u32,
    pub query:         u32,
    pub total_matches: u64,
    /// Wall-clock ranking time, measured by the caller.
    pub elapsed_ms:    u64,
}

impl SessionRow {
    pub fn new(
        session: SessionId,
        query: ImageId,
        total_matches: usize,
        elapsed_ms: u64,
    ) -> Self {
        Self {
            session: session.0,
            query: query.0,
            total_matches: total_matches as u64,
            elapsed_ms,
        }
    }
}
