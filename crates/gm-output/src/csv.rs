//! CSV sink backend.
//!
//! Creates two files in the configured output directory:
//! - `match_results.csv`
//! - `analysis_sessions.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::{MatchRow, ResultSink, SessionRow, SinkResult};

/// Writes search results to two CSV files.
///
/// Optional metrics serialize as empty fields.
pub struct CsvSink {
    matches:  Writer<File>,
    sessions: Writer<File>,
    finished: bool,
}

impl CsvSink {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> SinkResult<Self> {
        let mut matches = Writer::from_path(dir.join("match_results.csv"))?;
        matches.write_record([
            "query",
            "matched",
            "confidence",
            "distance_km",
            "bearing_deg",
            "north_pole_km",
            "south_pole_km",
        ])?;

        let mut sessions = Writer::from_path(dir.join("analysis_sessions.csv"))?;
        sessions.write_record(["session", "query", "total_matches", "elapsed_ms"])?;

        Ok(Self {
            matches,
            sessions,
            finished: false,
        })
    }
}

fn opt_field(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

impl ResultSink for CsvSink {
    fn record_matches(&mut self, rows: &[MatchRow]) -> SinkResult<()> {
        for row in rows {
            self.matches.write_record(&[
                row.query.to_string(),
                row.matched.to_string(),
                row.confidence.to_string(),
                opt_field(row.distance_km),
                opt_field(row.bearing_deg),
                opt_field(row.north_pole_km),
                opt_field(row.south_pole_km),
            ])?;
        }
        Ok(())
    }

    fn record_session(&mut self, row: &SessionRow) -> SinkResult<()> {
        self.sessions.write_record(&[
            row.session.to_string(),
            row.query.to_string(),
            row.total_matches.to_string(),
            row.elapsed_ms.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> SinkResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.matches.flush()?;
        self.sessions.flush()?;
        Ok(())
    }
}
