//! The `ResultSink` trait implemented by all persistence backends.

use gm_core::{ImageId, SessionId};
use gm_rank::MatchResult;

use crate::{MatchRow, SessionRow, SinkResult};

/// Trait implemented by the in-memory, CSV, and SQLite sinks.
pub trait ResultSink {
    /// Persist a batch of match rows.
    fn record_matches(&mut self, rows: &[MatchRow]) -> SinkResult<()>;

    /// Persist one session summary row.
    fn record_session(&mut self, row: &SessionRow) -> SinkResult<()>;

    /// Flush and close the backing storage.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> SinkResult<()>;
}

/// Record one completed search: every match row plus the session summary.
pub fn record_search<S: ResultSink>(
    sink: &mut S,
    session: SessionId,
    query: ImageId,
    matches: &[MatchResult],
    elapsed_ms: u64,
) -> SinkResult<()> {
    let rows: Vec<MatchRow> = matches
        .iter()
        .map(|m| MatchRow::from_match(query, m))
        .collect();
    sink.record_matches(&rows)?;
    sink.record_session(&SessionRow::new(session, query, matches.len(), elapsed_ms))
}
