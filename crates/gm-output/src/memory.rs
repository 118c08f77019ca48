//! In-memory sink for tests and in-process consumers.

use crate::{MatchRow, ResultSink, SessionRow, SinkResult};

/// A [`ResultSink`] that appends rows to vectors.
#[derive(Debug, Default)]
pub struct MemorySink {
    matches:  Vec<MatchRow>,
    sessions: Vec<SessionRow>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn matches(&self) -> &[MatchRow] {
        &self.matches
    }

    pub fn sessions(&self) -> &[SessionRow] {
        &self.sessions
    }
}

impl ResultSink for MemorySink {
    fn record_matches(&mut self, rows: &[MatchRow]) -> SinkResult<()> {
        self.matches.extend_from_slice(rows);
        Ok(())
    }

    fn record_session(&mut self, row: &SessionRow) -> SinkResult<()> {
        self.sessions.push(*row);
        Ok(())
    }

    fn finish(&mut self) -> SinkResult<()> {
        Ok(())
    }
}
