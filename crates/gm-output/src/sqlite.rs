//! SQLite sink backend (feature `sqlite`).
//!
//! Creates a single `results.db` file in the configured output directory with
//! two tables: `match_results` and `analysis_sessions`.

use std::path::Path;

use rusqlite::Connection;

use crate::{MatchRow, ResultSink, SessionRow, SinkResult};

/// Writes search results to an SQLite database.
///
/// Optional metrics are stored as NULL.
pub struct SqliteSink {
    conn:     Connection,
    finished: bool,
}

impl SqliteSink {
    /// Open (or create) `results.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> SinkResult<Self> {
        let conn = Connection::open(dir.join("results.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS match_results (
                 query         INTEGER NOT NULL,
                 matched       INTEGER NOT NULL,
                 confidence    REAL    NOT NULL,
                 distance_km   REAL,
                 bearing_deg   REAL,
                 north_pole_km REAL,
                 south_pole_km REAL
             );
             CREATE TABLE IF NOT EXISTS analysis_sessions (
                 session       INTEGER PRIMARY KEY,
                 query         INTEGER NOT NULL,
                 total_matches INTEGER NOT NULL,
                 elapsed_ms    INTEGER NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl ResultSink for SqliteSink {
    fn record_matches(&mut self, rows: &[MatchRow]) -> SinkResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO match_results \
                 (query, matched, confidence, distance_km, bearing_deg, \
                  north_pole_km, south_pole_km) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.query,
                    row.matched,
                    row.confidence,
                    row.distance_km,
                    row.bearing_deg,
                    row.north_pole_km,
                    row.south_pole_km,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn record_session(&mut self, row: &SessionRow) -> SinkResult<()> {
        self.conn.execute(
            "INSERT INTO analysis_sessions (session, query, total_matches, elapsed_ms) \
             VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![row.session, row.query, row.total_matches, row.elapsed_ms],
        )?;
        Ok(())
    }

    fn finish(&mut self) -> SinkResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
