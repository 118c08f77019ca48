//! `gm-output` — persistence sinks for search results.
//!
//! Two file-backed backends are provided, one behind a Cargo feature:
//!
//! | Feature  | Backend | Storage created                              |
//! |----------|---------|----------------------------------------------|
//! | *(none)* | CSV     | `match_results.csv`, `analysis_sessions.csv` |
//! | `sqlite` | SQLite  | `results.db`                                 |
//!
//! [`MemorySink`] is always available for tests and in-process consumers.
//! All backends implement [`ResultSink`]; [`record_search`] flattens a ranked
//! match list into rows and records it together with the session summary.
//! The ranker itself never touches a sink — recording is the caller's move.
//!
//! # Usage
//!
//! ```rust,ignore
//! use gm_output::{CsvSink, ResultSink, record_search};
//!
//! let mut sink = CsvSink::new(Path::new("./output"))?;
//! record_search(&mut sink, session, query, &matches, elapsed_ms)?;
//! sink.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod memory;
pub mod row;
pub mod sink;

#[cfg(feature = "sqlite")]
pub mod sqlite;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use csv::CsvSink;
pub use error::{SinkError, SinkResult};
pub use memory::MemorySink;
pub use row::{MatchRow, SessionRow};
pub use sink::{ResultSink, record_search};

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteSink;
