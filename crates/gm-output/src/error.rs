//! Error types for gm-output.

use thiserror::Error;

/// Errors that can occur while persisting search results.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[cfg(feature = "sqlite")]
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Alias for `Result<T, SinkError>`.
pub type SinkResult<T> = Result<T, SinkError>;
