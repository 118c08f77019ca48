//! Error types for gm-catalog.

use gm_core::CoreError;
use thiserror::Error;

/// Errors raised while building or listing a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid catalog coordinate: {0}")]
    Coordinate(#[from] CoreError),

    #[error("catalog backend error: {0}")]
    Backend(String),
}

/// Alias for `Result<T, CatalogError>`.
pub type CatalogResult<T> = Result<T, CatalogError>;
