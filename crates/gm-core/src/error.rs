//! Core error type.
//!
//! Sub-crates define their own error enums and either convert `CoreError`
//! via `From` impls or wrap it as one variant, whichever keeps error sites
//! clean.

use thiserror::Error;

/// Errors raised when constructing core values from unvalidated input.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("latitude {0} outside [-90, 90]")]
    InvalidLatitude(f64),

    #[error("longitude {0} outside [-180, 180]")]
    InvalidLongitude(f64),
}

/// Shorthand result type for `gm-core`.
pub type CoreResult<T> = Result<T, CoreError>;
