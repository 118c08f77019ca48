//! `gm-catalog` — candidate records and catalog providers.
//!
//! | Module        | Contents                                            |
//! |---------------|-----------------------------------------------------|
//! | [`candidate`] | `Candidate` — one reference image                   |
//! | [`provider`]  | `CatalogProvider` trait (storage seam)              |
//! | [`memory`]    | `MemoryCatalog` — in-process catalog                |
//! | [`landmarks`] | seed data: the eight shipped reference landmarks    |
//! | [`error`]     | `CatalogError`, `CatalogResult<T>`                  |

pub mod candidate;
pub mod error;
pub mod landmarks;
pub mod memory;
pub mod provider;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use candidate::Candidate;
pub use error::{CatalogError, CatalogResult};
pub use landmarks::sample_catalog;
pub use memory::MemoryCatalog;
pub use provider::CatalogProvider;
