//! The `CatalogProvider` trait — the storage seam for candidate listings.

use crate::{Candidate, CatalogResult};

/// Pluggable source of the reference catalog.
///
/// `list` returns a snapshot: the ranking engine iterates the returned `Vec`
/// without coordination, so providers backed by mutable storage must copy out
/// a consistent view.  The caller owns catalog consistency for the duration
/// of a ranking call.
pub trait CatalogProvider {
    /// All candidates currently in the catalog.
    fn list(&self) -> CatalogResult<Vec<Candidate>>;
}
