//! In-process catalog storage.

use gm_core::{GeoPoint, ImageId};

use crate::{Candidate, CatalogProvider, CatalogResult};

/// A catalog held in parallel vectors; the `ImageId` is the index into both.
///
/// Display names are carried for rendering only and never influence ranking.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    names:  Vec<String>,
    points: Vec<Option<GeoPoint>>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry and return its assigned id.
    pub fn insert(&mut self, name: impl Into<String>, point: Option<GeoPoint>) -> ImageId {
        let id = ImageId(self.names.len() as u32);
        self.names.push(name.into());
        self.points.push(point);
        id
    }

    /// Display name for an entry, if the id is known.
    pub fn name(&self, id: ImageId) -> Option<&str> {
        self.names.get(id.index()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl CatalogProvider for MemoryCatalog {
    fn list(&self) -> CatalogResult<Vec<Candidate>> {
        Ok(self
            .points
            .iter()
            .enumerate()
            .map(|(i, &point)| Candidate::new(ImageId(i as u32), point))
            .collect())
    }
}
