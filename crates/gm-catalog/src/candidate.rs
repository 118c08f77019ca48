//! The candidate record consumed by the ranking engine.

use gm_core::{GeoPoint, ImageId};

/// One reference image in the catalog.
///
/// A candidate without a coordinate still participates in similarity ranking;
/// it simply receives no geospatial annotations.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Candidate {
    pub id: ImageId,
    pub point: Option<GeoPoint>,
}

impl Candidate {
    #[inline]
    pub fn new(id: ImageId, point: Option<GeoPoint>) -> Self {
        Self { id, point }
    }
}
