//! Seed data: the eight reference landmarks shipped with the engine.

use gm_core::GeoPoint;

use crate::{CatalogResult, MemoryCatalog};

const LANDMARKS: [(&str, f64, f64); 8] = [
    ("Pentagon",           38.8719,  -77.0563),
    ("Mount Everest",      27.9881,   86.9250),
    ("Dubai Port",         25.2048,   55.2708),
    ("Golden Gate Bridge", 37.8199, -122.4783),
    ("Taj Mahal",          27.1751,   78.0421),
    ("Sydney Harbor",     -33.8568,  151.2153),
    ("Pyramids of Giza",   29.9792,   31.1342),
    ("Big Ben",            51.5007,   -0.1246),
];

/// Build an in-memory catalog of the eight reference landmarks.
pub fn sample_catalog() -> CatalogResult<MemoryCatalog> {
    let mut catalog = MemoryCatalog::new();
    for &(name, lat, lon) in &LANDMARKS {
        let point = GeoPoint::new(lat, lon)?;
        catalog.insert(name, Some(point));
    }
    Ok(catalog)
}
