//! Geographic coordinate type and great-circle math.
//!
//! # Design
//!
//! `GeoPoint` stores double-precision WGS-84 latitude/longitude.  Range
//! validation happens once, at construction; every metric function after that
//! is a pure total function with no error path.
//!
//! Distances use the haversine formula on a spherical Earth of radius
//! 6371 km.  Against the real geoid that is accurate to ~0.5 %, which is
//! plenty for ranking annotations; switch to Vincenty on an ellipsoid if
//! sub-kilometre fidelity is ever required.

use crate::error::{CoreError, CoreResult};

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A validated WGS-84 geographic coordinate.
///
/// Latitude is in `[-90, 90]`, longitude in `[-180, 180]`; [`GeoPoint::new`]
/// rejects anything else (including NaN), so holders of a `GeoPoint` never
/// need to re-check.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    lat: f64,
    lon: f64,
}

/// Great-circle distances from one point to both geographic poles.
///
/// The pole longitude is irrelevant (all meridians converge), so both
/// reference points fix it at 0°.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PolarDistances {
    pub north_km: f64,
    pub south_km: f64,
}

impl GeoPoint {
    /// The geographic North Pole, (90°N, 0°).
    pub const NORTH_POLE: GeoPoint = GeoPoint { lat: 90.0, lon: 0.0 };

    /// The geographic South Pole, (90°S, 0°).
    pub const SOUTH_POLE: GeoPoint = GeoPoint { lat: -90.0, lon: 0.0 };

    /// Construct a point, validating both coordinates.
    pub fn new(lat: f64, lon: f64) -> CoreResult<Self> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(CoreError::InvalidLatitude(lat));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(CoreError::InvalidLongitude(lon));
        }
        Ok(Self { lat, lon })
    }

    /// Latitude in degrees, `[-90, 90]`.
    #[inline]
    pub fn lat(self) -> f64 {
        self.lat
    }

    /// Longitude in degrees, `[-180, 180]`.
    #[inline]
    pub fn lon(self) -> f64 {
        self.lon
    }

    /// Haversine great-circle distance in kilometres.
    ///
    /// Symmetric, and zero for identical points.
    pub fn distance_km(self, other: GeoPoint) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_KM * c
    }

    /// Initial great-circle bearing from `self` toward `other`, in degrees
    /// within `[0, 360)` (0 = north, 90 = east).
    ///
    /// Not symmetric: the return bearing differs from the forward one by
    /// roughly 180°, adjusted for the curvature of the path.  For
    /// `self == other` the formula collapses to `atan2(0, 0)`, which is 0 —
    /// returned as-is rather than specially handled.
    pub fn initial_bearing_deg(self, other: GeoPoint) -> f64 {
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let y = d_lon.sin() * lat2.cos();
        let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();

        let deg = y.atan2(x).to_degrees();
        // rem_euclid of a tiny negative azimuth can round to exactly 360.0;
        // fold that edge back so the half-open interval holds.
        let wrapped = deg.rem_euclid(360.0);
        if wrapped >= 360.0 { 0.0 } else { wrapped }
    }

    /// Distances from this point to the North and South Poles.
    pub fn polar_distances(self) -> PolarDistances {
        PolarDistances {
            north_km: self.distance_km(GeoPoint::NORTH_POLE),
            south_km: self.distance_km(GeoPoint::SOUTH_POLE),
        }
    }
}
