//! Human-readable rendering of coordinates and bearings.
//!
//! Pure presentation: nothing here alters the numeric values used for
//! ranking.  Two rounding rules apply and are fixed here:
//!
//! - coordinate digits use the standard formatter rounding (ties to even);
//! - the compass index uses `f64::round` (ties away from zero), so a bearing
//!   of exactly 11.25° renders as NNE.

use std::fmt;

use crate::geo::GeoPoint;

/// The 16-point compass rose, clockwise from north in 22.5° steps.
const COMPASS_POINTS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE",
    "S", "SSW", "SW", "WSW", "W", "WNW", "NW", "NNW",
];

/// Nearest compass point for a bearing in degrees.
///
/// Bearings outside `[0, 360)` are wrapped first, so the function is total.
pub fn compass_point(bearing_deg: f64) -> &'static str {
    let index = (bearing_deg.rem_euclid(360.0) / 22.5).round() as usize % 16;
    COMPASS_POINTS[index]
}

/// Render a bearing as `"{deg:.1}° ({compass})"`, e.g. `"45.0° (NE)"`.
pub fn format_bearing(bearing_deg: f64) -> String {
    format!("{bearing_deg:.1}° ({})", compass_point(bearing_deg))
}

impl fmt::Display for GeoPoint {
    /// `"38.8719°N, 77.0563°W"` — magnitude to four decimals plus a
    /// hemisphere letter.  The equator and prime meridian render as N and E.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lat_dir = if self.lat() >= 0.0 { 'N' } else { 'S' };
        let lon_dir = if self.lon() >= 0.0 { 'E' } else { 'W' };
        write!(
            f,
            "{:.4}°{}, {:.4}°{}",
            self.lat().abs(),
            lat_dir,
            self.lon().abs(),
            lon_dir
        )
    }
}
