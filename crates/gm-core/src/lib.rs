//! `gm-core` — foundational types for the geomatch engine.
//!
//! This crate is a dependency of every other `gm-*` crate.  It intentionally
//! has no `gm-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                              |
//! |------------|-------------------------------------------------------|
//! | [`geo`]    | `GeoPoint`, haversine distance, bearing, polar pairs  |
//! | [`format`] | coordinate and compass-bearing rendering              |
//! | [`ids`]    | `ImageId`, `SessionId`                                |
//! | [`error`]  | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod error;
pub mod format;
pub mod geo;
pub mod ids;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use format::{compass_point, format_bearing};
pub use geo::{EARTH_RADIUS_KM, GeoPoint, PolarDistances};
pub use ids::{ImageId, SessionId};
