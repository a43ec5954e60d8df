//! `jp-core`: foundational types for the journey-planning engine.
//!
//! This crate is a dependency of every other `jp-*` crate.  It has no `jp-*`
//! dependencies and minimal external ones (only `thiserror`, plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`ids`]     | `StopId`, `RouteId`                                       |
//! | [`geo`]     | `GeoPoint`, haversine distance, walking-time conversion   |
//! | [`time`]    | `Timestamp`                                               |
//! | [`config`]  | `PlannerConfig`, `Reconstruction`                         |
//! | [`error`]   | `JpError`, `JpResult`                                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{PlannerConfig, Reconstruction};
pub use error::{JpError, JpResult};
pub use geo::{GeoPoint, WALKING_SPEED_MPS, walk_secs, walk_secs_at};
pub use ids::{RouteId, StopId};
pub use time::Timestamp;
