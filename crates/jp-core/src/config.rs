//! Planner configuration.
//!
//! Every tunable the engine uses lives here and is passed explicitly into the
//! planner.  Nothing in the `jp-*` crates reads a module-level constant at
//! query time, so tests can vary any of these deterministically.

use crate::{JpError, JpResult, geo::WALKING_SPEED_MPS};

/// How the winning arrival label is turned into rider-facing segments.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Reconstruction {
    /// Only the final boarding/alighting pair: walk, one ride, walk.
    LastLeg,
    /// Follow back-pointers through every round: one ride per boarding.
    #[default]
    FullChain,
}

/// Tunables for one journey planner instance.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlannerConfig {
    /// Walking speed in m/s.  Default: 1.4.
    pub walking_speed_mps: f64,

    /// Headway-proxy in-vehicle time per stop hop, seconds.  Default: 120.
    pub secs_per_hop: u32,

    /// Headway-proxy wait charged once per boarding, seconds.  Default: 300.
    pub average_wait_secs: u32,

    /// Maximum number of propagation rounds (vehicle boardings).  Default: 3.
    pub max_rounds: usize,

    /// Radius around each endpoint searched for candidate stops.  Default: 1 km.
    pub max_walk_radius_m: f64,

    /// Candidate stops kept per endpoint.  Default: 5.
    pub max_candidate_stops: usize,

    /// Itineraries returned per query.  Default: 3.
    pub max_results: usize,

    /// Segment reconstruction strategy.  Default: [`Reconstruction::FullChain`].
    pub reconstruction: Reconstruction,
}

impl PlannerConfig {
    /// Check every field is usable.  Called by the planner on construction.
    pub fn validate(&self) -> JpResult<()> {
        if !(self.walking_speed_mps.is_finite() && self.walking_speed_mps > 0.0) {
            return Err(JpError::Config(format!(
                "walking_speed_mps must be positive, got {}",
                self.walking_speed_mps
            )));
        }
        if !(self.max_walk_radius_m.is_finite() && self.max_walk_radius_m >= 0.0) {
            return Err(JpError::Config(format!(
                "max_walk_radius_m must be non-negative, got {}",
                self.max_walk_radius_m
            )));
        }
        if self.max_rounds == 0 {
            return Err(JpError::Config("max_rounds must be at least 1".into()));
        }
        if self.max_candidate_stops == 0 {
            return Err(JpError::Config("max_candidate_stops must be at least 1".into()));
        }
        if self.max_results == 0 {
            return Err(JpError::Config("max_results must be at least 1".into()));
        }
        Ok(())
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            walking_speed_mps:   WALKING_SPEED_MPS,
            secs_per_hop:        120,
            average_wait_secs:   300,
            max_rounds:          3,
            max_walk_radius_m:   1_000.0,
            max_candidate_stops: 5,
            max_results:         3,
            reconstruction:      Reconstruction::FullChain,
        }
    }
}
