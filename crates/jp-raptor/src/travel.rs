//! Travel-time models.
//!
//! # Pluggability
//!
//! The propagation loop asks a [`TravelTimeModel`] when a rider boarding at
//! one position of a route reaches a later position.  The default
//! [`HeadwayProxy`] is schedule-free; a timetable-backed model can replace it
//! without touching [`RoundPropagator`](crate::RoundPropagator).

use jp_core::{PlannerConfig, RouteId, Timestamp};
use jp_network::NetworkGraph;

/// Pluggable in-vehicle travel-time estimate.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so one model can be shared across
/// worker threads evaluating independent stop pairs.
pub trait TravelTimeModel: Send + Sync {
    /// Arrival time at `alight_pos` for a rider who is at `board_pos` on
    /// `route` at `board_time`.  Any wait for the vehicle is included.
    ///
    /// `board_pos < alight_pos` always holds.  Return `None` when no vehicle
    /// can carry the rider (e.g. no later trip in a timetable).
    fn ride_arrival(
        &self,
        graph:      &NetworkGraph,
        route:      RouteId,
        board_pos:  usize,
        alight_pos: usize,
        board_time: Timestamp,
    ) -> Option<Timestamp>;
}

/// Schedule-free estimate: one average wait per boarding plus a fixed time
/// per stop hop.
///
/// ```text
/// arrival = board_time + average_wait_secs + secs_per_hop × (alight_pos − board_pos)
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct HeadwayProxy {
    pub secs_per_hop:      u32,
    pub average_wait_secs: u32,
}

impl HeadwayProxy {
    pub fn new(secs_per_hop: u32, average_wait_secs: u32) -> Self {
        Self { secs_per_hop, average_wait_secs }
    }

    pub fn from_config(config: &PlannerConfig) -> Self {
        Self::new(config.secs_per_hop, config.average_wait_secs)
    }

    /// Ride duration in seconds for `hops` stop-to-stop hops.
    #[inline]
    pub fn ride_secs(&self, hops: usize) -> u32 {
        let hops = u32::try_from(hops).unwrap_or(u32::MAX);
        self.average_wait_secs
            .saturating_add(self.secs_per_hop.saturating_mul(hops))
    }
}

impl Default for HeadwayProxy {
    fn default() -> Self {
        Self::new(120, 300)
    }
}

impl TravelTimeModel for HeadwayProxy {
    fn ride_arrival(
        &self,
        _graph:     &NetworkGraph,
        _route:     RouteId,
        board_pos:  usize,
        alight_pos: usize,
        board_time: Timestamp,
    ) -> Option<Timestamp> {
        debug_assert!(board_pos < alight_pos);
        Some(board_time.offset(self.ride_secs(alight_pos - board_pos)))
    }
}
