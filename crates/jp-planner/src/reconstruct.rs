//! Itinerary reconstruction from round labels.
//!
//! Two strategies, selected by [`Reconstruction`]:
//!
//! | Function                   | Rides emitted                                  |
//! |----------------------------|------------------------------------------------|
//! | [`reconstruct_last_leg`]   | Only the final boarding/alighting pair         |
//! | [`reconstruct_full_chain`] | One per boarding, following `RideLink`s back    |
//!
//! With `FullChain` every segment starts exactly where and when the previous
//! one ended.  `LastLeg` keeps that property only for direct rides: when the
//! winning label needed a transfer, its single ride starts at the last board
//! stop, not at the origin stop the first walk led to.

use tracing::warn;

use jp_core::{GeoPoint, Reconstruction, StopId, Timestamp, walk_secs_at};
use jp_network::{NearbyStop, NetworkGraph};
use jp_raptor::{ArrivalLabel, RideLink, RoundLabels};

use crate::itinerary::{Itinerary, Place, Segment, SegmentKind};

/// The walking context around one origin/destination stop pair.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TripEnds {
    /// Query origin coordinate.
    pub origin:           GeoPoint,
    /// Query destination coordinate.
    pub destination:      GeoPoint,
    /// Time the rider leaves `origin`.
    pub departure:        Timestamp,
    pub origin_stop:      NearbyStop,
    pub destination_stop: NearbyStop,
    pub walking_speed_mps: f64,
}

impl TripEnds {
    /// Time the rider is standing at the origin stop.
    pub fn board_time(&self) -> Timestamp {
        self.departure.offset(walk_secs_at(self.origin_stop.distance_m, self.walking_speed_mps))
    }
}

/// Reconstruct with the given strategy.
pub fn reconstruct(
    mode:   Reconstruction,
    graph:  &NetworkGraph,
    labels: &RoundLabels,
    ends:   &TripEnds,
) -> Option<Itinerary> {
    match mode {
        Reconstruction::LastLeg => reconstruct_last_leg(graph, labels, ends),
        Reconstruction::FullChain => reconstruct_full_chain(graph, labels, ends),
    }
}

/// Walk, the winning label's own ride (if any), walk.
///
/// `None` when the destination stop was never reached.
pub fn reconstruct_last_leg(
    graph:  &NetworkGraph,
    labels: &RoundLabels,
    ends:   &TripEnds,
) -> Option<Itinerary> {
    let winner = labels.winner()?;

    let mut segments = Vec::with_capacity(3);
    segments.push(walk_in(graph, ends));
    if let Some(link) = winner.ride {
        segments.push(ride(graph, link, labels.destination(), winner.arrival));
    }
    segments.push(walk_out(ends, winner.arrival));

    Some(Itinerary::new(segments, winner.transfers()))
}

/// Walk, one ride per boarding, walk.
///
/// Each ride's `RideLink` names the stop the rider boarded at; that stop's
/// label in the ride's own round is the previous ride (or the origin seed).
/// `None` when the destination stop was never reached or the back-pointer
/// chain does not lead back to the origin stop.
pub fn reconstruct_full_chain(
    graph:  &NetworkGraph,
    labels: &RoundLabels,
    ends:   &TripEnds,
) -> Option<Itinerary> {
    let winner = labels.winner()?;

    let mut rides = Vec::new();
    let mut label: &ArrivalLabel = winner;
    let mut at = labels.destination();

    // Each step moves to a strictly earlier round, so the chain is never
    // longer than the number of rounds.
    for _ in 0..labels.round_count() {
        let Some(link) = label.ride else { break };
        rides.push(ride(graph, link, at, label.arrival));
        at = link.board_stop;
        match labels.label(label.round, link.board_stop) {
            Some(prev) => label = prev,
            None => {
                warn!(stop = %link.board_stop, round = label.round, "broken ride chain");
                return None;
            }
        }
    }

    if label.is_ride() || at != labels.origin() {
        warn!(origin = %labels.origin(), reached = %at, "ride chain does not end at the origin stop");
        return None;
    }

    rides.reverse();

    let mut segments = Vec::with_capacity(rides.len() + 2);
    segments.push(walk_in(graph, ends));
    segments.extend(rides);
    segments.push(walk_out(ends, winner.arrival));

    Some(Itinerary::new(segments, winner.transfers()))
}

// ── Segment builders ──────────────────────────────────────────────────────────

fn walk_in(graph: &NetworkGraph, ends: &TripEnds) -> Segment {
    let stop = ends.origin_stop;
    Segment {
        kind:        SegmentKind::Walk { distance_m: stop.distance_m },
        from:        Place::Origin,
        to:          Place::Stop(stop.stop),
        start:       ends.departure,
        end:         ends.board_time(),
        instruction: format!("Walk {} m to {}", whole_metres(stop.distance_m), graph.stop(stop.stop).name),
    }
}

fn walk_out(ends: &TripEnds, arrival: Timestamp) -> Segment {
    let stop = ends.destination_stop;
    Segment {
        kind:        SegmentKind::Walk { distance_m: stop.distance_m },
        from:        Place::Stop(stop.stop),
        to:          Place::Destination,
        start:       arrival,
        end:         arrival.offset(walk_secs_at(stop.distance_m, ends.walking_speed_mps)),
        instruction: format!("Walk {} m to your destination", whole_metres(stop.distance_m)),
    }
}

fn ride(graph: &NetworkGraph, link: RideLink, alight: StopId, arrival: Timestamp) -> Segment {
    Segment {
        kind:        SegmentKind::Ride { route: link.route },
        from:        Place::Stop(link.board_stop),
        to:          Place::Stop(alight),
        start:       link.board_time,
        end:         arrival,
        instruction: format!(
            "Take {} from {} to {}",
            graph.route(link.route).name,
            graph.stop(link.board_stop).name,
            graph.stop(alight).name,
        ),
    }
}

fn whole_metres(distance_m: f64) -> i64 {
    distance_m.round() as i64
}
