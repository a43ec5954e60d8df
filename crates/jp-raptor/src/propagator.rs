//! The round-based relaxation loop.

use tracing::{debug, trace};

use jp_core::{RouteId, StopId, Timestamp};
use jp_network::NetworkGraph;

use crate::label::{ArrivalLabel, RideLink, RoundLabels};
use crate::travel::TravelTimeModel;

/// One origin/destination stop pair to propagate.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RaptorQuery {
    pub origin: StopId,
    /// Time the rider is standing at `origin` (departure + walk).
    pub board_time: Timestamp,
    pub destination: StopId,
    /// Upper bound on rounds, i.e. vehicle boardings.
    pub max_rounds: usize,
}

/// Runs [`RaptorQuery`]s over a borrowed graph and travel-time model.
///
/// Holds no per-query state; a single instance can be shared by reference
/// across threads.
pub struct RoundPropagator<'a, M: TravelTimeModel + ?Sized> {
    graph: &'a NetworkGraph,
    model: &'a M,
}

impl<'a, M: TravelTimeModel + ?Sized> RoundPropagator<'a, M> {
    pub fn new(graph: &'a NetworkGraph, model: &'a M) -> Self {
        Self { graph, model }
    }

    /// Propagate arrival labels from `query.origin` for up to
    /// `query.max_rounds` rounds.
    ///
    /// Always returns at least round 0.  Check
    /// [`RoundLabels::winner`] for the destination result.
    pub fn run(&self, query: &RaptorQuery) -> RoundLabels {
        let graph = self.graph;
        let stop_count = graph.stop_count();
        debug_assert!(query.origin.index() < stop_count);

        let mut seed = vec![None; stop_count];
        seed[query.origin.index()] = Some(ArrivalLabel::seed(query.board_time));
        let mut rounds: Vec<Vec<Option<ArrivalLabel>>> = vec![seed];

        // Stops whose label changed in the previous round.  Only routes
        // through them can produce anything new.
        let mut marked: Vec<StopId> = vec![query.origin];
        let mut route_queued = vec![false; graph.route_count()];
        let mut stop_improved = vec![false; stop_count];

        for r in 0..query.max_rounds {
            // ── Collect marked routes ─────────────────────────────────────
            let mut queue: Vec<RouteId> = Vec::new();
            for &stop in &marked {
                for visit in graph.routes_serving(stop) {
                    let slot = &mut route_queued[visit.route.index()];
                    if !*slot {
                        *slot = true;
                        queue.push(visit.route);
                    }
                }
            }
            // Ascending RouteId keeps relaxation order independent of the
            // order stops were marked in.
            queue.sort_unstable();

            let prev = &rounds[r];
            let mut next = prev.clone();
            let mut improved: Vec<StopId> = Vec::new();

            // ── Scan each route once ──────────────────────────────────────
            for &route in &queue {
                route_queued[route.index()] = false;
                self.scan_route(route, r, prev, &mut next, &mut improved, &mut stop_improved);
            }

            trace!(
                round = r,
                routes = queue.len(),
                improved = improved.len(),
                "round complete"
            );

            if improved.is_empty() {
                debug!(round = r, "fixed point reached");
                break;
            }

            for s in &improved {
                stop_improved[s.index()] = false;
            }
            rounds.push(next);
            marked = improved;
        }

        let labels = RoundLabels {
            origin: query.origin,
            destination: query.destination,
            rounds,
        };

        debug!(
            origin = %query.origin,
            destination = %query.destination,
            rounds = labels.round_count(),
            reached = labels.winner().is_some(),
            "propagation finished"
        );

        labels
    }

    /// Scan `route` left to right, boarding from `prev` and relaxing into
    /// `next`.
    fn scan_route(
        &self,
        route:         RouteId,
        round:         usize,
        prev:          &[Option<ArrivalLabel>],
        next:          &mut [Option<ArrivalLabel>],
        improved:      &mut Vec<StopId>,
        stop_improved: &mut [bool],
    ) {
        // (position, stop, time at stop) of the best boarding seen so far.
        let mut boarding: Option<(usize, StopId, Timestamp)> = None;

        for (pos, &stop) in self.graph.route_stops(route).iter().enumerate() {
            // ── Relax: only positions strictly after the board stop ───────
            if let Some((board_pos, board_stop, board_time)) = boarding {
                let candidate =
                    self.model
                        .ride_arrival(self.graph, route, board_pos, pos, board_time);

                if let Some(arrival) = candidate {
                    let slot = &mut next[stop.index()];
                    if slot.is_none_or(|l| arrival < l.arrival) {
                        *slot = Some(ArrivalLabel {
                            arrival,
                            round,
                            ride: Some(RideLink { route, board_stop, board_time }),
                        });
                        if !stop_improved[stop.index()] {
                            stop_improved[stop.index()] = true;
                            improved.push(stop);
                        }
                    }
                }
            }

            // ── Board: an earlier arrival here beats the current boarding ─
            if let Some(label) = &prev[stop.index()] {
                if boarding.is_none_or(|(_, _, t)| label.arrival < t) {
                    boarding = Some((pos, stop, label.arrival));
                }
            }
        }
    }
}
