//! The planning facade.

use std::sync::Arc;

use tracing::debug;

use jp_core::{GeoPoint, PlannerConfig, Timestamp};
use jp_network::{NearbyStop, NetworkGraph};
use jp_raptor::{HeadwayProxy, RaptorQuery, RoundPropagator, TravelTimeModel};

use crate::itinerary::Itinerary;
use crate::rank::rank_itineraries;
use crate::reconstruct::{TripEnds, reconstruct};
use crate::{PlanError, PlanResult};

// ── PlanQuery ─────────────────────────────────────────────────────────────────

/// One planning request.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlanQuery {
    pub origin:      GeoPoint,
    pub destination: GeoPoint,
    /// Time the rider leaves the origin coordinate.
    pub departure:   Timestamp,
}

impl PlanQuery {
    pub fn new(origin_lat: f64, origin_lng: f64, dest_lat: f64, dest_lng: f64, departure: Timestamp) -> Self {
        Self {
            origin:      GeoPoint::new(origin_lat, origin_lng),
            destination: GeoPoint::new(dest_lat, dest_lng),
            departure,
        }
    }

    /// Both coordinates must be finite and in range.
    pub fn validate(&self) -> PlanResult<()> {
        if !self.origin.is_valid() {
            return Err(PlanError::InvalidQuery(format!("origin {} is not a valid coordinate", self.origin)));
        }
        if !self.destination.is_valid() {
            return Err(PlanError::InvalidQuery(format!(
                "destination {} is not a valid coordinate",
                self.destination
            )));
        }
        Ok(())
    }
}

// ── JourneyPlanner ────────────────────────────────────────────────────────────

/// Plans journeys over one shared network snapshot.
///
/// The planner holds no per-query state.  Clone the `Arc` to serve
/// concurrent requests from the same snapshot.
///
/// # Type parameter
///
/// `M` is the in-vehicle travel-time model; [`HeadwayProxy`] by default.
pub struct JourneyPlanner<M: TravelTimeModel = HeadwayProxy> {
    graph:  Arc<NetworkGraph>,
    config: PlannerConfig,
    model:  M,
}

impl JourneyPlanner<HeadwayProxy> {
    /// Create a planner using the schedule-free [`HeadwayProxy`] built from
    /// `config`.
    ///
    /// Returns `PlanError::Config` if `config` fails validation.
    pub fn new(graph: Arc<NetworkGraph>, config: PlannerConfig) -> PlanResult<Self> {
        config.validate()?;
        let model = HeadwayProxy::from_config(&config);
        Ok(Self { graph, config, model })
    }
}

impl<M: TravelTimeModel> JourneyPlanner<M> {
    /// Replace the travel-time model, keeping the graph and configuration.
    pub fn with_travel_model<N: TravelTimeModel>(self, model: N) -> JourneyPlanner<N> {
        JourneyPlanner { graph: self.graph, config: self.config, model }
    }

    pub fn graph(&self) -> &NetworkGraph {
        &self.graph
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    pub fn travel_model(&self) -> &M {
        &self.model
    }

    /// Plan up to `config.max_results` itineraries, best first.
    ///
    /// Returns `Ok(vec![])` when the network is empty, when either endpoint
    /// has no stop within `max_walk_radius_m`, or when no candidate stop pair
    /// is connected within `max_rounds` boardings.
    pub fn plan(&self, query: &PlanQuery) -> PlanResult<Vec<Itinerary>> {
        query.validate()?;

        let graph = self.graph.as_ref();
        if graph.is_empty() {
            debug!("empty network, nothing to plan");
            return Ok(Vec::new());
        }

        let radius = self.config.max_walk_radius_m;
        let cap = self.config.max_candidate_stops;
        let from = graph.nearby(query.origin, cap, radius);
        let to = graph.nearby(query.destination, cap, radius);

        debug!(
            origin = %query.origin,
            destination = %query.destination,
            departure = %query.departure,
            origin_stops = from.len(),
            destination_stops = to.len(),
            "planning"
        );

        if from.is_empty() || to.is_empty() {
            return Ok(Vec::new());
        }

        // Origin-nearest first, then destination-nearest: fixes the order
        // ties keep through the stable ranking sort.
        let pairs: Vec<(NearbyStop, NearbyStop)> = from
            .iter()
            .flat_map(|&o| to.iter().map(move |&d| (o, d)))
            .collect();

        let found = self.evaluate(query, &pairs);
        debug!(pairs = pairs.len(), itineraries = found.len(), "stop pairs evaluated");

        Ok(rank_itineraries(found, self.config.max_results))
    }

    /// Propagate and reconstruct every stop pair, keeping pair order.
    fn evaluate(&self, query: &PlanQuery, pairs: &[(NearbyStop, NearbyStop)]) -> Vec<Itinerary> {
        #[cfg(not(feature = "parallel"))]
        {
            pairs
                .iter()
                .filter_map(|&(o, d)| self.plan_pair(query, o, d))
                .collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            // Rayon's `collect` into a `Vec` keeps input order.
            pairs
                .par_iter()
                .filter_map(|&(o, d)| self.plan_pair(query, o, d))
                .collect()
        }
    }

    /// Best itinerary from one origin stop to one destination stop, if any.
    fn plan_pair(&self, query: &PlanQuery, origin_stop: NearbyStop, destination_stop: NearbyStop) -> Option<Itinerary> {
        let ends = TripEnds {
            origin: query.origin,
            destination: query.destination,
            departure: query.departure,
            origin_stop,
            destination_stop,
            walking_speed_mps: self.config.walking_speed_mps,
        };

        let graph = self.graph.as_ref();
        let labels = RoundPropagator::new(graph, &self.model).run(&RaptorQuery {
            origin: origin_stop.stop,
            board_time: ends.board_time(),
            destination: destination_stop.stop,
            max_rounds: self.config.max_rounds,
        });

        reconstruct(self.config.reconstruction, graph, &labels, &ends)
    }
}
