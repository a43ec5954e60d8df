//! Transit network graph and builder.
//!
//! # Data layout
//!
//! Stops and routes live in arenas indexed by [`StopId`] and [`RouteId`].
//! Both adjacency directions use **Compressed Sparse Row (CSR)** format:
//!
//! ```text
//! stops of route r    = route_stops[ route_stop_start[r] .. route_stop_start[r+1] ]
//! routes serving stop = stop_visits[ stop_visit_start[s] .. stop_visit_start[s+1] ]
//! ```
//!
//! A [`RouteVisit`] carries the stop's position on the route, so the round
//! scan never has to search a stop list.
//!
//! The graph is immutable after [`NetworkGraphBuilder::build`] and is
//! `Send + Sync`; one instance can serve any number of concurrent queries.

use rstar::RTree;
use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use jp_core::{RouteId, StopId};

use crate::model::{Route, Stop};
use crate::nearby::StopEntry;
use crate::{NetworkError, NetworkResult};

// ── Route metadata ────────────────────────────────────────────────────────────

/// Display data for a route that survived construction.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteEntry {
    pub id: String,
    pub name: String,
    pub color: Option<String>,
}

/// One appearance of a stop on a route.
///
/// A looping route visits the same stop more than once and therefore
/// contributes one `RouteVisit` per appearance.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RouteVisit {
    pub route: RouteId,
    /// Zero-based position of the stop within the route's stop list.
    pub pos: u32,
}

// ── NetworkGraph ──────────────────────────────────────────────────────────────

/// Read-only view over one network snapshot.
///
/// Do not construct directly; use [`NetworkGraphBuilder`] or
/// [`NetworkGraph::from_snapshot`].
pub struct NetworkGraph {
    // ── Stop arena ────────────────────────────────────────────────────────
    stops: Vec<Stop>,
    stop_index: FxHashMap<String, StopId>,

    // ── Route arena ───────────────────────────────────────────────────────
    routes: Vec<RouteEntry>,
    route_index: FxHashMap<String, RouteId>,

    // ── CSR route → stops ─────────────────────────────────────────────────
    route_stop_start: Vec<u32>,
    route_stops: Vec<StopId>,

    // ── CSR stop → routes ─────────────────────────────────────────────────
    stop_visit_start: Vec<u32>,
    stop_visits: Vec<RouteVisit>,

    // ── Spatial index over stops with valid coordinates ───────────────────
    pub(crate) spatial_idx: RTree<StopEntry>,
}

impl NetworkGraph {
    /// Construct an empty graph.  Every query against it finds nothing.
    pub fn empty() -> Self {
        NetworkGraphBuilder::new().build()
    }

    /// Build a graph straight from the data layer's collections.
    pub fn from_snapshot<S, R>(stops: S, routes: R) -> Self
    where
        S: IntoIterator<Item = Stop>,
        R: IntoIterator<Item = Route>,
    {
        let mut b = NetworkGraphBuilder::new();
        stops.into_iter().for_each(|s| b.add_stop(s));
        routes.into_iter().for_each(|r| b.add_route(r));
        b.build()
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    /// `true` if the graph has no stops or no usable routes.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty() || self.routes.is_empty()
    }

    // ── Arena access ──────────────────────────────────────────────────────

    #[inline]
    pub fn stop(&self, id: StopId) -> &Stop {
        &self.stops[id.index()]
    }

    #[inline]
    pub fn route(&self, id: RouteId) -> &RouteEntry {
        &self.routes[id.index()]
    }

    /// Iterate `(StopId, &Stop)` in arena order.
    pub fn stops(&self) -> impl Iterator<Item = (StopId, &Stop)> + '_ {
        self.stops.iter().enumerate().map(|(i, s)| (StopId(i as u32), s))
    }

    /// Iterate every `RouteId` in arena order.
    pub fn route_ids(&self) -> impl Iterator<Item = RouteId> + '_ {
        (0..self.routes.len()).map(|i| RouteId(i as u32))
    }

    // ── External id lookups ───────────────────────────────────────────────

    pub fn stop_id(&self, external: &str) -> Option<StopId> {
        self.stop_index.get(external).copied()
    }

    pub fn route_id(&self, external: &str) -> Option<RouteId> {
        self.route_index.get(external).copied()
    }

    /// Like [`stop_id`](Self::stop_id) but reports a missing stop as an error.
    pub fn require_stop(&self, external: &str) -> NetworkResult<StopId> {
        self.stop_id(external)
            .ok_or_else(|| NetworkError::UnknownStop(external.to_owned()))
    }

    // ── Adjacency ─────────────────────────────────────────────────────────

    /// Ordered stop list of `route`.  Always at least two entries.
    #[inline]
    pub fn route_stops(&self, route: RouteId) -> &[StopId] {
        let start = self.route_stop_start[route.index()] as usize;
        let end   = self.route_stop_start[route.index() + 1] as usize;
        &self.route_stops[start..end]
    }

    /// Every appearance of `stop` on a route.  Empty for stops that no route
    /// serves (including stops with invalid coordinates).
    #[inline]
    pub fn routes_serving(&self, stop: StopId) -> &[RouteVisit] {
        let start = self.stop_visit_start[stop.index()] as usize;
        let end   = self.stop_visit_start[stop.index() + 1] as usize;
        &self.stop_visits[start..end]
    }
}

// ── NetworkGraphBuilder ───────────────────────────────────────────────────────

/// Collect raw stops and routes, then call [`build`](Self::build).
///
/// Construction is O(stops + Σ route lengths) plus an O(N log N) R-tree bulk
/// load.  Data-quality problems are logged at `warn` level and skipped:
///
/// | Problem                                   | Handling                 |
/// |-------------------------------------------|--------------------------|
/// | duplicate stop id                         | first occurrence wins    |
/// | stop with NaN / out-of-range coordinates  | kept for lookups, never routed or found nearby |
/// | route references an unknown stop          | reference dropped        |
/// | route with < 2 usable stops               | route dropped            |
/// | duplicate route id                        | first occurrence wins    |
///
/// # Example
///
/// ```
/// use jp_core::GeoPoint;
/// use jp_network::{NetworkGraphBuilder, Route, Stop};
///
/// let mut b = NetworkGraphBuilder::new();
/// b.add_stop(Stop::new("A", "Alameda", GeoPoint::new(0.0, 0.0)));
/// b.add_stop(Stop::new("B", "Bolsa", GeoPoint::new(0.0, 0.01)));
/// b.add_route(Route::new("R1", "Line 1", ["A", "B"]));
/// let net = b.build();
/// assert_eq!(net.stop_count(), 2);
/// assert_eq!(net.route_count(), 1);
/// ```
pub struct NetworkGraphBuilder {
    stops:  Vec<Stop>,
    routes: Vec<Route>,
}

impl NetworkGraphBuilder {
    pub fn new() -> Self {
        Self { stops: Vec::new(), routes: Vec::new() }
    }

    /// Pre-allocate for the expected snapshot size.
    pub fn with_capacity(stops: usize, routes: usize) -> Self {
        Self {
            stops:  Vec::with_capacity(stops),
            routes: Vec::with_capacity(routes),
        }
    }

    pub fn add_stop(&mut self, stop: Stop) {
        self.stops.push(stop);
    }

    pub fn add_route(&mut self, route: Route) {
        self.routes.push(route);
    }

    /// Consume the builder and produce a [`NetworkGraph`].
    pub fn build(self) -> NetworkGraph {
        // ── Stop arena ────────────────────────────────────────────────────
        let mut stops: Vec<Stop> = Vec::with_capacity(self.stops.len());
        let mut stop_index: FxHashMap<String, StopId> = FxHashMap::default();

        for stop in self.stops {
            if stop_index.contains_key(&stop.id) {
                warn!(stop = %stop.id, "duplicate stop id; keeping first occurrence");
                continue;
            }
            if !stop.pos.is_valid() {
                warn!(stop = %stop.id, pos = %stop.pos, "stop has invalid coordinates; it will not be routed");
            }
            stop_index.insert(stop.id.clone(), StopId(stops.len() as u32));
            stops.push(stop);
        }

        // ── Route arena + CSR route → stops ───────────────────────────────
        let mut routes: Vec<RouteEntry> = Vec::with_capacity(self.routes.len());
        let mut route_index: FxHashMap<String, RouteId> = FxHashMap::default();
        let mut route_stop_start: Vec<u32> = vec![0];
        let mut route_stops: Vec<StopId> = Vec::new();

        for route in self.routes {
            if route_index.contains_key(&route.id) {
                warn!(route = %route.id, "duplicate route id; keeping first occurrence");
                continue;
            }

            let usable: Vec<StopId> = route
                .stop_ids
                .iter()
                .filter_map(|sid| match stop_index.get(sid) {
                    Some(&id) if stops[id.index()].pos.is_valid() => Some(id),
                    Some(_) => None,
                    None => {
                        warn!(route = %route.id, stop = %sid, "route references unknown stop");
                        None
                    }
                })
                .collect();

            if usable.len() < 2 {
                warn!(
                    route = %route.id,
                    usable = usable.len(),
                    "route has fewer than 2 usable stops; skipped"
                );
                continue;
            }

            route_index.insert(route.id.clone(), RouteId(routes.len() as u32));
            routes.push(RouteEntry { id: route.id, name: route.name, color: route.color });
            route_stops.extend_from_slice(&usable);
            route_stop_start.push(route_stops.len() as u32);
        }

        // ── CSR stop → routes ─────────────────────────────────────────────
        let stop_count = stops.len();
        let mut stop_visit_start = vec![0u32; stop_count + 1];
        for s in &route_stops {
            stop_visit_start[s.index() + 1] += 1;
        }
        for i in 1..=stop_count {
            stop_visit_start[i] += stop_visit_start[i - 1];
        }

        let mut cursor: Vec<u32> = stop_visit_start[..stop_count].to_vec();
        let mut stop_visits = vec![RouteVisit { route: RouteId::INVALID, pos: 0 }; route_stops.len()];
        for r in 0..routes.len() {
            let start = route_stop_start[r] as usize;
            let end   = route_stop_start[r + 1] as usize;
            for (pos, s) in route_stops[start..end].iter().enumerate() {
                let slot = &mut cursor[s.index()];
                stop_visits[*slot as usize] = RouteVisit { route: RouteId(r as u32), pos: pos as u32 };
                *slot += 1;
            }
        }
        debug_assert_eq!(stop_visit_start[stop_count] as usize, stop_visits.len());

        // ── Spatial index (bulk load; faster than N inserts) ──────────────
        let entries: Vec<StopEntry> = stops
            .iter()
            .enumerate()
            .filter(|(_, s)| s.pos.is_valid())
            .map(|(i, s)| StopEntry::new(StopId(i as u32), s.pos))
            .collect();
        let spatial_idx = RTree::bulk_load(entries);

        debug!(
            stops = stop_count,
            routes = routes.len(),
            indexed = spatial_idx.size(),
            "network graph built"
        );

        NetworkGraph {
            stops,
            stop_index,
            routes,
            route_index,
            route_stop_start,
            route_stops,
            stop_visit_start,
            stop_visits,
            spatial_idx,
        }
    }
}

impl Default for NetworkGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
