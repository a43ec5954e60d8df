//! Nearest-stop lookup.
//!
//! Candidates come from an R-tree (`rstar`) envelope query sized from the
//! search radius; exact haversine distances then filter and order them.  The
//! contract is the same as a full scan: every stop within the radius,
//! nearest first, capped in count.

use rstar::{AABB, PointDistance, RTreeObject};

use jp_core::{GeoPoint, StopId};

use crate::NetworkGraph;

/// Relative padding applied to the query envelope.  Parallels are not
/// geodesics, so a stop just inside the radius can sit a hair outside the
/// naive degree box.
const ENVELOPE_PAD: f64 = 1.01;

// ── R-tree stop entry ─────────────────────────────────────────────────────────

/// Entry stored in the R-tree spatial index: a 2-D `[lat, lng]` point with
/// the associated `StopId`.
#[derive(Clone)]
pub(crate) struct StopEntry {
    point: [f64; 2], // [lat, lng]
    id: StopId,
}

impl StopEntry {
    pub(crate) fn new(id: StopId, pos: GeoPoint) -> Self {
        Self { point: [pos.lat, pos.lng], id }
    }
}

impl RTreeObject for StopEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for StopEntry {
    /// Squared Euclidean distance in degree space.  Only used for envelope
    /// pruning inside `rstar`; ranking uses haversine.
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dlat = self.point[0] - point[0];
        let dlng = self.point[1] - point[1];
        dlat * dlat + dlng * dlng
    }
}

// ── Query ─────────────────────────────────────────────────────────────────────

/// A stop found near a query coordinate.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NearbyStop {
    pub stop: StopId,
    /// Haversine distance from the query point, metres.
    pub distance_m: f64,
}

impl NetworkGraph {
    /// Up to `max_results` stops within `max_radius_m` of `pos`, nearest
    /// first.  Equidistant stops are ordered by `StopId`.
    ///
    /// Returns an empty list for an invalid query coordinate.  Stops with
    /// invalid coordinates are never returned.
    pub fn nearby(&self, pos: GeoPoint, max_results: usize, max_radius_m: f64) -> Vec<NearbyStop> {
        if max_results == 0 || !pos.is_valid() || max_radius_m.is_nan() || max_radius_m < 0.0 {
            return Vec::new();
        }

        let measure = |e: &StopEntry| NearbyStop {
            stop: e.id,
            distance_m: pos.distance_m(GeoPoint::new(e.point[0], e.point[1])),
        };

        let mut found: Vec<NearbyStop> = match pos.degree_extent(max_radius_m * ENVELOPE_PAD) {
            Some((d_lat, d_lng)) => {
                let envelope = AABB::from_corners(
                    [pos.lat - d_lat, pos.lng - d_lng],
                    [pos.lat + d_lat, pos.lng + d_lng],
                );
                self.spatial_idx
                    .locate_in_envelope(&envelope)
                    .map(measure)
                    .filter(|n| n.distance_m <= max_radius_m)
                    .collect()
            }
            // Box touches a pole or wraps the antimeridian: scan everything.
            None => self
                .spatial_idx
                .iter()
                .map(measure)
                .filter(|n| n.distance_m <= max_radius_m)
                .collect(),
        };

        found.sort_by(|a, b| {
            a.distance_m
                .total_cmp(&b.distance_m)
                .then(a.stop.cmp(&b.stop))
        });
        found.truncate(max_results);
        found
    }
}
