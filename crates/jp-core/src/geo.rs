//! Geographic coordinate type and walking-time conversion.
//!
//! `GeoPoint` uses `f64` latitude/longitude.  Walk distances feed directly
//! into rider-facing itineraries, so the extra precision over `f32` is worth
//! the memory at city scale (hundreds to low thousands of stops).

/// Default walking speed in metres per second.
pub const WALKING_SPEED_MPS: f64 = 1.4;

/// Mean Earth radius, metres.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A WGS-84 geographic coordinate.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// `true` when both components are finite and inside the WGS-84 range.
    ///
    /// `(0, 0)` is a valid coordinate.
    pub fn is_valid(self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }

    /// Haversine great-circle distance in metres.
    ///
    /// Symmetric in its arguments and exactly `0.0` for identical points.
    pub fn distance_m(self, other: GeoPoint) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lng = (other.lng - self.lng).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lng * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_M * c
    }

    /// Approximate bounding-box half-extents `(d_lat, d_lng)` in degrees for
    /// a circle of `radius_m` around `self`.
    ///
    /// Returns `None` when the box would reach a pole or wrap the
    /// antimeridian; callers fall back to a full scan in that case.
    pub fn degree_extent(self, radius_m: f64) -> Option<(f64, f64)> {
        let d_lat = (radius_m / EARTH_RADIUS_M).to_degrees();
        if self.lat.abs() + d_lat >= 90.0 {
            return None;
        }
        // Widest longitude span occurs at the box edge nearest the pole.
        let widest = (self.lat.abs() + d_lat).to_radians().cos();
        let d_lng = d_lat / widest;
        if self.lng.abs() + d_lng > 180.0 {
            return None;
        }
        Some((d_lat, d_lng))
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lng)
    }
}

/// Walking time in whole seconds at the default [`WALKING_SPEED_MPS`].
#[inline]
pub fn walk_secs(distance_m: f64) -> u32 {
    walk_secs_at(distance_m, WALKING_SPEED_MPS)
}

/// Walking time in whole seconds: `round(distance / speed)`.
///
/// Negative or non-finite inputs clamp to zero.
pub fn walk_secs_at(distance_m: f64, speed_mps: f64) -> u32 {
    let secs = (distance_m / speed_mps).round();
    if secs.is_finite() && secs > 0.0 {
        secs.min(u32::MAX as f64) as u32
    } else {
        0
    }
}
