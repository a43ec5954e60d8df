//! Itinerary types.
//!
//! An `Itinerary` is one complete trip from the origin coordinate to the
//! destination coordinate: a walk to the first stop, one or more rides, and a
//! walk from the last stop.  Segments chain exactly: each segment starts
//! where and when the previous one ended.

use jp_core::{RouteId, StopId, Timestamp};

/// Where a segment starts or ends.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Place {
    /// The query's origin coordinate.
    Origin,
    /// The query's destination coordinate.
    Destination,
    Stop(StopId),
}

/// What the rider does during a segment.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum SegmentKind {
    Walk { distance_m: f64 },
    Ride { route: RouteId },
}

/// One leg of an itinerary.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    pub kind: SegmentKind,
    pub from: Place,
    pub to: Place,
    pub start: Timestamp,
    pub end: Timestamp,
    /// Human-readable instruction, e.g. "Take Line 1 from Alameda to Bolsa".
    pub instruction: String,
}

impl Segment {
    /// Duration of this segment in seconds.
    pub fn duration_secs(&self) -> i64 {
        self.end - self.start
    }

    pub fn is_walk(&self) -> bool {
        matches!(self.kind, SegmentKind::Walk { .. })
    }

    pub fn is_ride(&self) -> bool {
        matches!(self.kind, SegmentKind::Ride { .. })
    }

    /// Walking distance, or `0.0` for a ride.
    pub fn walk_m(&self) -> f64 {
        match self.kind {
            SegmentKind::Walk { distance_m } => distance_m,
            SegmentKind::Ride { .. } => 0.0,
        }
    }
}

/// A complete planning result.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Itinerary {
    segments: Vec<Segment>,
    total_duration_secs: i64,
    transfer_count: usize,
    total_walk_m: f64,
}

impl Itinerary {
    /// Build an itinerary from chained segments.
    ///
    /// Totals are derived from the segments, which must be non-empty and in
    /// travel order.
    pub fn new(segments: Vec<Segment>, transfer_count: usize) -> Self {
        debug_assert!(!segments.is_empty());

        let total_duration_secs = match (segments.first(), segments.last()) {
            (Some(first), Some(last)) => last.end - first.start,
            _ => 0,
        };
        let total_walk_m = segments.iter().map(Segment::walk_m).sum();

        Self { segments, total_duration_secs, transfer_count, total_walk_m }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Last segment end minus first segment start.
    pub fn total_duration_secs(&self) -> i64 {
        self.total_duration_secs
    }

    pub fn transfer_count(&self) -> usize {
        self.transfer_count
    }

    /// Sum of all walk segment distances, metres.
    pub fn total_walk_m(&self) -> f64 {
        self.total_walk_m
    }

    /// When the rider leaves the origin coordinate.
    pub fn departure(&self) -> Timestamp {
        self.segments.first().map_or(Timestamp::ZERO, |s| s.start)
    }

    /// When the rider reaches the destination coordinate.
    pub fn arrival(&self) -> Timestamp {
        self.segments.last().map_or(Timestamp::ZERO, |s| s.end)
    }

    /// Number of ride segments.
    pub fn ride_count(&self) -> usize {
        self.segments.iter().filter(|s| s.is_ride()).count()
    }
}
