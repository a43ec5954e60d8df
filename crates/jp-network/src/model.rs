//! Canonical stop and route records.
//!
//! The data layer normalizes whatever shape its documents have into these two
//! types before handing them to [`NetworkGraphBuilder`](crate::NetworkGraphBuilder).
//! The engine never sees any other representation.

use jp_core::GeoPoint;

/// A boarding point.
#[derive(Clone, Debug, PartialEq)]
pub struct Stop {
    /// External identifier, unique within a snapshot.
    pub id: String,
    /// Display name used in itinerary instructions.
    pub name: String,
    pub pos: GeoPoint,
    /// Optional public code printed on the stop sign.
    pub code: Option<String>,
}

impl Stop {
    pub fn new(id: impl Into<String>, name: impl Into<String>, pos: GeoPoint) -> Self {
        Self { id: id.into(), name: name.into(), pos, code: None }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }
}

/// A fixed stop pattern: one direction, no per-trip timetable.
#[derive(Clone, Debug, PartialEq)]
pub struct Route {
    pub id: String,
    pub name: String,
    /// Display colour, e.g. `#e4002b`.  Not used by the engine.
    pub color: Option<String>,
    /// Stop ids in travel order.
    pub stop_ids: Vec<String>,
}

impl Route {
    pub fn new<I, S>(id: impl Into<String>, name: impl Into<String>, stop_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            name: name.into(),
            color: None,
            stop_ids: stop_ids.into_iter().map(Into::into).collect(),
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}
