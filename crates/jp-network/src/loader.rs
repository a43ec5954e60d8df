//! CSV snapshot loader.
//!
//! The hosted document store is not this crate's concern; whatever exports
//! the snapshot writes two CSV files that map one-to-one onto [`Stop`] and
//! [`Route`].
//!
//! # `stops.csv`
//!
//! ```csv
//! id,name,lat,lng,code
//! A,Central,0.0,0.0,C01
//! B,Market,0.0,0.01,
//! ```
//!
//! # `routes.csv`
//!
//! ```csv
//! id,name,color,stop_ids
//! R1,Line 1,#e4002b,A|B|C
//! ```
//!
//! Empty `code` / `color` fields become `None`.  `stop_ids` is a `|`-separated
//! list in travel order; blank entries are dropped.  Non-numeric coordinates
//! are a parse error, but `NaN` is accepted and the stop is later skipped by
//! the graph builder like any other invalid coordinate.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use jp_core::GeoPoint;

use crate::model::{Route, Stop};
use crate::NetworkError;

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct StopRecord {
    id:   String,
    name: String,
    lat:  f64,
    lng:  f64,
    #[serde(default)]
    code: Option<String>,
}

#[derive(Deserialize)]
struct RouteRecord {
    id:       String,
    name:     String,
    #[serde(default)]
    color:    Option<String>,
    stop_ids: String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load stops from a CSV file.
pub fn load_stops_csv(path: &Path) -> Result<Vec<Stop>, NetworkError> {
    let file = std::fs::File::open(path).map_err(NetworkError::Io)?;
    load_stops_reader(file)
}

/// Like [`load_stops_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for snapshots embedded in
/// a binary.
pub fn load_stops_reader<R: Read>(reader: R) -> Result<Vec<Stop>, NetworkError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    csv_reader
        .deserialize::<StopRecord>()
        .map(|result| {
            let row = result.map_err(|e| NetworkError::Parse(format!("stops: {e}")))?;
            Ok(Stop {
                id:   row.id.trim().to_owned(),
                name: row.name.trim().to_owned(),
                pos:  GeoPoint::new(row.lat, row.lng),
                code: non_blank(row.code),
            })
        })
        .collect()
}

/// Load routes from a CSV file.
pub fn load_routes_csv(path: &Path) -> Result<Vec<Route>, NetworkError> {
    let file = std::fs::File::open(path).map_err(NetworkError::Io)?;
    load_routes_reader(file)
}

/// Like [`load_routes_csv`] but accepts any `Read` source.
pub fn load_routes_reader<R: Read>(reader: R) -> Result<Vec<Route>, NetworkError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    csv_reader
        .deserialize::<RouteRecord>()
        .map(|result| {
            let row = result.map_err(|e| NetworkError::Parse(format!("routes: {e}")))?;
            Ok(Route {
                id:       row.id.trim().to_owned(),
                name:     row.name.trim().to_owned(),
                color:    non_blank(row.color),
                stop_ids: split_stop_ids(&row.stop_ids),
            })
        })
        .collect()
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn non_blank(field: Option<String>) -> Option<String> {
    field
        .map(|s| s.trim().to_owned())
        .filter(|s| !s.is_empty())
}

fn split_stop_ids(field: &str) -> Vec<String> {
    field
        .split('|')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}
