//! `jp-network`: read-only transit network view and nearest-stop lookup.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`model`]   | `Stop`, `Route`: the canonical input shape                 |
//! | [`graph`]   | `NetworkGraph` (arena + CSR adjacency), `NetworkGraphBuilder` |
//! | [`nearby`]  | `NearbyStop`, R-tree backed `NetworkGraph::nearby`         |
//! | [`loader`]  | `load_stops_csv`, `load_routes_csv` and `_reader` variants |
//! | [`error`]   | `NetworkError`, `NetworkResult<T>`                         |

pub mod error;
pub mod graph;
pub mod loader;
pub mod model;
pub mod nearby;

#[cfg(test)]
mod tests;

pub use error::{NetworkError, NetworkResult};
pub use graph::{NetworkGraph, NetworkGraphBuilder, RouteEntry, RouteVisit};
pub use loader::{load_routes_csv, load_routes_reader, load_stops_csv, load_stops_reader};
pub use model::{Route, Stop};
pub use nearby::NearbyStop;
