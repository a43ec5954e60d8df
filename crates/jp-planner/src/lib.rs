//! `jp-planner`: turns arrival labels into rider-facing itineraries.
//!
//! # Pipeline
//!
//! ```text
//! plan(query):
//!   ① Nearby     up to N candidate stops around each endpoint
//!   ② Propagate  RoundPropagator for every (origin stop, destination stop)
//!                pair (parallel with the `parallel` feature)
//!   ③ Rebuild    walk / ride… / walk segments from the winning label
//!   ④ Rank       stable sort by (duration, transfers), keep the top M
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Evaluates stop pairs on Rayon's thread pool.           |
//! | `serde`    | Derives `Serialize`/`Deserialize` on itinerary types.  |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use jp_core::{PlannerConfig, Timestamp};
//! use jp_network::NetworkGraph;
//! use jp_planner::{JourneyPlanner, PlanQuery};
//!
//! let graph = Arc::new(NetworkGraph::from_snapshot(stops, routes));
//! let planner = JourneyPlanner::new(graph, PlannerConfig::default())?;
//! let trips = planner.plan(&PlanQuery::new(-33.44, -70.65, -33.42, -70.61, Timestamp(28_800)))?;
//! ```

pub mod error;
pub mod itinerary;
pub mod planner;
pub mod rank;
pub mod reconstruct;


pub use error::{PlanError, PlanResult};
pub use itinerary::{Itinerary, Place, Segment, SegmentKind};
pub use planner::{JourneyPlanner, PlanQuery};
pub use rank::rank_itineraries;
pub use reconstruct::{TripEnds, reconstruct, reconstruct_full_chain, reconstruct_last_leg};
