//! `jp-raptor`: round-based arrival propagation.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`travel`]     | `TravelTimeModel` trait, `HeadwayProxy`                   |
//! | [`label`]      | `ArrivalLabel`, `RideLink`, `RoundLabels`                 |
//! | [`propagator`] | `RoundPropagator`, `RaptorQuery`                          |
//!
//! # Round model (summary)
//!
//! ```text
//! labels[0]   = { origin: board_time }
//! for r in 0..max_rounds:
//!   labels[r+1] = labels[r]                     carry forward
//!   for route serving a stop improved in round r−1 (or the origin):
//!     scan stops left → right
//!       relax   stop after the board stop: arrival = model(route, board, stop)
//!       board   at any stop whose labels[r] arrival beats the current board time
//!   stop early when nothing improved
//! ```
//!
//! A label produced in round `r` records `round = r`: the rider has boarded
//! `r + 1` vehicles, i.e. made `r` transfers.

pub mod label;
pub mod propagator;
pub mod travel;


pub use label::{ArrivalLabel, RideLink, RoundLabels};
pub use propagator::{RaptorQuery, RoundPropagator};
pub use travel::{HeadwayProxy, TravelTimeModel};
