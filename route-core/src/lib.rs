//! Core crate contains the building blocks to sequence stops of a ***single vehicle route***
//! between a fixed start and a fixed end.
//!
//! The visiting order is computed in two phases:
//!
//! - a greedy **nearest neighbor** construction gives an initial tour
//! - a **2-opt** local search improves the tour until no exchange of two edges can shorten it
//!
//! Every edge is evaluated by an injectable [`DistanceMetric`](models::problem::DistanceMetric),
//! great-circle (haversine) distance is used by default.
//!
//! # Examples
//!
//! ```
//! use route_core::prelude::*;
//!
//! let depot = Point::new("depot", -22.90, -43.23);
//! let stops = vec![Point::new("farm-1", -22.41, -42.96), Point::new("farm-2", -22.52, -43.10)];
//!
//! let result = optimize_route(&RouteRequest::round_trip(depot, stops)).expect("cannot optimize route");
//!
//! assert_eq!(result.ordered_stops.len(), 4);
//! assert_eq!(result.steps.len(), 3);
//! ```

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod construction;
pub mod models;
pub mod prelude;
pub mod solver;
pub mod utils;
