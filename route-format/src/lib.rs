//! Format crate lets users describe route sequencing problems via simple json format and get
//! solutions back in json or geojson.
//!
//! # Examples
//!
//! ```
//! use route_format::format::problem::PragmaticProblem;
//! use route_format::format::solution::create_solution;
//! use route_core::prelude::optimize_route;
//!
//! let problem = r#"{
//!   "origin": { "id": "depot", "lat": -22.90, "lng": -43.23 },
//!   "destinations": [
//!     { "id": "farm-1", "lat": "-22.41", "lng": "-42.96" },
//!     { "id": "farm-2", "lat": -22.52, "lng": -43.10 }
//!   ]
//! }"#;
//!
//! let request = problem.to_string().read_pragmatic().expect("cannot read problem");
//! let result = optimize_route(&request).expect("cannot optimize route");
//! let solution = create_solution(&result);
//!
//! assert_eq!(solution.status, "ok");
//! assert_eq!(solution.plan.ordered_stops.last().map(|stop| stop.id.as_str()), Some("depot"));
//! ```

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

#[cfg(test)]
#[path = "../tests/generator/mod.rs"]
pub mod generator;

#[cfg(test)]
#[path = "../tests/discovery/mod.rs"]
pub mod discovery;

pub mod checker;
pub mod format;

mod validation;
