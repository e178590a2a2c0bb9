//! A crate with helper functionality used by command line interface of the route sequencing
//! engine: configuration file support and solution feasibility checks.

#![warn(missing_docs)]

pub mod extensions;
