//! The construction module contains logic to build an initial tour.

pub mod heuristics;
