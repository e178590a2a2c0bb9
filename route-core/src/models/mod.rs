//! A collection of models to represent a route request, the metric used to evaluate it and
//! the resulting visiting sequence.

pub mod common;
pub mod problem;
pub mod solution;
