//! Contains tour construction heuristics.

use crate::models::problem::{DistanceMetric, RouteRequest};
use crate::models::solution::Tour;

mod nearest_neighbor;
pub use self::nearest_neighbor::NearestNeighbor;

/// Builds an initial tour which visits every destination exactly once.
pub trait TourConstructor: Send + Sync {
    /// Constructs a tour for given request using given distance metric.
    fn construct(&self, request: &RouteRequest, metric: &dyn DistanceMetric) -> Tour;
}
