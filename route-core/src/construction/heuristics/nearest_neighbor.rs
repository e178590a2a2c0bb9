#[cfg(test)]
#[path = "../../../tests/unit/construction/heuristics/nearest_neighbor_test.rs"]
mod nearest_neighbor_test;

use super::TourConstructor;
use crate::models::problem::{DistanceMetric, RouteRequest};
use crate::models::solution::Tour;

/// A greedy heuristic which always moves to the closest unvisited destination.
///
/// On ties, a destination which comes first in the remaining request order is selected.
#[derive(Clone, Debug, Default)]
pub struct NearestNeighbor {}

impl TourConstructor for NearestNeighbor {
    fn construct(&self, request: &RouteRequest, metric: &dyn DistanceMetric) -> Tour {
        let mut unvisited = request.destinations.clone();
        let mut interior = Vec::with_capacity(unvisited.len());

        let mut current = &request.origin;
        while !unvisited.is_empty() {
            let (best_idx, _) = unvisited.iter().enumerate().skip(1).fold(
                (0, metric.distance(current, &unvisited[0])),
                |(best_idx, best_distance), (idx, candidate)| {
                    let distance = metric.distance(current, candidate);
                    if distance < best_distance { (idx, distance) } else { (best_idx, best_distance) }
                },
            );

            interior.push(unvisited.remove(best_idx));
            current = interior.last().unwrap_or(&request.origin);
        }

        Tour::new(request.origin.clone(), interior, request.end.clone())
    }
}
