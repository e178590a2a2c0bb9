use crate::models::common::{Distance, Point};
use crate::models::problem::DistanceMetric;
use crate::models::solution::Tour;
use std::fmt;

/// Represents a single leg between two consecutive stops of the final tour.
#[derive(Clone, Debug, PartialEq)]
pub struct Step {
    /// Id of the stop where leg starts.
    pub from: String,
    /// Id of the stop where leg ends.
    pub to: String,
    /// Leg distance.
    pub distance: Distance,
}

/// A non-fatal observation about the request. Callers should not treat it as an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RouteWarning {
    /// There is zero or one destination: no permutation freedom, the result is trivially optimal.
    DegenerateInput {
        /// Amount of destinations in the request.
        destinations: usize,
    },
}

impl fmt::Display for RouteWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateInput { destinations } => {
                write!(f, "request has {destinations} destination(s), the route is trivially optimal")
            }
        }
    }
}

/// A result of route sequencing.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteResult {
    /// Stops in visiting order, starting with origin and finishing with end.
    pub ordered_stops: Vec<Point>,
    /// Total distance which is exactly the sum of step distances.
    pub total_distance: Distance,
    /// Legs between consecutive stops.
    pub steps: Vec<Step>,
    /// Non-fatal warnings.
    pub warnings: Vec<RouteWarning>,
}

impl RouteResult {
    /// Creates a result from the final tour. Every leg is evaluated exactly once and the total
    /// is accumulated from the very same values.
    pub fn from_tour(tour: Tour, metric: &dyn DistanceMetric) -> Self {
        let steps = tour
            .legs()
            .map(|(from, to)| Step { from: from.id.clone(), to: to.id.clone(), distance: metric.distance(from, to) })
            .collect::<Vec<_>>();
        let total_distance = steps.iter().map(|step| step.distance).sum();

        Self { ordered_stops: tour.into_stops(), total_distance, steps, warnings: vec![] }
    }

    /// Sets warnings.
    pub fn with_warnings(mut self, warnings: Vec<RouteWarning>) -> Self {
        self.warnings = warnings;
        self
    }
}
