//! This module provides functionality to automatically check that given solution is consistent
//! with its problem: endpoints are fixed, every destination is visited exactly once and all
//! reported distances agree with the distance metric.

#[cfg(test)]
#[path = "../../tests/unit/checker/checker_test.rs"]
mod checker_test;

use crate::format::problem::{ApiPoint, PragmaticProblem, Problem};
use crate::format::solution::{OK_STATUS, Solution};
use route_core::models::common::Point;
use route_core::models::problem::{DistanceMetric, RouteRequest};
use rustc_hash::FxHashSet;
use std::sync::Arc;

mod assignment;
use self::assignment::check_assignment;

mod routing;
use self::routing::check_routing;

/// A relative tolerance used to compare distances.
const DISTANCE_TOLERANCE: f64 = 1E-6;

/// Stores problem and solution together and provides some helper methods.
pub struct CheckerContext {
    /// An original problem definition.
    pub problem: Problem,
    /// Solution to be checked.
    pub solution: Solution,

    request: RouteRequest,
    metric: Arc<dyn DistanceMetric>,
}

impl CheckerContext {
    /// Creates an instance of `CheckerContext`.
    pub fn new(problem: Problem, solution: Solution, metric: Arc<dyn DistanceMetric>) -> Result<Self, Vec<String>> {
        let request = (&problem)
            .read_pragmatic()
            .map_err(|errors| errors.into_iter().map(|err| format!("invalid problem: {err}")).collect::<Vec<_>>())?;

        Ok(Self { problem, solution, request, metric })
    }

    /// Performs solution check.
    pub fn check(&self) -> Result<(), Vec<String>> {
        // avoid duplicates keeping original order
        let (_, errors) = check_status(self)
            .err()
            .into_iter()
            .chain(check_assignment(self).err())
            .chain(check_routing(self).err())
            .flatten()
            .fold((FxHashSet::default(), Vec::default()), |(mut used, mut errors), error| {
                if !used.contains(&error) {
                    errors.push(error.clone());
                    used.insert(error);
                }

                (used, errors)
            });

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    fn stops(&self) -> &[ApiPoint] {
        self.solution.plan.ordered_stops.as_slice()
    }

    fn distance(&self, from: &ApiPoint, to: &ApiPoint) -> f64 {
        self.metric.distance(&Point::from(from), &Point::from(to))
    }
}

fn check_status(ctx: &CheckerContext) -> Result<(), Vec<String>> {
    if ctx.solution.status == OK_STATUS {
        Ok(())
    } else {
        Err(vec![format!("unexpected solution status: '{}'", ctx.solution.status)])
    }
}

fn has_same_location(stop: &ApiPoint, point: &Point) -> bool {
    stop.lat == point.lat && stop.lng == point.lng
}
