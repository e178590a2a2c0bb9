//! A helper module which contains functionality to run feasibility checks on solution.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/check/check_test.rs"]
mod check_test;

use route_core::models::problem::DistanceMetric;
use route_format::checker::CheckerContext;
use route_format::format::problem::deserialize_problem;
use route_format::format::solution::deserialize_solution;
use std::io::{BufReader, Read};
use std::sync::Arc;

/// Checks pragmatic solution feasibility using given distance metric.
pub fn check_pragmatic_solution<P: Read, S: Read>(
    problem_reader: BufReader<P>,
    solution_reader: BufReader<S>,
    metric: Arc<dyn DistanceMetric>,
) -> Result<(), Vec<String>> {
    let problem = deserialize_problem(problem_reader)
        .map_err(|errors| errors.into_iter().map(|err| format!("cannot read problem: '{err}'")).collect::<Vec<_>>())?;

    let solution =
        deserialize_solution(solution_reader).map_err(|err| vec![format!("cannot read solution: '{err}'")])?;

    CheckerContext::new(problem, solution, metric)?.check()
}
