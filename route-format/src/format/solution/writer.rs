#[cfg(test)]
#[path = "../../../tests/unit/format/solution/writer_test.rs"]
mod writer_test;

use super::*;
use route_core::models::solution::{RouteResult, RouteWarning};
use route_core::utils::GenericError;
use std::io::{BufWriter, Write};

/// A trait to serialize solution in pragmatic format.
pub trait PragmaticSolution {
    /// Serializes solution in pragmatic json format.
    fn write_pragmatic_json<W: Write>(&self, writer: BufWriter<W>) -> Result<(), GenericError>;

    /// Serializes solution in pragmatic geo json format.
    fn write_geo_json<W: Write>(&self, writer: BufWriter<W>) -> Result<(), GenericError>;
}

impl PragmaticSolution for RouteResult {
    fn write_pragmatic_json<W: Write>(&self, writer: BufWriter<W>) -> Result<(), GenericError> {
        let solution = create_solution(self);
        serialize_solution(writer, &solution)?;

        Ok(())
    }

    fn write_geo_json<W: Write>(&self, writer: BufWriter<W>) -> Result<(), GenericError> {
        let solution = create_solution(self);
        serialize_solution_as_geojson(writer, &solution)?;

        Ok(())
    }
}

/// Creates solution from the route result. Distances are taken from the result as is.
pub fn create_solution(result: &RouteResult) -> Solution {
    let warnings = result.warnings.iter().map(create_warning).collect::<Vec<_>>();

    Solution {
        status: OK_STATUS.to_string(),
        plan: Plan {
            ordered_stops: result.ordered_stops.iter().map(ApiPoint::from).collect(),
            total_distance_km: result.total_distance,
            steps: result
                .steps
                .iter()
                .map(|step| Step { from: step.from.clone(), to: step.to.clone(), distance_km: step.distance })
                .collect(),
            warnings: if warnings.is_empty() { None } else { Some(warnings) },
        },
    }
}

fn create_warning(warning: &RouteWarning) -> Warning {
    match warning {
        RouteWarning::DegenerateInput { .. } => {
            Warning { code: DEGENERATE_INPUT_CODE.to_string(), message: warning.to_string() }
        }
    }
}
