use crate::format::problem::ApiPoint;
use serde::{Deserialize, Serialize};
use std::io::{BufReader, BufWriter, Error, Read, Write};

/// A status of successfully solved problem.
pub const OK_STATUS: &str = "ok";

/// A code of degenerate input warning.
pub const DEGENERATE_INPUT_CODE: &str = "W0001";

/// A single leg between two consecutive stops.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    /// Id of the stop where leg starts.
    pub from: String,
    /// Id of the stop where leg ends.
    pub to: String,
    /// Leg distance in kilometers.
    pub distance_km: f64,
}

/// A non-fatal observation about the problem.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Warning {
    /// A warning code.
    pub code: String,
    /// A human readable message.
    pub message: String,
}

/// A sequenced route.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    /// Stops in visiting order, including origin and end.
    pub ordered_stops: Vec<ApiPoint>,
    /// Total distance in kilometers.
    pub total_distance_km: f64,
    /// Legs between consecutive stops.
    pub steps: Vec<Step>,
    /// Non-fatal warnings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warnings: Option<Vec<Warning>>,
}

/// A solution of route sequencing problem.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Solution {
    /// A solution status.
    pub status: String,
    /// A sequenced route.
    pub plan: Plan,
}

/// Serializes solution into json format.
pub fn serialize_solution<W: Write>(writer: BufWriter<W>, solution: &Solution) -> Result<(), Error> {
    serde_json::to_writer_pretty(writer, solution).map_err(Error::from)
}

/// Deserializes solution from json format.
pub fn deserialize_solution<R: Read>(reader: BufReader<R>) -> Result<Solution, Error> {
    serde_json::from_reader(reader).map_err(Error::from)
}
