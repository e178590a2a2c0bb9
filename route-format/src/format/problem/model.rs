#[cfg(test)]
#[path = "../../../tests/unit/format/problem/model_test.rs"]
mod model_test;

use crate::format::{FormatError, MultiFormatError};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use std::io::{BufReader, BufWriter, Error, Read, Write};

/// A stop definition.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct ApiPoint {
    /// A stop id.
    pub id: String,
    /// Latitude. Accepts a json number or a numeric string.
    #[serde(deserialize_with = "deserialize_coordinate")]
    pub lat: f64,
    /// Longitude. Accepts a json number or a numeric string.
    #[serde(deserialize_with = "deserialize_coordinate")]
    pub lng: f64,
}

/// A route sequencing problem definition.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    /// A start of the route.
    pub origin: ApiPoint,
    /// Stops to visit.
    #[serde(default)]
    pub destinations: Vec<ApiPoint>,
    /// An end of the route. When omitted, the route returns to the origin.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<ApiPoint>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCoordinate {
    Number(f64),
    Text(String),
}

fn deserialize_coordinate<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match RawCoordinate::deserialize(deserializer)? {
        RawCoordinate::Number(value) => Ok(value),
        RawCoordinate::Text(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| de::Error::custom(format!("cannot parse coordinate from '{text}'"))),
    }
}

/// Deserializes problem in json format from `BufReader`.
pub fn deserialize_problem<R: Read>(reader: BufReader<R>) -> Result<Problem, MultiFormatError> {
    serde_json::from_reader(reader).map_err(|err| {
        vec![FormatError::new(
            "E0000".to_string(),
            "cannot deserialize problem".to_string(),
            format!("check input json: '{err}'"),
        )]
        .into()
    })
}

/// Serializes `problem` in json into `writer`.
pub fn serialize_problem<W: Write>(problem: &Problem, writer: &mut BufWriter<W>) -> Result<(), Error> {
    serde_json::to_writer_pretty(writer, problem).map_err(Error::from)
}
