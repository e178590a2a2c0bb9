#[cfg(test)]
#[path = "../../../tests/unit/format/solution/geo_serializer_test.rs"]
mod geo_serializer_test;

use super::Solution;
use route_core::utils::compare_floats;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::io::{BufWriter, Error, Write};

const STOP_COLOR: &str = "#1f77b4";
const TERMINAL_COLOR: &str = "#d62728";
const ROUTE_COLOR: &str = "#2ca02c";

#[derive(Clone, Debug, Serialize)]
#[serde(tag = "type")]
enum Geometry {
    Point { coordinates: (f64, f64) },
    LineString { coordinates: Vec<(f64, f64)> },
}

#[derive(Clone, Debug, Serialize, Eq, PartialEq)]
#[serde(tag = "type")]
struct Feature {
    pub properties: BTreeMap<String, String>,
    pub geometry: Geometry,
}

#[derive(Clone, Debug, Serialize, Eq, PartialEq)]
#[serde(tag = "type")]
struct FeatureCollection {
    pub features: Vec<Feature>,
}

impl Eq for Geometry {}

impl PartialEq for Geometry {
    fn eq(&self, other: &Self) -> bool {
        let compare_pair = |l_coord: &(f64, f64), r_coord: &(f64, f64)| {
            compare_floats(l_coord.0, r_coord.0) == Ordering::Equal
                && compare_floats(l_coord.1, r_coord.1) == Ordering::Equal
        };

        match (self, other) {
            (Geometry::Point { coordinates: l_coord }, Geometry::Point { coordinates: r_coord }) => {
                compare_pair(l_coord, r_coord)
            }
            (Geometry::LineString { coordinates: l_coords }, Geometry::LineString { coordinates: r_coords }) => {
                l_coords.len() == r_coords.len()
                    && l_coords.iter().zip(r_coords.iter()).all(|(l_coord, r_coord)| compare_pair(l_coord, r_coord))
            }
            _ => false,
        }
    }
}

/// Serializes solution into geo json format: a point feature per stop and a line string which
/// follows the visiting order.
pub fn serialize_solution_as_geojson<W: Write>(writer: BufWriter<W>, solution: &Solution) -> Result<(), Error> {
    let geo_json = create_geojson_solution(solution);

    serde_json::to_writer_pretty(writer, &geo_json).map_err(Error::from)
}

fn slice_to_map(vec: &[(&str, &str)]) -> BTreeMap<String, String> {
    vec.iter().map(|&(key, value)| (key.to_string(), value.to_string())).collect()
}

fn create_geojson_solution(solution: &Solution) -> FeatureCollection {
    let stops = &solution.plan.ordered_stops;
    let last_idx = stops.len().saturating_sub(1);

    let stop_features = stops.iter().enumerate().map(|(stop_idx, stop)| {
        let is_terminal = stop_idx == 0 || stop_idx == last_idx;
        let distance_km = stop_idx
            .checked_sub(1)
            .and_then(|step_idx| solution.plan.steps.get(step_idx))
            .map_or(0., |step| step.distance_km);

        Feature {
            properties: slice_to_map(&[
                ("marker-color", if is_terminal { TERMINAL_COLOR } else { STOP_COLOR }),
                ("marker-size", "medium"),
                ("marker-symbol", if is_terminal { "warehouse" } else { "marker" }),
                ("name", stop.id.as_str()),
                ("stop_idx", stop_idx.to_string().as_str()),
                ("distance_km", distance_km.to_string().as_str()),
            ]),
            geometry: Geometry::Point { coordinates: (stop.lng, stop.lat) },
        }
    });

    let route_feature = Feature {
        properties: slice_to_map(&[
            ("stroke", ROUTE_COLOR),
            ("stroke-width", "4"),
            ("total_distance_km", solution.plan.total_distance_km.to_string().as_str()),
        ]),
        geometry: Geometry::LineString { coordinates: stops.iter().map(|stop| (stop.lng, stop.lat)).collect() },
    };

    FeatureCollection { features: stop_features.chain(std::iter::once(route_feature)).collect() }
}
