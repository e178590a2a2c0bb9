#[cfg(test)]
#[path = "../../tests/unit/solver/validation_test.rs"]
mod validation_test;

use super::{InputError, StopPosition};
use crate::models::common::Point;
use crate::models::problem::RouteRequest;
use rustc_hash::FxHashSet;
use std::iter::once;

/// Validates route request collecting all found violations in a stable order: empty ids,
/// invalid coordinates and duplicated ids.
pub fn validate_request(request: &RouteRequest) -> Result<(), Vec<InputError>> {
    let errors = check_empty_ids(request)
        .err()
        .into_iter()
        .chain(check_coordinates(request).err())
        .chain(check_duplicate_ids(request).err())
        .flatten()
        .collect::<Vec<_>>();

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

fn get_positioned_stops(request: &RouteRequest) -> impl Iterator<Item = (StopPosition, &Point)> + '_ {
    once((StopPosition::Origin, &request.origin))
        .chain(request.destinations.iter().enumerate().map(|(idx, point)| (StopPosition::Destination(idx), point)))
        .chain(once((StopPosition::End, &request.end)))
}

fn into_result(errors: Vec<InputError>) -> Result<(), Vec<InputError>> {
    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

fn has_empty_id(point: &Point) -> bool {
    point.id.trim().is_empty()
}

/// Checks that every stop has a non-empty id.
fn check_empty_ids(request: &RouteRequest) -> Result<(), Vec<InputError>> {
    into_result(
        get_positioned_stops(request)
            .filter(|(_, point)| has_empty_id(point))
            .map(|(position, _)| InputError::EmptyId { position })
            .collect(),
    )
}

/// Checks that coordinates are finite and within valid ranges.
fn check_coordinates(request: &RouteRequest) -> Result<(), Vec<InputError>> {
    into_result(
        get_positioned_stops(request)
            .filter(|(_, point)| !point.has_valid_coordinates())
            .map(|(position, point)| InputError::InvalidCoordinate {
                position,
                id: point.id.clone(),
                lat: point.lat,
                lng: point.lng,
            })
            .collect(),
    )
}

/// Checks that ids are unique. The end is allowed to reuse the origin's id only when it is
/// located at the same coordinates, so the request is an explicit round trip.
fn check_duplicate_ids(request: &RouteRequest) -> Result<(), Vec<InputError>> {
    let is_round_trip = request.is_round_trip();

    let mut ids = FxHashSet::default();
    let mut reported = FxHashSet::default();

    into_result(
        get_positioned_stops(request)
            .filter(|(position, point)| !has_empty_id(point) && !(is_round_trip && *position == StopPosition::End))
            .filter(|(_, point)| !ids.insert(point.id.as_str()))
            .filter(|(_, point)| reported.insert(point.id.as_str()))
            .map(|(_, point)| InputError::DuplicateId { id: point.id.clone() })
            .collect(),
    )
}
