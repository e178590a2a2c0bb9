//! This module provides functionality to validate problem definition for logical correctness.

#[cfg(test)]
#[path = "../../tests/unit/validation/validation_test.rs"]
mod validation_test;

use crate::format::{FormatError, MultiFormatError};
use route_core::prelude::{InputError, RouteRequest, StopPosition};
use route_core::solver::validate_request;

/// Validates a request mapped from the problem definition.
pub struct ValidationContext<'a> {
    /// A request to validate.
    pub request: &'a RouteRequest,
}

impl<'a> ValidationContext<'a> {
    /// Creates an instance of `ValidationContext`.
    pub fn new(request: &'a RouteRequest) -> Self {
        Self { request }
    }

    /// Validates request on set of rules.
    pub fn validate(&self) -> Result<(), MultiFormatError> {
        match validate_request(self.request) {
            Ok(_) => Ok(()),
            Err(errors) => Err(map_input_errors(errors.as_slice()).into()),
        }
    }
}

/// Groups input errors by their kind and maps them to format errors ordered by code.
pub(crate) fn map_input_errors(errors: &[InputError]) -> Vec<FormatError> {
    check_e1000_no_duplicate_ids(errors)
        .err()
        .into_iter()
        .chain(check_e1001_no_empty_ids(errors).err())
        .chain(check_e1002_valid_coordinates(errors).err())
        .collect()
}

fn format_position(position: &StopPosition) -> String {
    match position {
        StopPosition::Origin => "origin".to_string(),
        StopPosition::Destination(idx) => format!("destinations[{idx}]"),
        StopPosition::End => "end".to_string(),
    }
}

/// Checks that stops have unique ids.
fn check_e1000_no_duplicate_ids(errors: &[InputError]) -> Result<(), FormatError> {
    let ids = errors
        .iter()
        .filter_map(|error| match error {
            InputError::DuplicateId { id } => Some(id.as_str()),
            _ => None,
        })
        .collect::<Vec<_>>();

    if ids.is_empty() {
        Ok(())
    } else {
        Err(FormatError::new(
            "E1000".to_string(),
            format!("duplicated stop ids: {}", ids.join(", ")),
            "make stop ids unique, only end can reuse origin id when it has the same coordinates".to_string(),
        ))
    }
}

/// Checks that stops have non-empty ids.
fn check_e1001_no_empty_ids(errors: &[InputError]) -> Result<(), FormatError> {
    let positions = errors
        .iter()
        .filter_map(|error| match error {
            InputError::EmptyId { position } => Some(format_position(position)),
            _ => None,
        })
        .collect::<Vec<_>>();

    if positions.is_empty() {
        Ok(())
    } else {
        Err(FormatError::new(
            "E1001".to_string(),
            format!("empty stop ids: {}", positions.join(", ")),
            "specify non-empty id for every stop".to_string(),
        ))
    }
}

/// Checks that stops have finite coordinates within valid ranges.
fn check_e1002_valid_coordinates(errors: &[InputError]) -> Result<(), FormatError> {
    let stops = errors
        .iter()
        .filter_map(|error| match error {
            InputError::InvalidCoordinate { position, id, lat, lng } => {
                Some(format!("'{id}' at {} (lat={lat}, lng={lng})", format_position(position)))
            }
            _ => None,
        })
        .collect::<Vec<_>>();

    if stops.is_empty() {
        Ok(())
    } else {
        Err(FormatError::new(
            "E1002".to_string(),
            format!("invalid coordinates: {}", stops.join(", ")),
            "latitude should be in [-90, 90] and longitude in [-180, 180] range".to_string(),
        ))
    }
}
