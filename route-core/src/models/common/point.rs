#[cfg(test)]
#[path = "../../../tests/unit/models/common/point_test.rs"]
mod point_test;

use crate::utils::Float;
use std::fmt;

/// Represents a stop: a geographic point with an identity. Two points are considered to be the
/// same stop when they share `id`.
#[derive(Clone, Debug, PartialEq)]
pub struct Point {
    /// An identifier, unique within a request.
    pub id: String,
    /// Latitude in degrees.
    pub lat: Float,
    /// Longitude in degrees.
    pub lng: Float,
}

impl Point {
    /// Creates a new instance of `Point`.
    pub fn new(id: impl Into<String>, lat: Float, lng: Float) -> Self {
        Self { id: id.into(), lat, lng }
    }

    /// Returns true if both points are located at the same coordinates.
    pub fn has_same_coordinates(&self, other: &Point) -> bool {
        self.lat == other.lat && self.lng == other.lng
    }

    /// Returns true if coordinates are finite and within latitude/longitude ranges.
    pub fn has_valid_coordinates(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90. ..=90.).contains(&self.lat)
            && (-180. ..=180.).contains(&self.lng)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (lat={}, lng={})", self.id, self.lat, self.lng)
    }
}
