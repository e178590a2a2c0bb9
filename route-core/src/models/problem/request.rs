use crate::models::common::Point;

/// Specifies a route sequencing request: a fixed start, stops to visit exactly once and a fixed end.
///
/// `end` is always a separate tour node, even when it is located at the same coordinates as `origin`.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteRequest {
    /// A start of the route.
    pub origin: Point,
    /// Stops to visit. Their relative order is used to break ties during construction.
    pub destinations: Vec<Point>,
    /// An end of the route.
    pub end: Point,
}

impl RouteRequest {
    /// Creates a new instance of `RouteRequest`.
    pub fn new(origin: Point, destinations: Vec<Point>, end: Point) -> Self {
        Self { origin, destinations, end }
    }

    /// Creates a request which returns back to the origin.
    pub fn round_trip(origin: Point, destinations: Vec<Point>) -> Self {
        let end = origin.clone();

        Self { origin, destinations, end }
    }

    /// Returns true if the route returns to its starting point.
    pub fn is_round_trip(&self) -> bool {
        self.origin.id == self.end.id && self.origin.has_same_coordinates(&self.end)
    }
}
