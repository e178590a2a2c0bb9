#[cfg(test)]
#[path = "../../../tests/unit/format/problem/reader_test.rs"]
mod reader_test;

use super::{ApiPoint, Problem};
use crate::format::MultiFormatError;
use crate::validation::ValidationContext;
use route_core::models::common::Point;
use route_core::models::problem::RouteRequest;

impl From<&ApiPoint> for Point {
    fn from(point: &ApiPoint) -> Self {
        Point::new(point.id.as_str(), point.lat, point.lng)
    }
}

impl From<&Point> for ApiPoint {
    fn from(point: &Point) -> Self {
        ApiPoint { id: point.id.clone(), lat: point.lat, lng: point.lng }
    }
}

/// Maps problem definition to a validated route request.
pub(crate) fn map_to_request(problem: &Problem) -> Result<RouteRequest, MultiFormatError> {
    let origin = Point::from(&problem.origin);
    let end = problem.end.as_ref().map(Point::from).unwrap_or_else(|| origin.clone());
    let destinations = problem.destinations.iter().map(Point::from).collect();

    let request = RouteRequest::new(origin, destinations, end);

    ValidationContext::new(&request).validate()?;

    Ok(request)
}
