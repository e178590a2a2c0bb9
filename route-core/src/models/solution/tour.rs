#[cfg(test)]
#[path = "../../../tests/unit/models/solution/tour_test.rs"]
mod tour_test;

use crate::models::common::{Distance, Point};
use crate::models::problem::DistanceMetric;

/// Represents a visiting sequence anchored by a fixed start and a fixed end: the first stop is
/// always the origin, the last one is always the end, the interior holds destinations.
#[derive(Clone, Debug, PartialEq)]
pub struct Tour {
    stops: Vec<Point>,
}

impl Tour {
    /// Creates a new instance of `Tour`.
    pub fn new(origin: Point, interior: Vec<Point>, end: Point) -> Self {
        let mut stops = Vec::with_capacity(interior.len() + 2);
        stops.push(origin);
        stops.extend(interior);
        stops.push(end);

        Self { stops }
    }

    /// Returns all stops including origin and end.
    pub fn stops(&self) -> &[Point] {
        self.stops.as_slice()
    }

    /// Returns stops between origin and end.
    pub fn interior(&self) -> &[Point] {
        &self.stops[1..self.stops.len() - 1]
    }

    /// Returns the first stop of the tour.
    pub fn origin(&self) -> &Point {
        &self.stops[0]
    }

    /// Returns the last stop of the tour.
    pub fn end(&self) -> &Point {
        &self.stops[self.stops.len() - 1]
    }

    /// Returns stop at given index.
    pub fn get(&self, index: usize) -> Option<&Point> {
        self.stops.get(index)
    }

    /// Returns total amount of stops including origin and end.
    pub fn total(&self) -> usize {
        self.stops.len()
    }

    /// Reverses stops in range `[start, end]`. Origin and end cannot be moved.
    pub fn reverse(&mut self, start: usize, end: usize) {
        assert!(start > 0 && end < self.stops.len() - 1, "cannot move origin or end of the tour");

        self.stops[start..=end].reverse();
    }

    /// Returns an iterator over consecutive pairs of stops.
    pub fn legs(&self) -> impl Iterator<Item = (&Point, &Point)> + '_ {
        self.stops.windows(2).map(|pair| (&pair[0], &pair[1]))
    }

    /// Calculates total distance of the tour with given metric.
    pub fn total_distance(&self, metric: &dyn DistanceMetric) -> Distance {
        self.legs().map(|(from, to)| metric.distance(from, to)).sum()
    }

    /// Consumes the tour returning its stops.
    pub fn into_stops(self) -> Vec<Point> {
        self.stops
    }
}
