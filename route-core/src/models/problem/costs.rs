#[cfg(test)]
#[path = "../../../tests/unit/models/problem/costs_test.rs"]
mod costs_test;

use crate::models::common::{Distance, Point};
use crate::utils::Float;

/// A mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: Float = 6371.;

/// Provides the way to get a travel distance between two points.
///
/// Implementations are expected to be symmetric, non-negative and to return zero for points
/// located at the same coordinates: search algorithms rely on these properties.
pub trait DistanceMetric: Send + Sync {
    /// Returns distance between two points.
    fn distance(&self, from: &Point, to: &Point) -> Distance;
}

impl<F> DistanceMetric for F
where
    F: Fn(&Point, &Point) -> Distance + Send + Sync,
{
    fn distance(&self, from: &Point, to: &Point) -> Distance {
        (self)(from, to)
    }
}

/// Calculates great-circle distance on a sphere using haversine formula.
#[derive(Clone, Debug)]
pub struct HaversineDistance {
    radius: Float,
}

impl HaversineDistance {
    /// Creates a new instance of `HaversineDistance` for a sphere with given radius.
    pub fn new(radius: Float) -> Self {
        Self { radius }
    }

    /// Returns sphere radius.
    pub fn radius(&self) -> Float {
        self.radius
    }
}

impl Default for HaversineDistance {
    fn default() -> Self {
        Self::new(EARTH_RADIUS_KM)
    }
}

impl DistanceMetric for HaversineDistance {
    fn distance(&self, from: &Point, to: &Point) -> Distance {
        let d_lat = (to.lat - from.lat).to_radians();
        let d_lng = (to.lng - from.lng).to_radians();

        let h = (d_lat / 2.).sin().powi(2)
            + from.lat.to_radians().cos() * to.lat.to_radians().cos() * (d_lng / 2.).sin().powi(2);

        // NOTE rounding can push h slightly above 1 for antipodal points
        2. * self.radius * h.min(1.).sqrt().asin()
    }
}

/// Calculates planar euclidean distance treating longitude as `x` and latitude as `y`.
/// Mostly useful for projected data and for tests where exact numbers are required.
#[derive(Clone, Debug, Default)]
pub struct EuclideanDistance;

impl DistanceMetric for EuclideanDistance {
    fn distance(&self, from: &Point, to: &Point) -> Distance {
        let delta_x = to.lng - from.lng;
        let delta_y = to.lat - from.lat;

        (delta_x * delta_x + delta_y * delta_y).sqrt()
    }
}
