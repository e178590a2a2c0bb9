use super::*;
use std::sync::Arc;

fn point(lat: Float, lng: Float) -> Point {
    Point::new("p", lat, lng)
}

#[test]
fn can_calculate_haversine_distance_for_one_degree() {
    let distance = HaversineDistance::default().distance(&point(0., 0.), &point(0., 1.));

    assert!((distance - 111.19).abs() < 0.5, "unexpected distance: {distance}");
}

#[test]
fn can_calculate_haversine_distance_for_antipodal_points() {
    let distance = HaversineDistance::default().distance(&point(0., 0.), &point(0., 180.));

    assert!((distance - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 1E-6);
}

parameterized_test! {can_calculate_symmetric_haversine_distance, (from, to), {
    can_calculate_symmetric_haversine_distance_impl(point(from.0, from.1), point(to.0, to.1));
}}

can_calculate_symmetric_haversine_distance! {
    case01_brazil: ((-22.90, -43.23), (-22.41, -42.96)),
    case02_across_equator: ((10.5, 20.), (-35.1, 140.7)),
    case03_across_meridian: ((51.47, -0.45), (48.85, 2.35)),
    case04_same_point: ((45., 45.), (45., 45.)),
}

fn can_calculate_symmetric_haversine_distance_impl(from: Point, to: Point) {
    let metric = HaversineDistance::default();

    let forward = metric.distance(&from, &to);
    let backward = metric.distance(&to, &from);

    assert!(forward >= 0.);
    assert!((forward - backward).abs() < 1E-9);
}

#[test]
fn can_return_zero_for_same_coordinates() {
    let metric = HaversineDistance::default();

    assert_eq!(metric.distance(&point(-22.41, -42.96), &point(-22.41, -42.96)), 0.);
    assert_eq!(EuclideanDistance.distance(&point(3., 4.), &point(3., 4.)), 0.);
}

#[test]
fn can_use_custom_radius() {
    let unit = HaversineDistance::new(1.);

    assert_eq!(unit.radius(), 1.);
    assert!((unit.distance(&point(0., 0.), &point(0., 90.)) - std::f64::consts::FRAC_PI_2).abs() < 1E-9);
}

#[test]
fn can_calculate_euclidean_distance() {
    assert_eq!(EuclideanDistance.distance(&point(0., 0.), &point(3., 4.)), 5.);
    assert_eq!(EuclideanDistance.distance(&point(3., 4.), &point(0., 0.)), 5.);
}

#[test]
fn can_use_closure_as_metric() {
    let metric: Arc<dyn DistanceMetric> = Arc::new(|from: &Point, to: &Point| (from.lat - to.lat).abs());

    assert_eq!(metric.distance(&point(1., 10.), &point(4., -10.)), 3.);
}
