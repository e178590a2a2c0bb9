use super::*;
use crate::helpers::models::*;

#[test]
fn can_accept_valid_request() {
    let request = test_request((0., 0.), &[("a", 1., 1.), ("b", 2., 2.)], (3., 3.));

    assert_eq!(validate_request(&request), Ok(()));
}

#[test]
fn can_accept_round_trip_reusing_origin_id() {
    let request = RouteRequest::round_trip(test_point("depot", 0., 0.), vec![test_point("a", 1., 1.)]);

    assert_eq!(validate_request(&request), Ok(()));
}

#[test]
fn can_detect_empty_ids() {
    let request = RouteRequest::new(
        test_point("", 0., 0.),
        vec![test_point("a", 1., 1.), test_point("  ", 2., 2.)],
        test_point("e", 3., 3.),
    );

    assert_eq!(
        validate_request(&request),
        Err(vec![
            InputError::EmptyId { position: StopPosition::Origin },
            InputError::EmptyId { position: StopPosition::Destination(1) }
        ])
    );
}

parameterized_test! {can_detect_invalid_coordinates, (lat, lng), {
    can_detect_invalid_coordinates_impl(lat, lng);
}}

can_detect_invalid_coordinates! {
    case01_lat_above: (90.5, 0.),
    case02_lat_below: (-91., 0.),
    case03_lng_above: (0., 180.1),
    case04_lng_below: (0., -200.),
    case05_lat_infinite: (f64::INFINITY, 0.),
    case06_lng_neg_infinite: (0., f64::NEG_INFINITY),
}

fn can_detect_invalid_coordinates_impl(lat: f64, lng: f64) {
    let request = RouteRequest::new(
        Point::new("o", 0., 0.),
        vec![Point::new("a", 1., 1.), Point::new("b", lat, lng)],
        Point::new("e", 0., 0.),
    );

    assert_eq!(
        validate_request(&request),
        Err(vec![InputError::InvalidCoordinate {
            position: StopPosition::Destination(1),
            id: "b".to_string(),
            lat,
            lng
        }])
    );
}

#[test]
fn can_detect_nan_coordinates() {
    let request = RouteRequest::new(Point::new("o", f64::NAN, 0.), vec![], Point::new("e", 0., 0.));

    let errors = validate_request(&request).expect_err("should fail");

    assert_eq!(errors.len(), 1);
    assert!(matches!(
        &errors[0],
        InputError::InvalidCoordinate { position: StopPosition::Origin, id, .. } if id == "o"
    ));
}

parameterized_test! {can_detect_duplicate_ids, (origin, destinations, end, expected), {
    can_detect_duplicate_ids_impl(origin, destinations, end, expected);
}}

can_detect_duplicate_ids! {
    case01_destinations: (("o", 0., 0.), vec![("a", 1., 1.), ("a", 2., 2.)], ("e", 3., 3.), vec!["a"]),
    case02_destination_as_origin: (("o", 0., 0.), vec![("o", 1., 1.)], ("e", 3., 3.), vec!["o"]),
    case03_end_as_destination: (("o", 0., 0.), vec![("a", 1., 1.)], ("a", 3., 3.), vec!["a"]),
    case04_end_as_origin_other_location: (("o", 0., 0.), vec![("a", 1., 1.)], ("o", 3., 3.), vec!["o"]),
    case05_reported_once: (("o", 0., 0.), vec![("a", 1., 1.), ("a", 2., 2.), ("a", 3., 3.)], ("e", 3., 3.), vec!["a"]),
    case06_first_occurrence_order: (("o", 0., 0.), vec![("b", 1., 1.), ("a", 2., 2.), ("a", 3., 3.), ("b", 4., 4.)],
                                    ("e", 3., 3.), vec!["a", "b"]),
    case07_round_trip_with_duplicate: (("o", 0., 0.), vec![("o", 1., 1.)], ("o", 0., 0.), vec!["o"]),
}

fn can_detect_duplicate_ids_impl(
    origin: (&str, f64, f64),
    destinations: Vec<(&str, f64, f64)>,
    end: (&str, f64, f64),
    expected: Vec<&str>,
) {
    let request = RouteRequest::new(
        test_point(origin.0, origin.1, origin.2),
        destinations.into_iter().map(|(id, x, y)| test_point(id, x, y)).collect(),
        test_point(end.0, end.1, end.2),
    );

    assert_eq!(
        validate_request(&request),
        Err(expected.into_iter().map(|id| InputError::DuplicateId { id: id.to_string() }).collect::<Vec<_>>())
    );
}

#[test]
fn can_collect_all_violations_in_stable_order() {
    let request = RouteRequest::new(
        Point::new("o", 0., 0.),
        vec![Point::new("", 0., 0.), Point::new("a", 100., 0.), Point::new("a", 1., 1.)],
        Point::new("e", 0., 0.),
    );

    assert_eq!(
        validate_request(&request),
        Err(vec![
            InputError::EmptyId { position: StopPosition::Destination(0) },
            InputError::InvalidCoordinate {
                position: StopPosition::Destination(1),
                id: "a".to_string(),
                lat: 100.,
                lng: 0.
            },
            InputError::DuplicateId { id: "a".to_string() },
        ])
    );
}
