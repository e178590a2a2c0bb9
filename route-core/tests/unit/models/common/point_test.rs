use super::*;

#[test]
fn can_compare_coordinates() {
    let point = Point::new("a", 52.52, 13.40);

    assert!(point.has_same_coordinates(&Point::new("b", 52.52, 13.40)));
    assert!(!point.has_same_coordinates(&Point::new("a", 52.52, 13.41)));
}

parameterized_test! {can_detect_invalid_coordinates, (lat, lng, expected), {
    can_detect_invalid_coordinates_impl(lat, lng, expected);
}}

can_detect_invalid_coordinates! {
    case01_regular: (-22.41, -42.96, true),
    case02_bounds: (90., 180., true),
    case03_negative_bounds: (-90., -180., true),
    case04_lat_too_big: (90.0001, 0., false),
    case05_lng_too_small: (0., -180.5, false),
    case06_lat_nan: (f64::NAN, 0., false),
    case07_lng_infinite: (0., f64::INFINITY, false),
}

fn can_detect_invalid_coordinates_impl(lat: Float, lng: Float, expected: bool) {
    assert_eq!(Point::new("a", lat, lng).has_valid_coordinates(), expected);
}

#[test]
fn can_display_point() {
    assert_eq!(Point::new("depot", 1.5, -2.).to_string(), "depot (lat=1.5, lng=-2)");
}
