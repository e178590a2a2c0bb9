use super::*;
use crate::helpers::models::*;
use crate::models::problem::EuclideanDistance;

fn create_test_tour() -> Tour {
    Tour::new(
        test_point("o", 0., 0.),
        vec![test_point("a", 1., 0.), test_point("b", 2., 0.), test_point("c", 3., 0.)],
        test_point("e", 4., 0.),
    )
}

#[test]
fn can_create_tour_with_fixed_endpoints() {
    let tour = create_test_tour();

    assert_eq!(tour.total(), 5);
    assert_eq!(tour.origin().id, "o");
    assert_eq!(tour.end().id, "e");
    assert_eq!(get_ids(tour.interior()), vec!["a", "b", "c"]);
    assert_eq!(tour.get(1).map(|stop| stop.id.as_str()), Some("a"));
    assert!(tour.get(5).is_none());
}

#[test]
fn can_create_tour_without_interior() {
    let tour = Tour::new(test_point("o", 0., 0.), vec![], test_point("o", 0., 0.));

    assert_eq!(tour.total(), 2);
    assert!(tour.interior().is_empty());
    assert_eq!(tour.legs().count(), 1);
}

#[test]
fn can_reverse_interior_range() {
    let mut tour = create_test_tour();

    tour.reverse(1, 3);

    assert_eq!(get_ids(tour.stops()), vec!["o", "c", "b", "a", "e"]);
}

#[test]
#[should_panic]
fn cannot_reverse_origin() {
    create_test_tour().reverse(0, 2);
}

#[test]
fn can_calculate_total_distance() {
    let mut tour = create_test_tour();
    assert_eq!(tour.total_distance(&EuclideanDistance), 4.);

    tour.reverse(1, 2);
    assert_eq!(tour.total_distance(&EuclideanDistance), 6.);
}
