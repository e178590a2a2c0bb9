use super::*;
use crate::helpers::models::*;
use crate::models::problem::EuclideanDistance;

fn construct(request: &RouteRequest) -> Tour {
    NearestNeighbor::default().construct(request, &EuclideanDistance)
}

#[test]
fn can_construct_tour_without_destinations() {
    let request = test_request((0., 0.), &[], (5., 5.));

    let tour = construct(&request);

    assert_eq!(get_ids(tour.stops()), vec!["origin", "end"]);
}

#[test]
fn can_construct_tour_with_one_destination() {
    let request = test_request((0., 0.), &[("a", 10., 10.)], (0., 0.));

    let tour = construct(&request);

    assert_eq!(get_ids(tour.stops()), vec!["origin", "a", "end"]);
}

#[test]
fn can_always_select_closest_unvisited_destination() {
    let request = test_request((0., 0.), &[("c3", 3., 0.), ("c1", 1., 0.), ("c5", 5., 0.), ("c2", 2., 0.)], (6., 0.));

    let tour = construct(&request);

    assert_eq!(get_ids(tour.stops()), vec!["origin", "c1", "c2", "c3", "c5", "end"]);
}

#[test]
fn can_ignore_end_while_selecting_destinations() {
    let request = test_request((0., 0.), &[("far", 10., 0.), ("near", -1., 0.)], (9., 0.));

    let tour = construct(&request);

    assert_eq!(get_ids(tour.stops()), vec!["origin", "near", "far", "end"]);
}

parameterized_test! {can_break_ties_using_request_order, (destinations, expected), {
    can_break_ties_using_request_order_impl(destinations, expected);
}}

can_break_ties_using_request_order! {
    case01_clockwise: (vec!["n", "e", "s", "w"], vec!["n", "e", "s", "w"]),
    case02_counter_clockwise: (vec!["w", "s", "e", "n"], vec!["w", "s", "e", "n"]),
    case03_mixed: (vec!["e", "n", "w", "s"], vec!["e", "n", "w", "s"]),
}

fn can_break_ties_using_request_order_impl(destinations: Vec<&str>, expected: Vec<&str>) {
    let get_location = |id: &str| match id {
        "n" => (0., 1.),
        "e" => (1., 0.),
        "s" => (0., -1.),
        "w" => (-1., 0.),
        _ => unreachable!(),
    };
    let destinations = destinations
        .into_iter()
        .map(|id| {
            let (x, y) = get_location(id);
            (id, x, y)
        })
        .collect::<Vec<_>>();
    let request = test_request((0., 0.), destinations.as_slice(), (0., 0.));

    let tour = construct(&request);

    assert_eq!(get_ids(tour.interior()), expected);
}

#[test]
fn can_keep_every_destination_exactly_once() {
    let destinations = (0..20).map(|idx| (idx as f64 * 7.) % 11.).collect::<Vec<_>>();
    let ids = (0..20).map(|idx| format!("d{idx}")).collect::<Vec<_>>();
    let destinations =
        ids.iter().zip(destinations.iter()).map(|(id, &x)| (id.as_str(), x, x / 2.)).collect::<Vec<_>>();
    let request = test_request((0., 0.), destinations.as_slice(), (0., 0.));

    let tour = construct(&request);

    let mut actual = get_ids(tour.interior());
    actual.sort();
    let mut expected = ids.iter().map(|id| id.as_str()).collect::<Vec<_>>();
    expected.sort();
    assert_eq!(actual, expected);
}
