use super::*;
use crate::helpers::*;
use route_core::prelude::EuclideanDistance;

fn check_with_stops(stops: Vec<ApiPoint>) -> Result<(), Vec<String>> {
    let problem = create_planar_problem(&[("a", 1., 0.), ("b", 2., 0.)], Some((3., 0.)));
    let mut solution = solve_with_optimizer(&problem, &create_euclidean_optimizer());
    solution.plan.ordered_stops = stops;

    let ctx = CheckerContext::new(problem, solution, Arc::new(EuclideanDistance)).expect("cannot create context");

    check_assignment(&ctx)
}

#[test]
fn can_accept_valid_assignment() {
    let stops = vec![
        test_api_point("origin", 0., 0.),
        test_api_point("b", 0., 2.),
        test_api_point("a", 0., 1.),
        test_api_point("end", 0., 3.),
    ];

    assert_eq!(check_with_stops(stops), Ok(()));
}

#[test]
fn can_detect_wrong_endpoints() {
    let stops = vec![
        test_api_point("a", 0., 1.),
        test_api_point("origin", 0., 0.),
        test_api_point("b", 0., 2.),
        test_api_point("end", 0., 4.),
    ];

    let errors = check_with_stops(stops).expect_err("should fail");

    assert_eq!(
        errors,
        vec![
            "origin mismatch: expected 'origin', got 'a'".to_string(),
            "end mismatch: expected 'end', got 'end'".to_string(),
            "unknown stop in the route: 'origin'".to_string(),
            "stop is not visited: 'a'".to_string(),
        ]
    );
}

#[test]
fn can_detect_duplicated_and_missing_stops() {
    let stops = vec![
        test_api_point("origin", 0., 0.),
        test_api_point("a", 0., 1.),
        test_api_point("a", 0., 1.),
        test_api_point("end", 0., 3.),
    ];

    let errors = check_with_stops(stops).expect_err("should fail");

    assert_eq!(errors, vec!["stop is visited twice: 'a'".to_string(), "stop is not visited: 'b'".to_string()]);
}

#[test]
fn can_detect_moved_stop() {
    let stops = vec![
        test_api_point("origin", 0., 0.),
        test_api_point("a", 0., 1.),
        test_api_point("b", 5., 2.),
        test_api_point("end", 0., 3.),
    ];

    let errors = check_with_stops(stops).expect_err("should fail");

    assert_eq!(errors, vec!["stop 'b' has different coordinates than in the problem".to_string()]);
}

#[test]
fn can_detect_too_short_route() {
    let errors = check_with_stops(vec![test_api_point("origin", 0., 0.)]).expect_err("should fail");

    assert_eq!(errors[0], "expected at least 2 stops, got: 1");
}
