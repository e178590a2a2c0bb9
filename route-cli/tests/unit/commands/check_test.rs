use crate::cli::{get_app, run_subcommand};

const ROUND_TRIP_PROBLEM_PATH: &str = "../data/problems/rio_farms.problem.json";
const ROUND_TRIP_SOLUTION_PATH: &str = "../data/solutions/rio_farms.solution.json";

#[test]
fn can_run_check_solution() {
    let args = vec!["route-cli", "check", ROUND_TRIP_PROBLEM_PATH, "--solution-file", ROUND_TRIP_SOLUTION_PATH];
    let matches = get_app().try_get_matches_from(args).unwrap();

    run_subcommand(matches);
}

#[test]
fn can_run_check_solution_with_metric() {
    let args =
        vec!["route-cli", "check", ROUND_TRIP_PROBLEM_PATH, "-s", ROUND_TRIP_SOLUTION_PATH, "--metric", "haversine"];
    let matches = get_app().try_get_matches_from(args).unwrap();

    super::run_check(matches.subcommand_matches("check").unwrap()).unwrap();
}

#[test]
fn can_detect_metric_mismatch() {
    let args = vec!["check", ROUND_TRIP_PROBLEM_PATH, "-s", ROUND_TRIP_SOLUTION_PATH, "--metric", "euclidean"];
    let matches = super::get_check_app().try_get_matches_from(args).unwrap();

    let err = super::run_check(&matches).unwrap_err();

    assert!(err.to_string().starts_with("checker found 7 errors:"));
}

#[test]
fn can_require_solution_file() {
    get_app().try_get_matches_from(vec!["route-cli", "check", ROUND_TRIP_PROBLEM_PATH]).unwrap_err();
}
