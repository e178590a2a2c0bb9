#[cfg(test)]
#[path = "../../tests/unit/commands/check_test.rs"]
mod check_test;

use super::*;
use clap::Command;
use route_cli::extensions::check::check_pragmatic_solution;
use route_cli::extensions::solve::config::{MetricConfig, create_metric};
use std::io::BufReader;

const PROBLEM_ARG_NAME: &str = "PROBLEM";
const SOLUTION_ARG_NAME: &str = "solution-file";
const METRIC_ARG_NAME: &str = "metric";

pub fn get_check_app() -> Command {
    Command::new("check")
        .about("Provides the way to check solution feasibility")
        .arg(Arg::new(PROBLEM_ARG_NAME).help("Sets the problem file to use").required(true).index(1))
        .arg(
            Arg::new(SOLUTION_ARG_NAME)
                .help("Sets solution file")
                .short('s')
                .long(SOLUTION_ARG_NAME)
                .required(true),
        )
        .arg(create_metric_arg(METRIC_ARG_NAME))
}

/// Runs check command.
pub fn run_check(matches: &ArgMatches) -> Result<(), GenericError> {
    let metric_config =
        matches.get_one::<String>(METRIC_ARG_NAME).map(|name| MetricConfig::from_name(name)).transpose()?;
    let metric = create_metric(&metric_config)?;

    let problem_file = matches
        .get_one::<String>(PROBLEM_ARG_NAME)
        .map(|path| BufReader::new(open_file(path, "problem")))
        .ok_or_else(|| GenericError::from("no problem file specified"))?;
    let solution_file = matches
        .get_one::<String>(SOLUTION_ARG_NAME)
        .map(|path| BufReader::new(open_file(path, "solution")))
        .ok_or_else(|| GenericError::from("no solution file specified"))?;

    check_pragmatic_solution(problem_file, solution_file, metric).map_err(format_checker_errors)
}
