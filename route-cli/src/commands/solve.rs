#[cfg(test)]
#[path = "../../tests/unit/commands/solve_test.rs"]
mod solve_test;

use super::*;
use clap::Command;
use route_cli::extensions::solve::config::*;
use route_core::models::solution::RouteResult;
use route_core::solver::RouteOptimizer;
use route_format::checker::CheckerContext;
use route_format::format::MultiFormatError;
use route_format::format::problem::{PragmaticProblem, Problem, deserialize_problem};
use route_format::format::solution::{PragmaticSolution, create_solution};
use std::io::BufReader;

const PROBLEM_ARG_NAME: &str = "PROBLEM";
const OUT_RESULT_ARG_NAME: &str = "out-result";
const GEO_JSON_ARG_NAME: &str = "geo-json";
const CONFIG_ARG_NAME: &str = "config";
const MAX_DESTINATIONS_ARG_NAME: &str = "max-destinations";
const MAX_PASSES_ARG_NAME: &str = "max-passes";
const TIME_ARG_NAME: &str = "max-time";
const METRIC_ARG_NAME: &str = "metric";
const LOG_ARG_NAME: &str = "log";
const CHECK_ARG_NAME: &str = "check";

pub fn get_solve_app() -> Command {
    Command::new("solve")
        .about("Sequences stops of one or many routes")
        .arg(
            Arg::new(PROBLEM_ARG_NAME)
                .help("Sets the problem file(s) to use")
                .required(true)
                .num_args(1..)
                .index(1),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(GEO_JSON_ARG_NAME)
                .help("Specifies path to solution output in geo json format")
                .short('g')
                .long(GEO_JSON_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to optimizer configuration file")
                .short('c')
                .long(CONFIG_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(MAX_DESTINATIONS_ARG_NAME)
                .help("Specifies max amount of destinations in one problem")
                .long(MAX_DESTINATIONS_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(MAX_PASSES_ARG_NAME)
                .help("Specifies max amount of local search passes")
                .long(MAX_PASSES_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(TIME_ARG_NAME)
                .help("Specifies max time to sequence one problem in seconds")
                .short('t')
                .long(TIME_ARG_NAME)
                .required(false),
        )
        .arg(create_metric_arg(METRIC_ARG_NAME))
        .arg(
            Arg::new(LOG_ARG_NAME)
                .help("Specifies whether default logging is enabled")
                .long(LOG_ARG_NAME)
                .required(false)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(CHECK_ARG_NAME)
                .help("Specifies whether final solution should be checked for feasibility")
                .long(CHECK_ARG_NAME)
                .required(false)
                .action(ArgAction::SetTrue),
        )
}

/// Runs solve command.
pub fn run_solve(
    matches: &ArgMatches,
    out_writer_func: fn(Option<File>) -> BufWriter<Box<dyn Write>>,
) -> Result<(), GenericError> {
    let config = matches
        .get_one::<String>(CONFIG_ARG_NAME)
        .map(|path| read_config(BufReader::new(open_file(path, "config"))))
        .transpose()?
        .unwrap_or_default();
    let config = apply_arg_overrides(config, matches)?;

    let optimizer = create_builder_from_config(&config)?.build()?;

    let problems = matches
        .get_many::<String>(PROBLEM_ARG_NAME)
        .map(|paths| paths.map(|path| read_problem(path)).collect::<Result<Vec<_>, _>>())
        .unwrap_or_else(|| Err("no problem file specified".into()))?;

    let results = solve_problems(&optimizer, problems.as_slice())?;

    if matches.get_flag(CHECK_ARG_NAME) {
        check_results(&optimizer, problems.as_slice(), results.as_slice())?;
    }

    if let Some(path) = matches.get_one::<String>(GEO_JSON_ARG_NAME) {
        let geo_buffer = create_write_buffer(Some(create_file(path, "out geojson")));
        if let Some(result) = results.first() {
            result.write_geo_json(geo_buffer)?;
        }
    }

    let out_result = matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out solution"));
    let out_buffer = out_writer_func(out_result);

    match results.as_slice() {
        [result] => result.write_pragmatic_json(out_buffer),
        _ => {
            let solutions = results.iter().map(create_solution).collect::<Vec<_>>();
            serde_json::to_writer_pretty(out_buffer, &solutions)
                .map_err(|err| format!("cannot write solutions: '{err}'").into())
        }
    }
}

fn apply_arg_overrides(mut config: Config, matches: &ArgMatches) -> Result<Config, GenericError> {
    let max_destinations = parse_int_value::<usize>(matches, MAX_DESTINATIONS_ARG_NAME, "max destinations")?;
    let max_passes = parse_int_value::<usize>(matches, MAX_PASSES_ARG_NAME, "max passes")?;
    let max_time = parse_float_value::<f64>(matches, TIME_ARG_NAME, "max time")?;

    if max_destinations.is_some() || max_passes.is_some() || max_time.is_some() {
        let termination = config.termination.get_or_insert_with(TerminationConfig::default);
        termination.max_destinations = max_destinations.or(termination.max_destinations);
        termination.max_passes = max_passes.or(termination.max_passes);
        termination.max_time = max_time.or(termination.max_time);
    }

    if let Some(metric) = matches.get_one::<String>(METRIC_ARG_NAME) {
        config.metric = Some(MetricConfig::from_name(metric)?);
    }

    if matches.get_flag(LOG_ARG_NAME) {
        config.telemetry = Some(TelemetryConfig { logging: Some(LoggingConfig { enabled: true }) });
    }

    Ok(config)
}

fn read_problem(path: &str) -> Result<Problem, GenericError> {
    deserialize_problem(BufReader::new(open_file(path, "problem"))).map_err(|errors| errors.to_json().into())
}

fn solve_problems(optimizer: &RouteOptimizer, problems: &[Problem]) -> Result<Vec<RouteResult>, GenericError> {
    let requests = problems
        .iter()
        .map(|problem| problem.read_pragmatic())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|errors| GenericError::from(errors.to_json()))?;

    optimizer
        .optimize_many(requests.as_slice())
        .into_iter()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| MultiFormatError::from(err).to_json().into())
}

fn check_results(
    optimizer: &RouteOptimizer,
    problems: &[Problem],
    results: &[RouteResult],
) -> Result<(), GenericError> {
    problems.iter().zip(results.iter()).try_for_each(|(problem, result)| {
        CheckerContext::new(problem.clone(), create_solution(result), optimizer.metric())
            .and_then(|ctx| ctx.check())
            .map_err(format_checker_errors)
    })
}
