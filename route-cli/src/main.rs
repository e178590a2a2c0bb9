//! A command line interface to *route sequencing engine*.

mod commands;

mod cli {
    use super::commands::check::{get_check_app, run_check};
    use super::commands::create_write_buffer;
    use super::commands::solve::{get_solve_app, run_solve};
    use clap::{ArgMatches, Command};
    use std::process;

    pub fn get_app() -> Command {
        Command::new("Route Sequencing Engine")
            .version(env!("CARGO_PKG_VERSION"))
            .about("A command line interface to route sequencing engine")
            .subcommand(get_solve_app())
            .subcommand(get_check_app())
    }

    pub fn run_subcommand(arg_matches: ArgMatches) {
        if let Err(err) = match arg_matches.subcommand() {
            Some(("solve", solve_matches)) => run_solve(solve_matches, create_write_buffer),
            Some(("check", check_matches)) => run_check(check_matches),
            _ => Err("no argument with sub command was found, use -h to print help information".into()),
        } {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}

fn main() {
    let matches = cli::get_app().get_matches();
    cli::run_subcommand(matches);
}
