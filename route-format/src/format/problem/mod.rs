//! Specifies logic to read problem from json input.

use crate::format::MultiFormatError;
use route_core::models::problem::RouteRequest;
use std::io::{BufReader, Read};

mod model;
pub use self::model::*;

mod reader;
use self::reader::map_to_request;

/// Reads specific problem definition from various sources.
pub trait PragmaticProblem {
    /// Reads problem defined in pragmatic format.
    fn read_pragmatic(self) -> Result<RouteRequest, MultiFormatError>;
}

impl<R: Read> PragmaticProblem for BufReader<R> {
    fn read_pragmatic(self) -> Result<RouteRequest, MultiFormatError> {
        let problem = deserialize_problem(self)?;

        map_to_request(&problem)
    }
}

impl PragmaticProblem for String {
    fn read_pragmatic(self) -> Result<RouteRequest, MultiFormatError> {
        let problem = deserialize_problem(BufReader::new(self.as_bytes()))?;

        map_to_request(&problem)
    }
}

impl PragmaticProblem for Problem {
    fn read_pragmatic(self) -> Result<RouteRequest, MultiFormatError> {
        map_to_request(&self)
    }
}

impl PragmaticProblem for &Problem {
    fn read_pragmatic(self) -> Result<RouteRequest, MultiFormatError> {
        map_to_request(self)
    }
}
