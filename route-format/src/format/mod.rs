//! This module defines logic to serialize/deserialize problem in json format and create and
//! write solution.

use crate::validation::map_input_errors;
use route_core::solver::{ResourceLimit, RouteError};
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod problem;
pub mod solution;

/// A format error.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct FormatError {
    /// An error code in registry.
    pub code: String,
    /// A possible error cause.
    pub cause: String,
    /// An action to take in order to recover from error.
    pub action: String,
}

impl FormatError {
    /// Creates a new instance of `FormatError`.
    pub fn new(code: String, cause: String, action: String) -> Self {
        Self { code, cause, action }
    }

    /// Serializes error into json string.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| self.to_string())
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, cause: '{}', action: '{}'.", self.code, self.cause, self.action)
    }
}

impl std::error::Error for FormatError {}

/// Keeps multiple format errors.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct MultiFormatError {
    /// Inner errors.
    pub errors: Vec<FormatError>,
}

impl MultiFormatError {
    /// Formats multiple format errors into json string.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(&self.errors).unwrap_or_else(|_| self.to_string())
    }
}

impl fmt::Display for MultiFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.errors.iter().map(|err| err.to_string()).collect::<Vec<_>>().join("\n"))
    }
}

impl std::error::Error for MultiFormatError {}

impl From<Vec<FormatError>> for MultiFormatError {
    fn from(errors: Vec<FormatError>) -> Self {
        Self { errors }
    }
}

impl From<FormatError> for MultiFormatError {
    fn from(error: FormatError) -> Self {
        Self { errors: vec![error] }
    }
}

impl IntoIterator for MultiFormatError {
    type Item = FormatError;
    type IntoIter = std::vec::IntoIter<FormatError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl From<RouteError> for MultiFormatError {
    fn from(error: RouteError) -> Self {
        match error {
            RouteError::Input(errors) => map_input_errors(errors.as_slice()).into(),
            RouteError::ResourceLimitExceeded(limit) => {
                let action = match &limit {
                    ResourceLimit::MaxDestinations { .. } => {
                        "reduce amount of destinations or increase max-destinations limit"
                    }
                    ResourceLimit::MaxPasses { .. } => "increase max-passes limit or remove it",
                    ResourceLimit::QuotaReached => "increase max-time limit or remove it",
                };

                FormatError::new("E1100".to_string(), format!("resource limit exceeded: {limit}"), action.to_string())
                    .into()
            }
        }
    }
}
