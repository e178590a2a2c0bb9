//! Optimizer configuration.

#![allow(missing_docs)]

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/config_test.rs"]
mod config_test;

use route_core::models::problem::{DistanceMetric, EuclideanDistance, HaversineDistance};
use route_core::solver::RouteOptimizerBuilder;
use route_core::utils::{Environment, Float, GenericError};
use serde::Deserialize;
use std::io::{BufReader, Read};
use std::sync::Arc;

/// An optimizer configuration.
#[derive(Clone, Default, Deserialize, Debug)]
pub struct Config {
    /// Specifies distance metric.
    pub metric: Option<MetricConfig>,
    /// Specifies resource limits.
    pub termination: Option<TerminationConfig>,
    /// Specifies telemetry configuration.
    pub telemetry: Option<TelemetryConfig>,
}

/// A distance metric configuration.
#[derive(Clone, Deserialize, Debug, PartialEq)]
#[serde(tag = "type")]
pub enum MetricConfig {
    /// A great-circle distance in kilometers.
    #[serde(rename(deserialize = "haversine"))]
    Haversine {
        /// A sphere radius in kilometers. Default is mean Earth radius.
        radius: Option<Float>,
    },

    /// A planar distance where coordinates are treated as cartesian ones.
    #[serde(rename(deserialize = "euclidean"))]
    Euclidean,
}

/// A resource limits configuration.
#[derive(Clone, Default, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TerminationConfig {
    /// Max amount of destinations in one request. Default is 1000.
    pub max_destinations: Option<usize>,
    /// Max amount of local search passes. Default is no limit.
    pub max_passes: Option<usize>,
    /// Max running time of one request in seconds. Default is no limit.
    pub max_time: Option<Float>,
}

#[derive(Clone, Default, Deserialize, Debug)]
pub struct TelemetryConfig {
    pub logging: Option<LoggingConfig>,
}

#[derive(Clone, Deserialize, Debug)]
pub struct LoggingConfig {
    /// Specifies whether logging is enabled. Default is false.
    pub enabled: bool,
}

impl MetricConfig {
    /// Creates metric configuration with default parameters from its name.
    pub fn from_name(name: &str) -> Result<Self, GenericError> {
        match name {
            "haversine" => Ok(MetricConfig::Haversine { radius: None }),
            "euclidean" => Ok(MetricConfig::Euclidean),
            _ => Err(format!("unknown metric type: '{name}'").into()),
        }
    }
}

/// Reads config from reader.
pub fn read_config<R: Read>(reader: BufReader<R>) -> Result<Config, GenericError> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'").into())
}

/// Creates a distance metric from its configuration. Haversine is used when nothing is specified.
pub fn create_metric(metric_config: &Option<MetricConfig>) -> Result<Arc<dyn DistanceMetric>, GenericError> {
    Ok(match metric_config {
        None | Some(MetricConfig::Haversine { radius: None }) => Arc::new(HaversineDistance::default()),
        Some(MetricConfig::Haversine { radius: Some(radius) }) => {
            if !radius.is_finite() || *radius <= 0. {
                return Err(format!("haversine radius should be a positive number, got: {radius}").into());
            }
            Arc::new(HaversineDistance::new(*radius))
        }
        Some(MetricConfig::Euclidean) => Arc::new(EuclideanDistance),
    })
}

/// Creates an optimizer builder from config.
pub fn create_builder_from_config(config: &Config) -> Result<RouteOptimizerBuilder, GenericError> {
    let builder = RouteOptimizerBuilder::default();

    let builder = configure_from_telemetry(builder, &config.telemetry);
    let builder = configure_from_metric(builder, &config.metric)?;
    let builder = configure_from_termination(builder, &config.termination);

    Ok(builder)
}

fn configure_from_telemetry(
    builder: RouteOptimizerBuilder,
    telemetry_config: &Option<TelemetryConfig>,
) -> RouteOptimizerBuilder {
    let is_logging_enabled = telemetry_config
        .as_ref()
        .and_then(|config| config.logging.as_ref())
        .is_some_and(|logging| logging.enabled);

    let environment = if is_logging_enabled { Environment::default() } else { Environment::silent() };

    builder.with_environment(Arc::new(environment))
}

fn configure_from_metric(
    builder: RouteOptimizerBuilder,
    metric_config: &Option<MetricConfig>,
) -> Result<RouteOptimizerBuilder, GenericError> {
    Ok(builder.with_metric(create_metric(metric_config)?))
}

fn configure_from_termination(
    mut builder: RouteOptimizerBuilder,
    termination_config: &Option<TerminationConfig>,
) -> RouteOptimizerBuilder {
    if let Some(config) = termination_config {
        if let Some(max_destinations) = config.max_destinations {
            builder = builder.with_max_destinations(Some(max_destinations));
        }
        builder = builder.with_max_passes(config.max_passes);
        builder = builder.with_max_time(config.max_time);
    }

    builder
}
