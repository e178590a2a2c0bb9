use super::*;
use crate::utils::{GenericError, GenericResult};

/// Provides configurable way to build route optimizer.
pub struct RouteOptimizerBuilder {
    metric: Arc<dyn DistanceMetric>,
    constructor: Arc<dyn TourConstructor>,
    improver: Arc<dyn TourImprover>,
    max_destinations: Option<usize>,
    max_passes: Option<usize>,
    max_time: Option<Float>,
    environment: Arc<Environment>,
}

impl Default for RouteOptimizerBuilder {
    fn default() -> Self {
        Self {
            metric: Arc::new(HaversineDistance::default()),
            constructor: Arc::new(NearestNeighbor::default()),
            improver: Arc::new(ExchangeTwoOpt::default()),
            max_destinations: Some(DEFAULT_MAX_DESTINATIONS),
            max_passes: None,
            max_time: None,
            environment: Arc::new(Environment::default()),
        }
    }
}

impl RouteOptimizerBuilder {
    /// Sets distance metric.
    /// Default is haversine distance with mean Earth radius.
    pub fn with_metric(mut self, metric: Arc<dyn DistanceMetric>) -> Self {
        self.metric = metric;
        self
    }

    /// Sets tour constructor.
    /// Default is nearest neighbor.
    pub fn with_constructor(mut self, constructor: Arc<dyn TourConstructor>) -> Self {
        self.constructor = constructor;
        self
    }

    /// Sets tour improver.
    /// Default is 2-opt.
    pub fn with_improver(mut self, improver: Arc<dyn TourImprover>) -> Self {
        self.improver = improver;
        self
    }

    /// Sets max amount of destinations in one request.
    /// Default is 1000.
    pub fn with_max_destinations(mut self, limit: Option<usize>) -> Self {
        self.max_destinations = limit;
        self
    }

    /// Sets max amount of local search passes.
    /// Default is None.
    pub fn with_max_passes(mut self, limit: Option<usize>) -> Self {
        self.max_passes = limit;
        self
    }

    /// Sets max running time limit in seconds for a single request.
    /// Default is None.
    pub fn with_max_time(mut self, limit: Option<Float>) -> Self {
        self.max_time = limit;
        self
    }

    /// Sets environment with logger and global quota.
    /// Default is stdout logger without quota.
    pub fn with_environment(mut self, environment: Arc<Environment>) -> Self {
        self.environment = environment;
        self
    }

    /// Builds route optimizer with parameters specified.
    pub fn build(self) -> GenericResult<RouteOptimizer> {
        let logger = self.environment.logger.clone();

        match self.max_destinations {
            Some(limit) => (logger)(&format!("configured to use max-destinations {limit}")),
            None => (logger)("configured to use no max-destinations limit"),
        }

        if let Some(limit) = self.max_passes {
            if limit == 0 {
                return Err(GenericError::from("max-passes should be greater than zero"));
            }
            (logger)(&format!("configured to use max-passes {limit}"));
        }

        if let Some(limit) = self.max_time {
            if !limit.is_finite() || limit <= 0. {
                return Err(format!("max-time should be a positive number, got: {limit}").into());
            }
            (logger)(&format!("configured to use max-time {limit}s"));
        }

        Ok(RouteOptimizer {
            metric: self.metric,
            constructor: self.constructor,
            improver: self.improver,
            max_destinations: self.max_destinations,
            max_passes: self.max_passes,
            max_time: self.max_time,
            environment: self.environment,
        })
    }
}
