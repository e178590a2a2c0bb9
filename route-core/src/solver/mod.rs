//! The solver module orchestrates tour construction and local search to sequence stops of a route.
//!
//! Use [`RouteOptimizerBuilder`] to configure distance metric, heuristics and resource limits,
//! or [`optimize_route`] to run the optimizer with default settings.

#[cfg(test)]
#[path = "../../tests/unit/solver/optimizer_test.rs"]
mod optimizer_test;

use crate::construction::heuristics::{NearestNeighbor, TourConstructor};
use crate::models::problem::{DistanceMetric, HaversineDistance, RouteRequest};
use crate::models::solution::{RouteResult, RouteWarning};
use crate::utils::{CompositeQuota, Environment, Float, Quota, TimeQuota, Timer, parallel_collect};
use std::sync::Arc;

mod builder;
pub use self::builder::RouteOptimizerBuilder;

mod error;
pub use self::error::*;

pub mod search;
use self::search::{ExchangeTwoOpt, SearchContext, TourImprover};

mod validation;
pub use self::validation::validate_request;

/// A default max amount of destinations accepted in one request.
pub const DEFAULT_MAX_DESTINATIONS: usize = 1000;

/// Sequences stops of a route: validates the request, builds an initial tour, improves it and
/// assembles the result.
pub struct RouteOptimizer {
    metric: Arc<dyn DistanceMetric>,
    constructor: Arc<dyn TourConstructor>,
    improver: Arc<dyn TourImprover>,
    max_destinations: Option<usize>,
    max_passes: Option<usize>,
    max_time: Option<Float>,
    environment: Arc<Environment>,
}

impl RouteOptimizer {
    /// Sequences stops of the given request.
    pub fn optimize(&self, request: &RouteRequest) -> Result<RouteResult, RouteError> {
        let logger = self.environment.logger.clone();

        validate_request(request).map_err(|errors| {
            (logger)(&format!("request is rejected: {} input error(s)", errors.len()));
            RouteError::Input(errors)
        })?;

        let destinations = request.destinations.len();
        if let Some(limit) = self.max_destinations.filter(|&limit| destinations > limit) {
            (logger)(&format!("request is rejected: {destinations} destinations, max allowed is {limit}"));
            return Err(ResourceLimit::MaxDestinations { limit, actual: destinations }.into());
        }

        let timer = Timer::start();
        (logger)(&format!("sequencing route with {destinations} destination(s)"));

        let seed = self.constructor.construct(request, self.metric.as_ref());
        (logger)(&format!("initial tour distance: {:.3}", seed.total_distance(self.metric.as_ref())));

        let search_ctx = SearchContext {
            metric: self.metric.clone(),
            max_passes: self.max_passes,
            quota: self.create_quota(),
            logger: logger.clone(),
        };

        let tour = self.improver.improve(&search_ctx, seed).map_err(|limit| {
            (logger)(&format!("search is stopped: {limit}"));
            RouteError::ResourceLimitExceeded(limit)
        })?;

        let warnings = get_warnings(request);
        warnings.iter().for_each(|warning| (logger)(&format!("warning: {warning}")));

        let result = RouteResult::from_tour(tour, self.metric.as_ref()).with_warnings(warnings);
        (logger)(&format!(
            "route is sequenced in {}ms, total distance: {:.3}",
            timer.elapsed_millis(),
            result.total_distance
        ));

        Ok(result)
    }

    /// Sequences stops of many independent requests in parallel. Results are returned in
    /// the same order as requests.
    pub fn optimize_many(&self, requests: &[RouteRequest]) -> Vec<Result<RouteResult, RouteError>> {
        parallel_collect(requests, |request| self.optimize(request))
    }

    /// Returns distance metric used by the optimizer.
    pub fn metric(&self) -> Arc<dyn DistanceMetric> {
        self.metric.clone()
    }

    fn create_quota(&self) -> Option<Arc<dyn Quota + Send + Sync>> {
        let time_quota =
            self.max_time.map(|limit| Arc::new(TimeQuota::new(limit)) as Arc<dyn Quota + Send + Sync>);

        match (self.environment.quota.clone(), time_quota) {
            (Some(outer), Some(inner)) => Some(Arc::new(CompositeQuota::new(inner, outer))),
            (outer, inner) => inner.or(outer),
        }
    }
}

impl Default for RouteOptimizer {
    /// Creates optimizer with default settings which does not log anything.
    fn default() -> Self {
        Self {
            metric: Arc::new(HaversineDistance::default()),
            constructor: Arc::new(NearestNeighbor::default()),
            improver: Arc::new(ExchangeTwoOpt::default()),
            max_destinations: Some(DEFAULT_MAX_DESTINATIONS),
            max_passes: None,
            max_time: None,
            environment: Arc::new(Environment::silent()),
        }
    }
}

/// Sequences stops of the given request using haversine distance and default limits.
pub fn optimize_route(request: &RouteRequest) -> Result<RouteResult, RouteError> {
    RouteOptimizer::default().optimize(request)
}

fn get_warnings(request: &RouteRequest) -> Vec<RouteWarning> {
    let destinations = request.destinations.len();

    if destinations < 2 { vec![RouteWarning::DegenerateInput { destinations }] } else { vec![] }
}
