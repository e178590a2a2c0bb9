//! Contains local search logic which improves an initial tour.

use crate::models::problem::DistanceMetric;
use crate::models::solution::Tour;
use crate::solver::ResourceLimit;
use crate::utils::{InfoLogger, Quota};
use std::sync::Arc;

mod exchange_2opt;
pub use self::exchange_2opt::ExchangeTwoOpt;

/// Keeps everything needed by the local search to improve a single tour.
pub struct SearchContext {
    /// A distance metric used to evaluate edges.
    pub metric: Arc<dyn DistanceMetric>,
    /// Max amount of full passes over the tour.
    pub max_passes: Option<usize>,
    /// A computation quota.
    pub quota: Option<Arc<dyn Quota + Send + Sync>>,
    /// An information logger.
    pub logger: InfoLogger,
}

impl SearchContext {
    /// Checks whether one more pass is allowed after the given amount of completed passes.
    pub fn check_budget(&self, passes: usize) -> Result<(), ResourceLimit> {
        if let Some(limit) = self.max_passes.filter(|&limit| passes >= limit) {
            return Err(ResourceLimit::MaxPasses { limit });
        }

        if self.quota.as_ref().is_some_and(|quota| quota.is_reached()) {
            return Err(ResourceLimit::QuotaReached);
        }

        Ok(())
    }
}

/// Refines a tour keeping its origin and end in place.
pub trait TourImprover: Send + Sync {
    /// Improves given tour. Returned tour is never longer than the given one.
    fn improve(&self, search_ctx: &SearchContext, tour: Tour) -> Result<Tour, ResourceLimit>;
}
