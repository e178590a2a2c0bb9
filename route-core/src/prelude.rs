//! This module reimports commonly used types.

pub use crate::models::common::{Distance, Point};
pub use crate::models::problem::{DistanceMetric, EuclideanDistance, HaversineDistance, RouteRequest};
pub use crate::models::solution::{RouteResult, RouteWarning, Step, Tour};

pub use crate::solver::{InputError, ResourceLimit, RouteError, StopPosition};
pub use crate::solver::{DEFAULT_MAX_DESTINATIONS, RouteOptimizer, RouteOptimizerBuilder, optimize_route};

pub use crate::utils::{Environment, Float, GenericError, GenericResult, InfoLogger, Quota, TimeQuota};
pub use crate::utils::{CompositeQuota, Timer};
