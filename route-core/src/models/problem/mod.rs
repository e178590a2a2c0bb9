//! Problem domain models.

mod costs;
pub use self::costs::*;

mod request;
pub use self::request::RouteRequest;
