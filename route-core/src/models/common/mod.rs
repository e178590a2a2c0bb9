//! Common models.

mod point;
pub use self::point::Point;

mod primitives;
pub use self::primitives::*;
