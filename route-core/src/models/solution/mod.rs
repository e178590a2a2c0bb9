//! Solution domain models.

mod result;
pub use self::result::*;

mod tour;
pub use self::tour::Tour;
