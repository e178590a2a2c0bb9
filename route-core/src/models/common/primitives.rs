use crate::utils::Float;

/// Specifies distance type. Geographic metrics report it in kilometers.
pub type Distance = Float;
