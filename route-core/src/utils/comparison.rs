#[cfg(test)]
#[path = "../../tests/unit/utils/comparison_test.rs"]
mod comparison_test;

use crate::utils::Float;
use std::cmp::Ordering;

/// Compares floating point numbers treating NaN as the greatest value.
#[inline]
pub fn compare_floats(a: Float, b: Float) -> Ordering {
    match a.partial_cmp(&b) {
        Some(ordering) => ordering,
        None => match (a.is_nan(), b.is_nan()) {
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            _ => Ordering::Equal,
        },
    }
}

/// Checks whether two floats are equal within given relative tolerance.
/// Values close to zero are compared using the tolerance as an absolute one.
pub fn is_approx_equal(a: Float, b: Float, tolerance: Float) -> bool {
    let scale = a.abs().max(b.abs()).max(1.);

    (a - b).abs() <= tolerance * scale
}
