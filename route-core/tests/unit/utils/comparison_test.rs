use super::*;

parameterized_test! {can_compare_floats, (a, b, expected), {
    assert_eq!(compare_floats(a, b), expected);
}}

can_compare_floats! {
    case01_less: (1., 2., Ordering::Less),
    case02_equal: (2., 2., Ordering::Equal),
    case03_greater: (3., 2., Ordering::Greater),
    case04_nan_greater: (Float::NAN, 2., Ordering::Greater),
    case05_nan_less: (2., Float::NAN, Ordering::Less),
    case06_both_nan: (Float::NAN, Float::NAN, Ordering::Equal),
}

parameterized_test! {can_check_approx_equality, (a, b, expected), {
    assert_eq!(is_approx_equal(a, b, 1E-6), expected);
}}

can_check_approx_equality! {
    case01_same: (10., 10., true),
    case02_relative_close: (1000., 1000.0005, true),
    case03_relative_far: (1000., 1000.01, false),
    case04_near_zero: (0., 1E-7, true),
    case05_near_zero_far: (0., 1E-5, false),
}
