use super::*;

struct FixedQuota(bool);

impl Quota for FixedQuota {
    fn is_reached(&self) -> bool {
        self.0
    }
}

#[test]
fn can_use_time_quota() {
    assert!(!TimeQuota::new(100.).is_reached());
    assert!(TimeQuota::new(-1.).is_reached());
}

parameterized_test! {can_use_composite_quota, (inner, outer, expected), {
    let quota = CompositeQuota::new(Arc::new(FixedQuota(inner)), Arc::new(FixedQuota(outer)));

    assert_eq!(quota.is_reached(), expected);
}}

can_use_composite_quota! {
    case01_none: (false, false, false),
    case02_inner: (true, false, true),
    case03_outer: (false, true, true),
    case04_both: (true, true, true),
}
