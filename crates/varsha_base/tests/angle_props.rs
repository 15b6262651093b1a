//! Property tests for ecliptic angle normalization.

use proptest::prelude::*;
use varsha_base::{angular_separation, normalize_360, normalize_pm180};

proptest! {
    #[test]
    fn normalize_is_idempotent_and_in_range(x in -1e7..1e7f64) {
        let once = normalize_360(x);
        prop_assert!((0.0..360.0).contains(&once));
        prop_assert_eq!(normalize_360(once), once);
    }

    #[test]
    fn signed_normalize_in_half_open_range(x in -1e7..1e7f64) {
        let s = normalize_pm180(x);
        prop_assert!(s > -180.0 && s <= 180.0);
        prop_assert!((normalize_360(s) - normalize_360(x)).abs() < 1e-6
            || (normalize_360(s) - normalize_360(x)).abs() > 360.0 - 1e-6);
    }

    #[test]
    fn separation_is_symmetric_and_folded(a in 0.0..360.0f64, b in 0.0..360.0f64) {
        let ab = angular_separation(a, b);
        let ba = angular_separation(b, a);
        prop_assert!((0.0..=180.0).contains(&ab));
        prop_assert!((ab - ba).abs() < 1e-9);
    }
}
