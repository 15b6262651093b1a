//! Property tests for the Mudda partition.

use proptest::prelude::*;

use varsha_base::ALL_GRAHAS;
use varsha_tajika::{MUDDA_YEAR_DAYS, partition_mudda};
use varsha_time::Instant;

proptest! {
    #[test]
    fn total_is_360_days(jd in 2_300_000.0f64..2_500_000.0, owner_idx in 0usize..9) {
        let start = Instant::from_jd(jd).unwrap();
        let periods = partition_mudda(start, ALL_GRAHAS[owner_idx]);
        let total: f64 = periods.iter().map(|p| p.duration_days).sum();
        prop_assert_eq!(total, MUDDA_YEAR_DAYS);
        prop_assert_eq!(periods[0].graha, ALL_GRAHAS[owner_idx]);
    }

    #[test]
    fn contiguous_from_start(jd in 2_300_000.0f64..2_500_000.0, owner_idx in 0usize..9) {
        let start = Instant::from_jd(jd).unwrap();
        let periods = partition_mudda(start, ALL_GRAHAS[owner_idx]);
        prop_assert_eq!(periods[0].start, start);
        for w in periods.windows(2) {
            prop_assert_eq!(w[1].start, w[0].end());
        }
    }
}
