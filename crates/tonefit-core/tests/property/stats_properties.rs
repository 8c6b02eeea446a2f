//! Property tests for rating aggregation and timestamp parsing.

use proptest::prelude::*;

use tonefit_core::models::{parse_timestamp, AggregateStat, CombinationKey};

proptest! {
    #[test]
    fn mean_lies_between_min_and_max(ratings in prop::collection::vec(1_u8..=5, 1..50)) {
        let stat = AggregateStat::from_ratings(&ratings).unwrap();
        let min = f64::from(*ratings.iter().min().unwrap());
        let max = f64::from(*ratings.iter().max().unwrap());
        prop_assert!(stat.mean >= min - 1e-12 && stat.mean <= max + 1e-12);
        prop_assert_eq!(stat.sample_count, ratings.len());
        prop_assert!(stat.sample_stdev >= 0.0);
        if ratings.len() < 2 {
            prop_assert_eq!(stat.sample_stdev, 0.0);
        }
    }
}

proptest! {
    #[test]
    fn generated_dates_parse(y in 2000_i32..2100, m in 1_u32..=12, d in 1_u32..=28, h in 0_u32..24) {
        let bare = format!("{y:04}-{m:02}-{d:02}");
        let naive = format!("{bare}T{h:02}:15:00.250000");
        let zoned = format!("{bare}T{h:02}:15:00Z");
        prop_assert!(parse_timestamp(&bare).is_some());
        prop_assert!(parse_timestamp(&naive).is_some());
        prop_assert!(parse_timestamp(&zoned).is_some());
    }
}

proptest! {
    #[test]
    fn combination_key_renders_both_parts(tone in "[a-z_-]{1,12}", platform in "[A-Za-z_]{1,12}") {
        let key = CombinationKey::new(tone.clone(), platform.clone());
        prop_assert_eq!(key.to_string(), format!("{tone}_{platform}"));
    }
}
