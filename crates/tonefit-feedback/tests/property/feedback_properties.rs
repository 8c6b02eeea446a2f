//! Property tests for adaptive weights and aggregation invariants.

use std::sync::Arc;

use proptest::prelude::*;

use tonefit_core::config::FeedbackConfig;
use tonefit_core::models::{AggregateStat, FeedbackEntry};
use tonefit_feedback::analysis::adaptive_weight;
use tonefit_feedback::{FeedbackAnalyzer, InMemoryFeedbackStore};

fn ratings_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(1_u8..=5, 1..40)
}

proptest! {
    #[test]
    fn weight_is_bounded(ratings in ratings_strategy()) {
        let config = FeedbackConfig::default();
        let stat = AggregateStat::from_ratings(&ratings).unwrap();
        let w = adaptive_weight(&stat, &config);
        if ratings.len() >= config.min_samples {
            prop_assert!((0.5..=1.0).contains(&w), "weight {}", w);
        } else {
            prop_assert_eq!(w, config.default_weight);
        }
    }
}

proptest! {
    #[test]
    fn weight_is_monotonic_in_mean(a in ratings_strategy(), b in ratings_strategy()) {
        prop_assume!(a.len() >= 2 && b.len() >= 2);
        let config = FeedbackConfig::default();
        let sa = AggregateStat::from_ratings(&a).unwrap();
        let sb = AggregateStat::from_ratings(&b).unwrap();
        let (wa, wb) = (adaptive_weight(&sa, &config), adaptive_weight(&sb, &config));
        if sa.mean <= sb.mean {
            prop_assert!(wa <= wb);
        } else {
            prop_assert!(wa >= wb);
        }
    }
}

proptest! {
    #[test]
    fn combination_counts_match_platform_mentions(
        raw in prop::collection::vec(
            (0_usize..3, prop::collection::vec(0_usize..3, 0..3), 1_u8..=5),
            1..30,
        )
    ) {
        let tones = ["fun", "professional", "semi-fun"];
        let platforms = ["Meta", "Google", "LinkedIn"];
        let entries: Vec<FeedbackEntry> = raw
            .iter()
            .map(|(t, ps, r)| {
                FeedbackEntry::new(tones[*t], ps.iter().map(|p| platforms[*p].to_string()).collect(), *r)
                    .unwrap()
            })
            .collect();
        let mentions: usize = entries.iter().map(|e| e.platforms.len()).sum();

        let analyzer = FeedbackAnalyzer::new(
            Arc::new(InMemoryFeedbackStore::with_entries(entries)),
            FeedbackConfig::default(),
        );
        let analysis = analyzer.analyze_patterns();
        let report = analysis.report().unwrap();
        let counted: usize = report.combo_stats.values().map(|c| c.stat.sample_count).sum();
        prop_assert_eq!(counted, mentions);
        prop_assert_eq!(report.total_feedback, raw.len());
        prop_assert!(report.average_rating >= 1.0 && report.average_rating <= 5.0);
    }
}
