//! Adaptive weights: the only feedback signal handed downstream.

use std::collections::BTreeMap;

use tonefit_core::config::FeedbackConfig;
use tonefit_core::models::AggregateStat;

use super::aggregate::Aggregates;

/// Weight for one combination: `0.5 + 0.5 * mean / 5` with enough samples,
/// the configured default otherwise. Monotonic in the mean, within [0.5, 1.0]
/// for ratings in 1..=5.
pub fn adaptive_weight(stat: &AggregateStat, config: &FeedbackConfig) -> f64 {
    if stat.has_evidence(config.min_samples) {
        0.5 + 0.5 * (stat.mean / 5.0)
    } else {
        config.default_weight
    }
}

/// Weights for every combination present in the snapshot, keyed `"<tone>_<platform>"`.
pub fn adaptive_weights(agg: &Aggregates, config: &FeedbackConfig) -> BTreeMap<String, f64> {
    agg.combination_stats()
        .map(|(key, stat, _)| (key.to_string(), adaptive_weight(&stat, config)))
        .collect()
}
