use serde::{Deserialize, Serialize};

use super::defaults;

/// Feedback analysis and persistence configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackConfig {
    /// Path to the feedback event log.
    pub store_path: String,
    /// Combinations with a mean strictly below this are low performing.
    pub low_performance_mean: f64,
    /// Combinations with a mean at or above this are high performing.
    pub high_performance_mean: f64,
    /// Minimum samples before a combination is classified or re-weighted.
    pub min_samples: usize,
    /// Tones averaging below this get a revision recommendation.
    pub tone_revision_threshold: f64,
    /// Tones averaging above this are recommended as reference material.
    pub tone_reference_threshold: f64,
    /// Platforms whose rating stdev exceeds this are flagged as inconsistent.
    pub platform_variance_threshold: f64,
    /// Overall averages below this produce a general warning.
    pub overall_warning_threshold: f64,
    /// Fewer entries than this produce a "limited data" recommendation.
    pub limited_data_threshold: usize,
    /// Weight reported for combinations without enough evidence.
    pub default_weight: f64,
    /// Day assigned to entries whose timestamp cannot be parsed (YYYY-MM-DD).
    pub default_trend_date: String,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            store_path: defaults::DEFAULT_FEEDBACK_DB_FILENAME.to_string(),
            low_performance_mean: defaults::DEFAULT_LOW_PERFORMANCE_MEAN,
            high_performance_mean: defaults::DEFAULT_HIGH_PERFORMANCE_MEAN,
            min_samples: defaults::DEFAULT_MIN_SAMPLES,
            tone_revision_threshold: defaults::DEFAULT_TONE_REVISION_THRESHOLD,
            tone_reference_threshold: defaults::DEFAULT_TONE_REFERENCE_THRESHOLD,
            platform_variance_threshold: defaults::DEFAULT_PLATFORM_VARIANCE_THRESHOLD,
            overall_warning_threshold: defaults::DEFAULT_OVERALL_WARNING_THRESHOLD,
            limited_data_threshold: defaults::DEFAULT_LIMITED_DATA_THRESHOLD,
            default_weight: defaults::DEFAULT_ADAPTIVE_WEIGHT,
            default_trend_date: defaults::DEFAULT_TREND_DATE.to_string(),
        }
    }
}
