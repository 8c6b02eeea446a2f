//! Feedback analysis results.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::feedback::CombinationKey;
use super::stats::AggregateStat;

/// Statistics for one (tone, platform) combination, with the raw ratings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComboStat {
    pub key: CombinationKey,
    pub stat: AggregateStat,
    pub ratings: Vec<u8>,
}

/// A combination classified as low or high performing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternSummary {
    pub key: CombinationKey,
    /// Rendered `"<tone>_<platform>"`.
    pub pattern: String,
    pub average_rating: f64,
    pub sample_size: usize,
}

/// Full analysis of a non-empty feedback set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub total_feedback: usize,
    pub average_rating: f64,
    pub tone_stats: BTreeMap<String, AggregateStat>,
    pub platform_stats: BTreeMap<String, AggregateStat>,
    /// Keyed by the rendered combination key.
    pub combo_stats: BTreeMap<String, ComboStat>,
    pub low_performing_patterns: Vec<PatternSummary>,
    pub high_performing_patterns: Vec<PatternSummary>,
    pub recommendations: Vec<String>,
}

/// Outcome of pattern analysis: an explicit marker when there is nothing to analyze.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PatternAnalysis {
    NoData,
    Report(Box<AnalysisReport>),
}

impl PatternAnalysis {
    pub fn is_no_data(&self) -> bool {
        matches!(self, Self::NoData)
    }

    pub fn report(&self) -> Option<&AnalysisReport> {
        match self {
            Self::Report(report) => Some(report),
            Self::NoData => None,
        }
    }

    /// Recommendations, empty for `NoData`.
    pub fn recommendations(&self) -> &[String] {
        self.report()
            .map(|r| r.recommendations.as_slice())
            .unwrap_or_default()
    }

    /// Overall mean, 0 for `NoData`.
    pub fn average_rating(&self) -> f64 {
        self.report().map_or(0.0, |r| r.average_rating)
    }
}

/// Mean rating and volume for one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyTrend {
    pub day: NaiveDate,
    pub average_rating: f64,
    pub count: usize,
}

/// Everything the analyzer knows, bundled for export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightsReport {
    pub generated_at: DateTime<Utc>,
    pub analysis: PatternAnalysis,
    pub trends: Vec<DailyTrend>,
    pub adaptive_weights: BTreeMap<String, f64>,
    pub improvement_suggestions: Vec<String>,
}
