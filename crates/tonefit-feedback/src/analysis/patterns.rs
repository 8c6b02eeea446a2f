//! Pattern analysis: statistics, low/high classification and recommendations.

use std::collections::BTreeMap;

use tonefit_core::config::FeedbackConfig;
use tonefit_core::models::{
    AggregateStat, AnalysisReport, ComboStat, FeedbackEntry, PatternAnalysis, PatternSummary,
};

use super::aggregate::Aggregates;

/// Analyze a feedback snapshot. An empty snapshot yields [`PatternAnalysis::NoData`].
pub fn analyze(entries: &[FeedbackEntry], config: &FeedbackConfig) -> PatternAnalysis {
    let agg = Aggregates::collect(entries);
    let overall = match agg.overall() {
        Some(stat) => stat,
        None => return PatternAnalysis::NoData,
    };

    let mut combo_stats = BTreeMap::new();
    let mut low = Vec::new();
    let mut high = Vec::new();

    for (key, stat, ratings) in agg.combination_stats() {
        let summary = || PatternSummary {
            key: key.clone(),
            pattern: key.to_string(),
            average_rating: stat.mean,
            sample_size: stat.sample_count,
        };
        // Too few samples: reported but never classified.
        if stat.has_evidence(config.min_samples) {
            if stat.mean < config.low_performance_mean {
                low.push(summary());
            } else if stat.mean >= config.high_performance_mean {
                high.push(summary());
            }
        }
        combo_stats.insert(
            key.to_string(),
            ComboStat {
                key: key.clone(),
                stat,
                ratings: ratings.to_vec(),
            },
        );
    }

    let mut report = AnalysisReport {
        total_feedback: entries.len(),
        average_rating: overall.mean,
        tone_stats: agg.tone_stats(),
        platform_stats: agg.platform_stats(),
        combo_stats,
        low_performing_patterns: low,
        high_performing_patterns: high,
        recommendations: Vec::new(),
    };
    report.recommendations = recommendations(&report, config);

    PatternAnalysis::Report(Box::new(report))
}

/// Recommendation strings in a fixed order: tones, platforms, low and high
/// combinations, then general remarks.
pub fn recommendations(report: &AnalysisReport, config: &FeedbackConfig) -> Vec<String> {
    let mut out = Vec::new();

    for (tone, stat) in &report.tone_stats {
        out.extend(tone_recommendation(tone, stat, config));
    }

    for (platform, stat) in &report.platform_stats {
        if stat.sample_stdev > config.platform_variance_threshold {
            out.push(format!(
                "{platform} shows high variance (σ={:.2}) - consider more consistent approach",
                stat.sample_stdev
            ));
        }
    }

    for p in &report.low_performing_patterns {
        out.push(format!(
            "{} tone on {} is underperforming (avg: {:.2}) - needs revision",
            p.key.tone, p.key.platform, p.average_rating
        ));
    }

    for p in &report.high_performing_patterns {
        out.push(format!(
            "{} tone on {} is a winning combination (avg: {:.2})",
            p.key.tone, p.key.platform, p.average_rating
        ));
    }

    if report.average_rating < config.overall_warning_threshold {
        out.push(
            "Overall performance needs improvement - consider reviewing prompt templates"
                .to_string(),
        );
    }

    if report.total_feedback < config.limited_data_threshold {
        out.push("Limited feedback data - collect more samples for reliable patterns".to_string());
    }

    out
}

fn tone_recommendation(tone: &str, stat: &AggregateStat, config: &FeedbackConfig) -> Option<String> {
    if stat.mean < config.tone_revision_threshold {
        Some(format!(
            "Consider adjusting '{tone}' tone guidelines - average rating is {:.2}",
            stat.mean
        ))
    } else if stat.mean > config.tone_reference_threshold {
        Some(format!(
            "'{tone}' tone is performing excellently (avg: {:.2}) - use as reference",
            stat.mean
        ))
    } else {
        None
    }
}
