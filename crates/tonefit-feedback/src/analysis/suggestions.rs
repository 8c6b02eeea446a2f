//! Improvement suggestions for prompt and graph maintainers.

use tonefit_core::config::FeedbackConfig;
use tonefit_core::models::PatternAnalysis;

pub const UPDATE_GUIDELINES: &str = "Consider updating tone guidelines based on feedback patterns";
pub const STRENGTHEN_GRAPH: &str =
    "Consider strengthening KG relationships for high-performing combinations";

/// Suggestions derived from an analysis. Nothing to suggest without data.
pub fn improvement_suggestions(analysis: &PatternAnalysis, config: &FeedbackConfig) -> Vec<String> {
    let report = match analysis.report() {
        Some(report) => report,
        None => return Vec::new(),
    };

    let mut out = Vec::new();
    if report.average_rating < config.overall_warning_threshold {
        out.push(UPDATE_GUIDELINES.to_string());
    }
    for p in &report.low_performing_patterns {
        out.push(format!(
            "Review and update guidelines for {} tone on {}",
            p.key.tone, p.key.platform
        ));
    }
    if !report.high_performing_patterns.is_empty() {
        out.push(STRENGTHEN_GRAPH.to_string());
    }
    out
}
