//! Per-day rating trends.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tonefit_core::config::FeedbackConfig;
use tonefit_core::models::{DailyTrend, FeedbackEntry};
use tracing::warn;

/// The day used for entries whose timestamp cannot be parsed.
pub fn fallback_day(config: &FeedbackConfig) -> NaiveDate {
    NaiveDate::parse_from_str(&config.default_trend_date, "%Y-%m-%d").unwrap_or_else(|e| {
        warn!(
            value = %config.default_trend_date,
            error = %e,
            "invalid default trend date, using epoch"
        );
        NaiveDate::default()
    })
}

/// Mean rating and count per calendar day, oldest first.
pub fn daily_trends(entries: &[FeedbackEntry], config: &FeedbackConfig) -> Vec<DailyTrend> {
    let fallback = fallback_day(config);
    let mut by_day: BTreeMap<NaiveDate, Vec<u8>> = BTreeMap::new();

    for entry in entries {
        let day = match entry.parsed_timestamp() {
            Some(ts) => ts.date(),
            None => {
                warn!(
                    timestamp = %entry.timestamp,
                    fallback = %fallback,
                    "unparseable feedback timestamp"
                );
                fallback
            }
        };
        by_day.entry(day).or_default().push(entry.rating);
    }

    by_day
        .into_iter()
        .map(|(day, ratings)| DailyTrend {
            day,
            average_rating: ratings.iter().map(|&r| f64::from(r)).sum::<f64>()
                / ratings.len() as f64,
            count: ratings.len(),
        })
        .collect()
}
