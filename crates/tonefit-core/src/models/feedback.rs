//! Feedback events and the (tone, platform) combination key used to bucket them.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{COMBINATION_SEPARATOR, MAX_RATING, MIN_RATING, UNKNOWN_TONE};
use crate::errors::FeedbackError;

fn unknown_tone() -> String {
    UNKNOWN_TONE.to_string()
}

/// One user judgment of one generated rewrite. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackEntry {
    /// ISO-8601 timestamp. Kept as text so legacy values survive a round trip;
    /// missing or malformed values are tolerated and bucketed by the analyzer.
    #[serde(default)]
    pub timestamp: String,
    #[serde(default = "unknown_tone")]
    pub tone: String,
    /// Ordered platform ids the rewrite targeted.
    #[serde(default)]
    pub platforms: Vec<String>,
    /// Rating 1–5.
    pub rating: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ad_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rewritten_output: Option<String>,
}

impl FeedbackEntry {
    /// Create an entry stamped with the current time.
    pub fn new(
        tone: impl Into<String>,
        platforms: Vec<String>,
        rating: u8,
    ) -> Result<Self, FeedbackError> {
        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return Err(FeedbackError::InvalidRating {
                rating,
                min: MIN_RATING,
                max: MAX_RATING,
            });
        }
        Ok(Self {
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
            tone: tone.into(),
            platforms,
            rating,
            ad_text: None,
            rewritten_output: None,
        })
    }

    /// Replace the timestamp (imports, fixtures).
    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = timestamp.into();
        self
    }

    pub fn with_ad_text(mut self, ad_text: impl Into<String>) -> Self {
        self.ad_text = Some(ad_text.into());
        self
    }

    pub fn with_rewritten_output(mut self, output: impl Into<String>) -> Self {
        self.rewritten_output = Some(output.into());
        self
    }

    /// Whether the rating is inside the accepted 1–5 range.
    pub fn has_valid_rating(&self) -> bool {
        (MIN_RATING..=MAX_RATING).contains(&self.rating)
    }

    /// One combination per listed platform, in listing order.
    pub fn combinations(&self) -> impl Iterator<Item = CombinationKey> + '_ {
        self.platforms
            .iter()
            .map(move |p| CombinationKey::new(self.tone.clone(), p.clone()))
    }

    /// Parsed timestamp, `None` if it is not a recognised ISO-8601 form.
    pub fn parsed_timestamp(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.timestamp)
    }
}

/// Parse the ISO-8601 shapes found in feedback logs: RFC 3339 with offset,
/// naive date-time (`T` or space separated, optional fraction), or a bare date.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// A (tone, platform) pair, the unit of feedback aggregation.
///
/// Renders as `"<tone>_<platform>"`; the parts are stored separately so ids
/// containing the separator never split ambiguously.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CombinationKey {
    pub tone: String,
    pub platform: String,
}

impl CombinationKey {
    pub fn new(tone: impl Into<String>, platform: impl Into<String>) -> Self {
        Self {
            tone: tone.into(),
            platform: platform.into(),
        }
    }
}

impl std::fmt::Display for CombinationKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.tone, COMBINATION_SEPARATOR, self.platform)
    }
}
