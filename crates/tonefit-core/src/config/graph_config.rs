use serde::{Deserialize, Serialize};

use super::defaults;

/// Relationship graph configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Path to a domain graph TOML document. `None` uses the built-in domain.
    pub domain_path: Option<String>,
    /// Depth used by traversal queries that do not name one.
    pub default_traversal_depth: usize,
    /// A `suitable_for` edge must be strictly stronger than this to recommend a creative type.
    pub suitable_for_threshold: f64,
    /// Tone creativity above which emoji use is suggested on emoji-friendly platforms.
    pub creativity_threshold: f64,
    /// Platforms with a character limit below this get a concision suggestion.
    pub concise_char_limit: f64,
    /// Tones that trigger an emoji warning on platforms that are not emoji friendly.
    pub emoji_warning_tones: Vec<String>,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            domain_path: None,
            default_traversal_depth: defaults::DEFAULT_TRAVERSAL_DEPTH,
            suitable_for_threshold: defaults::DEFAULT_SUITABLE_FOR_THRESHOLD,
            creativity_threshold: defaults::DEFAULT_CREATIVITY_THRESHOLD,
            concise_char_limit: defaults::DEFAULT_CONCISE_CHAR_LIMIT,
            emoji_warning_tones: defaults::DEFAULT_EMOJI_WARNING_TONES
                .iter()
                .map(|t| t.to_string())
                .collect(),
        }
    }
}
