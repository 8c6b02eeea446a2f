use serde::{Deserialize, Serialize};

use super::defaults;

/// Guideline retrieval configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Path to the guideline corpus.
    pub guideline_path: String,
    /// Number of semantic matches returned when a caller does not ask for a count.
    pub default_top_k: usize,
    /// Semantic matches an assembler should surface alongside direct matches.
    pub semantic_matches_shown: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            guideline_path: defaults::DEFAULT_GUIDELINE_FILENAME.to_string(),
            default_top_k: defaults::DEFAULT_SEARCH_TOP_K,
            semantic_matches_shown: defaults::DEFAULT_SEMANTIC_MATCHES_SHOWN,
        }
    }
}
