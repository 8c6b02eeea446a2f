use serde::{Deserialize, Serialize};

/// One guideline snippet scored against a query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuidelineMatch {
    pub category: String,
    pub guideline: String,
    /// Cosine similarity in [0, 1].
    pub score: f64,
}

/// All guidelines of a category named directly by the request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectMatch {
    /// The tone or platform id as the caller spelled it.
    pub key: String,
    pub guidelines: Vec<String>,
    pub relevance: f64,
}

/// Guidance for a tone and a set of platforms: direct category hits plus
/// similarity-ranked snippets from the other categories.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RelevanceReport {
    pub direct_matches: Vec<DirectMatch>,
    pub semantic_matches: Vec<GuidelineMatch>,
}
