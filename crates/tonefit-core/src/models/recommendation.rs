use serde::{Deserialize, Serialize};

/// What the relationship graph recommends for one (tone, platform) pair.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphRecommendation {
    /// Weight of the direct tone → platform edge, 0 if there is none.
    pub compatibility_score: f64,
    pub suggested_elements: Vec<String>,
    pub warnings: Vec<String>,
    /// Creative types the tone is strongly suitable for.
    pub creative_types: Vec<String>,
}
