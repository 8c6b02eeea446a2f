//! Property-driven recommendations for a (tone, platform) pair.

use tonefit_core::config::GraphConfig;
use tonefit_core::models::{ConceptKind, GraphRecommendation};

use crate::graph::stable_graph::IndexedGraph;
use crate::relations::{PROP_CHAR_LIMIT, PROP_CREATIVITY, PROP_EMOJI_FRIENDLY, SUITABLE_FOR};
use crate::traversal::bfs;

pub const EMOJI_SUGGESTION: &str = "Use emojis to enhance engagement";
pub const EMOJI_WARNING: &str = "Platform doesn't support emojis well - adjust tone";
pub const CONCISE_SUGGESTION: &str = "Keep message extremely concise";

/// Thresholds for the recommendation rules.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationRules {
    pub suitable_for_threshold: f64,
    pub creativity_threshold: f64,
    pub concise_char_limit: f64,
    pub emoji_warning_tones: Vec<String>,
}

impl From<&GraphConfig> for RecommendationRules {
    fn from(config: &GraphConfig) -> Self {
        Self {
            suitable_for_threshold: config.suitable_for_threshold,
            creativity_threshold: config.creativity_threshold,
            concise_char_limit: config.concise_char_limit,
            emoji_warning_tones: config.emoji_warning_tones.clone(),
        }
    }
}

impl Default for RecommendationRules {
    fn default() -> Self {
        Self::from(&GraphConfig::default())
    }
}

/// Build the recommendation for `tone` on `platform`.
///
/// Unknown ids are not an error: missing properties read as absent, so an
/// unknown pair yields a zero score and no creative types.
pub fn recommend(
    graph: &IndexedGraph,
    tone: &str,
    platform: &str,
    rules: &RecommendationRules,
) -> GraphRecommendation {
    let mut result = GraphRecommendation::default();

    // First direct edge in insertion order wins.
    if let Some(edge) = graph
        .outgoing_by_id(tone)
        .into_iter()
        .find(|e| e.to == platform)
    {
        result.compatibility_score = edge.weight;
    }

    let reached = bfs::traverse(graph, tone, 1);
    for node in &reached.reached {
        let is_creative_type = graph
            .concept(&node.id)
            .is_some_and(|c| c.kind == ConceptKind::CreativeType);
        if !is_creative_type || result.creative_types.contains(&node.id) {
            continue;
        }
        let suitable = node
            .contributions
            .iter()
            .any(|c| c.relationship == SUITABLE_FOR && c.weight > rules.suitable_for_threshold);
        if suitable {
            result.creative_types.push(node.id.clone());
        }
    }

    let platform_concept = graph.concept(platform);
    let tone_concept = graph.concept(tone);

    let emoji_friendly = platform_concept
        .and_then(|c| c.flag(PROP_EMOJI_FRIENDLY))
        .unwrap_or(false);
    let creativity = tone_concept
        .and_then(|c| c.number(PROP_CREATIVITY))
        .unwrap_or(0.0);
    let char_limit = platform_concept
        .and_then(|c| c.number(PROP_CHAR_LIMIT))
        .unwrap_or(f64::INFINITY);

    if emoji_friendly && creativity > rules.creativity_threshold {
        result.suggested_elements.push(EMOJI_SUGGESTION.to_string());
    } else if !emoji_friendly && rules.emoji_warning_tones.iter().any(|t| t == tone) {
        result.warnings.push(EMOJI_WARNING.to_string());
    }

    if char_limit < rules.concise_char_limit {
        result.suggested_elements.push(CONCISE_SUGGESTION.to_string());
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::domain::DomainSpec;

    fn builtin() -> IndexedGraph {
        let spec = DomainSpec::builtin().unwrap();
        let mut g = IndexedGraph::new();
        for node in spec.nodes {
            g.insert_concept(node).unwrap();
        }
        for edge in spec.edges {
            g.add_edge(edge);
        }
        g
    }

    #[test]
    fn fun_on_meta_suggests_emoji() {
        let rec = recommend(&builtin(), "fun", "Meta", &RecommendationRules::default());
        assert_eq!(rec.compatibility_score, 0.9);
        assert_eq!(rec.suggested_elements, vec![EMOJI_SUGGESTION.to_string()]);
        assert!(rec.warnings.is_empty());
        assert_eq!(rec.creative_types, vec!["awareness", "engagement"]);
    }

    #[test]
    fn fun_on_google_warns_and_asks_for_concision() {
        let rec = recommend(&builtin(), "fun", "Google", &RecommendationRules::default());
        assert_eq!(rec.compatibility_score, 0.1);
        assert_eq!(rec.warnings, vec![EMOJI_WARNING.to_string()]);
        assert_eq!(rec.suggested_elements, vec![CONCISE_SUGGESTION.to_string()]);
    }

    #[test]
    fn semi_fun_engagement_edge_is_above_threshold() {
        let rec = recommend(&builtin(), "semi-fun", "LinkedIn", &RecommendationRules::default());
        assert_eq!(rec.compatibility_score, 0.7);
        assert_eq!(rec.creative_types, vec!["engagement"]);
        assert!(rec.suggested_elements.is_empty());
        assert!(rec.warnings.is_empty());
    }

    #[test]
    fn unknown_pair_is_neutral() {
        let rec = recommend(&builtin(), "sarcastic", "Fax", &RecommendationRules::default());
        assert_eq!(rec.compatibility_score, 0.0);
        assert!(rec.creative_types.is_empty());
        assert!(rec.suggested_elements.is_empty());
        assert!(rec.warnings.is_empty());
    }

    #[test]
    fn thresholds_come_from_rules() {
        let rules = RecommendationRules {
            suitable_for_threshold: 0.92,
            ..RecommendationRules::default()
        };
        let rec = recommend(&builtin(), "fun", "Meta", &rules);
        assert_eq!(rec.creative_types, vec!["engagement"]);
    }
}
