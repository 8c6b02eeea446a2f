//! Integration tests for the relationship graph over the built-in domain.

use tonefit_core::config::GraphConfig;
use tonefit_core::errors::{GraphError, TonefitError};
use tonefit_core::models::{ConceptKind, ConceptNode};
use tonefit_graph::recommendation::{CONCISE_SUGGESTION, EMOJI_SUGGESTION, EMOJI_WARNING};
use tonefit_graph::relations::{
    HIGHLY_COMPATIBLE, MODERATELY_COMPATIBLE, POORLY_COMPATIBLE, PREFERS, SUITABLE_FOR,
};
use tonefit_graph::{DomainSpec, RelationshipExplanation, RelationshipGraph};

fn builtin() -> RelationshipGraph {
    RelationshipGraph::builtin().unwrap()
}

fn graph_from_fixture(name: &str) -> RelationshipGraph {
    let relative = format!("domain/{name}");
    assert!(test_fixtures::fixture_exists(&relative), "missing fixture {relative}");
    let path = test_fixtures::fixture_path(&relative);
    RelationshipGraph::load(&path, &GraphConfig::default()).unwrap()
}

// =============================================================================
// Construction
// =============================================================================

#[test]
fn builtin_domain_has_expected_shape() {
    let graph = builtin();
    assert_eq!(graph.node_count(), 9);
    assert_eq!(graph.edge_count(), 16);
    for kind in ConceptKind::ALL {
        assert_eq!(graph.nodes_of_kind(kind).len(), 3, "kind {kind}");
    }
    let meta = graph.node("Meta").unwrap();
    assert_eq!(meta.flag("emoji_friendly"), Some(true));
    assert_eq!(meta.number("char_limit"), Some(2200.0));
}

#[test]
fn builtin_edges_use_well_known_labels() {
    let graph = builtin();
    let labels = |id: &str| -> Vec<String> {
        graph
            .edges_from(id)
            .into_iter()
            .map(|e| e.relationship.clone())
            .collect()
    };
    assert_eq!(
        labels("fun"),
        [HIGHLY_COMPATIBLE, MODERATELY_COMPATIBLE, POORLY_COMPATIBLE, SUITABLE_FOR, SUITABLE_FOR]
    );
    assert_eq!(labels("Meta"), [PREFERS]);
    assert_eq!(labels("Google"), [PREFERS]);
    assert!(labels("conversion").is_empty());
}

#[test]
fn creative_types_carry_text_goals() {
    let graph = builtin();
    let goal = |id: &str| graph.node(id).and_then(|n| n.text("goal")).map(str::to_string);
    assert_eq!(goal("awareness").as_deref(), Some("brand_visibility"));
    assert_eq!(goal("engagement").as_deref(), Some("interaction"));
    assert_eq!(goal("conversion").as_deref(), Some("sales"));
    assert_eq!(graph.node("fun").and_then(|n| n.text("formality")), None);
}

#[test]
fn add_edge_rejects_out_of_range_weight() {
    let mut graph = RelationshipGraph::default();
    for weight in [-0.1, 1.01, f64::NAN] {
        let err = graph.add_edge("a", "b", "likes", weight).unwrap_err();
        assert!(matches!(
            err,
            TonefitError::GraphError(GraphError::InvalidWeight { .. })
        ));
    }
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn add_edge_accepts_unknown_endpoints() {
    let mut graph = RelationshipGraph::default();
    graph.add_edge("fun", "TikTok", "highly_compatible", 0.9).unwrap();
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.node_count(), 0);
    assert!(graph.node("TikTok").is_none());
    assert_eq!(graph.related_nodes("fun", Some(1)), vec!["TikTok"]);
}

#[test]
fn duplicate_node_is_rejected() {
    let mut graph = RelationshipGraph::default();
    graph
        .add_node(ConceptNode::new("fun", ConceptKind::Tone))
        .unwrap();
    let err = graph
        .add_node(ConceptNode::new("fun", ConceptKind::Tone))
        .unwrap_err();
    assert!(matches!(
        err,
        TonefitError::GraphError(GraphError::DuplicateNode { .. })
    ));
}

#[test]
fn domain_with_duplicate_ids_fails_to_build() {
    let doc = r#"
version = 1
[[nodes]]
id = "fun"
kind = "tone"
[[nodes]]
id = "fun"
kind = "tone"
"#;
    let spec = DomainSpec::from_toml(doc).unwrap();
    assert!(RelationshipGraph::from_domain(spec, &GraphConfig::default()).is_err());
}

#[test]
fn from_config_without_path_uses_builtin() {
    let graph = RelationshipGraph::from_config(&GraphConfig::default()).unwrap();
    assert_eq!(graph.node_count(), 9);
}

#[test]
fn from_config_loads_domain_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("domain.toml");
    std::fs::write(
        &path,
        test_fixtures::load_fixture_str("domain/no_direct_professional_google.toml"),
    )
    .unwrap();
    let config = GraphConfig {
        domain_path: Some(path.display().to_string()),
        ..GraphConfig::default()
    };
    let graph = RelationshipGraph::from_config(&config).unwrap();
    assert_eq!(graph.node_count(), 4);
    assert_eq!(graph.edge_count(), 4);
    assert_eq!(graph.recommendations("professional", "Google").compatibility_score, 0.0);
}

#[test]
fn from_config_with_missing_file_fails() {
    let config = GraphConfig {
        domain_path: Some("/definitely/not/here.toml".to_string()),
        ..GraphConfig::default()
    };
    let err = RelationshipGraph::from_config(&config).err().unwrap();
    assert!(matches!(
        err,
        TonefitError::GraphError(GraphError::DomainUnreadable { .. })
    ));
}

// =============================================================================
// BFS
// =============================================================================

#[test]
fn bfs_depth_one_from_fun_reaches_platforms_and_creative_types() {
    let graph = builtin();
    let result = graph.traverse_bfs("fun", 1);
    assert_eq!(
        result.node_ids(),
        vec!["Meta", "LinkedIn", "Google", "awareness", "engagement"]
    );
    let meta = result.contributions("Meta");
    assert_eq!(meta.len(), 1);
    assert_eq!(meta[0].source, "fun");
    assert_eq!(meta[0].relationship, "highly_compatible");
    assert_eq!(meta[0].weight, 0.9);
}

#[test]
fn bfs_depth_two_collects_every_landing_edge() {
    let graph = builtin();
    let result = graph.traverse_bfs("fun", 2);
    // Reached directly from fun and again from Meta's `prefers` edge.
    let sources: Vec<&str> = result
        .contributions("engagement")
        .iter()
        .map(|c| c.source.as_str())
        .collect();
    assert_eq!(sources, vec!["fun", "Meta"]);
    assert_eq!(result.get("engagement").unwrap().hops, 1);
    assert_eq!(result.get("conversion").unwrap().hops, 2);
    assert_eq!(result.max_depth_reached, 2);
}

#[test]
fn bfs_from_unknown_node_is_empty() {
    let graph = builtin();
    assert!(graph.traverse_bfs("sarcastic", 3).is_empty());
    assert!(graph.related_nodes("sarcastic", None).is_empty());
}

#[test]
fn related_nodes_uses_configured_default_depth() {
    let graph = builtin();
    let default_depth = graph.related_nodes("fun", None);
    let explicit = graph.related_nodes("fun", Some(2));
    assert_eq!(default_depth, explicit);
    assert!(default_depth.contains(&"conversion".to_string()));
}

// =============================================================================
// Best path
// =============================================================================

#[test]
fn best_path_to_self_is_empty() {
    let graph = builtin();
    for id in ["fun", "Meta", "nowhere"] {
        let path = graph.find_best_path(id, id).unwrap();
        assert!(path.is_empty());
    }
}

#[test]
fn best_path_prefers_direct_strong_edge() {
    let graph = builtin();
    let path = graph.find_best_path("professional", "Google").unwrap();
    assert_eq!(path.node_ids(), vec!["professional", "Google"]);
    assert!((path.total_distance - 0.1).abs() < 1e-9);
}

#[test]
fn best_path_crosses_kinds() {
    let graph = builtin();
    let path = graph.find_best_path("semi-fun", "conversion").unwrap();
    assert_eq!(path.len(), 2);
    for hop in &path.hops {
        let step = 1.0 - hop.weight;
        assert!((0.0..=1.0).contains(&step));
    }
}

#[test]
fn best_path_between_disconnected_nodes_is_none() {
    let graph = builtin();
    // Creative types have no outgoing edges.
    assert!(graph.find_best_path("conversion", "fun").is_none());
    assert!(graph.find_best_path("Meta", "fun").is_none());
}

// =============================================================================
// Recommendations
// =============================================================================

#[test]
fn fun_on_meta_recommendation() {
    let rec = builtin().recommendations("fun", "Meta");
    assert_eq!(rec.compatibility_score, 0.9);
    assert!(rec.suggested_elements.contains(&EMOJI_SUGGESTION.to_string()));
    assert!(rec.warnings.is_empty());
    assert_eq!(rec.creative_types, vec!["awareness", "engagement"]);
}

#[test]
fn professional_on_google_recommendation() {
    let rec = builtin().recommendations("professional", "Google");
    assert_eq!(rec.compatibility_score, 0.9);
    assert_eq!(rec.suggested_elements, vec![CONCISE_SUGGESTION.to_string()]);
    assert!(rec.warnings.is_empty());
    assert_eq!(rec.creative_types, vec!["conversion"]);
}

#[test]
fn fun_on_unknown_platform_still_warns() {
    let rec = builtin().recommendations("fun", "Fax");
    assert_eq!(rec.compatibility_score, 0.0);
    assert_eq!(rec.warnings, vec![EMOJI_WARNING.to_string()]);
    assert!(rec.suggested_elements.is_empty());
}

#[test]
fn recommendation_thresholds_follow_config() {
    let config = GraphConfig {
        concise_char_limit: 2500.0,
        ..GraphConfig::default()
    };
    let graph = RelationshipGraph::from_config(&config).unwrap();
    let rec = graph.recommendations("fun", "Meta");
    assert!(rec.suggested_elements.contains(&CONCISE_SUGGESTION.to_string()));
}

// =============================================================================
// Explanations
// =============================================================================

#[test]
fn explain_direct_edge() {
    let explanation = builtin().explain_relationship("professional", "Google");
    assert!(matches!(
        explanation,
        RelationshipExplanation::Direct { weight, .. } if weight == 0.9
    ));
    assert_eq!(
        explanation.to_string(),
        "professional is highly_compatible with Google (strength: 0.90)"
    );
}

#[test]
fn explain_falls_back_to_path_without_direct_edge() {
    let graph = graph_from_fixture("no_direct_professional_google.toml");
    let explanation = graph.explain_relationship("professional", "Google");
    match &explanation {
        RelationshipExplanation::Path { hops } => assert_eq!(hops.len(), 2),
        other => panic!("expected a path, got {other:?}"),
    }
    assert_eq!(
        explanation.to_string(),
        "professional highly_compatible LinkedIn (strength: 0.95) → LinkedIn cross_posts_to Google (strength: 0.60)"
    );
}

#[test]
fn explain_unrelated_pair() {
    let explanation = builtin().explain_relationship("engagement", "fun");
    assert!(!explanation.is_related());
    assert_eq!(
        explanation.to_string(),
        "No relationship found between engagement and fun"
    );
}
