//! RelationshipGraph: owns the indexed graph and answers every query over it.

use std::path::Path;

use tonefit_core::config::GraphConfig;
use tonefit_core::errors::{GraphError, TonefitResult};
use tonefit_core::models::{ConceptKind, ConceptNode, GraphRecommendation, RelationEdge};
use tonefit_observability::events;
use tracing::debug;

use crate::explain::{self, RelationshipExplanation};
use crate::graph::domain::DomainSpec;
use crate::graph::stable_graph::IndexedGraph;
use crate::recommendation::{self, RecommendationRules};
use crate::traversal::{best_path, bfs, BestPath, TraversalResult};

/// The relationship graph over tones, platforms and creative types.
///
/// Built once from a domain document, then only read. Queries never fail:
/// unknown ids produce empty or neutral answers.
pub struct RelationshipGraph {
    graph: IndexedGraph,
    rules: RecommendationRules,
    default_depth: usize,
}

impl RelationshipGraph {
    /// An empty graph using the thresholds in `config`.
    pub fn new(config: &GraphConfig) -> Self {
        Self {
            graph: IndexedGraph::new(),
            rules: RecommendationRules::from(config),
            default_depth: config.default_traversal_depth,
        }
    }

    /// Build from a validated domain document.
    pub fn from_domain(spec: DomainSpec, config: &GraphConfig) -> TonefitResult<Self> {
        spec.validate()?;
        let mut graph = Self::new(config);
        for node in spec.nodes {
            graph.add_node(node)?;
        }
        for edge in spec.edges {
            graph.graph.add_edge(edge);
        }
        Ok(graph)
    }

    /// The built-in domain with default thresholds.
    pub fn builtin() -> TonefitResult<Self> {
        let graph = Self::from_domain(DomainSpec::builtin()?, &GraphConfig::default())?;
        graph.log_loaded("builtin");
        Ok(graph)
    }

    /// Load the domain named by `config.domain_path`, or the built-in one.
    pub fn from_config(config: &GraphConfig) -> TonefitResult<Self> {
        match config.domain_path.as_deref() {
            Some(path) => Self::load(Path::new(path), config),
            None => {
                let graph = Self::from_domain(DomainSpec::builtin()?, config)?;
                graph.log_loaded("builtin");
                Ok(graph)
            }
        }
    }

    /// Load a domain file.
    pub fn load(path: &Path, config: &GraphConfig) -> TonefitResult<Self> {
        let graph = Self::from_domain(DomainSpec::load(path)?, config)?;
        graph.log_loaded(&path.display().to_string());
        Ok(graph)
    }

    fn log_loaded(&self, source: &str) {
        events::graph_loaded(source, self.node_count(), self.edge_count());
    }

    /// Declare a concept. Fails if the id is already declared.
    pub fn add_node(&mut self, node: ConceptNode) -> TonefitResult<()> {
        self.graph.insert_concept(node)?;
        Ok(())
    }

    /// Append a directed edge. Unknown endpoints become placeholder vertices.
    pub fn add_edge(
        &mut self,
        from: &str,
        to: &str,
        relationship: &str,
        weight: f64,
    ) -> TonefitResult<()> {
        let edge = RelationEdge::new(from, to, relationship, weight);
        if !edge.has_valid_weight() {
            return Err(GraphError::InvalidWeight {
                from: edge.from,
                to: edge.to,
                weight,
            }
            .into());
        }
        self.graph.add_edge(edge);
        Ok(())
    }

    pub fn node(&self, id: &str) -> Option<&ConceptNode> {
        self.graph.concept(id)
    }

    /// Declared concepts of one kind, in declaration order.
    pub fn nodes_of_kind(&self, kind: ConceptKind) -> Vec<&ConceptNode> {
        self.graph.concepts().filter(|c| c.kind == kind).collect()
    }

    /// Declared concepts. Placeholder vertices are not counted.
    pub fn node_count(&self) -> usize {
        self.graph.concept_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Outgoing edges of `id` in insertion order.
    pub fn edges_from(&self, id: &str) -> Vec<&RelationEdge> {
        self.graph.outgoing_by_id(id)
    }

    /// Breadth-first expansion from `start`, at most `max_depth` hops.
    pub fn traverse_bfs(&self, start: &str, max_depth: usize) -> TraversalResult {
        let span = tonefit_observability::graph_span!("bfs", start);
        let _guard = span.enter();
        if self.graph.get_node(start).is_none() {
            debug!(start, "bfs from unknown node");
        }
        bfs::traverse(&self.graph, start, max_depth)
    }

    /// Ids reached from `start` within `depth` hops (configured default when `None`).
    pub fn related_nodes(&self, start: &str, depth: Option<usize>) -> Vec<String> {
        self.traverse_bfs(start, depth.unwrap_or(self.default_depth))
            .reached
            .into_iter()
            .map(|n| n.id)
            .collect()
    }

    /// Cheapest path by `1 - weight`. `None` when `end` is unreachable.
    pub fn find_best_path(&self, start: &str, end: &str) -> Option<BestPath> {
        let span = tonefit_observability::graph_span!("best_path", start);
        let _guard = span.enter();
        let path = best_path::find(&self.graph, start, end);
        if path.is_none() {
            debug!(start, end, "no path");
        }
        path
    }

    pub fn recommendations(&self, tone: &str, platform: &str) -> GraphRecommendation {
        let span = tonefit_observability::graph_span!("recommendations", tone);
        let _guard = span.enter();
        recommendation::recommend(&self.graph, tone, platform, &self.rules)
    }

    pub fn explain_relationship(&self, from: &str, to: &str) -> RelationshipExplanation {
        let span = tonefit_observability::graph_span!("explain", from);
        let _guard = span.enter();
        explain::explain(&self.graph, from, to)
    }

    /// Read access to the underlying indexed graph.
    pub fn indexed(&self) -> &IndexedGraph {
        &self.graph
    }

    pub fn rules(&self) -> &RecommendationRules {
        &self.rules
    }
}

impl Default for RelationshipGraph {
    fn default() -> Self {
        Self::new(&GraphConfig::default())
    }
}
