//! petgraph::StableGraph wrapper keyed by concept id.

use std::collections::HashMap;

use petgraph::stable_graph::{EdgeIndex, NodeIndex, StableGraph};
use petgraph::visit::EdgeRef;
use petgraph::{Directed, Direction};

use tonefit_core::errors::GraphError;
use tonefit_core::models::{ConceptNode, RelationEdge};

/// A vertex in the relationship graph.
///
/// Edges may name ids that were never declared as concepts; those become
/// placeholder vertices with no concept attached.
#[derive(Debug, Clone)]
pub struct GraphNode {
    pub id: String,
    pub concept: Option<ConceptNode>,
}

/// The underlying directed multigraph type.
pub type ConceptStableGraph = StableGraph<GraphNode, RelationEdge, Directed>;

/// Wrapper providing indexed access to the relationship graph.
pub struct IndexedGraph {
    /// The petgraph stable graph.
    pub graph: ConceptStableGraph,
    /// Map from concept id → NodeIndex for O(1) lookup.
    pub node_index: HashMap<String, NodeIndex>,
}

impl IndexedGraph {
    /// Create an empty indexed graph.
    pub fn new() -> Self {
        Self {
            graph: StableGraph::new(),
            node_index: HashMap::new(),
        }
    }

    /// Get or create a vertex for the given id. New vertices are placeholders.
    pub fn ensure_node(&mut self, id: &str) -> NodeIndex {
        if let Some(&idx) = self.node_index.get(id) {
            return idx;
        }
        let idx = self.graph.add_node(GraphNode {
            id: id.to_string(),
            concept: None,
        });
        self.node_index.insert(id.to_string(), idx);
        idx
    }

    /// Declare a concept. Fills in a placeholder created by an earlier edge,
    /// rejects a second declaration of the same id.
    pub fn insert_concept(&mut self, concept: ConceptNode) -> Result<NodeIndex, GraphError> {
        let idx = self.ensure_node(&concept.id);
        match self.graph.node_weight_mut(idx) {
            Some(node) if node.concept.is_some() => Err(GraphError::DuplicateNode {
                id: concept.id.clone(),
            }),
            Some(node) => {
                node.concept = Some(concept);
                Ok(idx)
            }
            None => Err(GraphError::DomainParse {
                reason: format!("index for {} points at a removed vertex", concept.id),
            }),
        }
    }

    /// Append a directed edge. Endpoints are created as placeholders if needed.
    pub fn add_edge(&mut self, edge: RelationEdge) -> EdgeIndex {
        let source = self.ensure_node(&edge.from);
        let target = self.ensure_node(&edge.to);
        self.graph.add_edge(source, target, edge)
    }

    /// Look up a vertex index by id.
    pub fn get_node(&self, id: &str) -> Option<NodeIndex> {
        self.node_index.get(id).copied()
    }

    /// The concept declared under `id`, if any.
    pub fn concept(&self, id: &str) -> Option<&ConceptNode> {
        self.get_node(id)
            .and_then(|idx| self.graph.node_weight(idx))
            .and_then(|node| node.concept.as_ref())
    }

    /// Id of the vertex at `idx`.
    pub fn id_of(&self, idx: NodeIndex) -> Option<&str> {
        self.graph.node_weight(idx).map(|n| n.id.as_str())
    }

    /// Outgoing edges of `idx` in insertion order, with their target index.
    ///
    /// petgraph walks adjacency newest-first; sorting by edge index restores
    /// the order edges were added, which every first-match rule depends on.
    pub fn outgoing(&self, idx: NodeIndex) -> Vec<(NodeIndex, &RelationEdge)> {
        let mut edges: Vec<_> = self
            .graph
            .edges_directed(idx, Direction::Outgoing)
            .map(|e| (e.id(), e.target(), e.weight()))
            .collect();
        edges.sort_by_key(|(id, _, _)| *id);
        edges
            .into_iter()
            .map(|(_, target, weight)| (target, weight))
            .collect()
    }

    /// Outgoing edges of the vertex named `id`; empty for unknown ids.
    pub fn outgoing_by_id(&self, id: &str) -> Vec<&RelationEdge> {
        self.get_node(id)
            .map(|idx| self.outgoing(idx).into_iter().map(|(_, e)| e).collect())
            .unwrap_or_default()
    }

    /// Every declared concept, in declaration order of their vertices.
    pub fn concepts(&self) -> impl Iterator<Item = &ConceptNode> {
        self.graph
            .node_indices()
            .filter_map(|idx| self.graph.node_weight(idx))
            .filter_map(|n| n.concept.as_ref())
    }

    /// Number of declared concepts (placeholders excluded).
    pub fn concept_count(&self) -> usize {
        self.concepts().count()
    }

    /// Number of vertices, placeholders included.
    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

impl Default for IndexedGraph {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tonefit_core::models::ConceptKind;

    #[test]
    fn edge_to_unknown_node_creates_placeholder() {
        let mut g = IndexedGraph::new();
        g.add_edge(RelationEdge::new("fun", "TikTok", "highly_compatible", 0.9));
        assert_eq!(g.vertex_count(), 2);
        assert_eq!(g.concept_count(), 0);
        assert!(g.concept("TikTok").is_none());
    }

    #[test]
    fn declaring_concept_fills_placeholder() {
        let mut g = IndexedGraph::new();
        g.add_edge(RelationEdge::new("fun", "Meta", "highly_compatible", 0.9));
        g.insert_concept(ConceptNode::new("Meta", ConceptKind::Platform))
            .unwrap();
        assert_eq!(g.vertex_count(), 2);
        assert_eq!(g.concept("Meta").map(|c| c.kind), Some(ConceptKind::Platform));
    }

    #[test]
    fn duplicate_concept_is_rejected() {
        let mut g = IndexedGraph::new();
        g.insert_concept(ConceptNode::new("fun", ConceptKind::Tone))
            .unwrap();
        let err = g
            .insert_concept(ConceptNode::new("fun", ConceptKind::Tone))
            .unwrap_err();
        assert!(matches!(err, GraphError::DuplicateNode { .. }));
    }

    #[test]
    fn outgoing_preserves_insertion_order_with_parallel_edges() {
        let mut g = IndexedGraph::new();
        g.add_edge(RelationEdge::new("a", "b", "first", 0.1));
        g.add_edge(RelationEdge::new("a", "c", "second", 0.2));
        g.add_edge(RelationEdge::new("a", "b", "third", 0.3));
        let labels: Vec<&str> = g
            .outgoing_by_id("a")
            .iter()
            .map(|e| e.relationship.as_str())
            .collect();
        assert_eq!(labels, vec!["first", "second", "third"]);
    }

    #[test]
    fn unknown_id_has_no_outgoing_edges() {
        let g = IndexedGraph::new();
        assert!(g.outgoing_by_id("ghost").is_empty());
    }
}
