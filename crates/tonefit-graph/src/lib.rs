//! # tonefit-graph
//!
//! Weighted directed graph of tones, platforms and creative types.
//! Breadth-first expansion, Dijkstra best path over `1 - weight`, property-driven
//! recommendations and relationship explanations. The domain is loaded from a
//! versioned TOML document; a built-in copy ships with the crate.

pub mod engine;
pub mod explain;
pub mod graph;
pub mod recommendation;
pub mod relations;
pub mod traversal;

pub use engine::RelationshipGraph;
pub use explain::RelationshipExplanation;
pub use graph::{DomainSpec, IndexedGraph};
pub use recommendation::RecommendationRules;
pub use traversal::{BestPath, PathHop, TraversalResult};
