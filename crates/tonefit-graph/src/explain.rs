//! Human-readable explanations of how two concepts relate.

use std::fmt;

use crate::graph::stable_graph::IndexedGraph;
use crate::traversal::best_path::{self, PathHop};

/// How `from` relates to `to`.
#[derive(Debug, Clone, PartialEq)]
pub enum RelationshipExplanation {
    /// A direct edge exists. The first one in insertion order is reported.
    Direct {
        from: String,
        to: String,
        relationship: String,
        weight: f64,
    },
    /// No direct edge, but a best path exists.
    Path { hops: Vec<PathHop> },
    Unrelated { from: String, to: String },
}

impl RelationshipExplanation {
    pub fn is_related(&self) -> bool {
        !matches!(self, Self::Unrelated { .. })
    }
}

impl fmt::Display for RelationshipExplanation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Direct {
                from,
                to,
                relationship,
                weight,
            } => write!(f, "{from} is {relationship} with {to} (strength: {weight:.2})"),
            Self::Path { hops } => {
                for (i, hop) in hops.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" → ")?;
                    }
                    write!(
                        f,
                        "{} {} {} (strength: {:.2})",
                        hop.from, hop.relationship, hop.to, hop.weight
                    )?;
                }
                Ok(())
            }
            Self::Unrelated { from, to } => {
                write!(f, "No relationship found between {from} and {to}")
            }
        }
    }
}

/// Explain the relationship from `from` to `to`.
///
/// A node is not considered related to itself unless it has a self edge.
pub fn explain(graph: &IndexedGraph, from: &str, to: &str) -> RelationshipExplanation {
    if let Some(edge) = graph
        .outgoing_by_id(from)
        .into_iter()
        .find(|e| e.to == to)
    {
        return RelationshipExplanation::Direct {
            from: from.to_string(),
            to: to.to_string(),
            relationship: edge.relationship.clone(),
            weight: edge.weight,
        };
    }

    match best_path::find(graph, from, to) {
        Some(path) if !path.is_empty() => RelationshipExplanation::Path { hops: path.hops },
        _ => RelationshipExplanation::Unrelated {
            from: from.to_string(),
            to: to.to_string(),
        },
    }
}
