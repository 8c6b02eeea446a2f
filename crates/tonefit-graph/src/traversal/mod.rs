//! Traversal: breadth-first expansion and weighted best-path search.

pub mod best_path;
pub mod bfs;

use std::collections::HashMap;

pub use best_path::{BestPath, PathHop};

/// One edge observed landing on a reached node.
#[derive(Debug, Clone, PartialEq)]
pub struct Contribution {
    pub source: String,
    pub relationship: String,
    pub weight: f64,
}

/// A node reached during traversal.
#[derive(Debug, Clone, PartialEq)]
pub struct ReachedNode {
    pub id: String,
    /// Hop count at which the node was first reached.
    pub hops: usize,
    /// Every traversed edge that lands on this node, in traversal order.
    pub contributions: Vec<Contribution>,
}

/// Result of a breadth-first traversal. Reached nodes are kept in discovery order.
#[derive(Debug, Clone, Default)]
pub struct TraversalResult {
    /// The starting node.
    pub origin_id: String,
    /// Nodes in the order they were first reached.
    pub reached: Vec<ReachedNode>,
    /// Deepest hop count actually reached.
    pub max_depth_reached: usize,
    index: HashMap<String, usize>,
}

impl TraversalResult {
    pub(crate) fn new(origin_id: &str) -> Self {
        Self {
            origin_id: origin_id.to_string(),
            ..Self::default()
        }
    }

    pub(crate) fn record(&mut self, target: &str, hops: usize, contribution: Contribution) {
        let slot = match self.index.get(target) {
            Some(&slot) => slot,
            None => {
                self.reached.push(ReachedNode {
                    id: target.to_string(),
                    hops,
                    contributions: Vec::new(),
                });
                self.index.insert(target.to_string(), self.reached.len() - 1);
                self.reached.len() - 1
            }
        };
        self.reached[slot].contributions.push(contribution);
        self.max_depth_reached = self.max_depth_reached.max(hops);
    }

    /// The reached node with this id.
    pub fn get(&self, id: &str) -> Option<&ReachedNode> {
        self.index.get(id).map(|&slot| &self.reached[slot])
    }

    /// Contributions landing on `id`; empty if it was not reached.
    pub fn contributions(&self, id: &str) -> &[Contribution] {
        self.get(id)
            .map(|n| n.contributions.as_slice())
            .unwrap_or_default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Reached ids in discovery order.
    pub fn node_ids(&self) -> Vec<&str> {
        self.reached.iter().map(|n| n.id.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.reached.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reached.is_empty()
    }
}
