//! Breadth-first expansion with first-visit-wins semantics.

use std::collections::{HashSet, VecDeque};

use crate::graph::stable_graph::IndexedGraph;

use super::{Contribution, TraversalResult};

/// Expand from `start` up to `max_depth` hops.
///
/// Each vertex is expanded at most once, the first time it is dequeued.
/// Only vertices closer than `max_depth` are expanded, so every reported node
/// lies within `max_depth` hops of `start`. A node reached by several edges
/// from expanded vertices collects one contribution per edge.
pub fn traverse(graph: &IndexedGraph, start: &str, max_depth: usize) -> TraversalResult {
    let mut result = TraversalResult::new(start);

    let start_idx = match graph.get_node(start) {
        Some(idx) => idx,
        None => return result,
    };

    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();
    queue.push_back((start_idx, 0_usize));

    while let Some((current, depth)) = queue.pop_front() {
        if !visited.insert(current) {
            continue;
        }
        if depth >= max_depth {
            continue;
        }
        let source = match graph.id_of(current) {
            Some(id) => id.to_string(),
            None => continue,
        };

        for (target, edge) in graph.outgoing(current) {
            result.record(
                &edge.to,
                depth + 1,
                Contribution {
                    source: source.clone(),
                    relationship: edge.relationship.clone(),
                    weight: edge.weight,
                },
            );
            if !visited.contains(&target) {
                queue.push_back((target, depth + 1));
            }
        }
    }

    result
}
