//! Dijkstra-style best path where an edge costs `1 - weight`.
//!
//! Ties between equally distant candidates are broken by node id, so the
//! result never depends on hash or insertion order.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use petgraph::stable_graph::NodeIndex;

use crate::graph::stable_graph::IndexedGraph;

/// One step of a best path.
#[derive(Debug, Clone, PartialEq)]
pub struct PathHop {
    pub from: String,
    pub to: String,
    pub relationship: String,
    pub weight: f64,
}

/// A best path from start to end.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BestPath {
    /// Hops in travel order. Empty when start and end coincide.
    pub hops: Vec<PathHop>,
    /// Sum of `1 - weight` over the hops.
    pub total_distance: f64,
}

impl BestPath {
    pub fn is_empty(&self) -> bool {
        self.hops.is_empty()
    }

    pub fn len(&self) -> usize {
        self.hops.len()
    }

    /// Node ids along the path, start and end included.
    pub fn node_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.hops.iter().map(|h| h.from.as_str()).collect();
        if let Some(last) = self.hops.last() {
            ids.push(last.to.as_str());
        }
        ids
    }
}

/// Min-heap entry: smallest distance first, then smallest id.
struct Candidate<'a> {
    distance: f64,
    id: &'a str,
    idx: NodeIndex,
}

impl PartialEq for Candidate<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate<'_> {}

impl PartialOrd for Candidate<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so BinaryHeap pops the minimum.
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.id.cmp(self.id))
    }
}

/// Find the cheapest path from `start` to `end`.
///
/// Returns an empty path when `start == end` and `None` when `end` is
/// unreachable or either id is unknown.
pub fn find(graph: &IndexedGraph, start: &str, end: &str) -> Option<BestPath> {
    if start == end {
        return Some(BestPath::default());
    }
    let start_idx = graph.get_node(start)?;
    let end_idx = graph.get_node(end)?;

    let mut distances: HashMap<NodeIndex, f64> = HashMap::new();
    let mut previous: HashMap<NodeIndex, (NodeIndex, PathHop)> = HashMap::new();
    let mut settled: HashSet<NodeIndex> = HashSet::new();
    let mut heap = BinaryHeap::new();

    distances.insert(start_idx, 0.0);
    heap.push(Candidate {
        distance: 0.0,
        id: start,
        idx: start_idx,
    });

    while let Some(Candidate { distance, idx, .. }) = heap.pop() {
        if !settled.insert(idx) {
            continue;
        }
        if idx == end_idx {
            break;
        }
        let from = match graph.id_of(idx) {
            Some(id) => id,
            None => continue,
        };

        for (target, edge) in graph.outgoing(idx) {
            let candidate = distance + edge.distance();
            let best = distances.get(&target).copied().unwrap_or(f64::INFINITY);
            if candidate < best {
                distances.insert(target, candidate);
                previous.insert(
                    target,
                    (
                        idx,
                        PathHop {
                            from: from.to_string(),
                            to: edge.to.clone(),
                            relationship: edge.relationship.clone(),
                            weight: edge.weight,
                        },
                    ),
                );
                if let Some(target_id) = graph.id_of(target) {
                    heap.push(Candidate {
                        distance: candidate,
                        id: target_id,
                        idx: target,
                    });
                }
            }
        }
    }

    if !previous.contains_key(&end_idx) {
        return None;
    }

    let mut hops = Vec::new();
    let mut current = end_idx;
    while current != start_idx {
        let (prev, hop) = previous.get(&current)?;
        hops.push(hop.clone());
        current = *prev;
    }
    hops.reverse();

    Some(BestPath {
        total_distance: distances.get(&end_idx).copied().unwrap_or_default(),
        hops,
    })
}
