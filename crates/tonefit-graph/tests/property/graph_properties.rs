//! Property tests for traversal bounds and best-path distances.

use std::collections::HashSet;

use proptest::prelude::*;

use tonefit_graph::RelationshipGraph;

fn build_random_graph(n: usize, edges: &[(usize, usize, f64)]) -> RelationshipGraph {
    let mut graph = RelationshipGraph::default();
    for &(src, tgt, weight) in edges {
        if src < n && tgt < n {
            graph
                .add_edge(&format!("n{src}"), &format!("n{tgt}"), "rel", weight)
                .unwrap();
        }
    }
    graph
}

// Cycles and self loops are allowed: the graph is not a DAG.
fn edge_strategy(n: usize) -> impl Strategy<Value = Vec<(usize, usize, f64)>> {
    prop::collection::vec((0..n, 0..n, 0.0_f64..=1.0_f64), 0..n * 3)
}

proptest! {
    #[test]
    fn bfs_depth_bounded(
        max_depth in 0_usize..6,
        edges in edge_strategy(15)
    ) {
        let graph = build_random_graph(15, &edges);
        for i in 0..15 {
            let result = graph.traverse_bfs(&format!("n{i}"), max_depth);
            prop_assert!(result.max_depth_reached <= max_depth);
            for node in &result.reached {
                prop_assert!(
                    node.hops >= 1 && node.hops <= max_depth,
                    "node {} at {} hops, max_depth {}",
                    node.id,
                    node.hops,
                    max_depth
                );
            }
        }
    }
}

proptest! {
    #[test]
    fn bfs_reports_each_node_once(edges in edge_strategy(12)) {
        let graph = build_random_graph(12, &edges);
        for i in 0..12 {
            let result = graph.traverse_bfs(&format!("n{i}"), 5);
            let ids = result.node_ids();
            let unique: HashSet<_> = ids.iter().collect();
            prop_assert_eq!(unique.len(), ids.len());
            for node in &result.reached {
                prop_assert!(!node.contributions.is_empty());
            }
        }
    }
}

proptest! {
    #[test]
    fn best_path_distance_bounds(edges in edge_strategy(10)) {
        let graph = build_random_graph(10, &edges);
        for i in 0..10 {
            for j in 0..10 {
                let (start, end) = (format!("n{i}"), format!("n{j}"));
                if let Some(path) = graph.find_best_path(&start, &end) {
                    let mut sum = 0.0;
                    for hop in &path.hops {
                        let step = 1.0 - hop.weight;
                        prop_assert!((0.0..=1.0).contains(&step));
                        sum += step;
                    }
                    prop_assert!((sum - path.total_distance).abs() < 1e-9);
                    prop_assert!(path.total_distance <= path.len() as f64 + 1e-9);
                    if i != j {
                        prop_assert_eq!(path.hops.first().map(|h| h.from.as_str()), Some(start.as_str()));
                        prop_assert_eq!(path.hops.last().map(|h| h.to.as_str()), Some(end.as_str()));
                    }
                }
            }
        }
    }
}

proptest! {
    #[test]
    fn best_path_exists_iff_bfs_reaches(edges in edge_strategy(10)) {
        let graph = build_random_graph(10, &edges);
        for i in 0..10 {
            let start = format!("n{i}");
            let reached = graph.related_nodes(&start, Some(10));
            for j in 0..10 {
                if i == j {
                    continue;
                }
                let end = format!("n{j}");
                let found = graph.find_best_path(&start, &end).is_some();
                prop_assert_eq!(found, reached.contains(&end));
            }
        }
    }
}
