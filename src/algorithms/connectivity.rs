//! Connectivity: the `is_connected` check and component analysis.
//!
//! Edges are followed in both directions (weak connectivity), so the answer
//! for a directed graph does not depend on which node the search starts at.

use super::{sorted_adjacency, GraphAlgorithms};
use crate::graph::Graph;
use log::debug;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// Result of [`GraphAlgorithms::connectivity_analysis`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectivityResult {
    pub component_count: usize,
    /// Components in discovery order; members in discovery order.
    pub components: Vec<Vec<String>>,
    /// The first of the largest components.
    pub largest_component: Vec<String>,
    pub is_connected: bool,
}

/// Collect every node reachable from `start` that is not yet visited.
///
/// Nodes are marked visited when pushed.
fn collect_component<'a>(
    adj: &HashMap<&'a str, Vec<&'a str>>,
    start: &'a str,
    visited: &mut HashSet<&'a str>,
) -> Vec<&'a str> {
    let mut component = Vec::new();
    let mut stack = vec![start];
    visited.insert(start);

    while let Some(v) = stack.pop() {
        component.push(v);
        for &w in adj.get(v).into_iter().flatten() {
            if visited.insert(w) {
                stack.push(w);
            }
        }
    }
    component
}

/// Whether all nodes are reachable from the first one.
/// Graphs with at most one node are connected.
pub fn is_connected(graph: &Graph) -> bool {
    let n = graph.node_count();
    let Some(first) = graph.nodes().next() else {
        return true;
    };
    if n == 1 {
        return true;
    }

    let adj = sorted_adjacency(graph, true);
    let mut visited = HashSet::new();
    collect_component(&adj, first.id.as_str(), &mut visited).len() == n
}

impl GraphAlgorithms<'_> {
    /// Partition all nodes into connected components.
    pub fn connectivity_analysis(&self) -> ConnectivityResult {
        let graph = self.graph;
        let adj = sorted_adjacency(graph, true);
        let mut visited = HashSet::new();
        let mut components: Vec<Vec<String>> = Vec::new();

        for node in graph.nodes() {
            if visited.contains(node.id.as_str()) {
                continue;
            }
            let component = collect_component(&adj, node.id.as_str(), &mut visited);
            components.push(component.into_iter().map(str::to_string).collect());
        }

        let mut largest: &[String] = &[];
        for component in &components {
            if component.len() > largest.len() {
                largest = component;
            }
        }
        let largest_component = largest.to_vec();

        debug!(
            "connectivity: {} components, largest has {} nodes",
            components.len(),
            largest_component.len()
        );
        ConnectivityResult {
            component_count: components.len(),
            is_connected: components.len() <= 1,
            largest_component,
            components,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph_with(directed: bool, nodes: &[&str], edges: &[(&str, &str)]) -> Graph {
        let mut g = Graph::new(directed, false);
        for id in nodes {
            g.add_node(Some(id), id, 0.0, 0.0, None).unwrap();
        }
        for (s, t) in edges {
            g.add_edge(s, t, 1, None, None).unwrap();
        }
        g
    }

    #[test]
    fn test_is_connected_trivial() {
        assert!(is_connected(&Graph::default()));
        let g = graph_with(false, &["a"], &[]);
        assert!(is_connected(&g));
    }

    #[test]
    fn test_is_connected() {
        let g = graph_with(false, &["a", "b", "c"], &[("a", "b"), ("b", "c")]);
        assert!(is_connected(&g));

        let g = graph_with(false, &["a", "b", "c"], &[("a", "b")]);
        assert!(!is_connected(&g));
    }

    #[test]
    fn test_is_connected_directed_ignores_direction() {
        // a <- b -> c: nothing is reachable from a along edge direction
        let g = graph_with(true, &["a", "b", "c"], &[("b", "a"), ("b", "c")]);
        assert!(is_connected(&g));
    }

    #[test]
    fn test_components() {
        // a - b   c - d - e   f
        let g = graph_with(
            false,
            &["a", "b", "c", "d", "e", "f"],
            &[("a", "b"), ("c", "d"), ("d", "e")],
        );
        let r = GraphAlgorithms::new(&g).connectivity_analysis();
        assert_eq!(r.component_count, 3);
        assert!(!r.is_connected);
        assert_eq!(r.components[0], vec!["a", "b"]);
        assert_eq!(r.components[2], vec!["f"]);

        let mut largest = r.largest_component.clone();
        largest.sort();
        assert_eq!(largest, vec!["c", "d", "e"]);
    }

    #[test]
    fn test_components_tie_keeps_first() {
        let g = graph_with(false, &["a", "b", "c", "d"], &[("c", "d"), ("a", "b")]);
        let r = GraphAlgorithms::new(&g).connectivity_analysis();
        assert_eq!(r.largest_component, vec!["a", "b"]);
    }

    #[test]
    fn test_components_empty_graph() {
        let g = Graph::default();
        let r = GraphAlgorithms::new(&g).connectivity_analysis();
        assert_eq!(r.component_count, 0);
        assert!(r.largest_component.is_empty());
        assert!(r.is_connected);
    }

    #[test]
    fn test_component_membership_covers_all_nodes() {
        let g = graph_with(
            true,
            &["a", "b", "c", "d"],
            &[("a", "b"), ("c", "b")],
        );
        let r = GraphAlgorithms::new(&g).connectivity_analysis();
        let total: usize = r.components.iter().map(Vec::len).sum();
        assert_eq!(total, 4);
        assert_eq!(r.component_count, 2);
    }
}
