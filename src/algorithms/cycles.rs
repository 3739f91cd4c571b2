//! Cycle detection.
//!
//! Both entry points run a depth-first search on an explicit stack of
//! frames instead of recursing, so deep graphs cannot overflow the call
//! stack. A neighbor that is still on the stack closes a cycle; on
//! undirected graphs the edge back to the immediate parent is skipped.

use super::{sort_ids, sorted_adjacency, GraphAlgorithms};
use crate::graph::Graph;
use log::debug;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// Result of [`GraphAlgorithms::detect_cycles`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleDetectionResult {
    pub has_cycles: bool,
    /// One cycle per back edge, listed from the ancestor to the closing node.
    pub cycles: Vec<Vec<String>>,
    pub count: usize,
}

/// One level of the simulated recursion.
struct Frame<'a> {
    node: &'a str,
    parent: Option<&'a str>,
    next: usize,
}

impl<'a> Frame<'a> {
    fn new(node: &'a str, parent: Option<&'a str>) -> Self {
        Self {
            node,
            parent,
            next: 0,
        }
    }
}

/// Node ids in neighbor order, used as DFS roots.
fn roots(graph: &Graph) -> Vec<&str> {
    let mut ids: Vec<&str> = graph.nodes().map(|n| n.id.as_str()).collect();
    sort_ids(&mut ids);
    ids
}

/// Whether the graph has a cycle. Graphs with two or fewer nodes never do.
pub fn has_cycles(graph: &Graph) -> bool {
    if graph.node_count() <= 2 {
        return false;
    }

    let adj = sorted_adjacency(graph, false);
    let directed = graph.is_directed();
    let mut visited: HashSet<&str> = HashSet::new();

    for root in roots(graph) {
        if !visited.insert(root) {
            continue;
        }
        let mut stack = vec![Frame::new(root, None)];
        let mut on_stack: HashSet<&str> = HashSet::from([root]);

        while let Some(frame) = stack.last_mut() {
            let neighbors = &adj[frame.node];
            if frame.next == neighbors.len() {
                on_stack.remove(frame.node);
                stack.pop();
                continue;
            }
            let next = neighbors[frame.next];
            frame.next += 1;
            let current = frame.node;

            if !directed && Some(next) == frame.parent {
                continue;
            }
            if on_stack.contains(next) {
                return true;
            }
            if visited.insert(next) {
                on_stack.insert(next);
                stack.push(Frame::new(next, Some(current)));
            }
        }
    }
    false
}

impl GraphAlgorithms<'_> {
    /// Enumerate the cycles closed by back edges of a depth-first search.
    ///
    /// Membership in the current path (not just "visited") decides whether
    /// a neighbor closes a cycle, so fully explored branches are not
    /// reported.
    pub fn detect_cycles(&self) -> CycleDetectionResult {
        let graph = self.graph;
        let adj = sorted_adjacency(graph, false);
        let directed = graph.is_directed();
        let mut visited: HashSet<&str> = HashSet::new();
        let mut cycles = Vec::new();

        for root in roots(graph) {
            if !visited.insert(root) {
                continue;
            }
            let mut stack = vec![Frame::new(root, None)];
            // node -> depth in `stack`
            let mut on_path: HashMap<&str, usize> = HashMap::from([(root, 0)]);

            while let Some(frame) = stack.last_mut() {
                let neighbors = &adj[frame.node];
                if frame.next == neighbors.len() {
                    on_path.remove(frame.node);
                    stack.pop();
                    continue;
                }
                let next = neighbors[frame.next];
                frame.next += 1;
                let current = frame.node;

                if !directed && Some(next) == frame.parent {
                    continue;
                }
                if let Some(&depth) = on_path.get(next) {
                    let cycle: Vec<String> =
                        stack[depth..].iter().map(|f| f.node.to_string()).collect();
                    cycles.push(cycle);
                } else if visited.insert(next) {
                    on_path.insert(next, stack.len());
                    stack.push(Frame::new(next, Some(current)));
                }
            }
        }

        debug!("detect_cycles: found {}", cycles.len());
        CycleDetectionResult {
            has_cycles: !cycles.is_empty(),
            count: cycles.len(),
            cycles,
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
    fn test_has_cycles_small_graphs() {
        let g = graph_with(true, &["a", "b"], &[("a", "b"), ("b", "a")]);
        // Two nodes are defined to be acyclic
        assert!(!has_cycles(&g));
        assert!(!has_cycles(&Graph::default()));
    }

    #[test]
    fn test_has_cycles_undirected_path() {
        // a - b - c - d: the parent edge is never mistaken for a cycle
        let g = graph_with(false, &["a", "b", "c", "d"], &[("a", "b"), ("b", "c"), ("c", "d")]);
        assert!(!has_cycles(&g));
    }

    #[test]
    fn test_has_cycles_undirected_triangle() {
        let g = graph_with(false, &["a", "b", "c"], &[("a", "b"), ("b", "c"), ("c", "a")]);
        assert!(has_cycles(&g));
    }

    #[test]
    fn test_has_cycles_directed() {
        // a -> b -> c -> a
        let cyclic = graph_with(true, &["a", "b", "c"], &[("a", "b"), ("b", "c"), ("c", "a")]);
        assert!(has_cycles(&cyclic));

        // Diamond DAG: c is reached twice but never while on the stack
        //     a
        //    / \
        //   b   c
        //    \ /
        //     d
        let dag = graph_with(
            true,
            &["a", "b", "c", "d"],
            &[("a", "b"), ("a", "c"), ("b", "d"), ("c", "d")],
        );
        assert!(!has_cycles(&dag));
    }

    #[test]
    fn test_has_cycles_second_component() {
        let g = graph_with(
            false,
            &["a", "b", "c", "d", "e"],
            &[("a", "b"), ("c", "d"), ("d", "e"), ("e", "c")],
        );
        assert!(has_cycles(&g));
    }

    #[test]
    fn test_deep_chain_does_not_overflow() {
        let mut g = Graph::new(true, false);
        let n = 5_000;
        for i in 0..n {
            g.add_node(Some(&format!("v{}", i)), "", 0.0, 0.0, None).unwrap();
        }
        for i in 0..n - 1 {
            g.add_edge(&format!("v{}", i), &format!("v{}", i + 1), 1, None, None)
                .unwrap();
        }
        assert!(!has_cycles(&g));
        g.add_edge(&format!("v{}", n - 1), "v0", 1, None, None).unwrap();
        assert!(has_cycles(&g));
    }

    #[test]
    fn test_detect_cycles_triangle() {
        let g = graph_with(false, &["a", "b", "c"], &[("a", "b"), ("b", "c"), ("c", "a")]);
        let r = GraphAlgorithms::new(&g).detect_cycles();
        assert!(r.has_cycles);
        assert_eq!(r.count, 1);
        assert_eq!(r.cycles, vec![vec!["a", "b", "c"]]);
    }

    #[test]
    fn test_detect_cycles_two_loops() {
        // Two triangles sharing node c (bowtie)
        let g = graph_with(
            false,
            &["a", "b", "c", "d", "e"],
            &[("a", "b"), ("b", "c"), ("c", "a"), ("c", "d"), ("d", "e"), ("e", "c")],
        );
        let r = GraphAlgorithms::new(&g).detect_cycles();
        assert_eq!(r.count, 2);
        assert_eq!(r.cycles[0], vec!["a", "b", "c"]);
        assert_eq!(r.cycles[1], vec!["c", "d", "e"]);
    }

    #[test]
    fn test_detect_cycles_directed_two_node_loop() {
        let g = graph_with(true, &["a", "b"], &[("a", "b"), ("b", "a")]);
        let r = GraphAlgorithms::new(&g).detect_cycles();
        assert_eq!(r.cycles, vec![vec!["a", "b"]]);
    }

    #[test]
    fn test_detect_cycles_none_in_dag() {
        let g = graph_with(
            true,
            &["a", "b", "c", "d"],
            &[("a", "b"), ("a", "c"), ("b", "d"), ("c", "d")],
        );
        let r = GraphAlgorithms::new(&g).detect_cycles();
        assert!(!r.has_cycles);
        assert_eq!(r.count, 0);
    }
}
