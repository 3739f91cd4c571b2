//! Graph algorithm implementations.
//!
//! Every algorithm reads a borrowed [`Graph`] and returns an owned result
//! record. Nothing here mutates the graph.

pub mod connectivity;
pub mod cycles;
pub mod mst;
pub mod traversal;

pub use connectivity::ConnectivityResult;
pub use cycles::CycleDetectionResult;
pub use mst::{KruskalResult, MstComparison, MstStep, PrimResult, StepAction};
pub use traversal::{BfsResult, DfsResult, SearchType, TraversalStatistics};

use crate::error::{GraphError, Result};
use crate::graph::Graph;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Read-only algorithm engine over a borrowed graph.
#[derive(Debug, Clone, Copy)]
pub struct GraphAlgorithms<'g> {
    graph: &'g Graph,
}

impl<'g> GraphAlgorithms<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self { graph }
    }

    fn require_node(&self, id: &str) -> Result<()> {
        if self.graph.contains_node(id) {
            Ok(())
        } else {
            Err(GraphError::UnknownNode(id.to_string()))
        }
    }
}

/// Result of any algorithm run, tagged by algorithm name.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "algorithm")]
pub enum AlgorithmResult {
    #[serde(rename = "DFS")]
    Dfs(DfsResult),
    #[serde(rename = "BFS")]
    Bfs(BfsResult),
    Kruskal(KruskalResult),
    Prim(PrimResult),
}

impl From<DfsResult> for AlgorithmResult {
    fn from(result: DfsResult) -> Self {
        AlgorithmResult::Dfs(result)
    }
}

impl From<BfsResult> for AlgorithmResult {
    fn from(result: BfsResult) -> Self {
        AlgorithmResult::Bfs(result)
    }
}

impl From<KruskalResult> for AlgorithmResult {
    fn from(result: KruskalResult) -> Self {
        AlgorithmResult::Kruskal(result)
    }
}

impl From<PrimResult> for AlgorithmResult {
    fn from(result: PrimResult) -> Self {
        AlgorithmResult::Prim(result)
    }
}

/// Ordering key of a node id: the first run of digits in it, or 0.
///
/// "Node5" -> 5, "S10" -> 10, "A" -> 0. Digit runs too long for `u64`
/// saturate to `u64::MAX`.
pub fn numeric_key(id: &str) -> u64 {
    let digits: String = id
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    if digits.is_empty() {
        0
    } else {
        digits.parse().unwrap_or(u64::MAX)
    }
}

/// Neighbor ordering: numeric key ascending, then the full id.
pub fn compare_ids(a: &str, b: &str) -> Ordering {
    numeric_key(a)
        .cmp(&numeric_key(b))
        .then_with(|| a.cmp(b))
}

/// Sort ids in neighbor order.
pub fn sort_ids(ids: &mut [&str]) {
    ids.sort_by(|a, b| compare_ids(a, b));
}

/// Adjacency lists sorted in neighbor order.
///
/// With `ignore_direction` every edge is followed both ways; otherwise the
/// graph's own directedness applies. Every node has an entry.
pub(crate) fn sorted_adjacency(graph: &Graph, ignore_direction: bool) -> HashMap<&str, Vec<&str>> {
    let mut adj: HashMap<&str, Vec<&str>> = graph
        .nodes()
        .map(|n| (n.id.as_str(), Vec::new()))
        .collect();

    let both_ways = ignore_direction || !graph.is_directed();
    for edge in graph.edges() {
        if let Some(list) = adj.get_mut(edge.source.as_str()) {
            list.push(edge.target.as_str());
        }
        if both_ways {
            if let Some(list) = adj.get_mut(edge.target.as_str()) {
                list.push(edge.source.as_str());
            }
        }
    }

    for list in adj.values_mut() {
        sort_ids(list);
        list.dedup();
    }
    adj
}

/// Walk parent pointers from `end` back to `start`.
///
/// Returns the path start..=end, or an empty path if the walk does not
/// reach `start`.
pub fn reconstruct_path(parent: &HashMap<&str, &str>, start: &str, end: &str) -> Vec<String> {
    let mut path = vec![end.to_string()];
    let mut current = end;
    while current != start {
        // A parent chain longer than the map means a malformed map.
        if path.len() > parent.len() + 1 {
            return Vec::new();
        }
        match parent.get(current) {
            Some(&prev) => {
                path.push(prev.to_string());
                current = prev;
            }
            None => return Vec::new(),
        }
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_key() {
        assert_eq!(numeric_key("Node5"), 5);
        assert_eq!(numeric_key("S10"), 10);
        assert_eq!(numeric_key("A"), 0);
        assert_eq!(numeric_key("n12x34"), 12);
        assert_eq!(numeric_key("node_007"), 7);
        assert_eq!(numeric_key("x99999999999999999999999"), u64::MAX);
    }

    #[test]
    fn test_sort_ids() {
        let mut ids = vec!["Node10", "Node2", "B", "A", "Node1", "x2"];
        sort_ids(&mut ids);
        assert_eq!(ids, vec!["A", "B", "Node1", "Node2", "x2", "Node10"]);
    }

    #[test]
    fn test_reconstruct_path() {
        let parent: HashMap<&str, &str> = [("b", "a"), ("c", "b"), ("d", "c")].into_iter().collect();
        assert_eq!(reconstruct_path(&parent, "a", "d"), vec!["a", "b", "c", "d"]);
        assert_eq!(reconstruct_path(&parent, "a", "a"), vec!["a"]);
        // "z" never reached
        assert!(reconstruct_path(&parent, "a", "z").is_empty());
        // chain ends at "a", not at "b"
        assert!(reconstruct_path(&parent, "b", "a").is_empty());
    }

    #[test]
    fn test_reconstruct_path_malformed_loop() {
        let parent: HashMap<&str, &str> = [("b", "c"), ("c", "b")].into_iter().collect();
        assert!(reconstruct_path(&parent, "a", "b").is_empty());
    }

    #[test]
    fn test_sorted_adjacency() {
        let mut g = Graph::new(true, false);
        for id in ["n3", "n1", "n2"] {
            g.add_node(Some(id), id, 0.0, 0.0, None).unwrap();
        }
        g.add_edge("n1", "n3", 1, None, None).unwrap();
        g.add_edge("n1", "n2", 1, None, None).unwrap();
        g.add_edge("n2", "n1", 1, None, None).unwrap();

        let directed = sorted_adjacency(&g, false);
        assert_eq!(directed["n1"], vec!["n2", "n3"]);
        assert!(directed["n3"].is_empty());

        let undirected = sorted_adjacency(&g, true);
        // n2 appears once despite edges in both directions
        assert_eq!(undirected["n1"], vec!["n2", "n3"]);
        assert_eq!(undirected["n3"], vec!["n1"]);
    }

    #[test]
    fn test_result_is_tagged() {
        let mut g = Graph::new(false, false);
        g.add_node(Some("A"), "A", 0.0, 0.0, None).unwrap();
        let result = GraphAlgorithms::new(&g).dfs("A", None).unwrap();
        let value = serde_json::to_value(AlgorithmResult::from(result)).unwrap();
        assert_eq!(value["algorithm"], "DFS");
        assert_eq!(value["startNode"], "A");
        assert_eq!(value["visitOrder"][0], "A");
        assert_eq!(value["isComplete"], true);
    }
}
