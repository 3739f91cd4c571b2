//! Depth-first and breadth-first search with path reconstruction.
//!
//! Both searches visit neighbors in the order given by
//! [`compare_ids`](super::compare_ids), so results are reproducible for a
//! given graph.

use super::{reconstruct_path, sorted_adjacency, GraphAlgorithms};
use crate::error::Result;
use log::debug;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap, HashSet, VecDeque};

/// Whether a search looked for a specific target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchType {
    /// Search for a target node, halting when it is reached.
    Targeted,
    /// Full traversal of everything reachable from the start.
    Complete,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TraversalStatistics {
    pub nodes_visited: usize,
    pub total_nodes: usize,
    pub path_length: usize,
    pub search_type: SearchType,
}

/// Result of [`GraphAlgorithms::dfs`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DfsResult {
    pub start_node: String,
    pub target_node: Option<String>,
    /// Nodes in the order they were popped and processed.
    pub visit_order: Vec<String>,
    /// Start to target, or the full visit order when there is no target.
    pub path: Vec<String>,
    pub found: bool,
    /// Edges on `path`; `None` without a found target.
    pub distance: Option<usize>,
    /// `false` when the search halted early on the target.
    pub is_complete: bool,
    pub statistics: TraversalStatistics,
}

/// Result of [`GraphAlgorithms::bfs`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BfsResult {
    pub start_node: String,
    pub target_node: Option<String>,
    pub visit_order: Vec<String>,
    pub path: Vec<String>,
    pub found: bool,
    /// Hop count to the target; `None` without a found target.
    pub distance: Option<usize>,
    /// Hop count from the start for every node discovered so far.
    pub distances: BTreeMap<String, usize>,
    pub statistics: TraversalStatistics,
}

/// Path, found flag and distance shared by both searches.
fn outcome(
    parent: &HashMap<&str, &str>,
    start: &str,
    target: Option<&str>,
    found: bool,
    visit_order: &[String],
) -> (Vec<String>, bool, Option<usize>) {
    match target {
        None => (visit_order.to_vec(), true, None),
        Some(target) if found => {
            let path = reconstruct_path(parent, start, target);
            let distance = path.len().checked_sub(1);
            (path, distance.is_some(), distance)
        }
        Some(_) => (Vec::new(), false, None),
    }
}

fn statistics(
    visit_order: &[String],
    total_nodes: usize,
    path: &[String],
    target: Option<&str>,
) -> TraversalStatistics {
    TraversalStatistics {
        nodes_visited: visit_order.len(),
        total_nodes,
        path_length: path.len(),
        search_type: if target.is_some() {
            SearchType::Targeted
        } else {
            SearchType::Complete
        },
    }
}

impl GraphAlgorithms<'_> {
    /// Iterative depth-first search from `start`.
    ///
    /// A node is processed the first time it is popped; it may be pushed
    /// several times. Children are pushed in reverse neighbor order so the
    /// smallest neighbor is explored first. The parent of each node is the
    /// node it was first pushed from.
    pub fn dfs(&self, start: &str, target: Option<&str>) -> Result<DfsResult> {
        self.require_node(start)?;
        if let Some(target) = target {
            self.require_node(target)?;
        }

        let adj = sorted_adjacency(self.graph, false);
        let mut stack = vec![start];
        let mut visited: HashSet<&str> = HashSet::new();
        let mut parent: HashMap<&str, &str> = HashMap::new();
        let mut visit_order = Vec::new();
        let mut found = false;

        while let Some(current) = stack.pop() {
            if !visited.insert(current) {
                continue;
            }
            visit_order.push(current.to_string());

            if Some(current) == target {
                found = true;
                break;
            }

            for &next in adj.get(current).into_iter().flatten().rev() {
                if visited.contains(next) {
                    continue;
                }
                if next != start {
                    parent.entry(next).or_insert(current);
                }
                stack.push(next);
            }
        }

        let (path, found, distance) = outcome(&parent, start, target, found, &visit_order);
        let is_complete = target.is_none() || !found;
        let statistics = statistics(&visit_order, self.graph.node_count(), &path, target);

        debug!(
            "DFS from {}: visited {} nodes, found = {}",
            start,
            visit_order.len(),
            found
        );
        Ok(DfsResult {
            start_node: start.to_string(),
            target_node: target.map(str::to_string),
            visit_order,
            path,
            found,
            distance,
            is_complete,
            statistics,
        })
    }

    /// Breadth-first search from `start`.
    ///
    /// Nodes are marked visited when enqueued, so `distances` holds minimum
    /// hop counts. Halts once the target is dequeued.
    pub fn bfs(&self, start: &str, target: Option<&str>) -> Result<BfsResult> {
        self.require_node(start)?;
        if let Some(target) = target {
            self.require_node(target)?;
        }

        let adj = sorted_adjacency(self.graph, false);
        let mut queue = VecDeque::from([start]);
        let mut visited: HashSet<&str> = HashSet::from([start]);
        let mut parent: HashMap<&str, &str> = HashMap::new();
        let mut distances: BTreeMap<String, usize> = BTreeMap::new();
        let mut visit_order = Vec::new();
        let mut found = false;

        distances.insert(start.to_string(), 0);

        while let Some(current) = queue.pop_front() {
            visit_order.push(current.to_string());

            if Some(current) == target {
                found = true;
                break;
            }

            let depth = distances.get(current).copied().unwrap_or(0);
            for &next in adj.get(current).into_iter().flatten() {
                if visited.insert(next) {
                    parent.insert(next, current);
                    distances.insert(next.to_string(), depth + 1);
                    queue.push_back(next);
                }
            }
        }

        let (path, found, distance) = outcome(&parent, start, target, found, &visit_order);
        let statistics = statistics(&visit_order, self.graph.node_count(), &path, target);

        debug!(
            "BFS from {}: visited {} nodes, found = {}",
            start,
            visit_order.len(),
            found
        );
        Ok(BfsResult {
            start_node: start.to_string(),
            target_node: target.map(str::to_string),
            visit_order,
            path,
            found,
            distance,
            distances,
            statistics,
        })
    }
}
