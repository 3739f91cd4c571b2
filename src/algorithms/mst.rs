//! Minimum spanning trees: Kruskal, Prim, and a cross-check of the two.
//!
//! Both algorithms treat edges as undirected and require a weighted graph.
//! On a disconnected graph they return a partial tree; `efficiency` below
//! 100 signals that.

use super::GraphAlgorithms;
use crate::disjoint_set::DisjointSet;
use crate::error::{GraphError, Result};
use crate::graph::Edge;
use log::{debug, trace};
use serde::Serialize;
use std::collections::{BTreeSet, HashSet};

/// Tolerance for comparing total weights.
const WEIGHT_TOLERANCE: f64 = 0.001;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepAction {
    Added,
    Rejected,
}

/// One decision made while building a tree, for step-by-step replay.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MstStep {
    pub edge: Edge,
    pub action: StepAction,
    pub reason: String,
}

impl MstStep {
    fn added(edge: &Edge, reason: &str) -> Self {
        Self {
            edge: edge.clone(),
            action: StepAction::Added,
            reason: reason.to_string(),
        }
    }

    fn rejected(edge: &Edge, reason: &str) -> Self {
        Self {
            edge: edge.clone(),
            action: StepAction::Rejected,
            reason: reason.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KruskalStatistics {
    pub original_edges: usize,
    pub mst_edges: usize,
    pub total_nodes: usize,
    /// Accepted edges as a percentage of `n - 1`.
    pub efficiency: f64,
}

/// Result of [`GraphAlgorithms::kruskal`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KruskalResult {
    pub mst_edges: Vec<Edge>,
    pub total_weight: u64,
    pub steps: Vec<MstStep>,
    pub statistics: KruskalStatistics,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrimStatistics {
    pub total_nodes: usize,
    pub mst_edges: usize,
    pub nodes_reached: usize,
    pub is_complete: bool,
    pub efficiency: f64,
}

/// Result of [`GraphAlgorithms::prim`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrimResult {
    /// `None` only for an empty graph.
    pub start_node: Option<String>,
    pub mst_edges: Vec<Edge>,
    pub total_weight: u64,
    pub steps: Vec<MstStep>,
    pub statistics: PrimStatistics,
}

/// Result of [`GraphAlgorithms::compare_mst`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MstComparison {
    pub kruskal: KruskalResult,
    pub prim: PrimResult,
    pub kruskal_weight: u64,
    pub prim_weight: u64,
    pub weights_match: bool,
    /// Same edge set, ignoring order and edge direction.
    pub edges_match: bool,
}

fn efficiency(mst_edges: usize, total_nodes: usize) -> f64 {
    if total_nodes <= 1 {
        0.0
    } else {
        mst_edges as f64 / (total_nodes - 1) as f64 * 100.0
    }
}

/// Order-independent key: endpoints sorted lexicographically.
fn edge_signature(edge: &Edge) -> (&str, &str) {
    if edge.source <= edge.target {
        (&edge.source, &edge.target)
    } else {
        (&edge.target, &edge.source)
    }
}

impl GraphAlgorithms<'_> {
    fn require_weighted(&self, algorithm: &'static str) -> Result<()> {
        if self.graph.is_weighted() {
            Ok(())
        } else {
            Err(GraphError::UnweightedGraph(algorithm))
        }
    }

    /// Kruskal's algorithm.
    ///
    /// Edges are stably sorted by weight, so equal weights keep insertion
    /// order. Stops as soon as `n - 1` edges are accepted.
    pub fn kruskal(&self) -> Result<KruskalResult> {
        self.require_weighted("Kruskal")?;

        let graph = self.graph;
        let n = graph.node_count();
        let wanted = n.saturating_sub(1);

        let mut sorted: Vec<&Edge> = graph.edges().collect();
        sorted.sort_by_key(|e| graph.effective_weight(e));

        let mut sets = DisjointSet::new(graph.nodes().map(|node| node.id.as_str()));
        let mut mst_edges = Vec::with_capacity(wanted);
        let mut steps = Vec::new();
        let mut total_weight = 0u64;

        for edge in sorted {
            if mst_edges.len() == wanted {
                break;
            }
            if sets.union(&edge.source, &edge.target) {
                trace!("kruskal: add {} (w = {})", edge.id, edge.weight);
                total_weight += u64::from(graph.effective_weight(edge));
                steps.push(MstStep::added(edge, "no cycle"));
                mst_edges.push(edge.clone());
            } else {
                trace!("kruskal: reject {}", edge.id);
                steps.push(MstStep::rejected(edge, "would form cycle"));
            }
        }

        let statistics = KruskalStatistics {
            original_edges: graph.edge_count(),
            mst_edges: mst_edges.len(),
            total_nodes: n,
            efficiency: efficiency(mst_edges.len(), n),
        };
        debug!(
            "kruskal: {} edges, total weight {}",
            mst_edges.len(),
            total_weight
        );
        Ok(KruskalResult {
            mst_edges,
            total_weight,
            steps,
            statistics,
        })
    }

    /// Prim's algorithm from `start`, or from the first node.
    ///
    /// Each round scans every edge in insertion order and takes the lightest
    /// one with exactly one endpoint in the tree; on equal weights the first
    /// one scanned wins. Stops early when no boundary edge remains.
    pub fn prim(&self, start: Option<&str>) -> Result<PrimResult> {
        self.require_weighted("Prim")?;
        if let Some(start) = start {
            self.require_node(start)?;
        }

        let graph = self.graph;
        let n = graph.node_count();
        let start = start.or_else(|| graph.nodes().next().map(|node| node.id.as_str()));

        let mut in_tree: HashSet<&str> = HashSet::new();
        let mut mst_edges = Vec::new();
        let mut steps = Vec::new();
        let mut total_weight = 0u64;

        if let Some(start) = start {
            in_tree.insert(start);
        }

        while in_tree.len() < n {
            let mut best: Option<&Edge> = None;
            for edge in graph.edges() {
                let source_in = in_tree.contains(edge.source.as_str());
                let target_in = in_tree.contains(edge.target.as_str());
                if source_in == target_in {
                    continue;
                }
                let lighter = best.map_or(true, |b| {
                    graph.effective_weight(edge) < graph.effective_weight(b)
                });
                if lighter {
                    best = Some(edge);
                }
            }

            let Some(edge) = best else {
                debug!("prim: no boundary edge left, tree is partial");
                break;
            };

            let inside = if in_tree.contains(edge.source.as_str()) {
                edge.source.as_str()
            } else {
                edge.target.as_str()
            };
            let Some(added) = edge.other(inside) else {
                break;
            };
            in_tree.insert(added);
            trace!("prim: add {} reaching {}", edge.id, added);
            total_weight += u64::from(graph.effective_weight(edge));
            steps.push(MstStep::added(edge, "minimum boundary edge"));
            mst_edges.push(edge.clone());
        }

        let statistics = PrimStatistics {
            total_nodes: n,
            mst_edges: mst_edges.len(),
            nodes_reached: in_tree.len(),
            is_complete: in_tree.len() == n,
            efficiency: efficiency(mst_edges.len(), n),
        };
        debug!(
            "prim: {} edges, total weight {}",
            mst_edges.len(),
            total_weight
        );
        Ok(PrimResult {
            start_node: start.map(str::to_string),
            mst_edges,
            total_weight,
            steps,
            statistics,
        })
    }

    /// Run Kruskal and Prim and compare total weight and edge sets.
    pub fn compare_mst(&self) -> Result<MstComparison> {
        let kruskal = self.kruskal()?;
        let prim = self.prim(None)?;

        let weights_match =
            (kruskal.total_weight as f64 - prim.total_weight as f64).abs() < WEIGHT_TOLERANCE;
        let kruskal_set: BTreeSet<(&str, &str)> =
            kruskal.mst_edges.iter().map(edge_signature).collect();
        let prim_set: BTreeSet<(&str, &str)> = prim.mst_edges.iter().map(edge_signature).collect();
        let edges_match = kruskal_set == prim_set;

        Ok(MstComparison {
            kruskal_weight: kruskal.total_weight,
            prim_weight: prim.total_weight,
            weights_match,
            edges_match,
            kruskal,
            prim,
        })
    }
}
