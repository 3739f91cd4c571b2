//! Core graph structure: nodes, edges and their structural invariants.
//!
//! Nodes and edges are kept in insertion order with id -> position lookup
//! maps on the side. Insertion order only matters for default layout and for
//! deterministic scan order in the algorithms.

use crate::algorithms::{connectivity, cycles, GraphAlgorithms};
use crate::error::{GraphError, Result};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use wasm_bindgen::prelude::*;

/// Opaque attribute bag attached to a node.
pub type NodeData = Map<String, Value>;

/// A graph node with display label and layout position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub label: String,
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub data: NodeData,
}

/// A graph edge.
///
/// `directed` records the graph's directedness at the time the edge was
/// created; traversal always follows the graph's current flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub weight: u32,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub directed: bool,
}

impl Edge {
    /// Whether this edge touches `node`.
    pub fn touches(&self, node: &str) -> bool {
        self.source == node || self.target == node
    }

    /// The endpoint opposite to `node`, if this edge touches it.
    pub fn other(&self, node: &str) -> Option<&str> {
        if self.source == node {
            Some(&self.target)
        } else if self.target == node {
            Some(&self.source)
        } else {
            None
        }
    }

    /// Whether this edge links `a` to `b`, in either direction unless `directed`.
    pub fn links(&self, a: &str, b: &str, directed: bool) -> bool {
        (self.source == a && self.target == b)
            || (!directed && self.source == b && self.target == a)
    }
}

/// Serializable graph snapshot for save/load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphSnapshot {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    pub is_directed: bool,
    pub is_weighted: bool,
    #[serde(default)]
    pub node_id_counter: u64,
    #[serde(default)]
    pub edge_id_counter: u64,
}

/// Summary numbers for the statistics panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphStatistics {
    pub node_count: usize,
    pub edge_count: usize,
    /// Percentage of the maximum possible edge count.
    pub density: f64,
    pub average_degree: f64,
    pub min_degree: usize,
    pub max_degree: usize,
    pub is_connected: bool,
    pub has_cycles: bool,
}

/// Graph of string-keyed nodes and edges.
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct Graph {
    /// Nodes in insertion order
    nodes: Vec<Node>,

    /// Reverse lookup: node id -> position in `nodes`
    node_index: HashMap<String, usize>,

    /// Edges in insertion order
    edges: Vec<Edge>,

    /// Reverse lookup: edge id -> position in `edges`
    edge_index: HashMap<String, usize>,

    is_directed: bool,
    is_weighted: bool,

    /// Last auto-generated `node_<n>` suffix
    node_id_counter: u64,

    /// Last auto-generated `edge_<n>` suffix
    edge_id_counter: u64,
}

/// Serialize a record into a plain JS value (maps become objects).
pub(crate) fn to_js<T: Serialize + ?Sized>(value: &T) -> JsValue {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .unwrap_or(JsValue::NULL)
}

fn data_from_js(value: JsValue) -> Result<Option<NodeData>> {
    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }
    match serde_wasm_bindgen::from_value::<Value>(value) {
        Ok(Value::Object(map)) => Ok(Some(map)),
        Ok(other) => Err(GraphError::InvalidData(format!("expected object, got {}", other))),
        Err(e) => Err(GraphError::InvalidData(e.to_string())),
    }
}

/// NaN and infinities serialize as `null` and would not load back.
fn check_position(x: f64, y: f64) -> Result<()> {
    if x.is_finite() && y.is_finite() {
        Ok(())
    } else {
        Err(GraphError::InvalidPosition { x, y })
    }
}

/// Convert a JS number into an edge weight without wrapping or truncating.
fn weight_from_js(weight: f64) -> Result<u32> {
    let in_range = (0.0..=f64::from(u32::MAX)).contains(&weight);
    if in_range && weight.fract() == 0.0 {
        Ok(weight as u32)
    } else {
        Err(GraphError::InvalidWeight(weight))
    }
}

#[wasm_bindgen]
impl Graph {
    /// Create an empty graph.
    #[wasm_bindgen(constructor)]
    pub fn new(is_directed: bool, is_weighted: bool) -> Graph {
        Graph {
            nodes: Vec::new(),
            node_index: HashMap::new(),
            edges: Vec::new(),
            edge_index: HashMap::new(),
            is_directed,
            is_weighted,
            node_id_counter: 0,
            edge_id_counter: 0,
        }
    }

    /// Number of nodes.
    #[wasm_bindgen(js_name = nodeCount)]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    #[wasm_bindgen(js_name = edgeCount)]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[wasm_bindgen(js_name = isDirected)]
    pub fn is_directed(&self) -> bool {
        self.is_directed
    }

    #[wasm_bindgen(js_name = isWeighted)]
    pub fn is_weighted(&self) -> bool {
        self.is_weighted
    }

    /// Change directedness. Only allowed while the graph has no edges.
    #[wasm_bindgen(js_name = setDirected)]
    pub fn set_directed(&mut self, directed: bool) -> bool {
        if !self.edges.is_empty() && directed != self.is_directed {
            return false;
        }
        self.is_directed = directed;
        true
    }

    /// Change weightedness. Only allowed while the graph has no edges.
    #[wasm_bindgen(js_name = setWeighted)]
    pub fn set_weighted(&mut self, weighted: bool) -> bool {
        if !self.edges.is_empty() && weighted != self.is_weighted {
            return false;
        }
        self.is_weighted = weighted;
        true
    }

    /// Remove all nodes and edges and reset the id counters. Flags are kept.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.node_index.clear();
        self.edges.clear();
        self.edge_index.clear();
        self.node_id_counter = 0;
        self.edge_id_counter = 0;
    }

    /// Whether every node is reachable from every other, ignoring direction.
    #[wasm_bindgen(js_name = isConnected)]
    pub fn is_connected(&self) -> bool {
        connectivity::is_connected(self)
    }

    /// Whether the graph contains a cycle.
    #[wasm_bindgen(js_name = hasCycles)]
    pub fn has_cycles(&self) -> bool {
        cycles::has_cycles(self)
    }

    #[wasm_bindgen(js_name = addNode)]
    pub fn js_add_node(
        &mut self,
        id: Option<String>,
        label: String,
        x: f64,
        y: f64,
        data: JsValue,
    ) -> std::result::Result<JsValue, JsError> {
        let data = data_from_js(data)?;
        let node = self.add_node(id.as_deref(), &label, x, y, data)?;
        Ok(to_js(node))
    }

    #[wasm_bindgen(js_name = removeNode)]
    pub fn js_remove_node(&mut self, id: &str) -> bool {
        self.remove_node(id)
    }

    #[wasm_bindgen(js_name = updateNode)]
    pub fn js_update_node(
        &mut self,
        id: &str,
        label: Option<String>,
        data: JsValue,
    ) -> std::result::Result<JsValue, JsError> {
        let data = data_from_js(data)?;
        let node = self.update_node(id, label.as_deref(), data)?;
        Ok(to_js(node))
    }

    #[wasm_bindgen(js_name = updateNodePosition)]
    pub fn js_update_node_position(
        &mut self,
        id: &str,
        x: f64,
        y: f64,
    ) -> std::result::Result<JsValue, JsError> {
        let node = self.update_node_position(id, x, y)?;
        Ok(to_js(node))
    }

    /// Add an edge. `weight` defaults to 1.
    #[wasm_bindgen(js_name = addEdge)]
    pub fn js_add_edge(
        &mut self,
        source: &str,
        target: &str,
        weight: Option<f64>,
        label: Option<String>,
        id: Option<String>,
    ) -> std::result::Result<JsValue, JsError> {
        let weight = weight.map(weight_from_js).transpose()?;
        let edge = self.add_edge(
            source,
            target,
            weight.unwrap_or(1),
            label.as_deref(),
            id.as_deref(),
        )?;
        Ok(to_js(edge))
    }

    #[wasm_bindgen(js_name = removeEdge)]
    pub fn js_remove_edge(&mut self, id: &str) -> bool {
        self.remove_edge(id)
    }

    #[wasm_bindgen(js_name = updateEdge)]
    pub fn js_update_edge(
        &mut self,
        id: &str,
        weight: Option<f64>,
        label: Option<String>,
    ) -> std::result::Result<JsValue, JsError> {
        let weight = weight.map(weight_from_js).transpose()?;
        let edge = self.update_edge(id, weight, label.as_deref())?;
        Ok(to_js(edge))
    }

    /// Node record, or null.
    #[wasm_bindgen(js_name = getNode)]
    pub fn js_get_node(&self, id: &str) -> JsValue {
        self.node(id).map_or(JsValue::NULL, to_js)
    }

    /// Edge record, or null.
    #[wasm_bindgen(js_name = getEdge)]
    pub fn js_get_edge(&self, id: &str) -> JsValue {
        self.edge(id).map_or(JsValue::NULL, to_js)
    }

    #[wasm_bindgen(js_name = getNodes)]
    pub fn js_get_nodes(&self) -> JsValue {
        to_js(&self.nodes)
    }

    #[wasm_bindgen(js_name = getEdges)]
    pub fn js_get_edges(&self) -> JsValue {
        to_js(&self.edges)
    }

    /// Adjacent node ids as a JS array.
    #[wasm_bindgen(js_name = getNeighbors)]
    pub fn js_get_neighbors(&self, id: &str) -> js_sys::Array {
        self.neighbors(id)
            .into_iter()
            .map(JsValue::from_str)
            .collect()
    }

    /// Effective weight of the edge a -> b, or `Infinity` if there is none.
    #[wasm_bindgen(js_name = getEdgeWeight)]
    pub fn js_get_edge_weight(&self, a: &str, b: &str) -> f64 {
        self.edge_weight(a, b).map_or(f64::INFINITY, f64::from)
    }

    #[wasm_bindgen(js_name = getDegree)]
    pub fn js_get_degree(&self, id: &str) -> usize {
        self.degree(id)
    }

    #[wasm_bindgen(js_name = getStatistics)]
    pub fn js_get_statistics(&self) -> JsValue {
        to_js(&self.statistics())
    }

    /// Export graph as a JSON snapshot.
    #[wasm_bindgen(js_name = toJSON)]
    pub fn js_to_json(&self) -> std::result::Result<String, JsError> {
        Ok(self.to_json()?)
    }

    /// Replace the graph with a JSON snapshot.
    #[wasm_bindgen(js_name = fromJSON)]
    pub fn js_from_json(&mut self, json: &str) -> std::result::Result<(), JsError> {
        Ok(self.from_json(json)?)
    }

    /// Depth-first search. Returns the DFS result record.
    #[wasm_bindgen(js_name = dfs)]
    pub fn js_dfs(
        &self,
        start: &str,
        target: Option<String>,
    ) -> std::result::Result<JsValue, JsError> {
        let result = GraphAlgorithms::new(self).dfs(start, target.as_deref())?;
        Ok(to_js(&crate::AlgorithmResult::from(result)))
    }

    /// Breadth-first search. Returns the BFS result record.
    #[wasm_bindgen(js_name = bfs)]
    pub fn js_bfs(
        &self,
        start: &str,
        target: Option<String>,
    ) -> std::result::Result<JsValue, JsError> {
        let result = GraphAlgorithms::new(self).bfs(start, target.as_deref())?;
        Ok(to_js(&crate::AlgorithmResult::from(result)))
    }

    /// Kruskal's minimum spanning tree.
    #[wasm_bindgen(js_name = kruskal)]
    pub fn js_kruskal(&self) -> std::result::Result<JsValue, JsError> {
        let result = GraphAlgorithms::new(self).kruskal()?;
        Ok(to_js(&crate::AlgorithmResult::from(result)))
    }

    /// Prim's minimum spanning tree, from `start` or the first node.
    #[wasm_bindgen(js_name = prim)]
    pub fn js_prim(&self, start: Option<String>) -> std::result::Result<JsValue, JsError> {
        let result = GraphAlgorithms::new(self).prim(start.as_deref())?;
        Ok(to_js(&crate::AlgorithmResult::from(result)))
    }

    /// Run both MST algorithms and compare their output.
    #[wasm_bindgen(js_name = compareMST)]
    pub fn js_compare_mst(&self) -> std::result::Result<JsValue, JsError> {
        let comparison = GraphAlgorithms::new(self).compare_mst()?;
        Ok(to_js(&comparison))
    }

    /// Returns JSON: { hasCycles: bool, cycles: string[][], count: number }
    #[wasm_bindgen(js_name = detectCycles)]
    pub fn js_detect_cycles(&self) -> JsValue {
        to_js(&GraphAlgorithms::new(self).detect_cycles())
    }

    /// Returns JSON: { componentCount, components, largestComponent, isConnected }
    #[wasm_bindgen(js_name = connectivityAnalysis)]
    pub fn js_connectivity_analysis(&self) -> JsValue {
        to_js(&GraphAlgorithms::new(self).connectivity_analysis())
    }
}

// Rust API (not exposed to WASM)
impl Graph {
    /// Add a node. Generates `node_<n>` when `id` is `None`.
    pub fn add_node(
        &mut self,
        id: Option<&str>,
        label: &str,
        x: f64,
        y: f64,
        data: Option<NodeData>,
    ) -> Result<&Node> {
        check_position(x, y)?;
        let id = match id {
            Some(id) if self.node_index.contains_key(id) => {
                return Err(GraphError::DuplicateId(id.to_string()));
            }
            Some(id) => id.to_string(),
            None => self.next_node_id(),
        };

        debug!("add node {}", id);
        let idx = self.nodes.len();
        self.node_index.insert(id.clone(), idx);
        self.nodes.push(Node {
            id,
            label: label.to_string(),
            x,
            y,
            data: data.unwrap_or_default(),
        });
        Ok(&self.nodes[idx])
    }

    /// Remove a node and every edge touching it. Returns `false` if absent.
    pub fn remove_node(&mut self, id: &str) -> bool {
        let Some(idx) = self.node_index.remove(id) else {
            return false;
        };
        self.nodes.remove(idx);
        self.reindex_nodes();

        let before = self.edges.len();
        self.edges.retain(|e| !e.touches(id));
        if self.edges.len() != before {
            self.reindex_edges();
        }
        debug!(
            "remove node {} (cascaded {} edges)",
            id,
            before - self.edges.len()
        );
        true
    }

    /// Change a node's label and/or replace its data.
    pub fn update_node(
        &mut self,
        id: &str,
        label: Option<&str>,
        data: Option<NodeData>,
    ) -> Result<&Node> {
        let idx = self.node_position(id)?;
        let node = &mut self.nodes[idx];
        if let Some(label) = label {
            node.label = label.to_string();
        }
        if let Some(data) = data {
            node.data = data;
        }
        Ok(&self.nodes[idx])
    }

    /// Move a node.
    pub fn update_node_position(&mut self, id: &str, x: f64, y: f64) -> Result<&Node> {
        let idx = self.node_position(id)?;
        check_position(x, y)?;
        let node = &mut self.nodes[idx];
        node.x = x;
        node.y = y;
        Ok(&self.nodes[idx])
    }

    /// Add an edge between two existing nodes.
    ///
    /// On unweighted graphs the stored weight is forced to 1. On weighted
    /// graphs the label defaults to the weight.
    pub fn add_edge(
        &mut self,
        source: &str,
        target: &str,
        weight: u32,
        label: Option<&str>,
        id: Option<&str>,
    ) -> Result<&Edge> {
        let weight = if self.is_weighted { weight } else { 1 };
        self.check_edge(id, source, target, weight)?;

        let id = match id {
            Some(id) => id.to_string(),
            None => self.next_edge_id(),
        };
        let label = match label {
            Some(label) => label.to_string(),
            None if self.is_weighted => weight.to_string(),
            None => String::new(),
        };

        debug!("add edge {} ({} -> {}, w = {})", id, source, target, weight);
        Ok(self.push_edge(Edge {
            id,
            source: source.to_string(),
            target: target.to_string(),
            weight,
            label,
            directed: self.is_directed,
        }))
    }

    /// Remove an edge by id. Returns `false` if absent.
    pub fn remove_edge(&mut self, id: &str) -> bool {
        let Some(idx) = self.edge_index.remove(id) else {
            return false;
        };
        self.edges.remove(idx);
        self.reindex_edges();
        debug!("remove edge {}", id);
        true
    }

    /// Change an edge's weight and/or label.
    ///
    /// A label that mirrored the old weight follows the new weight unless a
    /// label is given explicitly.
    pub fn update_edge(
        &mut self,
        id: &str,
        weight: Option<u32>,
        label: Option<&str>,
    ) -> Result<&Edge> {
        let idx = *self
            .edge_index
            .get(id)
            .ok_or_else(|| GraphError::UnknownEdge(id.to_string()))?;

        let weight = match weight {
            Some(_) if !self.is_weighted => Some(1),
            Some(0) => return Err(GraphError::InvalidWeight(0.0)),
            other => other,
        };

        let edge = &mut self.edges[idx];
        if let Some(weight) = weight {
            if label.is_none() && edge.label == edge.weight.to_string() {
                edge.label = weight.to_string();
            }
            edge.weight = weight;
        }
        if let Some(label) = label {
            edge.label = label.to_string();
        }
        Ok(&self.edges[idx])
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.node_index.get(id).map(|&idx| &self.nodes[idx])
    }

    pub fn edge(&self, id: &str) -> Option<&Edge> {
        self.edge_index.get(id).map(|&idx| &self.edges[idx])
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.node_index.contains_key(id)
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.iter()
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.iter()
    }

    /// Edges touching `id`, in insertion order.
    pub fn incident_edges<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Edge> + 'a {
        self.edges.iter().filter(move |e| e.touches(id))
    }

    /// The edge a -> b (either direction on undirected graphs).
    pub fn find_edge(&self, a: &str, b: &str) -> Option<&Edge> {
        self.edges.iter().find(|e| e.links(a, b, self.is_directed))
    }

    /// Ids adjacent to `id`: symmetric when undirected, outgoing only when
    /// directed. Order follows edge insertion order.
    pub fn neighbors(&self, id: &str) -> Vec<&str> {
        self.edges
            .iter()
            .filter_map(|e| {
                if e.source == id {
                    Some(e.target.as_str())
                } else if !self.is_directed && e.target == id {
                    Some(e.source.as_str())
                } else {
                    None
                }
            })
            .collect()
    }

    /// Weight used by the algorithms: always 1 on unweighted graphs.
    pub fn effective_weight(&self, edge: &Edge) -> u32 {
        if self.is_weighted {
            edge.weight
        } else {
            1
        }
    }

    /// Effective weight of the edge a -> b, or `None` if there is no edge.
    pub fn edge_weight(&self, a: &str, b: &str) -> Option<u32> {
        self.find_edge(a, b).map(|e| self.effective_weight(e))
    }

    /// Incident edge count (in + out for directed graphs).
    pub fn degree(&self, id: &str) -> usize {
        self.incident_edges(id).count()
    }

    pub fn statistics(&self) -> GraphStatistics {
        let n = self.nodes.len();
        let e = self.edges.len();

        let max_edges = if n <= 1 {
            0.0
        } else if self.is_directed {
            (n * (n - 1)) as f64
        } else {
            (n * (n - 1)) as f64 / 2.0
        };
        let density = if max_edges > 0.0 {
            e as f64 / max_edges * 100.0
        } else {
            0.0
        };

        let mut degrees: HashMap<&str, usize> =
            self.nodes.iter().map(|node| (node.id.as_str(), 0)).collect();
        for edge in &self.edges {
            for end in [&edge.source, &edge.target] {
                if let Some(d) = degrees.get_mut(end.as_str()) {
                    *d += 1;
                }
            }
        }
        let total: usize = degrees.values().sum();

        GraphStatistics {
            node_count: n,
            edge_count: e,
            density,
            average_degree: if n == 0 { 0.0 } else { total as f64 / n as f64 },
            min_degree: degrees.values().copied().min().unwrap_or(0),
            max_degree: degrees.values().copied().max().unwrap_or(0),
            is_connected: self.is_connected(),
            has_cycles: self.has_cycles(),
        }
    }

    /// Structural snapshot of the whole graph.
    pub fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot {
            nodes: self.nodes.clone(),
            edges: self.edges.clone(),
            is_directed: self.is_directed,
            is_weighted: self.is_weighted,
            node_id_counter: self.node_id_counter,
            edge_id_counter: self.edge_id_counter,
        }
    }

    /// Build a graph from a snapshot, validating every invariant.
    pub fn from_snapshot(snapshot: GraphSnapshot) -> Result<Graph> {
        let mut graph = Graph::new(snapshot.is_directed, snapshot.is_weighted);

        for node in snapshot.nodes {
            if graph.node_index.contains_key(&node.id) {
                warn!("snapshot rejected: duplicate node {}", node.id);
                return Err(GraphError::DuplicateId(node.id));
            }
            graph.node_index.insert(node.id.clone(), graph.nodes.len());
            graph.nodes.push(node);
        }

        for edge in snapshot.edges {
            if let Err(e) = graph.check_edge(Some(&edge.id), &edge.source, &edge.target, edge.weight) {
                warn!("snapshot rejected: edge {}: {}", edge.id, e);
                return Err(e);
            }
            graph.push_edge(edge);
        }

        graph.node_id_counter = snapshot.node_id_counter;
        graph.edge_id_counter = snapshot.edge_id_counter;
        Ok(graph)
    }

    /// Replace the whole graph with `snapshot`. On error nothing changes.
    pub fn load_snapshot(&mut self, snapshot: GraphSnapshot) -> Result<()> {
        *self = Graph::from_snapshot(snapshot)?;
        debug!(
            "loaded snapshot: {} nodes, {} edges",
            self.nodes.len(),
            self.edges.len()
        );
        Ok(())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.snapshot())?)
    }

    /// Replace the whole graph with a JSON snapshot (clear-then-load).
    pub fn from_json(&mut self, json: &str) -> Result<()> {
        let snapshot: GraphSnapshot = serde_json::from_str(json)?;
        self.load_snapshot(snapshot)
    }
}

// Internal helpers
impl Graph {
    fn node_position(&self, id: &str) -> Result<usize> {
        self.node_index
            .get(id)
            .copied()
            .ok_or_else(|| GraphError::UnknownNode(id.to_string()))
    }

    /// Validate a prospective edge against the structural invariants.
    fn check_edge(&self, id: Option<&str>, source: &str, target: &str, weight: u32) -> Result<()> {
        for end in [source, target] {
            if !self.node_index.contains_key(end) {
                return Err(GraphError::MissingEndpoint(end.to_string()));
            }
        }
        if source == target {
            return Err(GraphError::SelfLoop(source.to_string()));
        }
        if self.find_edge(source, target).is_some() {
            return Err(GraphError::DuplicateEdge {
                from: source.to_string(),
                to: target.to_string(),
            });
        }
        if self.is_weighted && weight == 0 {
            return Err(GraphError::InvalidWeight(f64::from(weight)));
        }
        if let Some(id) = id {
            if self.edge_index.contains_key(id) {
                return Err(GraphError::DuplicateId(id.to_string()));
            }
        }
        Ok(())
    }

    fn push_edge(&mut self, edge: Edge) -> &Edge {
        let idx = self.edges.len();
        self.edge_index.insert(edge.id.clone(), idx);
        self.edges.push(edge);
        &self.edges[idx]
    }

    fn next_node_id(&mut self) -> String {
        loop {
            self.node_id_counter += 1;
            let id = format!("node_{}", self.node_id_counter);
            if !self.node_index.contains_key(&id) {
                return id;
            }
        }
    }

    fn next_edge_id(&mut self) -> String {
        loop {
            self.edge_id_counter += 1;
            let id = format!("edge_{}", self.edge_id_counter);
            if !self.edge_index.contains_key(&id) {
                return id;
            }
        }
    }

    fn reindex_nodes(&mut self) {
        self.node_index = self
            .nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (n.id.clone(), i))
            .collect();
    }

    fn reindex_edges(&mut self) {
        self.edge_index = self
            .edges
            .iter()
            .enumerate()
            .map(|(i, e)| (e.id.clone(), i))
            .collect();
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new(false, false)
    }
}
