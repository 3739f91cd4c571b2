//! Random graph generation.
//!
//! Nodes get sequential letter labels (`A`, `B`, ..., `Z`, `AA`, ...) and are
//! laid out on a circle. Each candidate node pair independently receives an
//! edge with the configured probability.

use crate::error::{GraphError, Result};
use crate::graph::Graph;
use log::{debug, warn};
use wasm_bindgen::prelude::*;

/// Parameters for [`Graph::generate_random_with`].
#[derive(Debug, Clone)]
pub struct RandomGraphConfig {
    /// Number of nodes to create.
    pub node_count: usize,
    /// Probability in `[0, 1]` that a candidate pair gets an edge.
    pub edge_probability: f64,
    /// Whether the generated graph is weighted.
    pub weighted: bool,
    /// Whether the generated graph is directed.
    pub directed: bool,
    /// Weights are drawn uniformly from `1..=max_weight`.
    pub max_weight: u32,
    /// Fixed seed for reproducible output; drawn from the OS when `None`.
    pub seed: Option<u64>,
    /// Layout circle center (x).
    pub center_x: f64,
    /// Layout circle center (y).
    pub center_y: f64,
    /// Layout circle radius.
    pub radius: f64,
}

impl Default for RandomGraphConfig {
    fn default() -> Self {
        Self {
            node_count: 6,
            edge_probability: 0.3,
            weighted: false,
            directed: false,
            max_weight: 10,
            seed: None,
            center_x: 400.0,
            center_y: 300.0,
            radius: 200.0,
        }
    }
}

/// SplitMix64 generator. Small, fast, and good enough for layout demos.
#[derive(Debug, Clone)]
pub(crate) struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    pub(crate) fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Seed from the OS entropy source, falling back to a fixed seed.
    pub(crate) fn from_entropy() -> Self {
        let mut buf = [0u8; 8];
        match getrandom::getrandom(&mut buf) {
            Ok(()) => Self::new(u64::from_le_bytes(buf)),
            Err(e) => {
                warn!("getrandom failed ({}), using fixed seed", e);
                Self::new(0x9E37_79B9_7F4A_7C15)
            }
        }
    }

    pub(crate) fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform float in `[0, 1)`.
    pub(crate) fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform integer in `1..=max`.
    pub(crate) fn weight(&mut self, max: u32) -> u32 {
        let max = max.max(1);
        1 + (self.next_u64() % u64::from(max)) as u32
    }
}

/// Sequential letter label: 0 -> "A", 25 -> "Z", 26 -> "AA", 27 -> "AB".
pub fn letter_label(mut index: usize) -> String {
    let mut label = Vec::new();
    loop {
        label.push(b'A' + (index % 26) as u8);
        if index < 26 {
            break;
        }
        index = index / 26 - 1;
    }
    label.reverse();
    String::from_utf8(label).unwrap_or_default()
}

/// Position of node `i` of `n` on the layout circle.
pub fn circle_position(i: usize, n: usize, config: &RandomGraphConfig) -> (f64, f64) {
    if n <= 1 {
        return (config.center_x, config.center_y);
    }
    let angle = 2.0 * std::f64::consts::PI * i as f64 / n as f64;
    (
        config.center_x + config.radius * angle.cos(),
        config.center_y + config.radius * angle.sin(),
    )
}

impl Graph {
    /// Replace the graph with a random one using default layout settings.
    pub fn generate_random(
        &mut self,
        node_count: usize,
        edge_probability: f64,
        weighted: bool,
        directed: bool,
    ) -> Result<()> {
        let config = RandomGraphConfig {
            node_count,
            edge_probability,
            weighted,
            directed,
            ..RandomGraphConfig::default()
        };
        self.generate_random_with(&config)
    }

    /// Replace the graph with a random one.
    ///
    /// Existing nodes, edges and id counters are discarded. Pairs that would
    /// violate edge uniqueness are skipped.
    pub fn generate_random_with(&mut self, config: &RandomGraphConfig) -> Result<()> {
        let mut rng = match config.seed {
            Some(seed) => SplitMix64::new(seed),
            None => SplitMix64::from_entropy(),
        };
        let probability = config.edge_probability.clamp(0.0, 1.0);

        self.clear();
        self.set_directed(config.directed);
        self.set_weighted(config.weighted);

        let n = config.node_count;
        let mut ids = Vec::with_capacity(n);
        for i in 0..n {
            let (x, y) = circle_position(i, n, config);
            let node = self.add_node(None, &letter_label(i), x, y, None)?;
            ids.push(node.id.clone());
        }

        for i in 0..n {
            let start = if config.directed { 0 } else { i + 1 };
            for j in start..n {
                if i == j || rng.next_f64() >= probability {
                    continue;
                }
                let weight = if config.weighted {
                    rng.weight(config.max_weight)
                } else {
                    1
                };
                match self.add_edge(&ids[i], &ids[j], weight, None, None) {
                    Ok(_) | Err(GraphError::DuplicateEdge { .. }) => {}
                    Err(e) => return Err(e),
                }
            }
        }

        debug!(
            "generated random graph: {} nodes, {} edges (p = {})",
            self.node_count(),
            self.edge_count(),
            probability
        );
        Ok(())
    }
}

#[wasm_bindgen]
impl Graph {
    /// Replace the graph with a random one.
    #[wasm_bindgen(js_name = generateRandom)]
    pub fn js_generate_random(
        &mut self,
        node_count: usize,
        edge_probability: f64,
        weighted: bool,
        directed: bool,
    ) -> std::result::Result<(), JsError> {
        Ok(self.generate_random(node_count, edge_probability, weighted, directed)?)
    }
}
