//! Graph data model and classic graph algorithms for the graphlab editor.
//!
//! [`Graph`] owns nodes and edges and enforces the structural invariants.
//! [`GraphAlgorithms`] borrows a graph read-only and runs DFS, BFS,
//! Kruskal, Prim, cycle detection and connectivity analysis, returning
//! serializable result records for the rendering side.
//!
//! The same API is exported to JavaScript through `wasm-bindgen`.

pub mod algorithms;
pub mod disjoint_set;
pub mod error;
pub mod graph;
#[cfg(feature = "random")]
pub mod random;

pub use algorithms::{AlgorithmResult, GraphAlgorithms};
pub use disjoint_set::DisjointSet;
pub use error::{GraphError, Result};
pub use graph::{Edge, Graph, GraphSnapshot, GraphStatistics, Node, NodeData};
#[cfg(feature = "random")]
pub use random::RandomGraphConfig;

use wasm_bindgen::prelude::*;

/// Module start hook: panic messages and `log` output go to the console.
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "logging")]
    {
        if console_log::init_with_level(log::Level::Debug).is_ok() {
            log::info!("graphlab logging initialized");
        }
    }
}
