//! Error types for graph mutations and algorithm preconditions.

use thiserror::Error;

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors raised by [`Graph`](crate::Graph) mutators and
/// [`GraphAlgorithms`](crate::GraphAlgorithms).
///
/// Every error is a rejected operation: the graph is left exactly as it was
/// before the call.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GraphError {
    /// A node or edge with this id already exists.
    #[error("duplicate id: {0}")]
    DuplicateId(String),

    /// An edge references a node that is not in the graph.
    #[error("edge endpoint does not exist: {0}")]
    MissingEndpoint(String),

    /// An edge between these nodes already exists.
    #[error("edge already exists between {from} and {to}")]
    DuplicateEdge {
        /// Source node id of the rejected edge.
        from: String,
        /// Target node id of the rejected edge.
        to: String,
    },

    /// Edges must connect two distinct nodes.
    #[error("self loops are not supported: {0}")]
    SelfLoop(String),

    /// Edge weights must be positive integers.
    #[error("edge weight must be a positive integer, got {0}")]
    InvalidWeight(f64),

    /// Node coordinates must be finite.
    #[error("node position must be finite, got ({x}, {y})")]
    InvalidPosition {
        /// Rejected x coordinate.
        x: f64,
        /// Rejected y coordinate.
        y: f64,
    },

    /// A referenced node id does not exist.
    #[error("unknown node: {0}")]
    UnknownNode(String),

    /// A referenced edge id does not exist.
    #[error("unknown edge: {0}")]
    UnknownEdge(String),

    /// The algorithm needs edge weights but the graph is unweighted.
    #[error("{0} requires a weighted graph")]
    UnweightedGraph(&'static str),

    /// Node data must be a JSON object.
    #[error("invalid node data: {0}")]
    InvalidData(String),

    /// Snapshot (de)serialization failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GraphError::DuplicateEdge {
            from: "A".into(),
            to: "B".into(),
        };
        assert_eq!(err.to_string(), "edge already exists between A and B");
        assert_eq!(
            GraphError::UnweightedGraph("Kruskal").to_string(),
            "Kruskal requires a weighted graph"
        );
        assert_eq!(
            GraphError::InvalidWeight(-1.0).to_string(),
            "edge weight must be a positive integer, got -1"
        );
    }

    #[test]
    fn test_from_serde_json() {
        let parse = serde_json::from_str::<serde_json::Value>("{not json");
        let err: GraphError = parse.unwrap_err().into();
        assert!(matches!(err, GraphError::Serialization(_)));
    }
}
