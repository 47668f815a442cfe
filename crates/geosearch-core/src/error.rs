//! Errors raised while constructing a [`Graph`](crate::Graph).

use thiserror::Error;

/// Invalid input to graph construction.
///
/// Every variant is an invalid-parameter failure: it is detected before any
/// graph state is built and is never retried internally.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    /// A graph needs at least one node.
    #[error("graph needs at least one node")]
    NoNodes,
    /// `neighbors` must be strictly smaller than the node count.
    #[error("neighbor count {neighbors} out of range for {nodes} nodes (must be < {nodes})")]
    NeighborCount { neighbors: usize, nodes: usize },
    /// An explicit edge names a node outside `0..nodes`.
    #[error("edge ({from}, {to}) references a node outside 0..{nodes}")]
    EdgeOutOfRange { from: usize, to: usize, nodes: usize },
    /// An explicit edge connects a node to itself.
    #[error("self-loop on node {0}")]
    SelfLoop(usize),
    /// An explicit edge weight is negative, NaN or infinite.
    #[error("edge ({from}, {to}) has invalid weight {weight}")]
    InvalidWeight { from: usize, to: usize, weight: f64 },
    /// A node position is NaN or infinite.
    #[error("node {0} has a non-finite position")]
    InvalidPoint(usize),
}
