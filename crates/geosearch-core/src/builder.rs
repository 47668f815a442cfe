//! Random geometric graph construction.
//!
//! Nodes are scattered uniformly over an `N × N` square and linked to their
//! k nearest neighbors (see [`Graph::from_points`]). The random source is
//! always supplied by the caller, so a seeded generator reproduces the same
//! graph.

use rand::{Rng, RngExt};

use crate::error::GraphError;
use crate::geom::Point;
use crate::graph::Graph;

/// Parameters for [`GraphBuilder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraphConfig {
    /// Number of nodes, also the side length of the bounding square.
    pub node_count: usize,
    /// Nearest neighbors each node links to. Must be below `node_count`.
    pub neighbors_per_node: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            node_count: 500,
            neighbors_per_node: 3,
        }
    }
}

impl GraphConfig {
    /// Create a config for `node_count` nodes with `neighbors_per_node` links each.
    pub fn new(node_count: usize, neighbors_per_node: usize) -> Self {
        Self {
            node_count,
            neighbors_per_node,
        }
    }

    /// Check the parameters without building anything.
    pub fn validate(&self) -> Result<(), GraphError> {
        if self.node_count == 0 {
            return Err(GraphError::NoNodes);
        }
        if self.neighbors_per_node >= self.node_count {
            return Err(GraphError::NeighborCount {
                neighbors: self.neighbors_per_node,
                nodes: self.node_count,
            });
        }
        Ok(())
    }
}

/// Builds random k-nearest-neighbor graphs.
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    config: GraphConfig,
}

impl GraphBuilder {
    /// Create a builder for the given config.
    pub fn new(config: GraphConfig) -> Self {
        Self { config }
    }

    /// The config this builder uses.
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Scatter `node_count` points uniformly over `[0, N) × [0, N)`.
    pub fn scatter(&self, rng: &mut impl Rng) -> Vec<Point> {
        let side = self.config.node_count as f64;
        (0..self.config.node_count)
            .map(|_| Point::new(rng.random_range(0.0..side), rng.random_range(0.0..side)))
            .collect()
    }

    /// Validate the config, scatter the points and link each node to its
    /// nearest neighbors.
    ///
    /// Fails before drawing any random number if the config is invalid.
    pub fn build(&self, rng: &mut impl Rng) -> Result<Graph, GraphError> {
        self.config.validate()?;
        let points = self.scatter(rng);
        Graph::from_points(points, self.config.neighbors_per_node)
    }
}

/// Shorthand for `GraphBuilder::new(GraphConfig::new(n, k)).build(rng)`.
pub fn build_graph(
    node_count: usize,
    neighbors_per_node: usize,
    rng: &mut impl Rng,
) -> Result<Graph, GraphError> {
    GraphBuilder::new(GraphConfig::new(node_count, neighbors_per_node)).build(rng)
}
