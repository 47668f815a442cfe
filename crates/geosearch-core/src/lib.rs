//! **geosearch-core** — geometric graphs for path-search experiments.
//!
//! This crate provides the immutable [`Graph`] consumed by the search
//! algorithms in `geosearch-paths`: planar node positions, a symmetric
//! distance matrix, and an undirected k-nearest-neighbor adjacency built by
//! [`GraphBuilder`].

pub mod builder;
pub mod error;
pub mod geom;
pub mod graph;

pub use builder::{GraphBuilder, GraphConfig, build_graph};
pub use error::GraphError;
pub use geom::{Point, euclidean, manhattan};
pub use graph::Graph;
