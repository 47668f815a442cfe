//! Single-source, single-target path search over geometric graphs.
//!
//! Five strategies share one frontier-driven traversal ([`PathSearch`]):
//!
//! - **Breadth-first**: FIFO frontier, fewest edges
//! - **Depth-first**: LIFO frontier
//! - **Best-first**: greedy on straight-line distance to the target
//! - **A**: cost-aware with an inflated Manhattan estimate (fast, not
//!   guaranteed optimal)
//! - **A\***: cost-aware with the Euclidean estimate (optimal on geometric
//!   graphs)
//!
//! Alongside the searches there are unweighted reachability maps
//! ([`hop_map`]), connected-component labelling ([`components`]) and
//! [`path_cost`].
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | hop maps, connected components |
//! | [`WeightedPather`] : [`Pather`] | [`path_cost`] |
//! | [`SpatialPather`] : [`WeightedPather`] | every [`Strategy`] |
//!
//! [`Graph`](geosearch_core::Graph) implements all three.

mod astar;
mod candidate;
mod cc;
mod engine;
mod error;
mod frontier;
mod heuristic;
mod reach;
mod resolver;
mod strategy;
mod traits;
mod traversal;

pub use cc::{Components, components};
pub use engine::{PathSearch, SearchConfig, SearchOutcome, SearchStatus, path_cost, search};
pub use error::{ParseStrategyError, SearchError};
pub use heuristic::{Heuristic, MANHATTAN_INFLATION};
pub use reach::{HopMap, hop_map};
pub use strategy::Strategy;
pub use traits::{Pather, SpatialPather, WeightedPather};
