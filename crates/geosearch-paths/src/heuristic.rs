//! Heuristic estimates of the remaining cost to the target.

use geosearch_core::{Point, euclidean, manhattan};

/// Factor applied to the Manhattan distance by [`Heuristic::ManhattanScaled`].
pub const MANHATTAN_INFLATION: f64 = 1.5;

/// How cost-aware searches estimate the cost from a node to the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Heuristic {
    /// Straight-line distance. Never overestimates when edge costs are at
    /// least the distance between their endpoints, which makes A* optimal.
    Euclidean,
    /// `|dx| + |dy|` times [`MANHATTAN_INFLATION`]. Deliberately
    /// overestimates: the search converges faster but may return a
    /// costlier path.
    ManhattanScaled,
    /// Always zero; the search degrades to uniform-cost (Dijkstra) order.
    Zero,
}

impl Heuristic {
    /// Estimated cost from `from` to `to`.
    #[inline]
    pub fn estimate(self, from: Point, to: Point) -> f64 {
        match self {
            Self::Euclidean => euclidean(from, to),
            Self::ManhattanScaled => MANHATTAN_INFLATION * manhattan(from, to),
            Self::Zero => 0.0,
        }
    }

    /// Whether the estimate never exceeds the true remaining cost on a
    /// geometric graph.
    pub fn is_admissible(self) -> bool {
        !matches!(self, Self::ManhattanScaled)
    }
}
