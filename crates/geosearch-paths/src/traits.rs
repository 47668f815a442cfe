use geosearch_core::{Graph, Point};

/// Minimal search interface: node count and neighbor enumeration.
pub trait Pather {
    /// Number of nodes; valid ids are `0..node_count()`.
    fn node_count(&self) -> usize;

    /// Neighbors of `node`. Order is the expansion order of every search.
    fn neighbors(&self, node: usize) -> &[usize];
}

/// Pather with non-negative edge costs.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to adjacent `to`. Must be >= 0.
    fn cost(&self, from: usize, to: usize) -> f64;
}

/// Weighted pather whose nodes have planar positions, used for heuristic
/// estimates.
pub trait SpatialPather: WeightedPather {
    /// Position of `node`.
    fn position(&self, node: usize) -> Point;
}

impl Pather for Graph {
    #[inline]
    fn node_count(&self) -> usize {
        self.len()
    }

    #[inline]
    fn neighbors(&self, node: usize) -> &[usize] {
        Graph::neighbors(self, node)
    }
}

impl WeightedPather for Graph {
    #[inline]
    fn cost(&self, from: usize, to: usize) -> f64 {
        self.distance(from, to)
    }
}

impl SpatialPather for Graph {
    #[inline]
    fn position(&self, node: usize) -> Point {
        self.point(node)
    }
}
