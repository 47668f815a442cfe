//! The immutable geometric [`Graph`].

use std::collections::BTreeSet;

use crate::error::GraphError;
use crate::geom::{Point, euclidean};

/// An undirected graph embedded in the plane.
///
/// Node ids are `0..len()`, in the order of [`points`](Self::points).
/// Adjacency is symmetric and free of self loops, and the dense distance
/// matrix is symmetric with a zero diagonal. A `Graph` is built once and is
/// read-only afterwards, so it can be shared freely between searches.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    points: Vec<Point>,
    /// Ascending neighbor ids per node.
    adjacency: Vec<Vec<usize>>,
    /// Row-major `len() * len()` distances.
    distance: Vec<f64>,
}

impl Graph {
    /// Build the k-nearest-neighbor graph over `points`.
    ///
    /// Each node is linked to the `neighbors` nodes closest to it (ties go to
    /// the lower id). Selection is directional, so the union of both
    /// directions is kept and a node may end up with more than `neighbors`
    /// edges.
    pub fn from_points(points: Vec<Point>, neighbors: usize) -> Result<Self, GraphError> {
        check_points(&points)?;
        let nodes = points.len();
        if neighbors >= nodes {
            return Err(GraphError::NeighborCount { neighbors, nodes });
        }

        let distance = distance_matrix(&points);
        let mut sets = vec![BTreeSet::new(); nodes];
        for i in 0..nodes {
            let row = &distance[i * nodes..(i + 1) * nodes];
            for j in nearest(row, i, neighbors) {
                sets[i].insert(j);
                sets[j].insert(i);
            }
        }

        let graph = Self {
            points,
            adjacency: sets.into_iter().map(|s| s.into_iter().collect()).collect(),
            distance,
        };
        log::debug!(
            "built {}-nearest graph: {} nodes, {} edges",
            neighbors,
            graph.len(),
            graph.edge_count()
        );
        Ok(graph)
    }

    /// Build a graph from an explicit undirected edge list.
    ///
    /// Each `(a, b, w)` links `a` and `b` with cost `w`, overriding their
    /// Euclidean distance; pairs that are not edges keep the straight-line
    /// distance between their points. A repeated pair keeps its last weight.
    pub fn from_edges(
        points: Vec<Point>,
        edges: &[(usize, usize, f64)],
    ) -> Result<Self, GraphError> {
        check_points(&points)?;
        let nodes = points.len();
        let mut distance = distance_matrix(&points);
        let mut sets = vec![BTreeSet::new(); nodes];

        for &(from, to, weight) in edges {
            if from >= nodes || to >= nodes {
                return Err(GraphError::EdgeOutOfRange { from, to, nodes });
            }
            if from == to {
                return Err(GraphError::SelfLoop(from));
            }
            if !weight.is_finite() || weight < 0.0 {
                return Err(GraphError::InvalidWeight { from, to, weight });
            }
            distance[from * nodes + to] = weight;
            distance[to * nodes + from] = weight;
            sets[from].insert(to);
            sets[to].insert(from);
        }

        let graph = Self {
            points,
            adjacency: sets.into_iter().map(|s| s.into_iter().collect()).collect(),
            distance,
        };
        log::debug!(
            "built graph from edge list: {} nodes, {} edges",
            graph.len(),
            graph.edge_count()
        );
        Ok(graph)
    }

    /// Number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false` for a successfully built graph.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether `node` is a valid id.
    #[inline]
    pub fn contains(&self, node: usize) -> bool {
        node < self.len()
    }

    /// Node positions, indexed by id.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Position of `node`. Panics if `node` is out of range.
    #[inline]
    pub fn point(&self, node: usize) -> Point {
        self.points[node]
    }

    /// Neighbors of `node` in ascending id order.
    #[inline]
    pub fn neighbors(&self, node: usize) -> &[usize] {
        &self.adjacency[node]
    }

    /// Number of edges incident to `node`.
    #[inline]
    pub fn degree(&self, node: usize) -> usize {
        self.adjacency[node].len()
    }

    /// Whether an edge joins `a` and `b`.
    pub fn are_adjacent(&self, a: usize, b: usize) -> bool {
        self.contains(a) && self.contains(b) && self.adjacency[a].binary_search(&b).is_ok()
    }

    /// Entry `(a, b)` of the distance matrix.
    #[inline]
    pub fn distance(&self, a: usize, b: usize) -> f64 {
        self.distance[a * self.len() + b]
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Whether the graph has at least one edge.
    pub fn has_edges(&self) -> bool {
        self.adjacency.iter().any(|n| !n.is_empty())
    }

    /// Every undirected edge once, as `(a, b)` with `a < b`, in ascending order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.adjacency.iter().enumerate().flat_map(|(a, ns)| {
            ns.iter().copied().filter(move |&b| a < b).map(move |b| (a, b))
        })
    }
}

fn check_points(points: &[Point]) -> Result<(), GraphError> {
    if points.is_empty() {
        return Err(GraphError::NoNodes);
    }
    match points.iter().position(|p| !p.is_finite()) {
        Some(i) => Err(GraphError::InvalidPoint(i)),
        None => Ok(()),
    }
}

/// Symmetric distance matrix. Row `i` copies the entries below the diagonal
/// from rows already filled and only computes the ones above it.
fn distance_matrix(points: &[Point]) -> Vec<f64> {
    let n = points.len();
    let mut d = vec![0.0; n * n];
    for i in 0..n {
        for j in 0..i {
            d[i * n + j] = d[j * n + i];
        }
        for j in i + 1..n {
            d[i * n + j] = euclidean(points[i], points[j]);
        }
    }
    d
}

/// The `k` nodes closest to `node` according to `row`, excluding `node`.
fn nearest(row: &[f64], node: usize, k: usize) -> Vec<usize> {
    let mut others: Vec<usize> = (0..row.len()).filter(|&j| j != node).collect();
    let closer = |a: &usize, b: &usize| row[*a].total_cmp(&row[*b]).then(a.cmp(b));
    if k < others.len() {
        if k > 0 {
            others.select_nth_unstable_by(k - 1, closer);
        }
        others.truncate(k);
    }
    others
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct GraphRepr {
    points: Vec<Point>,
    edges: Vec<(usize, usize, f64)>,
}

#[cfg(feature = "serde")]
impl serde::Serialize for Graph {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        GraphRepr {
            points: self.points.clone(),
            edges: self.edges().map(|(a, b)| (a, b, self.distance(a, b))).collect(),
        }
        .serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Graph {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = GraphRepr::deserialize(deserializer)?;
        Graph::from_edges(repr.points, &repr.edges).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pentagon() -> Vec<Point> {
        (0..5)
            .map(|i| {
                let a = std::f64::consts::TAU * i as f64 / 5.0;
                Point::new(10.0 * a.cos(), 10.0 * a.sin())
            })
            .collect()
    }

    fn assert_well_formed(g: &Graph) {
        let n = g.len();
        for i in 0..n {
            assert_eq!(g.distance(i, i), 0.0);
            assert!(!g.neighbors(i).contains(&i), "self loop on {i}");
            for j in 0..n {
                assert_eq!(g.distance(i, j), g.distance(j, i));
                assert!(g.distance(i, j) >= 0.0);
            }
            for &j in g.neighbors(i) {
                assert!(g.neighbors(j).contains(&i), "edge {i}-{j} is one-way");
            }
            assert!(g.neighbors(i).windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn pentagon_ring() {
        let g = Graph::from_points(pentagon(), 2).unwrap();
        assert_eq!(g.neighbors(0), &[1, 4]);
        assert_eq!(g.neighbors(1), &[0, 2]);
        assert_eq!(g.neighbors(2), &[1, 3]);
        assert_eq!(g.neighbors(3), &[2, 4]);
        assert_eq!(g.neighbors(4), &[0, 3]);
        assert_eq!(g.edge_count(), 5);
        assert_well_formed(&g);
    }

    #[test]
    fn union_can_exceed_k() {
        // Node 3 is far away: its single nearest neighbor is 2, while 0, 1
        // and 2 pick each other.
        let pts = vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(10.0, 0.0),
        ];
        let g = Graph::from_points(pts, 1).unwrap();
        assert_eq!(g.neighbors(2), &[1, 3]);
        assert_eq!(g.neighbors(3), &[2]);
        assert_eq!(g.degree(2), 2);
        assert_well_formed(&g);
    }

    #[test]
    fn ties_go_to_lower_id() {
        // 1 and 2 are both at distance 1 from 0; 2 and 3 prefer each other.
        let pts = vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(-1.0, 0.0),
            Point::new(-1.5, 0.0),
        ];
        let g = Graph::from_points(pts, 1).unwrap();
        assert!(g.are_adjacent(0, 1));
        assert!(!g.are_adjacent(0, 2));
        assert!(g.are_adjacent(2, 3));
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn zero_neighbors_has_no_edges() {
        let g = Graph::from_points(pentagon(), 0).unwrap();
        assert!(!g.has_edges());
        assert_eq!(g.edge_count(), 0);
        assert_well_formed(&g);
    }

    #[test]
    fn complete_graph_when_k_is_n_minus_one() {
        let g = Graph::from_points(pentagon(), 4).unwrap();
        assert_eq!(g.edge_count(), 10);
        for i in 0..5 {
            assert_eq!(g.degree(i), 4);
        }
    }

    #[test]
    fn single_node() {
        let g = Graph::from_points(vec![Point::new(0.5, 0.5)], 0).unwrap();
        assert_eq!(g.len(), 1);
        assert!(g.neighbors(0).is_empty());
    }

    #[test]
    fn rejects_bad_parameters() {
        assert_eq!(Graph::from_points(vec![], 0), Err(GraphError::NoNodes));
        assert_eq!(
            Graph::from_points(pentagon(), 5),
            Err(GraphError::NeighborCount {
                neighbors: 5,
                nodes: 5
            })
        );
        assert_eq!(
            Graph::from_points(vec![Point::ZERO, Point::new(f64::NAN, 0.0)], 1),
            Err(GraphError::InvalidPoint(1))
        );
    }

    #[test]
    fn explicit_edges_override_distance() {
        let pts = vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(2.0, 0.0)];
        let g = Graph::from_edges(pts, &[(0, 1, 1.0), (0, 2, 3.0)]).unwrap();
        assert_eq!(g.distance(0, 2), 3.0);
        assert_eq!(g.distance(2, 0), 3.0);
        // Not an edge: straight-line distance.
        assert_eq!(g.distance(1, 2), 1.0);
        assert!(g.are_adjacent(2, 0));
        assert!(!g.are_adjacent(1, 2));
        assert_eq!(g.edges().collect::<Vec<_>>(), vec![(0, 1), (0, 2)]);
        assert_well_formed(&g);
    }

    #[test]
    fn explicit_edges_validation() {
        let pts = vec![Point::ZERO, Point::new(1.0, 1.0)];
        assert_eq!(
            Graph::from_edges(pts.clone(), &[(0, 2, 1.0)]),
            Err(GraphError::EdgeOutOfRange {
                from: 0,
                to: 2,
                nodes: 2
            })
        );
        assert_eq!(
            Graph::from_edges(pts.clone(), &[(1, 1, 1.0)]),
            Err(GraphError::SelfLoop(1))
        );
        assert!(matches!(
            Graph::from_edges(pts, &[(0, 1, -1.0)]),
            Err(GraphError::InvalidWeight { from: 0, to: 1, .. })
        ));
    }

    #[test]
    fn out_of_range_queries() {
        let g = Graph::from_points(pentagon(), 2).unwrap();
        assert!(g.contains(4));
        assert!(!g.contains(5));
        assert!(!g.are_adjacent(0, 9));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn graph_round_trip() {
        let pts = vec![
            Point::new(0.0, 0.0),
            Point::new(3.0, 4.0),
            Point::new(6.0, 0.0),
            Point::new(1.0, 9.0),
        ];
        let g = Graph::from_points(pts, 2).unwrap();
        let json = serde_json::to_string(&g).unwrap();
        let back: Graph = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);
    }

    #[test]
    fn invalid_graph_rejected() {
        let json = r#"{"points":[{"x":0.0,"y":0.0}],"edges":[[0,0,1.0]]}"#;
        assert!(serde_json::from_str::<Graph>(json).is_err());
    }
}
