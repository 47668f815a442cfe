//! Breadth-first, depth-first and greedy best-first search.

use geosearch_core::euclidean;

use crate::engine::{PathSearch, SearchOutcome};
use crate::frontier::{Fifo, Frontier, Lifo, MinFirst};
use crate::traits::SpatialPather;

impl<P: SpatialPather> PathSearch<'_, P> {
    /// FIFO frontier: returns a path with the fewest edges.
    pub(crate) fn breadth_first(&self, root: usize, target: usize) -> SearchOutcome {
        self.traverse(Fifo::default(), root, target, |_| 0.0)
    }

    /// LIFO frontier.
    pub(crate) fn depth_first(&self, root: usize, target: usize) -> SearchOutcome {
        self.traverse(Lifo::default(), root, target, |_| 0.0)
    }

    /// Frontier ordered by straight-line distance to the target.
    pub(crate) fn best_first(&self, root: usize, target: usize) -> SearchOutcome {
        let goal = self.pather.position(target);
        self.traverse(MinFirst::default(), root, target, |n| {
            euclidean(self.pather.position(n), goal)
        })
    }

    /// Shared loop of the uninformed and greedy strategies.
    ///
    /// Pops a pending path, skips it if its last node was already expanded,
    /// and otherwise expands that node. As soon as the target shows up among
    /// the neighbors, the path is returned without expanding the target.
    fn traverse<F, K>(
        &self,
        mut frontier: F,
        root: usize,
        target: usize,
        priority: K,
    ) -> SearchOutcome
    where
        F: Frontier<Vec<usize>>,
        K: Fn(usize) -> f64,
    {
        let mut closed = vec![false; self.pather.node_count()];
        let mut expanded = 0;
        frontier.push(vec![root], priority(root));

        while let Some(path) = frontier.pop() {
            let Some(&current) = path.last() else {
                continue;
            };
            // Stale: another path reached this node first.
            if closed[current] {
                continue;
            }
            if self.capped(expanded) {
                break;
            }
            closed[current] = true;
            expanded += 1;
            log::trace!("expand {current} at depth {}", path.len() - 1);

            let neighbors = self.pather.neighbors(current);
            if neighbors.contains(&target) {
                let mut found = path;
                found.push(target);
                return SearchOutcome::found(found, expanded);
            }
            for &n in neighbors.iter().filter(|&&n| !closed[n]) {
                let mut next = path.clone();
                next.push(n);
                frontier.push(next, priority(n));
            }
        }

        SearchOutcome::exhausted(expanded)
    }
}

#[cfg(test)]
mod tests {
    use geosearch_core::{Graph, Point};

    use crate::engine::tests::pentagon;
    use crate::{PathSearch, Strategy, search};

    /// A 3x3 grid, 4-connected, ids row by row:
    ///
    /// ```text
    /// 0 1 2
    /// 3 4 5
    /// 6 7 8
    /// ```
    fn grid() -> Graph {
        let pts = (0..9).map(|i| Point::new((i % 3) as f64, (i / 3) as f64)).collect();
        let edges: Vec<_> = (0..9usize)
            .flat_map(|i| {
                let right = (i % 3 < 2).then_some((i, i + 1, 1.0));
                let down = (i < 6).then_some((i, i + 3, 1.0));
                right.into_iter().chain(down)
            })
            .collect();
        Graph::from_edges(pts, &edges).unwrap()
    }

    #[test]
    fn breadth_first_on_grid() {
        let g = grid();
        let out = PathSearch::new(&g).run(Strategy::BreadthFirst, 0, 8).unwrap();
        assert_eq!(out.path, vec![0, 1, 2, 5, 8]);
    }

    #[test]
    fn depth_first_follows_newest_branch() {
        let g = grid();
        // From 0 the newest pushed neighbor is 3, then 6, then 7 (8 is
        // spotted from 7).
        assert_eq!(search(&g, Strategy::DepthFirst, 0, 8).unwrap(), vec![0, 3, 6, 7, 8]);
    }

    #[test]
    fn depth_first_on_pentagon() {
        let g = pentagon();
        assert_eq!(search(&g, Strategy::DepthFirst, 0, 2).unwrap(), vec![0, 4, 3, 2]);
    }

    #[test]
    fn best_first_heads_for_target() {
        let g = grid();
        let out = PathSearch::new(&g).run(Strategy::BestFirst, 0, 8).unwrap();
        // 1 and 3 are equally far from 8, as are 5 and 7: the first pushed
        // wins each tie.
        assert_eq!(out.path, vec![0, 1, 4, 5, 8]);
        assert_eq!(out.expanded, 4);
    }
}
