use crate::candidate::Candidate;
use crate::engine::{PathSearch, SearchOutcome};
use crate::frontier::{Frontier, MinFirst};
use crate::heuristic::Heuristic;
use crate::resolver::DuplicateResolver;
use crate::traits::SpatialPather;

impl<P: SpatialPather> PathSearch<'_, P> {
    /// Cost-aware search shared by A and A*.
    ///
    /// The frontier is ordered by `f = g + h` (ties: first inserted). The
    /// search returns as soon as the target is a neighbor of the popped
    /// candidate's terminal node. With [`Heuristic::Euclidean`] on a graph
    /// whose edge costs are straight-line distances, that final edge costs
    /// exactly `h`, so the returned path is a shortest one.
    pub(crate) fn astar(&self, root: usize, target: usize, heuristic: Heuristic) -> SearchOutcome {
        let goal = self.pather.position(target);
        let estimate = |n: usize| heuristic.estimate(self.pather.position(n), goal);

        let mut resolver = DuplicateResolver::new(self.pather.node_count());
        let mut frontier = MinFirst::default();
        let mut tickets = 0u64;
        let mut expanded = 0;

        let start = Candidate::root(root, estimate(root));
        let score = start.score;
        resolver.open(root, score, start.ticket);
        frontier.push(start, score);

        while let Some(current) = frontier.pop() {
            let node = current.terminal();
            // Superseded by a better candidate for the same node.
            if !resolver.is_live(node, current.ticket) {
                continue;
            }
            if self.capped(expanded) {
                break;
            }
            expanded += 1;
            log::trace!(
                "expand {node}: g = {:.3}, h = {:.3}, f = {:.3}",
                current.cost,
                current.estimate,
                current.score
            );

            let neighbors = self.pather.neighbors(node);
            if neighbors.contains(&target) {
                return SearchOutcome::found(current.finish(target), expanded);
            }
            resolver.close(node, current.score);

            for &n in neighbors {
                if current.visits(n) {
                    continue;
                }
                let step = self.pather.cost(node, n);
                let h = estimate(n);
                if !resolver.admits(n, current.cost + step + h) {
                    continue;
                }
                tickets += 1;
                let next = current.extend(n, step, h, tickets);
                let score = next.score;
                resolver.open(n, score, tickets);
                frontier.push(next, score);
            }
        }

        SearchOutcome::exhausted(expanded)
    }
}
