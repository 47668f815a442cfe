use crate::error::SearchError;
use crate::heuristic::Heuristic;
use crate::strategy::Strategy;
use crate::traits::{SpatialPather, WeightedPather};

/// Tunables for [`PathSearch`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Estimate used by [`Strategy::A`]. A* always uses
    /// [`Heuristic::Euclidean`].
    pub a_heuristic: Heuristic,
    /// Give up after this many expansions. The search then ends
    /// [`SearchStatus::Exhausted`] with an empty path.
    pub max_expansions: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            a_heuristic: Heuristic::ManhattanScaled,
            max_expansions: None,
        }
    }
}

/// How a search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchStatus {
    /// A path to the target was found.
    Found,
    /// The frontier ran dry (or the expansion cap was hit) first.
    Exhausted,
}

/// Result of one search call.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchOutcome {
    /// Root to target inclusive; empty unless `status` is `Found`.
    pub path: Vec<usize>,
    pub status: SearchStatus,
    /// Number of nodes expanded.
    pub expanded: usize,
}

impl SearchOutcome {
    pub(crate) fn found(path: Vec<usize>, expanded: usize) -> Self {
        Self {
            path,
            status: SearchStatus::Found,
            expanded,
        }
    }

    pub(crate) fn exhausted(expanded: usize) -> Self {
        Self {
            path: Vec::new(),
            status: SearchStatus::Exhausted,
            expanded,
        }
    }

    /// Whether a path was found.
    #[inline]
    pub fn is_found(&self) -> bool {
        self.status == SearchStatus::Found
    }
}

/// Path search over a borrowed, read-only pather.
///
/// All per-search state (frontier, expanded set, best scores) is created
/// inside each call, so one `PathSearch` can serve any number of queries and
/// the underlying graph can be shared between threads.
pub struct PathSearch<'a, P> {
    pub(crate) pather: &'a P,
    pub(crate) config: SearchConfig,
}

impl<'a, P: SpatialPather> PathSearch<'a, P> {
    /// Create a search with the default config.
    pub fn new(pather: &'a P) -> Self {
        Self {
            pather,
            config: SearchConfig::default(),
        }
    }

    /// Replace the config.
    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    /// The config in use.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Search for a path from `root` to `target` with `strategy`.
    ///
    /// Returns [`SearchError::InvalidIndex`] before doing any work if either
    /// node is out of range. If `root == target` the path is `[root]`.
    pub fn run(
        &self,
        strategy: Strategy,
        root: usize,
        target: usize,
    ) -> Result<SearchOutcome, SearchError> {
        self.check(root)?;
        self.check(target)?;
        let outcome = if root == target {
            SearchOutcome::found(vec![root], 0)
        } else {
            match strategy {
                Strategy::BreadthFirst => self.breadth_first(root, target),
                Strategy::DepthFirst => self.depth_first(root, target),
                Strategy::BestFirst => self.best_first(root, target),
                Strategy::A => self.astar(root, target, self.config.a_heuristic),
                Strategy::AStar => self.astar(root, target, Heuristic::Euclidean),
            }
        };
        log_outcome(strategy.name(), root, target, &outcome);
        Ok(outcome)
    }

    /// Cost-aware search with an arbitrary heuristic.
    ///
    /// [`Heuristic::Zero`] gives uniform-cost search.
    pub fn cost_aware(
        &self,
        root: usize,
        target: usize,
        heuristic: Heuristic,
    ) -> Result<SearchOutcome, SearchError> {
        self.check(root)?;
        self.check(target)?;
        let outcome = if root == target {
            SearchOutcome::found(vec![root], 0)
        } else {
            self.astar(root, target, heuristic)
        };
        log_outcome("cost-aware", root, target, &outcome);
        Ok(outcome)
    }

    fn check(&self, node: usize) -> Result<(), SearchError> {
        let nodes = self.pather.node_count();
        if node < nodes {
            Ok(())
        } else {
            Err(SearchError::InvalidIndex { node, nodes })
        }
    }

    /// Whether the expansion cap forbids another expansion.
    pub(crate) fn capped(&self, expanded: usize) -> bool {
        match self.config.max_expansions {
            Some(max) if expanded >= max => {
                log::debug!("expansion cap of {max} reached");
                true
            }
            _ => false,
        }
    }
}

fn log_outcome(name: &str, root: usize, target: usize, outcome: &SearchOutcome) {
    log::debug!(
        "{name} {root} -> {target}: {:?} after {} expansions, {} nodes in path",
        outcome.status,
        outcome.expanded,
        outcome.path.len()
    );
}

/// Search `pather` for a path from `root` to `target` with the default
/// config.
///
/// Returns the node ids from `root` to `target` inclusive, or an empty vector
/// when the target is unreachable.
pub fn search<P: SpatialPather>(
    pather: &P,
    strategy: Strategy,
    root: usize,
    target: usize,
) -> Result<Vec<usize>, SearchError> {
    PathSearch::new(pather).run(strategy, root, target).map(|o| o.path)
}

/// Sum of the costs between consecutive nodes of `path`.
///
/// Paths with fewer than two nodes cost nothing.
pub fn path_cost<P: WeightedPather>(pather: &P, path: &[usize]) -> f64 {
    path.windows(2).map(|w| pather.cost(w[0], w[1])).sum()
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_round_trip() {
        let cfg = SearchConfig {
            a_heuristic: Heuristic::Zero,
            max_expansions: Some(10),
        };
        let json = serde_json::to_string(&cfg).unwrap();
        let back: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, back);
    }

    #[test]
    fn outcome_json_shape() {
        let out = SearchOutcome::found(vec![0, 4, 3], 2);
        let json = serde_json::to_value(&out).unwrap();
        assert_eq!(json["path"], serde_json::json!([0, 4, 3]));
        assert_eq!(json["status"], "Found");
        assert_eq!(json["expanded"], 2);
    }
}
