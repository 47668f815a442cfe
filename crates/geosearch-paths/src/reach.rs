use std::collections::VecDeque;

use crate::error::SearchError;
use crate::traits::Pather;

/// Unweighted reachability from one source: visit order and edge counts.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HopMap {
    /// Reached nodes in breadth-first visit order, starting with the source.
    pub order: Vec<usize>,
    /// Fewest edges from the source per node; `None` if unreachable.
    pub hops: Vec<Option<usize>>,
}

impl HopMap {
    /// Fewest edges from the source to `node`, or `None` if unreachable or
    /// out of range.
    pub fn hops_to(&self, node: usize) -> Option<usize> {
        self.hops.get(node).copied().flatten()
    }

    /// Whether `node` is reachable from the source.
    pub fn reaches(&self, node: usize) -> bool {
        self.hops_to(node).is_some()
    }
}

/// Breadth-first distance map from `source`.
///
/// Each edge counts 1 regardless of its cost.
pub fn hop_map<P: Pather>(pather: &P, source: usize) -> Result<HopMap, SearchError> {
    let nodes = pather.node_count();
    if source >= nodes {
        return Err(SearchError::InvalidIndex { node: source, nodes });
    }

    let mut hops = vec![None; nodes];
    let mut order = vec![source];
    let mut queue = VecDeque::from([(source, 0)]);
    hops[source] = Some(0);

    while let Some((current, dist)) = queue.pop_front() {
        for &n in pather.neighbors(current) {
            if hops[n].is_some() {
                continue;
            }
            hops[n] = Some(dist + 1);
            order.push(n);
            queue.push_back((n, dist + 1));
        }
    }

    Ok(HopMap { order, hops })
}
