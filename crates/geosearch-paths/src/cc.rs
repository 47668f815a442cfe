//! Connected-component labelling.

use crate::traits::Pather;

/// Component label of every node.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Components {
    labels: Vec<usize>,
    count: usize,
}

impl Components {
    /// Component id of `node`, or `None` if out of range. Ids are assigned
    /// in increasing order of each component's lowest node.
    pub fn label(&self, node: usize) -> Option<usize> {
        self.labels.get(node).copied()
    }

    /// Number of components.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Whether a path joins `a` and `b`.
    pub fn connected(&self, a: usize, b: usize) -> bool {
        matches!((self.label(a), self.label(b)), (Some(x), Some(y)) if x == y)
    }

    /// All labels, indexed by node.
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }
}

/// Label every node with a connected-component id.
///
/// Two nodes share a label if there is a path of neighbors between them.
pub fn components<P: Pather>(pather: &P) -> Components {
    let nodes = pather.node_count();
    let mut labels = vec![usize::MAX; nodes];
    let mut stack = Vec::new();
    let mut label = 0;

    for start in 0..nodes {
        if labels[start] != usize::MAX {
            continue;
        }

        // Iterative DFS from `start`.
        stack.clear();
        stack.push(start);
        labels[start] = label;

        while let Some(current) = stack.pop() {
            for &n in pather.neighbors(current) {
                if labels[n] == usize::MAX {
                    labels[n] = label;
                    stack.push(n);
                }
            }
        }

        label += 1;
    }

    log::debug!("{label} connected components over {nodes} nodes");
    Components { labels, count: label }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::tests::{pentagon, two_islands};
    use crate::{Strategy, search};
    use geosearch_core::build_graph;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn single_component() {
        let cc = components(&pentagon());
        assert_eq!(cc.count(), 1);
        assert!(cc.connected(0, 3));
    }

    #[test]
    fn two_components() {
        let cc = components(&two_islands());
        assert_eq!(cc.count(), 2);
        assert_eq!(cc.labels(), &[0, 0, 0, 1, 1, 1]);
        assert!(!cc.connected(2, 3));
        assert!(!cc.connected(0, 42));
    }

    #[test]
    fn agrees_with_search() {
        let g = build_graph(80, 1, &mut StdRng::seed_from_u64(3)).unwrap();
        let cc = components(&g);
        for target in 0..80 {
            let path = search(&g, Strategy::BreadthFirst, 0, target).unwrap();
            assert_eq!(!path.is_empty(), cc.connected(0, target), "target {target}");
        }
    }
}
