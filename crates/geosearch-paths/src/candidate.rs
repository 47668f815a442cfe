/// A partial path in a cost-aware search.
///
/// Each candidate owns its path; extending one copies the path rather than
/// linking back to its parent.
#[derive(Debug, Clone)]
pub(crate) struct Candidate {
    pub(crate) path: Vec<usize>,
    /// Accumulated cost `g`.
    pub(crate) cost: f64,
    /// Heuristic estimate `h` from the terminal node to the target.
    pub(crate) estimate: f64,
    /// `f = g + h`.
    pub(crate) score: f64,
    /// Identifies this candidate to the duplicate resolver.
    pub(crate) ticket: u64,
}

impl Candidate {
    pub(crate) fn root(node: usize, estimate: f64) -> Self {
        Self {
            path: vec![node],
            cost: 0.0,
            estimate,
            score: estimate,
            ticket: 0,
        }
    }

    /// Last node of the path.
    #[inline]
    pub(crate) fn terminal(&self) -> usize {
        self.path[self.path.len() - 1]
    }

    /// Whether `node` is already on the path.
    #[inline]
    pub(crate) fn visits(&self, node: usize) -> bool {
        self.path.contains(&node)
    }

    /// A new candidate ending one step further at `node`.
    pub(crate) fn extend(&self, node: usize, step: f64, estimate: f64, ticket: u64) -> Self {
        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend_from_slice(&self.path);
        path.push(node);
        let cost = self.cost + step;
        Self {
            path,
            cost,
            estimate,
            score: cost + estimate,
            ticket,
        }
    }

    /// The finished path through `target`.
    pub(crate) fn finish(mut self, target: usize) -> Vec<usize> {
        self.path.push(target);
        self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extend_accumulates() {
        let root = Candidate::root(4, 10.0);
        assert_eq!(root.score, 10.0);
        assert_eq!(root.terminal(), 4);

        let next = root.extend(7, 2.5, 6.0, 1);
        assert_eq!(next.path, vec![4, 7]);
        assert_eq!(next.cost, 2.5);
        assert_eq!(next.score, 8.5);
        assert!(next.visits(4));
        assert!(!next.visits(9));
        // The parent is untouched.
        assert_eq!(root.path, vec![4]);

        assert_eq!(next.finish(9), vec![4, 7, 9]);
    }
}
