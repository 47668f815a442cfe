//! Best-score bookkeeping for cost-aware search.

/// Tracks, per node, the best score among expanded candidates (history) and
/// the single live frontier candidate.
///
/// A new candidate for a node is admitted only if its score is strictly
/// better than everything already recorded for that node; admitting it
/// supersedes the previous frontier entry, which is then dropped lazily when
/// popped.
pub(crate) struct DuplicateResolver {
    history: Vec<f64>,
    open: Vec<Option<OpenEntry>>,
}

#[derive(Clone, Copy)]
struct OpenEntry {
    score: f64,
    ticket: u64,
}

impl DuplicateResolver {
    pub(crate) fn new(nodes: usize) -> Self {
        Self {
            history: vec![f64::INFINITY; nodes],
            open: vec![None; nodes],
        }
    }

    /// Best score recorded for `node`, or infinity.
    pub(crate) fn best(&self, node: usize) -> f64 {
        let open = self.open[node].map_or(f64::INFINITY, |e| e.score);
        self.history[node].min(open)
    }

    /// Whether a candidate scoring `score` for `node` should enter the
    /// frontier.
    #[inline]
    pub(crate) fn admits(&self, node: usize, score: f64) -> bool {
        score < self.best(node)
    }

    /// Record the candidate `ticket` as the live frontier entry for `node`.
    pub(crate) fn open(&mut self, node: usize, score: f64, ticket: u64) {
        self.open[node] = Some(OpenEntry { score, ticket });
    }

    /// Whether `ticket` is still the live frontier entry for `node`.
    #[inline]
    pub(crate) fn is_live(&self, node: usize, ticket: u64) -> bool {
        self.open[node].is_some_and(|e| e.ticket == ticket)
    }

    /// Move `node` from the frontier into history with `score`.
    pub(crate) fn close(&mut self, node: usize, score: f64) {
        self.open[node] = None;
        self.history[node] = self.history[node].min(score);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_or_worse_is_rejected() {
        let mut r = DuplicateResolver::new(3);
        assert!(r.admits(1, 5.0));
        r.open(1, 5.0, 1);
        assert!(!r.admits(1, 5.0));
        assert!(!r.admits(1, 6.0));
        assert!(r.admits(1, 4.0));
    }

    #[test]
    fn better_entry_supersedes() {
        let mut r = DuplicateResolver::new(3);
        r.open(2, 5.0, 1);
        r.open(2, 4.0, 2);
        assert!(!r.is_live(2, 1));
        assert!(r.is_live(2, 2));
        assert_eq!(r.best(2), 4.0);
    }

    #[test]
    fn history_blocks_readmission() {
        let mut r = DuplicateResolver::new(2);
        r.open(0, 3.0, 7);
        r.close(0, 3.0);
        assert!(!r.is_live(0, 7));
        assert!(!r.admits(0, 3.0));
        assert!(r.admits(0, 2.0));
        assert_eq!(r.best(1), f64::INFINITY);
    }
}
