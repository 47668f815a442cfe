use thiserror::Error;

/// Errors detected before a search starts.
///
/// An unreachable target is not an error: searches report it as an empty
/// path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Root or target outside `0..nodes`.
    #[error("node {node} out of range for a graph of {nodes} nodes")]
    InvalidIndex { node: usize, nodes: usize },
}

/// Returned when a string names no [`Strategy`](crate::Strategy).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown search strategy {0:?} (expected bfs, dfs, best, a or astar)")]
pub struct ParseStrategyError(pub String);
