use std::fmt;
use std::str::FromStr;

use crate::error::ParseStrategyError;

/// The search strategies understood by [`PathSearch`](crate::PathSearch).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Strategy {
    BreadthFirst,
    DepthFirst,
    BestFirst,
    /// Cost-aware search with a non-admissible estimate.
    A,
    /// Cost-aware search with the Euclidean estimate.
    AStar,
}

impl Strategy {
    /// Every strategy, in increasing order of sophistication.
    pub const ALL: [Strategy; 5] = [
        Self::BreadthFirst,
        Self::DepthFirst,
        Self::BestFirst,
        Self::A,
        Self::AStar,
    ];

    /// Short human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Self::BreadthFirst => "breadth-first",
            Self::DepthFirst => "depth-first",
            Self::BestFirst => "best-first",
            Self::A => "A",
            Self::AStar => "A*",
        }
    }

    /// Whether the strategy tracks accumulated path cost.
    pub fn is_cost_aware(self) -> bool {
        matches!(self, Self::A | Self::AStar)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bfs" | "breadth" | "breadth-first" => Ok(Self::BreadthFirst),
            "dfs" | "depth" | "depth-first" => Ok(Self::DepthFirst),
            "best" | "best-first" => Ok(Self::BestFirst),
            "a" => Ok(Self::A),
            "astar" | "a*" | "a-star" => Ok(Self::AStar),
            _ => Err(ParseStrategyError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_names() {
        assert_eq!("bfs".parse::<Strategy>(), Ok(Strategy::BreadthFirst));
        assert_eq!("Depth".parse::<Strategy>(), Ok(Strategy::DepthFirst));
        assert_eq!("best-first".parse::<Strategy>(), Ok(Strategy::BestFirst));
        assert_eq!("A".parse::<Strategy>(), Ok(Strategy::A));
        assert_eq!("a*".parse::<Strategy>(), Ok(Strategy::AStar));
        assert!("dijkstra".parse::<Strategy>().is_err());
    }

    #[test]
    fn display_parses_back() {
        for s in Strategy::ALL {
            assert_eq!(s.to_string().parse::<Strategy>(), Ok(s));
        }
    }

    #[test]
    fn cost_aware() {
        let aware: Vec<_> = Strategy::ALL.into_iter().filter(|s| s.is_cost_aware()).collect();
        assert_eq!(aware, vec![Strategy::A, Strategy::AStar]);
    }
}
