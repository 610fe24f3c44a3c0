use std::str::FromStr;

/// The order in which states are examined during a search.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum SearchStrategy {
    /// Examine states in the order they are discovered.
    ///
    /// In other words, every state some number of actions from the start is examined before any state further from the start.
    BreadthFirst = 0,

    /// Examine the most recently discovered state first.
    DepthFirst,
}

impl std::fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BreadthFirst => write!(f, "BreadthFirst"),
            Self::DepthFirst => write!(f, "DepthFirst"),
        }
    }
}

impl SearchStrategy {
    /// The minimum SearchStrategy type.
    pub const MIN: SearchStrategy = SearchStrategy::BreadthFirst;

    /// The maximum SearchStrategy type.
    pub const MAX: SearchStrategy = SearchStrategy::DepthFirst;
}

impl FromStr for SearchStrategy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BreadthFirst" | "bfs" => Ok(Self::BreadthFirst),

            "DepthFirst" | "dfs" => Ok(Self::DepthFirst),

            _unkown_string => Err(()),
        }
    }
}
