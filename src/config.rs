//! Planner settings.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which algorithm serves [Strategy::Heuristic](crate::solver::Strategy::Heuristic).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum HeuristicMode {
    /// One-step greedy descent on Euclidean distance, which may dead-end.
    #[default]
    Greedy,
    /// Complete priority-queue A*.
    Astar,
}

/// Planner settings
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlannerConfig {
    /// Algorithm used for heuristic searches
    #[cfg_attr(feature = "serde", serde(default))]
    pub heuristic: HeuristicMode,

    /// Maximum nodes to expand per search (unbounded if absent)
    #[cfg_attr(feature = "serde", serde(default))]
    pub max_expansions: Option<usize>,
}

impl PlannerConfig {
    pub fn with_heuristic(mut self, heuristic: HeuristicMode) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn with_max_expansions(mut self, max_expansions: usize) -> Self {
        self.max_expansions = Some(max_expansions);
        self
    }
}
