use crate::error::ParseStrategyError;
use crate::occupancy_grid::OccupancyGrid;
use crate::search_grid::SearchGrid;
use core::fmt;
use grid_util::point::Point;
use log::{debug, warn};
use std::str::FromStr;

pub mod astar;
pub mod bfs;
pub mod dfs;
pub mod greedy;

/// How a search ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Termination {
    GoalReached,
    /// Nothing left to expand. For the greedy strategy this is a dead end, which does not imply
    /// that the goal is unreachable.
    Exhausted,
    /// The solver's `max_expansions` was hit before the search finished.
    BudgetExceeded,
}

/// Path found by a strategy together with the number of cells it expanded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// Points from start to goal inclusive, empty if no path was found.
    pub path: Vec<Point>,
    pub nodes_expanded: usize,
    pub termination: Termination,
}

impl SearchResult {
    pub fn goal_reached(path: Vec<Point>, nodes_expanded: usize) -> SearchResult {
        SearchResult {
            path,
            nodes_expanded,
            termination: Termination::GoalReached,
        }
    }
    pub fn exhausted(nodes_expanded: usize) -> SearchResult {
        SearchResult {
            path: Vec::new(),
            nodes_expanded,
            termination: Termination::Exhausted,
        }
    }
    pub fn budget_exceeded(nodes_expanded: usize) -> SearchResult {
        SearchResult {
            path: Vec::new(),
            nodes_expanded,
            termination: Termination::BudgetExceeded,
        }
    }
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }
    /// Number of moves along the path.
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Prints points as `(row, col)` pairs followed by the expansion count.
impl fmt::Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Path: [")?;
        for (i, p) in self.path.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "({}, {})", p.y, p.x)?;
        }
        writeln!(f, "]")?;
        write!(f, "Traversed: {}", self.nodes_expanded)
    }
}

/// Counts expansions against an optional upper bound.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ExpansionCounter {
    pub count: usize,
    max: Option<usize>,
}

impl ExpansionCounter {
    pub fn new(max: Option<usize>) -> ExpansionCounter {
        ExpansionCounter { count: 0, max }
    }
    /// Records one expansion, or returns [false] if that would exceed the bound.
    pub fn expand(&mut self) -> bool {
        if self.max.is_some_and(|max| self.count >= max) {
            warn!("Search stopped after {} expansions", self.count);
            return false;
        }
        self.count += 1;
        true
    }
}

/// The search strategies the planner offers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    BreadthFirst,
    DepthFirst,
    /// Greedy one-step lookahead on Euclidean distance. Does not backtrack.
    Heuristic,
    /// Complete priority-queue A*.
    Astar,
}

impl Strategy {
    /// The strategies run for [StrategySelection::All], in run order.
    pub const ALL: [Strategy; 3] = [
        Strategy::BreadthFirst,
        Strategy::DepthFirst,
        Strategy::Heuristic,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::BreadthFirst => "breadth-first",
            Strategy::DepthFirst => "depth-first",
            Strategy::Heuristic => "heuristic",
            Strategy::Astar => "true-astar",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Either a single strategy or all three of breadth-first, depth-first and heuristic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StrategySelection {
    Single(Strategy),
    All,
}

impl StrategySelection {
    pub fn strategies(&self) -> Vec<Strategy> {
        match self {
            StrategySelection::Single(strategy) => vec![*strategy],
            StrategySelection::All => Strategy::ALL.to_vec(),
        }
    }
}

impl fmt::Display for StrategySelection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StrategySelection::Single(strategy) => fmt::Display::fmt(strategy, f),
            StrategySelection::All => f.write_str("all"),
        }
    }
}

impl FromStr for StrategySelection {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let strategy = match s.trim().to_ascii_lowercase().as_str() {
            "bfs" | "breadth-first" => Strategy::BreadthFirst,
            "dfs" | "depth-first" => Strategy::DepthFirst,
            "astar" | "heuristic" | "greedy" => Strategy::Heuristic,
            "true-astar" => Strategy::Astar,
            "all" => return Ok(StrategySelection::All),
            _ => return Err(ParseStrategyError(s.to_owned())),
        };
        Ok(StrategySelection::Single(strategy))
    }
}

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<StrategySelection>()? {
            StrategySelection::Single(strategy) => Ok(strategy),
            StrategySelection::All => Err(ParseStrategyError(s.to_owned())),
        }
    }
}

pub trait GridSolver {
    fn strategy(&self) -> Strategy;

    /// Runs the search on `grid`, marking cells in its visited overlay. The overlay is left as the
    /// search finished with it.
    fn solve(&self, grid: &mut SearchGrid, start: Point, goal: Point) -> SearchResult;

    /// Runs the search on a fresh overlay of `grid`. Start and goal are expected to be free cells
    /// of the grid; no further validation is done.
    fn get_path_single_goal(&self, grid: &OccupancyGrid, start: Point, goal: Point) -> SearchResult {
        let mut search_grid = SearchGrid::new(grid);
        debug!("{} search from {} to {}", self.strategy(), start, goal);
        let result = self.solve(&mut search_grid, start, goal);
        debug!(
            "{} search finished: {:?} after {} expansions, path of {} points",
            self.strategy(),
            result.termination,
            result.nodes_expanded,
            result.path.len()
        );
        result
    }
}
