//! Error types for grid construction and strategy selection.
//!
//! Failing to find a path is not an error: searches always return a
//! [SearchResult](crate::solver::SearchResult), with an empty path when the goal could not be reached.

use grid_util::point::Point;
use thiserror::Error;

/// Errors raised while building an [OccupancyGrid](crate::occupancy_grid::OccupancyGrid) or checking
/// endpoints against it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("occupancy grid has no cells")]
    Empty,

    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("bad start position {0}")]
    InvalidStart(Point),

    #[error("bad goal position {0}")]
    InvalidGoal(Point),
}

/// Returned when a strategy name is not recognised.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown search strategy '{0}', expected one of bfs, dfs, astar, true-astar, all")]
pub struct ParseStrategyError(pub String);

pub type Result<T> = std::result::Result<T, GridError>;
