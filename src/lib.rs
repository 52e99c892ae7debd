//! # grid_planner
//!
//! Path planning on 2-D occupancy grids with three classic strategies:
//! [breadth-first search](https://en.wikipedia.org/wiki/Breadth-first_search),
//! [depth-first search](https://en.wikipedia.org/wiki/Depth-first_search) and a greedy
//! [best-first search](https://en.wikipedia.org/wiki/Best-first_search) guided by the Euclidean
//! distance to the goal. A complete A* is available as an opt-in alternative to the greedy search.
//!
//! Movement is restricted to the four cardinal directions with unit cost. All strategies expand
//! neighbours in the same priority order (down, right, up, left), which makes their results
//! deterministic.
//!
//! Each search tracks visited cells in its own overlay on top of a shared [OccupancyGrid], so the
//! wall data is never modified and a single grid can serve any number of searches.
pub mod astar;
pub mod config;
pub mod error;
pub mod node;
pub mod occupancy_grid;
pub mod search_grid;
pub mod solver;

use grid_util::point::Point;
use log::info;
use smallvec::SmallVec;

pub use config::{HeuristicMode, PlannerConfig};
pub use error::{GridError, ParseStrategyError};
pub use occupancy_grid::OccupancyGrid;
pub use search_grid::SearchGrid;
pub use solver::{GridSolver, SearchResult, Strategy, StrategySelection, Termination};

use solver::{astar::AstarSolver, bfs::BfsSolver, dfs::DfsSolver, greedy::GreedySolver};

pub const N_SMALLVEC_SIZE: usize = 4;

/// Neighbour offsets `(dx, dy)` in expansion priority: down, right, up, left. Rows grow
/// downwards, so down is `y + 1`.
pub const NEIGHBOUR_OFFSETS: [(i32, i32); N_SMALLVEC_SIZE] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// The four neighbours of `point` in [NEIGHBOUR_OFFSETS] order, whether on the grid or not.
pub fn neighborhood(point: &Point) -> SmallVec<[Point; N_SMALLVEC_SIZE]> {
    NEIGHBOUR_OFFSETS
        .iter()
        .map(|&(dx, dy)| Point::new(point.x + dx, point.y + dy))
        .collect()
}

/// [Planner] bundles an [OccupancyGrid] with a [PlannerConfig] and runs the requested strategies
/// on it. Every search gets its own visited overlay, so running several strategies in a row
/// needs no copies of the grid.
#[derive(Clone, Debug, Default)]
pub struct Planner {
    pub grid: OccupancyGrid,
    pub config: PlannerConfig,
}

impl Planner {
    pub fn new(grid: OccupancyGrid, config: PlannerConfig) -> Planner {
        Planner { grid, config }
    }

    /// The solver that serves `strategy` under the current configuration.
    pub fn solver(&self, strategy: Strategy) -> Box<dyn GridSolver> {
        let max_expansions = self.config.max_expansions;
        match (strategy, self.config.heuristic) {
            (Strategy::BreadthFirst, _) => Box::new(BfsSolver { max_expansions }),
            (Strategy::DepthFirst, _) => Box::new(DfsSolver { max_expansions }),
            (Strategy::Heuristic, HeuristicMode::Greedy) => {
                Box::new(GreedySolver { max_expansions })
            }
            (Strategy::Heuristic, HeuristicMode::Astar) | (Strategy::Astar, _) => {
                Box::new(AstarSolver { max_expansions })
            }
        }
    }

    /// Runs a single strategy. Start and goal are expected to have passed
    /// [validate_endpoints](Self::validate_endpoints).
    pub fn plan(&self, strategy: Strategy, start: Point, goal: Point) -> SearchResult {
        self.solver(strategy)
            .get_path_single_goal(&self.grid, start, goal)
    }

    /// Runs every strategy in `selection`, in order, each on a fresh overlay.
    pub fn plan_selection(
        &self,
        selection: StrategySelection,
        start: Point,
        goal: Point,
    ) -> Vec<(Strategy, SearchResult)> {
        info!("Planning {} from {} to {}", selection, start, goal);
        selection
            .strategies()
            .into_iter()
            .map(|strategy| (strategy, self.plan(strategy, start, goal)))
            .collect()
    }

    /// Checks that both endpoints are free cells of the grid.
    pub fn validate_endpoints(&self, start: Point, goal: Point) -> error::Result<()> {
        if self.grid.is_wall(&start) {
            return Err(GridError::InvalidStart(start));
        }
        if self.grid.is_wall(&goal) {
            return Err(GridError::InvalidGoal(goal));
        }
        Ok(())
    }
}
