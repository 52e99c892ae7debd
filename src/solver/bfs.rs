use grid_util::point::Point;
use std::collections::VecDeque;

use crate::{
    neighborhood,
    node::NodeArena,
    search_grid::SearchGrid,
    solver::{ExpansionCounter, GridSolver, SearchResult, Strategy},
};

/// Breadth-first search. Cells are marked visited as soon as they are queued, so each cell enters
/// the queue at most once, and the first path found to the goal is a shortest one.
#[derive(Clone, Debug, Default)]
pub struct BfsSolver {
    pub max_expansions: Option<usize>,
}

impl BfsSolver {
    pub fn new() -> BfsSolver {
        BfsSolver {
            max_expansions: None,
        }
    }
}

impl GridSolver for BfsSolver {
    fn strategy(&self) -> Strategy {
        Strategy::BreadthFirst
    }

    fn solve(&self, grid: &mut SearchGrid, start: Point, goal: Point) -> SearchResult {
        if grid.occupancy().is_wall(&start) {
            return SearchResult::exhausted(0);
        }
        let mut arena = NodeArena::new();
        let mut counter = ExpansionCounter::new(self.max_expansions);
        let mut queue = VecDeque::new();
        queue.push_back(arena.root(start));
        grid.mark_visited(&start);

        while let Some(current) = queue.pop_front() {
            if !counter.expand() {
                return SearchResult::budget_exceeded(counter.count);
            }
            let point = arena.point(current);
            if point == goal {
                return SearchResult::goal_reached(arena.reconstruct_path(current), counter.count);
            }
            for neighbor in neighborhood(&point) {
                if grid.is_traversable(&neighbor) {
                    grid.mark_visited(&neighbor);
                    queue.push_back(arena.push(neighbor, current));
                }
            }
        }
        SearchResult::exhausted(counter.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::occupancy_grid::OccupancyGrid;
    use crate::solver::test_util::{grid, is_connected, rc, rcs};
    use crate::solver::Termination;
    use grid_util::grid::ValueGrid;

    /// Down is tried before right, so ties go to the route that heads down first.
    #[test]
    fn open_grid_prefers_down_first() {
        let occupancy = OccupancyGrid::new(3, 3, false);
        let result = BfsSolver::new().get_path_single_goal(&occupancy, rc(0, 0), rc(2, 2));
        assert_eq!(
            result.path,
            rcs(&[(0, 0), (1, 0), (2, 0), (2, 1), (2, 2)])
        );
        assert_eq!(result.nodes_expanded, 9);
        assert_eq!(result.termination, Termination::GoalReached);
    }

    #[test]
    fn open_grid_paths_are_manhattan_optimal() {
        let occupancy = OccupancyGrid::new(6, 5, false);
        let solver = BfsSolver::new();
        for row in 0..5 {
            for col in 0..6 {
                let result = solver.get_path_single_goal(&occupancy, rc(0, 0), rc(row, col));
                assert_eq!(result.steps(), (row + col) as usize);
                assert!(is_connected(&result.path));
                assert!(result.nodes_expanded >= result.path.len());
            }
        }
    }

    #[test]
    fn equal_start_goal() {
        let occupancy = OccupancyGrid::new(1, 1, false);
        let result = BfsSolver::new().get_path_single_goal(&occupancy, rc(0, 0), rc(0, 0));
        assert_eq!(result.path, vec![rc(0, 0)]);
        assert_eq!(result.nodes_expanded, 1);
    }

    /// Goes around the wall rather than giving up.
    #[test]
    fn routes_around_walls() {
        let occupancy = grid(&[
            ".....", //
            ".###.", //
            "...#.", //
            "####.", //
            ".....",
        ]);
        let result = BfsSolver::new().get_path_single_goal(&occupancy, rc(2, 0), rc(4, 0));
        assert_eq!(result.steps(), 14);
        assert_eq!(result.path.first(), Some(&rc(2, 0)));
        assert_eq!(result.path.last(), Some(&rc(4, 0)));
        assert!(is_connected(&result.path));
    }

    #[test]
    fn separated_goal_exhausts_reachable_cells() {
        let occupancy = grid(&[
            ".#.", //
            ".#.", //
            ".#.",
        ]);
        let result = BfsSolver::new().get_path_single_goal(&occupancy, rc(0, 0), rc(0, 2));
        assert!(result.path.is_empty());
        assert_eq!(result.nodes_expanded, 3);
        assert_eq!(result.termination, Termination::Exhausted);
    }

    #[test]
    fn budget_stops_search() {
        let occupancy = OccupancyGrid::new(4, 4, false);
        let solver = BfsSolver {
            max_expansions: Some(3),
        };
        let result = solver.get_path_single_goal(&occupancy, rc(0, 0), rc(3, 3));
        assert!(result.path.is_empty());
        assert_eq!(result.nodes_expanded, 3);
        assert_eq!(result.termination, Termination::BudgetExceeded);
    }

    #[test]
    fn blocked_start_yields_empty_path() {
        let occupancy = grid(&["#.", ".."]);
        let solver = BfsSolver::new();
        let result = solver.get_path_single_goal(&occupancy, rc(0, 0), rc(1, 1));
        assert!(!result.found());
        assert_eq!(result.nodes_expanded, 0);
        let outside = solver.get_path_single_goal(&occupancy, rc(-1, 1), rc(1, 1));
        assert!(!outside.found());
    }
}
