use grid_util::point::Point;

use crate::{
    astar::astar,
    search_grid::SearchGrid,
    solver::{GridSolver, SearchResult, Strategy},
};

/// Complete A* on the 4-neighbourhood with unit step cost and the Manhattan distance as
/// heuristic. Unlike [GreedySolver](crate::solver::greedy::GreedySolver) it keeps an open list and
/// always returns a shortest path when the goal is reachable.
///
/// Cells are recorded in the visited overlay as they are expanded.
#[derive(Clone, Debug, Default)]
pub struct AstarSolver {
    pub max_expansions: Option<usize>,
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver {
            max_expansions: None,
        }
    }

    pub fn heuristic(&self, p1: &Point, p2: &Point) -> i32 {
        p1.manhattan_distance(p2)
    }
}

impl GridSolver for AstarSolver {
    fn strategy(&self) -> Strategy {
        Strategy::Astar
    }

    fn solve(&self, grid: &mut SearchGrid, start: Point, goal: Point) -> SearchResult {
        let occupancy = grid.occupancy();
        if occupancy.is_wall(&start) {
            return SearchResult::exhausted(0);
        }
        let outcome = astar(
            &start,
            |node| {
                grid.mark_visited(node);
                occupancy.neighborhood_points_and_cost(node)
            },
            |point| self.heuristic(point, &goal),
            |point| *point == goal,
            self.max_expansions,
        );
        match outcome.solution {
            Some((path, _cost)) => {
                grid.mark_visited(&goal);
                SearchResult::goal_reached(path, outcome.expanded)
            }
            None if outcome.budget_exceeded => SearchResult::budget_exceeded(outcome.expanded),
            None => SearchResult::exhausted(outcome.expanded),
        }
    }
}
