use grid_util::point::Point;

use crate::{
    neighborhood,
    node::NodeArena,
    search_grid::SearchGrid,
    solver::{ExpansionCounter, GridSolver, SearchResult, Strategy},
};

/// Depth-first search. Neighbours are pushed without any check and validated only when popped, so
/// the stack may briefly hold walls, out-of-bounds points and cells that were visited in the
/// meantime. They are pushed in reverse priority order so that down is still popped first.
///
/// The path returned is whichever one the dive finds first, not necessarily a shortest one.
#[derive(Clone, Debug, Default)]
pub struct DfsSolver {
    pub max_expansions: Option<usize>,
}

impl DfsSolver {
    pub fn new() -> DfsSolver {
        DfsSolver {
            max_expansions: None,
        }
    }
}

impl GridSolver for DfsSolver {
    fn strategy(&self) -> Strategy {
        Strategy::DepthFirst
    }

    fn solve(&self, grid: &mut SearchGrid, start: Point, goal: Point) -> SearchResult {
        if grid.occupancy().is_wall(&start) {
            return SearchResult::exhausted(0);
        }
        let mut arena = NodeArena::new();
        let mut counter = ExpansionCounter::new(self.max_expansions);
        let mut stack = vec![arena.root(start)];

        while let Some(current) = stack.pop() {
            let point = arena.point(current);
            let is_goal = point == goal;
            if !is_goal && !grid.is_traversable(&point) {
                continue;
            }
            if !counter.expand() {
                return SearchResult::budget_exceeded(counter.count);
            }
            if is_goal {
                return SearchResult::goal_reached(arena.reconstruct_path(current), counter.count);
            }
            grid.mark_visited(&point);
            for neighbor in neighborhood(&point).into_iter().rev() {
                stack.push(arena.push(neighbor, current));
            }
        }
        SearchResult::exhausted(counter.count)
    }
}
