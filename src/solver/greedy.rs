use grid_util::point::Point;
use log::{trace, warn};
use smallvec::SmallVec;

use crate::{
    neighborhood,
    node::NodeArena,
    search_grid::SearchGrid,
    solver::{ExpansionCounter, GridSolver, SearchResult, Strategy},
    N_SMALLVEC_SIZE,
};

/// Straight-line distance between two points.
pub fn euclidean_distance(p1: &Point, p2: &Point) -> f64 {
    let dx = (p1.x - p2.x) as f64;
    let dy = (p1.y - p2.y) as f64;
    dx.hypot(dy)
}

/// Greedy best-first search on Euclidean distance with a one-step lookahead.
///
/// From the current cell, every free and unvisited neighbour is scored by its distance to the goal
/// plus the number of steps taken so far, and is marked visited whether or not it is chosen. The
/// search then moves to the cheapest one, preferring earlier neighbours on ties. It keeps no open
/// list and never backtracks: once it walks into a cell without free neighbours it gives up, even
/// if the goal is reachable by another route. Use [AstarSolver](crate::solver::astar::AstarSolver)
/// when a path must be found whenever one exists.
#[derive(Clone, Debug, Default)]
pub struct GreedySolver {
    pub max_expansions: Option<usize>,
}

impl GreedySolver {
    pub fn new() -> GreedySolver {
        GreedySolver {
            max_expansions: None,
        }
    }
}

struct Candidate {
    index: usize,
    cost: f64,
    valid: bool,
}

impl GridSolver for GreedySolver {
    fn strategy(&self) -> Strategy {
        Strategy::Heuristic
    }

    fn solve(&self, grid: &mut SearchGrid, start: Point, goal: Point) -> SearchResult {
        if grid.occupancy().is_wall(&start) {
            return SearchResult::exhausted(0);
        }
        // Cost recorded for blocked candidates, which are never chosen.
        let sentinel = (grid.height() * grid.width()) as f64;
        let mut arena = NodeArena::new();
        let mut counter = ExpansionCounter::new(self.max_expansions);
        if !counter.expand() {
            return SearchResult::budget_exceeded(counter.count);
        }
        let mut current = arena.root(start);
        let mut steps = 0.0;

        while arena.point(current) != goal {
            let point = arena.point(current);
            grid.mark_visited(&point);
            if !counter.expand() {
                return SearchResult::budget_exceeded(counter.count);
            }

            let candidates = neighborhood(&point)
                .into_iter()
                .map(|neighbor| {
                    let valid = grid.is_traversable(&neighbor);
                    let cost = if valid {
                        grid.mark_visited(&neighbor);
                        euclidean_distance(&neighbor, &goal) + steps
                    } else {
                        sentinel
                    };
                    Candidate {
                        index: arena.push(neighbor, current),
                        cost,
                        valid,
                    }
                })
                .collect::<SmallVec<[Candidate; N_SMALLVEC_SIZE]>>();

            // min_by keeps the first of equal minima, so ties go to the earlier neighbour.
            let Some(best) = candidates
                .iter()
                .filter(|c| c.valid)
                .min_by(|a, b| a.cost.total_cmp(&b.cost))
            else {
                warn!(
                    "Heuristic search stuck at {} after {} expansions",
                    point, counter.count
                );
                return SearchResult::exhausted(counter.count);
            };
            trace!(
                "Heuristic search moves {} -> {} (cost {:.3})",
                point,
                arena.point(best.index),
                best.cost
            );
            current = best.index;
            steps += 1.0;
        }
        SearchResult::goal_reached(arena.reconstruct_path(current), counter.count)
    }
}
