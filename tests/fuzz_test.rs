/// Fuzzes the planner by checking for many random grids that the complete strategies find a path
/// exactly when the goal is in the start's connected component, and that every path returned by
/// any strategy is a valid walk from start to goal.
use grid_planner::{
    solver::{astar::AstarSolver, bfs::BfsSolver, dfs::DfsSolver, greedy::GreedySolver},
    GridSolver, OccupancyGrid, SearchGrid, SearchResult, Termination,
};
use grid_util::grid::ValueGrid;
use grid_util::point::Point;
use itertools::Itertools;
use rand::prelude::*;

fn random_grid(w: usize, h: usize, rng: &mut StdRng) -> OccupancyGrid {
    let mut occupancy = OccupancyGrid::new(w, h, false);
    for x in 0..occupancy.width() as i32 {
        for y in 0..occupancy.height() as i32 {
            occupancy.set(x, y, rng.gen_bool(0.4))
        }
    }
    occupancy.generate_components();
    occupancy
}

fn visualize_grid(grid: &OccupancyGrid, start: &Point, end: &Point) {
    for y in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            let p = Point::new(x, y);
            if *start == p {
                print!("S");
            } else if *end == p {
                print!("G");
            } else if grid.get(x, y) {
                print!("#");
            } else {
                print!(".");
            }
        }
        println!();
    }
}

fn assert_valid_walk(result: &SearchResult, start: &Point, end: &Point) {
    if !result.found() {
        return;
    }
    assert_eq!(result.path.first(), Some(start));
    assert_eq!(result.path.last(), Some(end));
    assert!(result
        .path
        .iter()
        .tuple_windows()
        .all(|(a, b)| a.manhattan_distance(b) == 1));
    assert!(result.path.iter().all_unique());
    assert!(result.nodes_expanded >= result.path.len());
}

fn component_size(grid: &OccupancyGrid, start: &Point) -> usize {
    (0..grid.height() as i32)
        .cartesian_product(0..grid.width() as i32)
        .filter(|&(y, x)| grid.reachable(start, &Point::new(x, y)))
        .count()
}

#[test]
fn fuzz() {
    let _ = env_logger::builder().is_test(true).try_init();
    const N: usize = 10;
    const N_GRIDS: usize = 5000;
    let mut rng = StdRng::seed_from_u64(0);
    let bfs = BfsSolver::new();
    let dfs = DfsSolver::new();
    let greedy = GreedySolver::new();
    let astar = AstarSolver::new();

    let start = Point::new(0, 0);
    let end = Point::new(N as i32 - 1, N as i32 - 1);
    for _ in 0..N_GRIDS {
        let mut random_grid = random_grid(N, N, &mut rng);
        random_grid.set_point(start, false);
        random_grid.set_point(end, false);
        random_grid.update();
        let reachable = random_grid.reachable(&start, &end);

        let bfs_result = bfs.get_path_single_goal(&random_grid, start, end);
        let dfs_result = dfs.get_path_single_goal(&random_grid, start, end);
        let astar_result = astar.get_path_single_goal(&random_grid, start, end);
        let greedy_result = greedy.get_path_single_goal(&random_grid, start, end);

        // Show the grid if a complete strategy disagrees with the components
        if bfs_result.found() != reachable
            || dfs_result.found() != reachable
            || astar_result.found() != reachable
        {
            visualize_grid(&random_grid, &start, &end);
        }
        assert_eq!(bfs_result.found(), reachable);
        assert_eq!(dfs_result.found(), reachable);
        assert_eq!(astar_result.found(), reachable);
        assert!(!greedy_result.found() || reachable);

        for result in [&bfs_result, &dfs_result, &astar_result, &greedy_result] {
            assert_valid_walk(result, &start, &end);
            assert!(result.nodes_expanded >= 1);
        }

        if reachable {
            assert_eq!(bfs_result.steps(), astar_result.steps());
            assert!(dfs_result.steps() >= bfs_result.steps());
            if greedy_result.found() {
                assert!(greedy_result.steps() >= bfs_result.steps());
            }
        } else {
            let size = component_size(&random_grid, &start);
            assert_eq!(bfs_result.termination, Termination::Exhausted);
            assert_eq!(bfs_result.nodes_expanded, size);
            assert_eq!(dfs_result.nodes_expanded, size);
        }
    }
}

/// Depth-first search counts one expansion per cell it marks, plus the goal if reached.
#[test]
fn dfs_expansions_match_visited_cells() {
    const N: usize = 8;
    let mut rng = StdRng::seed_from_u64(7);
    let start = Point::new(0, 0);
    let end = Point::new(N as i32 - 1, N as i32 - 1);
    for _ in 0..500 {
        let mut random_grid = random_grid(N, N, &mut rng);
        random_grid.set_point(start, false);
        random_grid.set_point(end, false);
        let mut search_grid = SearchGrid::new(&random_grid);
        let result = DfsSolver::new().solve(&mut search_grid, start, end);
        let goal_bonus = usize::from(result.found() && start != end);
        assert_eq!(result.nodes_expanded, search_grid.visited_count() + goal_bonus);
    }
}

/// Fresh grids built from the same layout give identical results.
#[test]
fn repeated_runs_are_deterministic() {
    const N: usize = 12;
    let mut rng = StdRng::seed_from_u64(42);
    let start = Point::new(0, 0);
    let end = Point::new(N as i32 - 1, N as i32 - 1);
    for _ in 0..200 {
        let mut grid_a = random_grid(N, N, &mut rng);
        grid_a.set_point(start, false);
        grid_a.set_point(end, false);
        let grid_b = grid_a.clone();
        let solvers: [&dyn GridSolver; 3] =
            [&BfsSolver::new(), &DfsSolver::new(), &GreedySolver::new()];
        for solver in solvers {
            assert_eq!(
                solver.get_path_single_goal(&grid_a, start, end),
                solver.get_path_single_goal(&grid_b, start, end)
            );
        }
    }
}
