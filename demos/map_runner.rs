use grid_planner::{OccupancyGrid, Planner, PlannerConfig, StrategySelection};
use grid_planner_maps::*;
use std::time::{Duration, Instant};

// Runs every scenario of every map under maps/ with the strategy given as the first argument
// (bfs, dfs, astar, true-astar or all; defaults to all).
fn main() {
    env_logger::init();
    let selection: StrategySelection = match std::env::args().nth(1) {
        Some(arg) => match arg.parse() {
            Ok(selection) => selection,
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        },
        None => StrategySelection::All,
    };
    let mut total_time = Duration::ZERO;
    for name in get_map_names() {
        println!("Map name: {}", name);
        let (rows, scenarios) = get_map(&name);
        let grid = match OccupancyGrid::from_rows(rows) {
            Ok(grid) => grid,
            Err(e) => {
                eprintln!("\tSkipping {name}: {e}");
                continue;
            }
        };
        let planner = Planner::new(grid, PlannerConfig::default());
        let before = Instant::now();
        for (start, goal, _) in &scenarios {
            if let Err(e) = planner.validate_endpoints(*start, *goal) {
                eprintln!("\t{e}");
                continue;
            }
            for (strategy, result) in planner.plan_selection(selection, *start, *goal) {
                println!("\t{strategy}: {result}");
            }
        }
        let elapsed = before.elapsed();
        println!("\tElapsed time: {:.2?}", elapsed);
        total_time += elapsed;
    }
    println!("Total time: {:.2?}", total_time);
}
