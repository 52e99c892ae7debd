use grid_planner::{OccupancyGrid, Planner, PlannerConfig, StrategySelection};
use grid_util::point::Point;

// Runs breadth-first, depth-first and heuristic search on the same grid. Each search keeps its
// own visited cells, so the grid is shared between them.
// ......
// .##.#.
// ...#..
// .#...#
// ......
fn main() {
    env_logger::init();
    let rows = [
        "......", //
        ".##.#.", //
        "...#..", //
        ".#...#", //
        "......",
    ];
    let grid = OccupancyGrid::from_rows(
        rows.iter()
            .map(|r| r.chars().map(|c| c == '#').collect::<Vec<bool>>()),
    )
    .expect("Rows have equal length");
    let planner = Planner::new(grid, PlannerConfig::default());
    let start = Point::new(0, 0);
    let end = Point::new(5, 4);
    for (strategy, result) in planner.plan_selection(StrategySelection::All, start, end) {
        println!("{strategy}:\n{result}");
    }
}
