use grid_planner::{HeuristicMode, OccupancyGrid, Planner, PlannerConfig, Strategy};
use grid_util::point::Point;

// The goal G sits below a cup-shaped wall. Heading straight for it leads the greedy search into
// the cup, where it gets stuck, while A* walks around.
// ..S..
// .....
// .#.#.
// .###.
// ..G..
fn main() {
    env_logger::init();
    let grid = OccupancyGrid::from_rows([
        [false, false, false, false, false],
        [false, false, false, false, false],
        [false, true, false, true, false],
        [false, true, true, true, false],
        [false, false, false, false, false],
    ])
    .expect("Rows have equal length");
    let start = Point::new(2, 0);
    let end = Point::new(2, 4);

    let greedy = Planner::new(grid.clone(), PlannerConfig::default());
    let result = greedy.plan(Strategy::Heuristic, start, end);
    println!("Greedy ({:?}):\n{}", result.termination, result);

    let astar = Planner::new(
        grid,
        PlannerConfig::default().with_heuristic(HeuristicMode::Astar),
    );
    let result = astar.plan(Strategy::Heuristic, start, end);
    println!("A* ({:?}):\n{}", result.termination, result);
}
