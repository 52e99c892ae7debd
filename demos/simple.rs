use grid_planner::{solver::bfs::BfsSolver, GridSolver, OccupancyGrid};
use grid_util::grid::ValueGrid;
use grid_util::point::Point;

// In this example a path is found on a 3x3 grid with shape
//  ___
// |S  |
// | # |
// |  E|
//  ___
// where
// - # marks an obstacle
// - S marks the start
// - E marks the end
//
// Nodes have a 4-neighborhood

fn main() {
    env_logger::init();
    let mut grid = OccupancyGrid::new(3, 3, false);
    grid.set(1, 1, true);
    println!("{}", grid);
    let start = Point::new(0, 0);
    let end = Point::new(2, 2);
    let result = BfsSolver::new().get_path_single_goal(&grid, start, end);
    println!("Path:");
    for p in &result.path {
        println!("{:?}", p);
    }
    println!("Expanded {} cells", result.nodes_expanded);
}
