use crate::occupancy_grid::OccupancyGrid;
use grid_util::grid::{BoolGrid, ValueGrid};
use grid_util::point::Point;
use itertools::iproduct;

/// The view of an [OccupancyGrid] a single search works on: the shared wall layer plus a visited
/// overlay owned by the search. Marking a cell visited never touches the walls, so the same
/// [OccupancyGrid] can back several searches at once.
#[derive(Clone, Debug)]
pub struct SearchGrid<'a> {
    occupancy: &'a OccupancyGrid,
    visited: BoolGrid,
}

impl<'a> SearchGrid<'a> {
    pub fn new(occupancy: &'a OccupancyGrid) -> SearchGrid<'a> {
        SearchGrid {
            occupancy,
            visited: BoolGrid::new(occupancy.width(), occupancy.height(), false),
        }
    }

    pub fn occupancy(&self) -> &'a OccupancyGrid {
        self.occupancy
    }

    /// True iff `point` lies on the grid, is not a wall and has not been visited yet.
    pub fn is_traversable(&self, point: &Point) -> bool {
        self.occupancy.is_free(point) && !self.visited.get_point(*point)
    }

    /// Idempotent; points outside the grid are ignored.
    pub fn mark_visited(&mut self, point: &Point) {
        if self.visited.point_in_bounds(*point) {
            self.visited.set_point(*point, true);
        }
    }

    pub fn is_visited(&self, point: &Point) -> bool {
        self.visited.point_in_bounds(*point) && self.visited.get_point(*point)
    }

    pub fn visited_count(&self) -> usize {
        iproduct!(0..self.visited.height as i32, 0..self.visited.width as i32)
            .filter(|&(y, x)| self.visited.get(x, y))
            .count()
    }

    /// Clears the overlay so the grid can serve another search.
    pub fn reset(&mut self) {
        self.visited = BoolGrid::new(self.occupancy.width(), self.occupancy.height(), false);
    }

    pub fn width(&self) -> usize {
        self.occupancy.width()
    }

    pub fn height(&self) -> usize {
        self.occupancy.height()
    }
}
