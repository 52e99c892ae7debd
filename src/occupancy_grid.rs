use crate::error::{GridError, Result};
use crate::{neighborhood, N_SMALLVEC_SIZE};
use core::fmt;
use grid_util::grid::{BoolGrid, ValueGrid};
use grid_util::point::Point;
use itertools::iproduct;
use log::info;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

/// [OccupancyGrid] holds the wall layer of a map as a [BoolGrid] in which occupied cells are
/// [true] and free cells are [false]. Searches never write to it; visitation is tracked per search
/// by a [SearchGrid](crate::search_grid::SearchGrid), so one grid can back any number of searches.
///
/// Connected components over the 4-neighbourhood are maintained in a [UnionFind] structure and can
/// be used to tell up front whether a goal is reachable at all.
#[derive(Clone, Debug)]
pub struct OccupancyGrid {
    pub grid: BoolGrid,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl Default for OccupancyGrid {
    fn default() -> OccupancyGrid {
        OccupancyGrid {
            grid: BoolGrid::default(),
            components: UnionFind::new(0),
            components_dirty: false,
        }
    }
}

impl OccupancyGrid {
    /// Builds a grid from rows of cells where `true` marks a wall. Row `y` of the input becomes
    /// the cells `(x, y)` of the grid. All rows must have the same, non-zero length.
    pub fn from_rows<I, R>(rows: I) -> Result<OccupancyGrid>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[bool]>,
    {
        let rows = rows.into_iter().collect::<Vec<R>>();
        let width = match rows.first() {
            Some(first) if !first.as_ref().is_empty() => first.as_ref().len(),
            _ => return Err(GridError::Empty),
        };
        if let Some((row, found)) = rows
            .iter()
            .map(|r| r.as_ref().len())
            .enumerate()
            .find(|&(_, len)| len != width)
        {
            return Err(GridError::Ragged {
                row,
                expected: width,
                found,
            });
        }
        let mut occupancy = OccupancyGrid::new(width, rows.len(), false);
        for (y, row) in rows.iter().enumerate() {
            for (x, &blocked) in row.as_ref().iter().enumerate() {
                occupancy.grid.set(x as i32, y as i32, blocked);
            }
        }
        occupancy.generate_components();
        Ok(occupancy)
    }

    /// Out-of-bounds points count as walls.
    pub fn is_wall(&self, point: &Point) -> bool {
        !self.point_in_bounds(*point) || self.grid.get_point(*point)
    }

    pub fn is_free(&self, point: &Point) -> bool {
        !self.is_wall(point)
    }

    /// The free cells among the four neighbours of `pos`, each with unit cost. Follows the
    /// expansion order given by [NEIGHBOUR_OFFSETS](crate::NEIGHBOUR_OFFSETS).
    pub fn neighborhood_points_and_cost(
        &self,
        pos: &Point,
    ) -> SmallVec<[(Point, i32); N_SMALLVEC_SIZE]> {
        neighborhood(pos)
            .into_iter()
            .filter(|p| self.is_free(p))
            .map(|p| (p, 1))
            .collect()
    }

    /// Number of free cells on the grid.
    pub fn free_count(&self) -> usize {
        iproduct!(0..self.height() as i32, 0..self.width() as i32)
            .filter(|&(y, x)| !self.grid.get(x, y))
            .count()
    }

    /// Retrieves the component id a given [Point] belongs to.
    pub fn get_component(&self, point: &Point) -> usize {
        self.components.find(self.get_ix_point(point))
    }

    /// Checks if start and goal are on the same component.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        !self.unreachable(start, goal)
    }

    /// Checks if start and goal are not on the same component. Walls and out-of-bounds points are
    /// never reachable.
    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        if self.is_free(start) && self.is_free(goal) {
            let start_ix = self.get_ix_point(start);
            let goal_ix = self.get_ix_point(goal);
            !self.components.equiv(start_ix, goal_ix)
        } else {
            true
        }
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            info!("Components are dirty: regenerating components");
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up free 4-neighbours to the same components.
    pub fn generate_components(&mut self) {
        let w = self.grid.width;
        let h = self.grid.height;
        self.components = UnionFind::new(w * h);
        self.components_dirty = false;
        for y in 0..h as i32 {
            for x in 0..w as i32 {
                let point = Point::new(x, y);
                if self.grid.get_point(point) {
                    continue;
                }
                let parent_ix = self.get_ix_point(&point);
                for p in [Point::new(x, y + 1), Point::new(x + 1, y)] {
                    if self.is_free(&p) {
                        let ix = self.get_ix_point(&p);
                        self.components.union(parent_ix, ix);
                    }
                }
            }
        }
    }
}

impl fmt::Display for OccupancyGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Grid:")?;
        for y in 0..self.grid.height as i32 {
            let values = (0..self.grid.width as i32)
                .map(|x| self.grid.get(x, y) as i32)
                .collect::<Vec<i32>>();
            writeln!(f, "{:?}", values)?;
        }
        Ok(())
    }
}

impl ValueGrid<bool> for OccupancyGrid {
    fn new(width: usize, height: usize, default_value: bool) -> Self {
        let mut occupancy = OccupancyGrid {
            grid: BoolGrid::new(width, height, default_value),
            components: UnionFind::new(width * height),
            components_dirty: false,
        };
        if !default_value {
            occupancy.generate_components();
        }
        occupancy
    }
    fn get(&self, x: i32, y: i32) -> bool {
        self.grid.get(x, y)
    }
    /// Updates a position on the grid. Joins newly connected components and flags the components
    /// as dirty if components are (potentially) broken apart into multiple.
    fn set(&mut self, x: i32, y: i32, blocked: bool) {
        let p = Point::new(x, y);
        if blocked {
            if !self.grid.get(x, y) {
                self.components_dirty = true;
            }
        } else {
            let p_ix = self.get_ix_point(&p);
            for n in neighborhood(&p) {
                if self.is_free(&n) {
                    let n_ix = self.get_ix_point(&n);
                    self.components.union(p_ix, n_ix);
                }
            }
        }
        self.grid.set(x, y, blocked);
    }
    fn width(&self) -> usize {
        self.grid.width()
    }
    fn height(&self) -> usize {
        self.grid.height()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests whether points are correctly mapped to different connected components
    #[test]
    fn test_component_generation() {
        // Corresponds to the following 3x2 grid:
        //  ___
        // | # |
        // | # |
        //  ___
        let mut occupancy = OccupancyGrid::new(3, 2, false);
        occupancy.grid.set(1, 0, true);
        occupancy.grid.set(1, 1, true);
        occupancy.generate_components();
        let p1 = Point::new(0, 0);
        let p2 = Point::new(1, 1);
        let p3 = Point::new(0, 1);
        let p4 = Point::new(2, 0);
        assert!(occupancy.unreachable(&p1, &p2));
        assert!(occupancy.reachable(&p1, &p3));
        assert!(occupancy.unreachable(&p1, &p4));
        assert_ne!(occupancy.get_component(&p1), occupancy.get_component(&p4));
    }

    /// Diagonal contact does not connect two cells on a 4-grid.
    #[test]
    fn diagonal_cells_are_not_connected() {
        //  __
        // | #|
        // |# |
        //  __
        let occupancy =
            OccupancyGrid::from_rows([[false, true], [true, false]]).unwrap();
        assert!(occupancy.unreachable(&Point::new(0, 0), &Point::new(1, 1)));
    }

    #[test]
    fn opening_a_cell_joins_components() {
        let mut occupancy = OccupancyGrid::from_rows([
            [false, true, false],
            [false, true, false],
        ])
        .unwrap();
        let left = Point::new(0, 0);
        let right = Point::new(2, 1);
        assert!(occupancy.unreachable(&left, &right));
        occupancy.set(1, 1, false);
        assert!(!occupancy.components_dirty);
        assert!(occupancy.reachable(&left, &right));
    }

    #[test]
    fn blocking_a_cell_marks_components_dirty() {
        let mut occupancy = OccupancyGrid::new(3, 1, false);
        occupancy.set(1, 0, true);
        assert!(occupancy.components_dirty);
        occupancy.update();
        assert!(!occupancy.components_dirty);
        assert!(occupancy.unreachable(&Point::new(0, 0), &Point::new(2, 0)));
    }

    #[test]
    fn from_rows_rejects_ragged_rows() {
        let rows: Vec<Vec<bool>> = vec![vec![false, false], vec![false], vec![true, true]];
        assert_eq!(
            OccupancyGrid::from_rows(rows).unwrap_err(),
            GridError::Ragged {
                row: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn from_rows_rejects_empty_input() {
        let no_rows: Vec<Vec<bool>> = Vec::new();
        assert_eq!(OccupancyGrid::from_rows(no_rows).unwrap_err(), GridError::Empty);
        let empty_row: Vec<Vec<bool>> = vec![vec![]];
        assert_eq!(
            OccupancyGrid::from_rows(empty_row).unwrap_err(),
            GridError::Empty
        );
    }

    #[test]
    fn out_of_bounds_is_wall() {
        let occupancy = OccupancyGrid::new(2, 2, false);
        assert!(occupancy.is_wall(&Point::new(-1, 0)));
        assert!(occupancy.is_wall(&Point::new(0, 2)));
        assert!(occupancy.is_free(&Point::new(1, 1)));
        assert_eq!(occupancy.free_count(), 4);
    }

    #[test]
    fn display_renders_rows() {
        let occupancy = OccupancyGrid::from_rows([[false, true]]).unwrap();
        assert_eq!(format!("{}", occupancy), "Grid:\n[0, 1]\n");
    }
}
