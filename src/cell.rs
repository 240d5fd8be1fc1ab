use core::fmt;
use grid_util::point::Point;

/// A (row, col) coordinate on a [Maze](crate::maze::Maze), 0-indexed from the top-left corner.
/// Orders by row first, then column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Cell {
        Cell { row, col }
    }

    /// [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry), which is an
    /// admissible and consistent heuristic on a unit-cost 4-connected grid.
    pub fn manhattan(&self, other: &Cell) -> u32 {
        (self.row.abs_diff(other.row) + self.col.abs_diff(other.col)) as u32
    }

    /// Whether the two cells share an edge.
    pub fn is_adjacent(&self, other: &Cell) -> bool {
        self.manhattan(other) == 1
    }

    /// The cell one step in the given direction, or [None] when that would leave the
    /// non-negative quadrant. The upper bounds are checked by the maze.
    pub(crate) fn offset(&self, d_row: isize, d_col: isize) -> Option<Cell> {
        Some(Cell {
            row: self.row.checked_add_signed(d_row)?,
            col: self.col.checked_add_signed(d_col)?,
        })
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Cell::new(row, col)
    }
}

/// Screen coordinates: columns run along x, rows along y.
impl From<Cell> for Point {
    fn from(cell: Cell) -> Self {
        Point::new(cell.col as i32, cell.row as i32)
    }
}
