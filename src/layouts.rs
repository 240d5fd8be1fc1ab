//! Stock mazes for demos, tests and benchmarks.
use crate::error::Result;
use crate::maze::{Maze, MazeBuilder};

pub const CLASSIC_ROWS: usize = 15;
pub const CLASSIC_COLS: usize = 20;

/// The 15x20 demo maze: four horizontal walls, three vertical walls and
/// two short obstacles, with the start near the top-left corner and the end near the
/// bottom-right one.
pub fn classic_maze() -> Result<Maze> {
    let (rows, cols) = (CLASSIC_ROWS, CLASSIC_COLS);
    let horizontal = 2..cols - 2;
    let vertical = 2..rows - 2;
    MazeBuilder::new(rows, cols)
        .wall_row(2, horizontal.clone())
        .wall_row(3, horizontal.clone())
        .wall_row(8, horizontal.clone())
        .wall_row(12, horizontal)
        .wall_col(5, vertical.clone())
        .wall_col(10, vertical.clone())
        .wall_col(15, vertical)
        .wall_row(6, 3..7)
        .wall_row(10, 11..15)
        .start(1, 1)
        .end(rows - 2, cols - 2)
        .build()
}

/// A maze without walls, from the top-left to the bottom-right corner.
pub fn open_field(rows: usize, cols: usize) -> Result<Maze> {
    MazeBuilder::new(rows, cols)
        .start(0, 0)
        .end(rows.saturating_sub(1), cols.saturating_sub(1))
        .build()
}
