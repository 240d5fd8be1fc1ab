use core::fmt;
use log::info;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

use crate::cell::Cell;
use crate::error::{GridError, Result};

/// Neighbour offsets in (row, col) form, in the order east, south, west, north. The order is
/// part of the contract: it determines the exploration trace of every search.
const NEIGHBOUR_OFFSETS: [(isize, isize); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// Classification of a single maze cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    #[default]
    Free,
    Wall,
    Start,
    End,
}

impl CellKind {
    fn from_tile(tile: char) -> Option<CellKind> {
        match tile {
            '.' | ' ' => Some(CellKind::Free),
            '#' => Some(CellKind::Wall),
            'S' => Some(CellKind::Start),
            'E' | 'G' => Some(CellKind::End),
            _ => None,
        }
    }

    fn tile(&self) -> char {
        match self {
            CellKind::Free => '.',
            CellKind::Wall => '#',
            CellKind::Start => 'S',
            CellKind::End => 'E',
        }
    }
}

/// [Maze] is an immutable rectangular grid of [CellKind]s with exactly one start and one end.
/// In addition to the raw cells it keeps the 4-connected components of the non-wall cells in a
/// [UnionFind] structure, computed once at construction.
///
/// A maze never changes after it is built. Regenerating a maze means building a new one with
/// [MazeBuilder] or [Maze::from_ascii] and swapping it in between searches.
#[derive(Clone, Debug)]
pub struct Maze {
    rows: usize,
    cols: usize,
    cells: Vec<CellKind>,
    start: Cell,
    end: Cell,
    components: UnionFind<usize>,
}

impl Maze {
    /// Parses a maze from lines of `#` (wall), `.` (free), `S` (start) and `E` (end). A space
    /// inside a line also counts as free and `G` (goal) as the end, matching common benchmark
    /// map notation. Leading and trailing blank lines are ignored, as is surrounding whitespace
    /// on each line.
    pub fn from_ascii(text: &str) -> Result<Maze> {
        let lines = text
            .lines()
            .map(str::trim)
            .skip_while(|l| l.is_empty())
            .collect::<Vec<&str>>();
        let lines = match lines.iter().rposition(|l| !l.is_empty()) {
            Some(last) => &lines[..=last],
            None => return Err(GridError::EmptyGrid),
        };
        let cols = lines[0].chars().count();
        let mut cells = Vec::with_capacity(lines.len() * cols);
        let mut start: Option<Cell> = None;
        let mut end: Option<Cell> = None;
        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != cols {
                return Err(GridError::RaggedRow {
                    row,
                    expected: cols,
                    found,
                });
            }
            for (col, tile) in line.chars().enumerate() {
                let kind =
                    CellKind::from_tile(tile).ok_or(GridError::UnknownTile { row, col, tile })?;
                let cell = Cell::new(row, col);
                match kind {
                    CellKind::Start => {
                        if let Some(first) = start {
                            return Err(GridError::DuplicateStart {
                                first,
                                second: cell,
                            });
                        }
                        start = Some(cell);
                    }
                    CellKind::End => {
                        if let Some(first) = end {
                            return Err(GridError::DuplicateEnd {
                                first,
                                second: cell,
                            });
                        }
                        end = Some(cell);
                    }
                    _ => {}
                }
                cells.push(kind);
            }
        }
        let start = start.ok_or(GridError::MissingStart)?;
        let end = end.ok_or(GridError::MissingEnd)?;
        Maze::from_parts(lines.len(), cols, cells, start, end)
    }

    /// Assembles a maze from already validated cells and computes its components.
    fn from_parts(
        rows: usize,
        cols: usize,
        cells: Vec<CellKind>,
        start: Cell,
        end: Cell,
    ) -> Result<Maze> {
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyGrid);
        }
        let mut maze = Maze {
            rows,
            cols,
            cells,
            start,
            end,
            components: UnionFind::new(rows * cols),
        };
        maze.generate_components();
        info!(
            "Built {}x{} maze with {} walls, start {} and end {}",
            rows,
            cols,
            maze.cells.iter().filter(|k| **k == CellKind::Wall).count(),
            start,
            end
        );
        Ok(maze)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn start(&self) -> Cell {
        self.start
    }

    pub fn end(&self) -> Cell {
        self.end
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    fn ix(&self, cell: Cell) -> usize {
        cell.row * self.cols + cell.col
    }

    fn out_of_bounds(&self, cell: Cell) -> GridError {
        GridError::OutOfBounds {
            cell,
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Looks up the kind of a cell, failing with [GridError::OutOfBounds] outside the maze.
    pub fn kind(&self, cell: Cell) -> Result<CellKind> {
        if self.in_bounds(cell) {
            Ok(self.cells[self.ix(cell)])
        } else {
            Err(self.out_of_bounds(cell))
        }
    }

    /// Whether a cell is in bounds and not a wall.
    pub fn can_move_to(&self, cell: Cell) -> bool {
        self.in_bounds(cell) && self.cells[self.ix(cell)] != CellKind::Wall
    }

    /// The in-bounds, non-wall cells sharing an edge with `cell`, in the fixed order
    /// east, south, west, north.
    pub fn neighbors(&self, cell: Cell) -> SmallVec<[Cell; 4]> {
        NEIGHBOUR_OFFSETS
            .iter()
            .filter_map(|&(d_row, d_col)| cell.offset(d_row, d_col))
            .filter(|&n| self.can_move_to(n))
            .collect()
    }

    /// Iterates over every non-wall cell in row-major order.
    pub fn free_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.rows)
            .flat_map(move |row| (0..self.cols).map(move |col| Cell::new(row, col)))
            .filter(|&cell| self.can_move_to(cell))
    }

    /// Checks if `a` and `b` are both walkable and on the same connected component.
    pub fn connected(&self, a: Cell, b: Cell) -> bool {
        self.can_move_to(a)
            && self.can_move_to(b)
            && self.components.equiv(self.ix(a), self.ix(b))
    }

    /// Retrieves the component id a given walkable [Cell] belongs to.
    pub fn component(&self, cell: Cell) -> Option<usize> {
        self.can_move_to(cell)
            .then(|| self.components.find(self.ix(cell)))
    }

    /// Links every walkable cell to its walkable east and south neighbours, which covers all
    /// 4-connected edges exactly once.
    fn generate_components(&mut self) {
        let mut components = UnionFind::new(self.rows * self.cols);
        for cell in self.free_cells() {
            let ix = self.ix(cell);
            [cell.offset(0, 1), cell.offset(1, 0)]
                .into_iter()
                .flatten()
                .filter(|&n| self.can_move_to(n))
                .for_each(|n| {
                    components.union(ix, self.ix(n));
                });
        }
        self.components = components;
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            let line = row.iter().map(CellKind::tile).collect::<String>();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Authoring helper that collects walls, start and end before validating them into a [Maze].
/// Later placements overwrite earlier ones, so a start or end placed on a wall replaces it.
#[derive(Clone, Debug)]
pub struct MazeBuilder {
    rows: usize,
    cols: usize,
    walls: Vec<Cell>,
    start: Option<Cell>,
    end: Option<Cell>,
}

impl MazeBuilder {
    pub fn new(rows: usize, cols: usize) -> MazeBuilder {
        MazeBuilder {
            rows,
            cols,
            walls: Vec::new(),
            start: None,
            end: None,
        }
    }

    pub fn wall(mut self, row: usize, col: usize) -> Self {
        self.walls.push(Cell::new(row, col));
        self
    }

    pub fn walls(mut self, cells: impl IntoIterator<Item = Cell>) -> Self {
        self.walls.extend(cells);
        self
    }

    /// A horizontal wall on `row` covering the given columns.
    pub fn wall_row(self, row: usize, cols: impl IntoIterator<Item = usize>) -> Self {
        self.walls(cols.into_iter().map(|col| Cell::new(row, col)))
    }

    /// A vertical wall on `col` covering the given rows.
    pub fn wall_col(self, col: usize, rows: impl IntoIterator<Item = usize>) -> Self {
        self.walls(rows.into_iter().map(|row| Cell::new(row, col)))
    }

    pub fn start(mut self, row: usize, col: usize) -> Self {
        self.start = Some(Cell::new(row, col));
        self
    }

    pub fn end(mut self, row: usize, col: usize) -> Self {
        self.end = Some(Cell::new(row, col));
        self
    }

    /// Validates the layout. A start coinciding with the end is allowed and classifies as
    /// [CellKind::Start].
    pub fn build(self) -> Result<Maze> {
        if self.rows == 0 || self.cols == 0 {
            return Err(GridError::EmptyGrid);
        }
        let start = self.start.ok_or(GridError::MissingStart)?;
        let end = self.end.ok_or(GridError::MissingEnd)?;
        let (rows, cols) = (self.rows, self.cols);
        let check = |cell: Cell| {
            if cell.row < rows && cell.col < cols {
                Ok(cell.row * cols + cell.col)
            } else {
                Err(GridError::OutOfBounds { cell, rows, cols })
            }
        };
        let mut cells = vec![CellKind::Free; rows * cols];
        for &wall in &self.walls {
            cells[check(wall)?] = CellKind::Wall;
        }
        cells[check(end)?] = CellKind::End;
        cells[check(start)?] = CellKind::Start;
        Maze::from_parts(rows, cols, cells, start, end)
    }
}
