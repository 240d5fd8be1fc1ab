//! Error types for maze construction and lookups.

use thiserror::Error;

use crate::cell::Cell;

/// Everything that can go wrong while building or querying a [Maze](crate::maze::Maze).
///
/// A search that finds no path is not an error; see [SearchResult](crate::search::SearchResult).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("maze must have at least one row and one column")]
    EmptyGrid,

    #[error("row {row} has {found} tiles, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown tile {tile:?} at {row},{col}")]
    UnknownTile { row: usize, col: usize, tile: char },

    #[error("maze has no start cell")]
    MissingStart,

    #[error("maze has no end cell")]
    MissingEnd,

    #[error("maze has more than one start cell: {first} and {second}")]
    DuplicateStart { first: Cell, second: Cell },

    #[error("maze has more than one end cell: {first} and {second}")]
    DuplicateEnd { first: Cell, second: Cell },

    #[error("{cell} lies outside the {rows}x{cols} maze")]
    OutOfBounds { cell: Cell, rows: usize, cols: usize },
}

pub type Result<T> = std::result::Result<T, GridError>;
