//! # maze_pathfinding
//!
//! Shortest-path search on a 4-connected maze, built for visualizing how
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm),
//! [Dijkstra](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm) and
//! [greedy best-first search](https://en.wikipedia.org/wiki/Best-first_search) explore a grid.
//! All three run through one best-first search loop; they only differ in the frontier
//! priority supplied by a [Strategy]. Every search returns both the path (if any) and the
//! order in which cells were explored, so a renderer can replay the search step by step.
//!
//! Moves are between edge-sharing cells and all cost the same. A [Maze] is immutable
//! once built and every search owns its own state, so searches never interfere with each other.
//!
//! ```
//! use maze_pathfinding::{find_path, layouts, StrategyKind};
//!
//! let maze = layouts::classic_maze().unwrap();
//! let result = find_path(&maze, &StrategyKind::Astar);
//! assert_eq!(result.path_cost(), Some(29));
//! assert_eq!(result.explored[0], maze.start());
//! ```
mod best_first;
pub mod cell;
pub mod error;
pub mod layouts;
pub mod maze;
pub mod search;
pub mod strategy;

pub use cell::Cell;
pub use error::{GridError, Result};
pub use maze::{CellKind, Maze, MazeBuilder};
pub use search::{find_path, is_valid_path, path_to_waypoints, SearchResult};
pub use strategy::{Astar, Dijkstra, Greedy, Strategy, StrategyKind, WeightedAstar};

/// Heuristic weight of a default [WeightedAstar], equal to plain A*.
pub const DEFAULT_HEURISTIC_FACTOR: f32 = 1.0;
