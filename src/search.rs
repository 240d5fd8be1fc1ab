use grid_util::point::Point;
use itertools::Itertools;
use log::{debug, info, warn};

use crate::best_first::{best_first, Exploration};
use crate::cell::Cell;
use crate::maze::{CellKind, Maze};
use crate::strategy::Strategy;

/// Every move between adjacent cells costs the same.
const STEP_COST: u32 = 1;

/// The outcome of one search, handed to whatever animates it.
///
/// `explored` lists the cells in the order they were finalized, starting with the start cell
/// and without duplicates. It is filled for unsuccessful searches too. `path` runs from start to
/// end inclusive, or is [None] when the end cannot be reached.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    pub path: Option<Vec<Cell>>,
    pub explored: Vec<Cell>,
}

impl SearchResult {
    pub fn found(&self) -> bool {
        self.path.is_some()
    }

    /// Number of steps along the path.
    pub fn path_cost(&self) -> Option<usize> {
        self.path.as_ref().map(|p| p.len().saturating_sub(1))
    }

    /// The path reduced to its start, end and turning points.
    pub fn waypoints(&self) -> Option<Vec<Cell>> {
        self.path.as_deref().map(path_to_waypoints)
    }

    /// The path in screen coordinates, see [Cell]'s conversion into [Point].
    pub fn path_points(&self) -> Option<Vec<Point>> {
        self.path
            .as_ref()
            .map(|p| p.iter().copied().map(Point::from).collect())
    }
}

/// Searches `maze` from its start to its end, expanding cells in the order given by `strategy`.
///
/// Never fails: an unreachable end is reported as a [SearchResult] without a path. For a fixed
/// maze and strategy the result is fully deterministic.
pub fn find_path<S: Strategy + ?Sized>(maze: &Maze, strategy: &S) -> SearchResult {
    let start = maze.start();
    let end = maze.end();
    if !maze.connected(start, end) {
        debug!(
            "{} is not reachable from {}, {} will exhaust its frontier",
            end,
            start,
            strategy.name()
        );
    }
    let Exploration { path, explored } = best_first(
        &start,
        strategy.initial_priority(start, end),
        |cell: &Cell| {
            maze.neighbors(*cell)
                .into_iter()
                .map(|next| (next, STEP_COST))
        },
        |next, cost| strategy.priority(*next, end, cost),
        |cell| *cell == end,
    );
    let path = path.and_then(|(path, cost)| {
        if is_valid_path(maze, &path) {
            Some(path)
        } else {
            warn!(
                "{} produced an inconsistent path of cost {} from {} to {}, discarding it",
                strategy.name(),
                cost,
                start,
                end
            );
            None
        }
    });
    match &path {
        Some(p) => info!(
            "{}: path of {} steps found after exploring {} cells",
            strategy.name(),
            p.len() - 1,
            explored.len()
        ),
        None => info!(
            "{}: no path found after exploring {} cells",
            strategy.name(),
            explored.len()
        ),
    }
    SearchResult { path, explored }
}

/// Checks that `path` runs from the maze's start to its end through adjacent, in-bounds,
/// non-wall cells.
pub fn is_valid_path(maze: &Maze, path: &[Cell]) -> bool {
    path.first() == Some(&maze.start())
        && path.last() == Some(&maze.end())
        && path
            .iter()
            .all(|&c| matches!(maze.kind(c), Ok(kind) if kind != CellKind::Wall))
        && path.iter().tuple_windows().all(|(a, b)| a.is_adjacent(b))
}

/// Reduces a step-by-step path to the cells where it changes direction, keeping both ends.
/// Drawing straight segments between the waypoints retraces the path.
pub fn path_to_waypoints(path: &[Cell]) -> Vec<Cell> {
    let delta = |a: &Cell, b: &Cell| {
        (
            b.row as isize - a.row as isize,
            b.col as isize - a.col as isize,
        )
    };
    let (Some(first), Some(last)) = (path.first(), path.last()) else {
        return Vec::new();
    };
    if path.len() == 1 {
        return vec![*first];
    }
    let mut waypoints = vec![*first];
    waypoints.extend(
        path.iter()
            .tuple_windows()
            .filter(|(a, b, c)| delta(a, b) != delta(b, c))
            .map(|(_, b, _)| *b),
    );
    waypoints.push(*last);
    waypoints
}
