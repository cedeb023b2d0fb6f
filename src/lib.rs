//! # grid_astar
//!
//! Shortest paths on a rectangular grid of open and blocked cells using
//! [A* search](https://en.wikipedia.org/wiki/A*_search_algorithm). Movement is restricted to the
//! four axis directions at uniform cost and the
//! [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) serves as heuristic, so
//! returned paths are optimal. Pre-computes
//! [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory))
//! to avoid flood-filling behaviour if no path exists.
//!
//! ```
//! use grid_astar::{find_path, Cell, MazeGrid};
//!
//! let grid = MazeGrid::from_rows(&[[0u8, 1, 0], [0, 0, 0]]).unwrap();
//! let path = find_path(&grid, Cell::new(0, 0), Cell::new(0, 2)).unwrap().unwrap();
//! assert_eq!(path.len(), 4);
//! ```
pub mod astar;
pub mod cell;
pub mod error;
pub mod grid;
pub mod solver;

use itertools::Itertools;
use std::iter;

pub use crate::cell::Cell;
pub use crate::error::{PathError, PathResult};
pub use crate::grid::{Marker, MazeGrid};
pub use crate::solver::{astar::AstarSolver, dijkstra::DijkstraSolver, PathFinder, SearchOptions};

/// Cost of a single move.
pub const C: u32 = 1;

/// Computes a shortest path from `start` to `goal` with a default [AstarSolver].
///
/// The returned path excludes `start` and ends at `goal`; `Ok(None)` means the goal cannot be
/// reached.
pub fn find_path(grid: &MazeGrid, start: Cell, goal: Cell) -> PathResult<Option<Vec<Cell>>> {
    AstarSolver::new().find_path(grid, start, goal)
}

/// The path with `start` prepended unless it already begins there.
fn with_start<'a>(start: &'a Cell, path: &'a [Cell]) -> impl Iterator<Item = &'a Cell> {
    let rest = match path.first() {
        Some(first) if first == start => &path[1..],
        _ => path,
    };
    iter::once(start).chain(rest)
}

/// Number of moves in a path, with or without its leading start cell.
pub fn path_steps(start: &Cell, path: &[Cell]) -> usize {
    with_start(start, path).count() - 1
}

/// Checks that a path, with or without its leading start cell, only moves one cell at a time in
/// an axis direction and never leaves the grid or enters a blocked cell.
pub fn is_valid_path(grid: &MazeGrid, start: &Cell, path: &[Cell]) -> bool {
    with_start(start, path).all(|cell| grid.can_move_to(cell))
        && with_start(start, path)
            .tuple_windows()
            .all(|(a, b)| a.is_neighbour(b))
}
