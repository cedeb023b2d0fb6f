use crate::astar::astar;
use crate::cell::Cell;
use crate::error::PathResult;
use crate::grid::MazeGrid;
use crate::C;
use log::{info, warn};

pub mod astar;
pub mod dijkstra;

/// Settings shared by all solvers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchOptions {
    /// Prepend the start cell to returned paths. Off by default, in which case a path holds the
    /// cells after the start up to and including the goal.
    pub include_start: bool,
    /// Reject start/goal pairs on different connected components before searching.
    pub check_components: bool,
}

impl Default for SearchOptions {
    fn default() -> SearchOptions {
        SearchOptions {
            include_start: false,
            check_components: true,
        }
    }
}

/// A shortest-path search over a [MazeGrid] that moves one cell at a time in the four axis
/// directions at cost [C] per move. Implementors choose the heuristic.
pub trait PathFinder {
    fn options(&self) -> &SearchOptions;

    /// Estimated cost of moving from `cell` to `goal`. Must not overestimate.
    fn heuristic(&self, cell: &Cell, goal: &Cell) -> u32;

    /// Computes a minimal-cost path from `start` to `goal`.
    ///
    /// Returns `Ok(None)` if no path exists, which includes a start or goal on a blocked cell.
    /// Cells outside the grid are rejected with [PathError::OutOfBounds](crate::PathError).
    /// When `start == goal` the path is empty, or `[start]` with
    /// [include_start](SearchOptions::include_start).
    fn find_path(
        &self,
        grid: &MazeGrid,
        start: Cell,
        goal: Cell,
    ) -> PathResult<Option<Vec<Cell>>> {
        grid.check_bounds(&start)?;
        grid.check_bounds(&goal)?;
        let options = self.options();
        if grid.is_blocked(&start) || grid.is_blocked(&goal) {
            info!("Start {} or goal {} is blocked", start, goal);
            return Ok(None);
        }
        if options.check_components && grid.unreachable(&start, &goal) {
            info!("{} is not reachable from {}", goal, start);
            return Ok(None);
        }
        let result = astar(
            &start,
            |cell| {
                grid.open_neighbours(cell)
                    .into_iter()
                    .map(|neighbour| (neighbour, C))
            },
            |cell| self.heuristic(cell, &goal),
            |cell| *cell == goal,
        );
        match result {
            Some((mut path, _cost)) => {
                if !options.include_start {
                    path.remove(0);
                }
                Ok(Some(path))
            }
            None => {
                if options.check_components {
                    warn!("Reachable goal could not be pathed to, are the components correct?");
                }
                Ok(None)
            }
        }
    }

    /// Total cost of a path as returned by [find_path](Self::find_path), with or without the
    /// leading start cell.
    fn path_cost(&self, start: &Cell, path: &[Cell]) -> u32 {
        crate::path_steps(start, path) as u32 * C
    }
}
