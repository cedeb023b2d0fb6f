use crate::{cell::Cell, solver::PathFinder, solver::SearchOptions, C};

/// A* with the Manhattan distance as heuristic, which is admissible and consistent for unit
/// moves on a 4-grid.
#[derive(Clone, Debug, Default)]
pub struct AstarSolver {
    pub options: SearchOptions,
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver::default()
    }

    pub fn with_options(options: SearchOptions) -> AstarSolver {
        AstarSolver { options }
    }
}

impl PathFinder for AstarSolver {
    fn options(&self) -> &SearchOptions {
        &self.options
    }

    fn heuristic(&self, cell: &Cell, goal: &Cell) -> u32 {
        cell.manhattan_distance(goal) * C
    }
}
