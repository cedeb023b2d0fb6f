use crate::{cell::Cell, solver::PathFinder, solver::SearchOptions};

/// Uninformed search: A* with a zero heuristic. Expands more cells than [AstarSolver](super::astar::AstarSolver)
/// but serves as a reference for path costs.
#[derive(Clone, Debug, Default)]
pub struct DijkstraSolver {
    pub options: SearchOptions,
}

impl DijkstraSolver {
    pub fn new() -> DijkstraSolver {
        DijkstraSolver::default()
    }
}

impl PathFinder for DijkstraSolver {
    fn options(&self) -> &SearchOptions {
        &self.options
    }

    fn heuristic(&self, _: &Cell, _: &Cell) -> u32 {
        0
    }
}
