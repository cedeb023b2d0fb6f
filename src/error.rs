use crate::cell::Cell;

/// Invalid input to grid construction or to a search. An unreachable goal is not an error: it is
/// reported as [None] by the solvers.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The grid has no rows or no columns
    #[error("grid must have at least one row and one column")]
    EmptyGrid,

    /// A row differs in length from the first row
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A marker is neither open nor blocked
    #[error("invalid marker {value:?} at ({row}, {col})")]
    InvalidMarker {
        row: usize,
        col: usize,
        value: String,
    },

    /// A start or goal cell lies outside the grid
    #[error("cell {cell} is outside the {rows}x{cols} grid")]
    OutOfBounds { cell: Cell, rows: usize, cols: usize },
}

/// Result type used throughout the crate.
pub type PathResult<T> = Result<T, PathError>;
