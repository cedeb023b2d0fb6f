use core::fmt;
use smallvec::SmallVec;

/// Unit offsets of the 4-neighbourhood in expansion order: right, down, left, up.
pub const NEUMANN_OFFSETS: [(i64, i64); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// A grid coordinate addressed as `(row, col)`, with rows growing downwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Cell {
        Cell { row, col }
    }

    /// The [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) between two
    /// cells, which is the exact move count on an empty 4-connected grid.
    pub fn manhattan_distance(&self, other: &Cell) -> u32 {
        (self.row.abs_diff(other.row) + self.col.abs_diff(other.col)) as u32
    }

    /// Whether `other` is reachable from `self` in exactly one axis-aligned unit move.
    pub fn is_neighbour(&self, other: &Cell) -> bool {
        self.manhattan_distance(other) == 1
    }

    /// Shifts the cell by a signed offset, returning [None] if either coordinate would become
    /// negative. The upper bound is left to the grid.
    pub fn offset(&self, d_row: i64, d_col: i64) -> Option<Cell> {
        let row = usize::try_from(self.row as i64 + d_row).ok()?;
        let col = usize::try_from(self.col as i64 + d_col).ok()?;
        Some(Cell { row, col })
    }

    /// The (up to four) cells of the von Neumann neighbourhood that do not underflow, in the
    /// order of [NEUMANN_OFFSETS].
    pub fn neumann_neighbourhood(&self) -> SmallVec<[Cell; 4]> {
        NEUMANN_OFFSETS
            .iter()
            .filter_map(|&(d_row, d_col)| self.offset(d_row, d_col))
            .collect()
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Cell {
        Cell { row, col }
    }
}

impl From<Cell> for (usize, usize) {
    fn from(cell: Cell) -> (usize, usize) {
        (cell.row, cell.col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
