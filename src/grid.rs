use crate::cell::Cell;
use crate::error::{PathError, PathResult};
use core::fmt;
use itertools::Itertools;
use log::debug;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;
use std::str::FromStr;

/// The state of a single grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Marker {
    #[default]
    Open,
    Blocked,
}

impl Marker {
    pub fn is_blocked(self) -> bool {
        self == Marker::Blocked
    }
    fn as_char(self) -> char {
        match self {
            Marker::Open => '.',
            Marker::Blocked => '#',
        }
    }
}

impl TryFrom<u8> for Marker {
    type Error = u8;
    fn try_from(value: u8) -> Result<Marker, u8> {
        match value {
            0 => Ok(Marker::Open),
            1 => Ok(Marker::Blocked),
            other => Err(other),
        }
    }
}

/// [MazeGrid] is an immutable rectangular grid of [Marker]s. In addition to the raw markers it
/// keeps the 4-connected components of the open cells in a [UnionFind] structure, so that a
/// search between disconnected cells can be rejected without flood-filling.
///
/// The grid never changes after construction, which makes it [Sync]: any number of searches may
/// borrow it concurrently.
#[derive(Clone, Debug)]
pub struct MazeGrid {
    rows: usize,
    cols: usize,
    cells: Vec<Marker>,
    components: UnionFind<usize>,
}

impl MazeGrid {
    /// Builds a grid from rows of `0` (open) / `1` (blocked) markers.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> PathResult<MazeGrid> {
        let markers = rows
            .iter()
            .enumerate()
            .map(|(row, values)| {
                values
                    .as_ref()
                    .iter()
                    .enumerate()
                    .map(|(col, &value)| {
                        Marker::try_from(value).map_err(|v| PathError::InvalidMarker {
                            row,
                            col,
                            value: v.to_string(),
                        })
                    })
                    .collect::<PathResult<Vec<Marker>>>()
            })
            .collect::<PathResult<Vec<Vec<Marker>>>>()?;
        MazeGrid::from_markers(markers)
    }

    /// Builds a grid from rows of [Marker]s. All rows must have the same, non-zero length.
    pub fn from_markers(markers: Vec<Vec<Marker>>) -> PathResult<MazeGrid> {
        let rows = markers.len();
        let cols = markers.first().map_or(0, Vec::len);
        if rows == 0 || cols == 0 {
            return Err(PathError::EmptyGrid);
        }
        if let Some((row, found)) = markers
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != cols)
        {
            return Err(PathError::RaggedRow {
                row,
                expected: cols,
                found,
            });
        }
        Ok(MazeGrid::build(
            rows,
            cols,
            markers.into_iter().flatten().collect(),
        ))
    }

    /// Builds a `rows × cols` grid by evaluating `marker` for every cell in row-major order.
    pub fn from_fn<F>(rows: usize, cols: usize, mut marker: F) -> PathResult<MazeGrid>
    where
        F: FnMut(Cell) -> Marker,
    {
        if rows == 0 || cols == 0 {
            return Err(PathError::EmptyGrid);
        }
        let cells = (0..rows)
            .cartesian_product(0..cols)
            .map(|(row, col)| marker(Cell::new(row, col)))
            .collect();
        Ok(MazeGrid::build(rows, cols, cells))
    }

    fn build(rows: usize, cols: usize, cells: Vec<Marker>) -> MazeGrid {
        let mut grid = MazeGrid {
            rows,
            cols,
            cells,
            components: UnionFind::new(rows * cols),
        };
        grid.generate_components();
        grid
    }

    pub fn rows(&self) -> usize {
        self.rows
    }
    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn in_bounds(&self, cell: &Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    /// Fails with [PathError::OutOfBounds] if `cell` lies outside the grid.
    pub fn check_bounds(&self, cell: &Cell) -> PathResult<()> {
        if self.in_bounds(cell) {
            Ok(())
        } else {
            Err(PathError::OutOfBounds {
                cell: *cell,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Row-major index of an in-bounds cell.
    pub fn index(&self, cell: &Cell) -> usize {
        debug_assert!(self.in_bounds(cell));
        cell.row * self.cols + cell.col
    }

    /// The marker at `cell`, or [None] outside the grid.
    pub fn get(&self, cell: &Cell) -> Option<Marker> {
        self.in_bounds(cell).then(|| self.cells[self.index(cell)])
    }

    /// True iff `cell` is inside the grid and open.
    pub fn can_move_to(&self, cell: &Cell) -> bool {
        self.get(cell) == Some(Marker::Open)
    }

    pub fn is_blocked(&self, cell: &Cell) -> bool {
        self.get(cell).is_some_and(Marker::is_blocked)
    }

    /// Open, in-bounds axis-aligned neighbours of `cell` in right, down, left, up order.
    pub fn open_neighbours(&self, cell: &Cell) -> SmallVec<[Cell; 4]> {
        cell.neumann_neighbourhood()
            .into_iter()
            .filter(|n| self.can_move_to(n))
            .collect()
    }

    /// Retrieves the component id a given [Cell] belongs to.
    pub fn component(&self, cell: &Cell) -> Option<usize> {
        self.in_bounds(cell)
            .then(|| self.components.find(self.index(cell)))
    }

    /// Checks if start and goal are open and on the same component.
    pub fn reachable(&self, start: &Cell, goal: &Cell) -> bool {
        self.can_move_to(start)
            && self.can_move_to(goal)
            && self.components.equiv(self.index(start), self.index(goal))
    }

    /// Checks if start and goal are not on the same component.
    pub fn unreachable(&self, start: &Cell, goal: &Cell) -> bool {
        !self.reachable(start, goal)
    }

    /// Links up every open cell with its open right and lower neighbour.
    fn generate_components(&mut self) {
        self.components = UnionFind::new(self.rows * self.cols);
        let mut unions = 0;
        for row in 0..self.rows {
            for col in 0..self.cols {
                let cell = Cell::new(row, col);
                if !self.can_move_to(&cell) {
                    continue;
                }
                let ix = self.index(&cell);
                for next in [Cell::new(row, col + 1), Cell::new(row + 1, col)] {
                    if !self.can_move_to(&next) {
                        continue;
                    }
                    let next_ix = self.index(&next);
                    if self.components.union(ix, next_ix) {
                        unions += 1;
                    }
                }
            }
        }
        debug!(
            "Generated components for {}x{} grid ({} unions)",
            self.rows, self.cols, unions
        );
    }

    /// Renders the grid with `S` at start, `G` at the last path cell and `*` along the path.
    pub fn render_path(&self, start: &Cell, path: &[Cell]) -> String {
        let goal = path.last().copied().unwrap_or(*start);
        (0..self.rows)
            .map(|row| {
                (0..self.cols)
                    .map(|col| {
                        let cell = Cell::new(row, col);
                        if cell == *start {
                            'S'
                        } else if cell == goal {
                            'G'
                        } else if path.contains(&cell) {
                            '*'
                        } else {
                            self.cells[self.index(&cell)].as_char()
                        }
                    })
                    .collect::<String>()
            })
            .join("\n")
    }
}

impl fmt::Display for MazeGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            writeln!(f, "{}", row.iter().map(|m| m.as_char()).collect::<String>())?;
        }
        Ok(())
    }
}

/// Parses one row per non-blank line, `.` or `0` for open and `#` or `1` for blocked cells.
impl FromStr for MazeGrid {
    type Err = PathError;

    fn from_str(s: &str) -> PathResult<MazeGrid> {
        let markers = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .enumerate()
            .map(|(row, line)| {
                line.chars()
                    .enumerate()
                    .map(|(col, c)| match c {
                        '.' | '0' => Ok(Marker::Open),
                        '#' | '1' => Ok(Marker::Blocked),
                        other => Err(PathError::InvalidMarker {
                            row,
                            col,
                            value: other.to_string(),
                        }),
                    })
                    .collect::<PathResult<Vec<Marker>>>()
            })
            .collect::<PathResult<Vec<Vec<Marker>>>>()?;
        MazeGrid::from_markers(markers)
    }
}
