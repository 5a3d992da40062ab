use std::fmt;

use super::{Direction, GRID_SIZE};

/// Discrete grid coordinate, addressed as `(row, col)`.
///
/// Rows grow southwards and columns grow eastwards. Sensor positions arrive
/// as `(x, y)` and map to `Cell { row: y, col: x }`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Converts a host `(x, y)` position into a cell.
    pub const fn from_xy(x: i32, y: i32) -> Self {
        Self { row: y, col: x }
    }

    /// Returns the host `(x, y)` form of this cell.
    pub const fn to_xy(self) -> (i32, i32) {
        (self.col, self.row)
    }

    pub const fn in_bounds(self) -> bool {
        self.row >= 0 && self.col >= 0 && self.row < GRID_SIZE && self.col < GRID_SIZE
    }

    /// Row-major index into a `GRID_SIZE * GRID_SIZE` buffer, or `None` when
    /// the cell lies outside the grid.
    pub fn index(self) -> Option<usize> {
        self.in_bounds()
            .then(|| (self.row * GRID_SIZE + self.col) as usize)
    }

    /// Inverse of [`Cell::index`].
    pub fn from_index(index: usize) -> Self {
        let index = index as i32;
        Self::new(index / GRID_SIZE, index % GRID_SIZE)
    }

    /// Cell displaced by the given offset, without any bounds check.
    pub const fn offset(self, d_row: i32, d_col: i32) -> Self {
        Self::new(self.row + d_row, self.col + d_col)
    }

    /// The in-bounds neighbour reached by one step in `direction`.
    pub fn neighbor(self, direction: Direction) -> Option<Self> {
        let (d_row, d_col) = direction.delta();
        let next = self.offset(d_row, d_col);
        next.in_bounds().then_some(next)
    }

    pub fn manhattan(self, other: Self) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Iterates every cell of the grid in row-major order.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..GRID_SIZE).flat_map(|row| (0..GRID_SIZE).map(move |col| Cell::new(row, col)))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.row, self.col)
    }
}
