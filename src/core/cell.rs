//! Board coordinates.
//!
//! A `Cell` names one square of the board as a `(column, row)` pair.
//! `(0, 0)` is the bottom-left corner: columns grow to the right and rows
//! grow upward, exactly like `(x, y)` on a plot.
//!
//! Coordinates are `u8`, so boards are at most 255x255.

use serde::{Deserialize, Serialize};

/// A board coordinate: column and row, both 0-based.
///
/// `(0, 0)` is the bottom-left corner. A cell is a plain coordinate and
/// carries no board size; bounds are checked by the operations that take
/// a size, like [`Cell::offset`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    column: u8,
    row: u8,
}

impl Cell {
    /// Create a cell at the given column and row.
    #[must_use]
    pub const fn new(column: u8, row: u8) -> Self {
        Self { column, row }
    }

    /// Get the column (the x coordinate).
    #[must_use]
    pub const fn column(self) -> usize {
        self.column as usize
    }

    /// Get the row (the y coordinate).
    #[must_use]
    pub const fn row(self) -> usize {
        self.row as usize
    }

    /// Step by `(dc, dr)` within a `size`x`size` board.
    ///
    /// Returns `None` when the step leaves the board, so neighbor scans
    /// never index out of range.
    ///
    /// ```
    /// use twenty48_rules::core::Cell;
    ///
    /// let cell = Cell::new(0, 3);
    /// assert_eq!(cell.offset(1, 0, 4), Some(Cell::new(1, 3)));
    /// assert_eq!(cell.offset(0, 1, 4), None);  // Off the top edge
    /// assert_eq!(cell.offset(-1, 0, 4), None); // Off the left edge
    /// ```
    #[must_use]
    pub fn offset(self, dc: i32, dr: i32, size: usize) -> Option<Cell> {
        let column = self.column as i32 + dc;
        let row = self.row as i32 + dr;

        if column < 0 || row < 0 || column >= size as i32 || row >= size as i32 {
            None
        } else {
            Some(Cell::new(column as u8, row as u8))
        }
    }

    /// Iterate over every cell of a `size`x`size` board, row by row from
    /// the bottom-left.
    ///
    /// ```
    /// use twenty48_rules::core::Cell;
    ///
    /// let cells: Vec<_> = Cell::all(2).collect();
    /// assert_eq!(cells, vec![
    ///     Cell::new(0, 0), Cell::new(1, 0),
    ///     Cell::new(0, 1), Cell::new(1, 1),
    /// ]);
    /// ```
    pub fn all(size: usize) -> impl Iterator<Item = Cell> {
        (0..size).flat_map(move |row| (0..size).map(move |column| Cell::new(column as u8, row as u8)))
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}
