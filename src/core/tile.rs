//! Tiles: the values that slide and merge.
//!
//! A tile is an immutable value at a coordinate. Tilting never mutates a
//! tile in place: moves and merges replace tiles with freshly built ones.
//! The engine plays whatever values it is given; classic games only ever
//! supply powers of two, but nothing here enforces that.

use serde::{Deserialize, Serialize};

use super::cell::Cell;

/// A tile: a positive value sitting at one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    value: u32,
    cell: Cell,
}

impl Tile {
    /// Create a tile with the given value at the given cell.
    ///
    /// # Panics
    ///
    /// Panics if `value` is zero. Zero encodes an empty square in
    /// snapshots and never names a tile.
    #[must_use]
    pub fn new(value: u32, cell: Cell) -> Self {
        assert!(value > 0, "Tile value must be positive");
        Self { value, cell }
    }

    /// Get the tile's value.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.value
    }

    /// Get the cell the tile sits on.
    #[must_use]
    pub const fn cell(self) -> Cell {
        self.cell
    }

    /// Get the tile's column.
    #[must_use]
    pub const fn column(self) -> usize {
        self.cell.column()
    }

    /// Get the tile's row.
    #[must_use]
    pub const fn row(self) -> usize {
        self.cell.row()
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} @ {}", self.value, self.cell)
    }
}
