//! The board: a square grid of optional tiles.
//!
//! `Grid` stores tiles in a flat row-major `Vec` for O(1) access by cell.
//! Every stored tile's own coordinate equals the slot it occupies; writes
//! go through [`Grid::place`] and [`Grid::clear`], which keep that
//! invariant, so there is no `IndexMut`.

use serde::{Deserialize, Serialize};
use std::ops::Index;

use super::cell::Cell;
use super::tile::Tile;

/// A square board of optional tiles.
///
/// Reads of empty squares return `None`. Reads and writes outside the
/// board panic; use [`Cell::offset`] to stay in range when scanning
/// neighbors.
///
/// ## Example
///
/// ```
/// use twenty48_rules::core::{Cell, Grid, Tile};
///
/// let mut grid = Grid::new(4);
/// grid.place(Tile::new(2, Cell::new(1, 3)));
///
/// assert_eq!(grid.get(Cell::new(1, 3)).map(|t| t.value()), Some(2));
/// assert_eq!(grid.get(Cell::new(0, 0)), None);
/// assert_eq!(grid.count_empty(), 15);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid {
    size: usize,
    cells: Vec<Option<Tile>>,
}

impl Grid {
    /// Create an empty `size`x`size` grid.
    ///
    /// # Panics
    ///
    /// Panics if `size` is outside `2..=255`.
    #[must_use]
    pub fn new(size: usize) -> Self {
        assert!(size >= 2, "Board must be at least 2x2");
        assert!(size <= 255, "Board size must fit in u8 coordinates");

        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Get the board's side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    fn slot(&self, cell: Cell) -> usize {
        assert!(
            cell.column() < self.size && cell.row() < self.size,
            "Cell ({}, {}) is outside the {}x{} board",
            cell.column(),
            cell.row(),
            self.size,
            self.size
        );
        cell.row() * self.size + cell.column()
    }

    /// Get the tile at a cell, or `None` if the square is empty.
    ///
    /// # Panics
    ///
    /// Panics if the cell is outside the board.
    #[must_use]
    pub fn get(&self, cell: Cell) -> Option<Tile> {
        self.cells[self.slot(cell)]
    }

    /// Put a tile on the board at its own cell.
    ///
    /// The slot is taken from `tile.cell()`, so a stored tile always
    /// agrees with its position. An existing tile at that cell is
    /// replaced.
    ///
    /// # Panics
    ///
    /// Panics if the tile's cell is outside the board.
    pub fn place(&mut self, tile: Tile) {
        let slot = self.slot(tile.cell());
        self.cells[slot] = Some(tile);
    }

    /// Empty a cell, returning the tile that was there.
    ///
    /// # Panics
    ///
    /// Panics if the cell is outside the board.
    pub fn clear(&mut self, cell: Cell) -> Option<Tile> {
        let slot = self.slot(cell);
        self.cells[slot].take()
    }

    /// Empty every cell, keeping the size.
    pub fn clear_all(&mut self) {
        for slot in &mut self.cells {
            *slot = None;
        }
    }

    /// Iterate over the occupied tiles, row by row from the bottom-left.
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.cells.iter().filter_map(|slot| *slot)
    }

    /// Count the empty squares.
    #[must_use]
    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|slot| slot.is_none()).count()
    }

    /// Check whether every square is occupied.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.count_empty() == 0
    }

    /// Get the largest tile value on the board, or 0 when empty.
    #[must_use]
    pub fn highest_value(&self) -> u32 {
        self.tiles().map(|tile| tile.value()).max().unwrap_or(0)
    }
}

impl Index<Cell> for Grid {
    type Output = Option<Tile>;

    fn index(&self, cell: Cell) -> &Self::Output {
        &self.cells[self.slot(cell)]
    }
}
