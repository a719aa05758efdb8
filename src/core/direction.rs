//! Tilt directions and line geometry.
//!
//! Every tilt slides tiles toward one edge of the board. With `(0, 0)` at
//! the bottom-left:
//!
//! - `Up` slides toward the top row (`size - 1`)
//! - `Down` slides toward row 0
//! - `Left` slides toward column 0
//! - `Right` slides toward the rightmost column (`size - 1`)
//!
//! [`Direction::line`] maps each direction onto the same line shape: the
//! cells of one line, ordered nearest the destination edge first. The
//! merge pass works on that ordering alone, so no algorithm in this crate
//! ever special-cases a direction.

use serde::{Deserialize, Serialize};

use super::cell::Cell;

/// One of the four directions a board can be tilted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, for exhaustive sweeps.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The direction pointing the opposite way.
    #[must_use]
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// The cells of line `index`, ordered nearest the destination edge
    /// first.
    ///
    /// Vertical tilts have one line per column (`index` is the column),
    /// horizontal tilts one per row (`index` is the row). Tiles slide
    /// toward the first cell yielded.
    ///
    /// ```
    /// use twenty48_rules::core::{Cell, Direction};
    ///
    /// // Tilting up, column 0 of a 4x4 board: top cell first.
    /// let cells: Vec<_> = Direction::Up.line(0, 4).collect();
    /// assert_eq!(cells[0], Cell::new(0, 3));
    /// assert_eq!(cells[3], Cell::new(0, 0));
    ///
    /// // Tilting left, row 2: leftmost cell first.
    /// let cells: Vec<_> = Direction::Left.line(2, 4).collect();
    /// assert_eq!(cells[0], Cell::new(0, 2));
    /// assert_eq!(cells[3], Cell::new(3, 2));
    /// ```
    pub fn line(self, index: usize, size: usize) -> impl Iterator<Item = Cell> {
        (0..size).map(move |slot| {
            let (column, row) = match self {
                Direction::Up => (index, size - 1 - slot),
                Direction::Down => (index, slot),
                Direction::Left => (slot, index),
                Direction::Right => (size - 1 - slot, index),
            };
            Cell::new(column as u8, row as u8)
        })
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::Up => "Up",
            Direction::Down => "Down",
            Direction::Left => "Left",
            Direction::Right => "Right",
        };
        write!(f, "{}", name)
    }
}
