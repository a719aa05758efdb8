//! Whole-board tilts.
//!
//! A tilt slides every tile as far as it goes toward one edge, merging as
//! it slides. The board decomposes into `size` independent lines for any
//! direction ([`Direction::line`]), so one merge pass serves all four.
//!
//! Change detection compares each cell's value before and after the pass.
//! That covers both movement into gaps and merges; a tilt that cannot do
//! either reports `changed: false` and leaves the board untouched.

use smallvec::SmallVec;
use tracing::debug;

use crate::core::{Cell, Direction, Grid, Tile};

use super::line::merge_line;

/// Outcome of one tilt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TiltResult {
    /// Whether any tile moved or merged.
    pub changed: bool,

    /// Points scored by merges.
    pub points: u64,
}

/// Slide every tile toward `direction`, merging equal neighbors once.
///
/// Returns whether the board changed and the points scored. Merges obey
/// the once-per-tilt rule, with the pair nearer the destination edge
/// taking precedence.
///
/// ```
/// use twenty48_rules::core::{Cell, Direction, Grid, Tile};
/// use twenty48_rules::rules::tilt;
///
/// let mut grid = Grid::new(4);
/// grid.place(Tile::new(2, Cell::new(0, 0)));
/// grid.place(Tile::new(2, Cell::new(3, 0)));
///
/// let result = tilt(&mut grid, Direction::Left);
/// assert!(result.changed);
/// assert_eq!(result.points, 4);
/// assert_eq!(grid.get(Cell::new(0, 0)).map(|t| t.value()), Some(4));
/// assert_eq!(grid.get(Cell::new(3, 0)), None);
/// ```
pub fn tilt(grid: &mut Grid, direction: Direction) -> TiltResult {
    let size = grid.size();
    let mut result = TiltResult::default();

    for index in 0..size {
        let cells: SmallVec<[Cell; 4]> = direction.line(index, size).collect();

        let before: SmallVec<[u32; 4]> = cells
            .iter()
            .map(|&cell| grid.get(cell).map_or(0, |tile| tile.value()))
            .collect();

        let occupied: SmallVec<[u32; 4]> =
            before.iter().copied().filter(|&value| value > 0).collect();
        let merged = merge_line(&occupied);
        result.points += merged.points;

        for (slot, &cell) in cells.iter().enumerate() {
            let value = merged.values.get(slot).copied().unwrap_or(0);
            if value != before[slot] {
                result.changed = true;
            }

            if value > 0 {
                grid.place(Tile::new(value, cell));
            } else {
                grid.clear(cell);
            }
        }
    }

    debug!(%direction, changed = result.changed, points = result.points, "tilt");

    result
}
