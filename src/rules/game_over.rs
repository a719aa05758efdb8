//! Terminal detection.
//!
//! A game ends in exactly two ways: the winning tile appears, or no tilt
//! can change the board because every square is full and no equal tiles
//! sit side by side. Winning takes precedence; a board can be both won
//! and stuck, and it is simply over.
//!
//! Everything here is a pure read of the board. The state orchestrator
//! calls [`is_game_over`] after each mutation and caches the answer.

use crate::core::Grid;

/// Check whether a tile of exactly `winning_tile` is on the board.
///
/// Exact equality: larger values do not count as a win.
#[must_use]
pub fn has_winning_tile(grid: &Grid, winning_tile: u32) -> bool {
    grid.tiles().any(|tile| tile.value() == winning_tile)
}

/// Check whether any square is empty.
#[must_use]
pub fn has_empty_cell(grid: &Grid) -> bool {
    grid.count_empty() > 0
}

/// Check whether two equal tiles sit side by side anywhere.
///
/// Each pair is examined once, through its right and upper neighbor.
/// Empty squares and board edges never match anything.
#[must_use]
pub fn has_mergeable_pair(grid: &Grid) -> bool {
    let size = grid.size();

    grid.tiles().any(|tile| {
        [(1, 0), (0, 1)].iter().any(|&(dc, dr)| {
            tile.cell()
                .offset(dc, dr, size)
                .and_then(|neighbor| grid.get(neighbor))
                .map_or(false, |neighbor| neighbor.value() == tile.value())
        })
    })
}

/// Check whether at least one tilt could change the board.
#[must_use]
pub fn any_move_available(grid: &Grid) -> bool {
    has_empty_cell(grid) || has_mergeable_pair(grid)
}

/// The full terminal predicate: won, or stuck with no move left.
#[must_use]
pub fn is_game_over(grid: &Grid, winning_tile: u32) -> bool {
    has_winning_tile(grid, winning_tile) || !any_move_available(grid)
}
