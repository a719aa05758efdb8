//! Game configuration.
//!
//! A game is configured once at creation: the board's side length and the
//! tile value that ends it as a win. The classic game is a 4x4 board
//! played to 2048; tests shrink both to keep state spaces small.

use serde::{Deserialize, Serialize};

/// Tile value that ends the classic game as a win.
pub const WINNING_TILE: u32 = 2048;

/// Configuration for one game.
///
/// ## Example
///
/// ```
/// use twenty48_rules::core::GameConfig;
///
/// let classic = GameConfig::default();
/// assert_eq!(classic.size, 4);
/// assert_eq!(classic.winning_tile, 2048);
///
/// let tiny = GameConfig::new(2).with_winning_tile(32);
/// assert_eq!(tiny.size, 2);
/// assert_eq!(tiny.winning_tile, 32);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board side length (the board is `size`x`size`).
    pub size: usize,

    /// Tile value that ends the game as a win. Exact equality; larger
    /// values do not count.
    pub winning_tile: u32,
}

impl GameConfig {
    /// Create a configuration for a `size`x`size` board played to the
    /// classic winning tile.
    ///
    /// # Panics
    ///
    /// Panics if `size` is outside `2..=255`.
    pub fn new(size: usize) -> Self {
        assert!(size >= 2, "Board must be at least 2x2");
        assert!(size <= 255, "Board size must fit in u8 coordinates");

        Self {
            size,
            winning_tile: WINNING_TILE,
        }
    }

    /// Set the winning tile value.
    ///
    /// # Panics
    ///
    /// Panics if `value` is zero.
    #[must_use]
    pub fn with_winning_tile(mut self, value: u32) -> Self {
        assert!(value > 0, "Winning tile must be positive");
        self.winning_tile = value;
        self
    }
}

impl Default for GameConfig {
    /// The classic game: a 4x4 board played to 2048.
    fn default() -> Self {
        Self::new(4)
    }
}
