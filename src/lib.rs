//! # twenty48-rules
//!
//! A deterministic rules engine for the 2048 sliding-tile puzzle,
//! built for RL and tree-search training.
//!
//! ## Design Principles
//!
//! 1. **Rules Only**: No rendering, no input handling, no tile-spawning
//!    policy. Callers supply tiles and decide what outcomes mean.
//!
//! 2. **Deterministic**: Every operation is a pure function of the state
//!    and its arguments. The same calls always produce the same game.
//!
//! 3. **Search-Friendly**: States clone cheaply (persistent move log via
//!    `im`), compare structurally, and hash, so they work as search keys.
//!
//! ## Architecture
//!
//! A tilt decomposes into independent line passes: `Direction::line`
//! enumerates each line's cells nearest the destination edge first, and
//! a single merge pass handles sliding, merging, and scoring for all
//! four directions.
//!
//! ## Modules
//!
//! - `core`: cells, directions, tiles, the grid, configuration,
//!   snapshots, move records, game state
//! - `rules`: the tilt algorithm and terminal detection
//!
//! ## Example
//!
//! ```
//! use twenty48_rules::{Cell, Direction, GameState, Tile};
//!
//! let mut game = GameState::new(4);
//! game.add_tile(Tile::new(2, Cell::new(0, 0)));
//! game.add_tile(Tile::new(2, Cell::new(3, 0)));
//!
//! let changed = game.tilt(Direction::Left);
//! assert!(changed);
//! assert_eq!(game.score(), 4);
//! assert!(!game.is_game_over());
//! ```

pub mod core;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Cell, Direction, GameConfig, GameState, Grid, MoveRecord, Snapshot, Tile, WINNING_TILE,
};

pub use crate::rules::{
    any_move_available, has_empty_cell, has_mergeable_pair, has_winning_tile, is_game_over,
    merge_line, tilt, MergedLine, TiltResult,
};
