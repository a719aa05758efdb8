//! Core board types: cells, directions, tiles, the grid, configuration,
//! snapshots, move records, and the game state.
//!
//! These are the building blocks the rules in [`crate::rules`] operate
//! on. The one geometric piece is [`Direction::line`], which maps every
//! tilt direction onto the same line ordering so the algorithms never
//! special-case a direction.

pub mod cell;
pub mod direction;
pub mod tile;
pub mod grid;
pub mod config;
pub mod record;
pub mod snapshot;
pub mod state;

pub use cell::Cell;
pub use direction::Direction;
pub use tile::Tile;
pub use grid::Grid;
pub use config::{GameConfig, WINNING_TILE};
pub use record::MoveRecord;
pub use snapshot::Snapshot;
pub use state::GameState;
