//! Move history entries.
//!
//! Every mutating operation on a game appends one `MoveRecord` to its
//! log. The log is append-only within a game and used for:
//! - Replaying a game from scratch
//! - Debugging (what sequence produced this board?)
//! - Training data export

use serde::{Deserialize, Serialize};

use super::direction::Direction;
use super::tile::Tile;

/// One entry in a game's move log.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveRecord {
    /// A directional tilt and what it produced.
    Tilt {
        direction: Direction,
        points: u64,
        changed: bool,
    },

    /// An externally supplied tile added to the board.
    Place { tile: Tile },
}

impl MoveRecord {
    /// Points the move scored. Placements score nothing.
    #[must_use]
    pub fn points(&self) -> u64 {
        match self {
            MoveRecord::Tilt { points, .. } => *points,
            MoveRecord::Place { .. } => 0,
        }
    }
}
