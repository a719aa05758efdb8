//! The rules of the game: line merges, tilts, and terminal detection.
//!
//! Everything in this module is a pure function over [`Grid`]s. The state
//! orchestrator in [`crate::core`] wires these into score and game-over
//! bookkeeping; callers that only need the mechanics can use them
//! directly.
//!
//! - `line`: the single-line merge pass
//! - `tilt`: whole-board tilts built from line passes
//! - `game_over`: the terminal predicate and its pieces
//!
//! [`Grid`]: crate::core::Grid

pub mod game_over;
pub mod line;
pub mod tilt;

pub use game_over::{
    any_move_available, has_empty_cell, has_mergeable_pair, has_winning_tile, is_game_over,
};
pub use line::{merge_line, MergedLine};
pub use tilt::{tilt, TiltResult};
