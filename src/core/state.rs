//! The game orchestrator.
//!
//! `GameState` owns the board and the bookkeeping around it: the score,
//! the high-water score across games, the terminal flag, and the move
//! log. The algorithms live in [`crate::rules`]; this type wires them to
//! the board and keeps the bookkeeping consistent after every mutation.
//!
//! ## Equality and hashing
//!
//! Two states are equal when their boards, scores, high-water scores,
//! and terminal flags match. The move log and the configuration are
//! excluded, so positions reached by different move orders compare
//! equal and states work as search keys.
//!
//! ## Cloning
//!
//! The move log is an `im::Vector`, so clones share structure and stay
//! cheap even for long games. Search callers fork states freely.

use std::hash::{Hash, Hasher};

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::rules::{is_game_over, tilt};

use super::cell::Cell;
use super::config::GameConfig;
use super::direction::Direction;
use super::grid::Grid;
use super::record::MoveRecord;
use super::snapshot::Snapshot;
use super::tile::Tile;

/// A full game: board, score, high-water score, terminal flag, move log.
///
/// The engine never spawns tiles; callers supply them via
/// [`GameState::add_tile`] under whatever policy they like. Operations on
/// a finished game stay legal: the terminal flag is advisory, and callers
/// decide what to do with it.
///
/// ## Example
///
/// ```
/// use twenty48_rules::core::{Cell, Direction, GameState, Tile};
///
/// let mut game = GameState::new(4);
/// game.add_tile(Tile::new(2, Cell::new(0, 0)));
/// game.add_tile(Tile::new(2, Cell::new(3, 0)));
///
/// assert!(game.tilt(Direction::Left));
/// assert_eq!(game.score(), 4);
/// assert_eq!(game.tile(Cell::new(0, 0)).map(|t| t.value()), Some(4));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    grid: Grid,
    config: GameConfig,
    score: u64,
    max_score: u64,
    game_over: bool,
    history: Vector<MoveRecord>,
}

impl GameState {
    /// Create an empty game on a `size`x`size` board with the classic
    /// winning tile.
    ///
    /// # Panics
    ///
    /// Panics if `size` is outside `2..=255`.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self::with_config(GameConfig::new(size))
    }

    /// Create an empty game from a configuration.
    #[must_use]
    pub fn with_config(config: GameConfig) -> Self {
        Self {
            grid: Grid::new(config.size),
            config,
            score: 0,
            max_score: 0,
            game_over: false,
            history: Vector::new(),
        }
    }

    /// Rebuild a state from a snapshot.
    ///
    /// The terminal flag is restored exactly as recorded rather than
    /// recomputed, so tests can pin it independently of the board. The
    /// move log starts empty, and the winning tile is the classic one
    /// for the snapshot's size; assemble via [`GameState::with_config`]
    /// and [`GameState::add_tile`] when a custom rule is needed.
    ///
    /// # Panics
    ///
    /// Panics if the snapshot's board size is outside `2..=255`.
    #[must_use]
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        let mut state = Self::new(snapshot.size());

        for (row, row_values) in snapshot.values.iter().enumerate() {
            for (column, &value) in row_values.iter().enumerate() {
                if value > 0 {
                    state
                        .grid
                        .place(Tile::new(value, Cell::new(column as u8, row as u8)));
                }
            }
        }

        state.score = snapshot.score;
        state.max_score = snapshot.max_score;
        state.game_over = snapshot.game_over;
        state
    }

    /// Rebuild a state by reapplying a move log to a fresh game.
    ///
    /// Placements and tilts are replayed in order. Recorded points and
    /// change flags are ignored in favor of what the rules produce, so a
    /// log replayed under its own configuration reproduces its source
    /// state.
    ///
    /// # Panics
    ///
    /// Panics if a replayed placement lands on an occupied cell, which
    /// means the log did not come from this configuration.
    #[must_use]
    pub fn replay(config: GameConfig, records: impl IntoIterator<Item = MoveRecord>) -> Self {
        let mut state = Self::with_config(config);

        for record in records {
            match record {
                MoveRecord::Tilt { direction, .. } => {
                    state.tilt(direction);
                }
                MoveRecord::Place { tile } => state.add_tile(tile),
            }
        }

        state
    }

    // === Reads ===

    /// Get the board's side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// Get the score of the game in progress.
    #[must_use]
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Get the high-water score across games.
    #[must_use]
    pub fn max_score(&self) -> u64 {
        self.max_score
    }

    /// Check whether the game has ended (won, or stuck with no move).
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Get the tile at a cell, or `None` if the square is empty.
    ///
    /// # Panics
    ///
    /// Panics if the cell is outside the board.
    #[must_use]
    pub fn tile(&self, cell: Cell) -> Option<Tile> {
        self.grid.get(cell)
    }

    /// Get the board.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Get the move log since the last [`GameState::clear`].
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Freeze the game into a structural image.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let size = self.grid.size();
        let mut values = vec![vec![0u32; size]; size];

        for tile in self.grid.tiles() {
            values[tile.row()][tile.column()] = tile.value();
        }

        Snapshot::new(values, self.score, self.max_score, self.game_over)
    }

    // === Mutations ===

    /// Tilt the board toward `direction`.
    ///
    /// Slides every tile as far as it goes, merging equal neighbors once
    /// per tilt, and adds the merge points to the score. Returns whether
    /// anything moved or merged.
    #[instrument(skip(self))]
    pub fn tilt(&mut self, direction: Direction) -> bool {
        let result = tilt(&mut self.grid, direction);

        self.score += result.points;
        self.history.push_back(MoveRecord::Tilt {
            direction,
            points: result.points,
            changed: result.changed,
        });
        self.refresh_game_over();

        result.changed
    }

    /// Add an externally supplied tile to the board.
    ///
    /// # Panics
    ///
    /// Panics if the tile's cell is occupied or outside the board. The
    /// check runs before any mutation, so a panicking call leaves the
    /// state untouched.
    #[instrument(skip(self))]
    pub fn add_tile(&mut self, tile: Tile) {
        assert!(
            self.grid.get(tile.cell()).is_none(),
            "Cell ({}, {}) is already occupied",
            tile.cell().column(),
            tile.cell().row()
        );

        self.grid.place(tile);
        self.history.push_back(MoveRecord::Place { tile });
        self.refresh_game_over();
    }

    /// Start a fresh game on the same board.
    ///
    /// Clears the board, zeroes the score, and empties the move log.
    /// The high-water score survives across games.
    #[instrument(skip(self))]
    pub fn clear(&mut self) {
        self.grid.clear_all();
        self.score = 0;
        self.history = Vector::new();
        self.refresh_game_over();
    }

    /// Recompute the terminal flag and roll the score into the
    /// high-water mark while the game sits at game over.
    fn refresh_game_over(&mut self) {
        self.game_over = is_game_over(&self.grid, self.config.winning_tile);
        if self.game_over {
            self.max_score = self.max_score.max(self.score);
        }
    }
}

impl Default for GameState {
    /// The classic game: a 4x4 board played to 2048.
    fn default() -> Self {
        Self::with_config(GameConfig::default())
    }
}

impl PartialEq for GameState {
    fn eq(&self, other: &Self) -> bool {
        self.grid == other.grid
            && self.score == other.score
            && self.max_score == other.max_score
            && self.game_over == other.game_over
    }
}

impl Eq for GameState {}

impl Hash for GameState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.grid.hash(state);
        self.score.hash(state);
        self.max_score.hash(state);
        self.game_over.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_is_empty() {
        let game = GameState::new(4);

        assert_eq!(game.size(), 4);
        assert_eq!(game.score(), 0);
        assert_eq!(game.max_score(), 0);
        assert!(!game.is_game_over());
        assert_eq!(game.grid().count_empty(), 16);
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_default_is_the_classic_game() {
        let game = GameState::default();

        assert_eq!(game.size(), 4);
        assert_eq!(game.config().winning_tile, 2048);
    }

    #[test]
    fn test_add_tile_and_read_back() {
        let mut game = GameState::new(4);
        let tile = Tile::new(2, Cell::new(1, 2));

        game.add_tile(tile);

        assert_eq!(game.tile(Cell::new(1, 2)), Some(tile));
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.history()[0], MoveRecord::Place { tile });
    }

    #[test]
    #[should_panic(expected = "is already occupied")]
    fn test_add_tile_on_occupied_cell_panics() {
        let mut game = GameState::new(4);
        game.add_tile(Tile::new(2, Cell::new(0, 0)));
        game.add_tile(Tile::new(4, Cell::new(0, 0)));
    }

    #[test]
    #[should_panic(expected = "is outside the 4x4 board")]
    fn test_add_tile_outside_board_panics() {
        let mut game = GameState::new(4);
        game.add_tile(Tile::new(2, Cell::new(4, 0)));
    }

    #[test]
    fn test_tilt_merges_and_scores() {
        let mut game = GameState::new(4);
        game.add_tile(Tile::new(2, Cell::new(0, 0)));
        game.add_tile(Tile::new(2, Cell::new(3, 0)));

        let changed = game.tilt(Direction::Left);

        assert!(changed);
        assert_eq!(game.score(), 4);
        assert_eq!(game.tile(Cell::new(0, 0)).map(|t| t.value()), Some(4));
        assert_eq!(game.grid().count_empty(), 15);
        assert_eq!(
            game.history().last(),
            Some(&MoveRecord::Tilt {
                direction: Direction::Left,
                points: 4,
                changed: true,
            })
        );
    }

    #[test]
    fn test_tilt_without_effect_returns_false() {
        let mut game = GameState::new(4);
        game.add_tile(Tile::new(2, Cell::new(0, 0)));

        let changed = game.tilt(Direction::Left);

        assert!(!changed);
        assert_eq!(game.score(), 0);
        assert_eq!(
            game.history().last(),
            Some(&MoveRecord::Tilt {
                direction: Direction::Left,
                points: 0,
                changed: false,
            })
        );
    }

    #[test]
    fn test_score_accumulates_across_tilts() {
        let mut game = GameState::new(4);
        game.add_tile(Tile::new(2, Cell::new(0, 0)));
        game.add_tile(Tile::new(2, Cell::new(1, 0)));
        game.tilt(Direction::Left); // 4 at (0, 0), +4

        game.add_tile(Tile::new(4, Cell::new(1, 0)));
        game.tilt(Direction::Left); // 8 at (0, 0), +8

        assert_eq!(game.score(), 12);
        assert_eq!(game.grid().highest_value(), 8);
    }

    #[test]
    fn test_winning_merge_ends_the_game() {
        let mut game = GameState::with_config(GameConfig::new(4).with_winning_tile(64));
        game.add_tile(Tile::new(32, Cell::new(0, 0)));
        game.add_tile(Tile::new(32, Cell::new(1, 0)));

        game.tilt(Direction::Left);

        assert!(game.is_game_over());
        assert_eq!(game.score(), 64);
        assert_eq!(game.max_score(), 64);
    }

    #[test]
    fn test_stuck_board_ends_the_game() {
        let mut game = GameState::new(2);
        game.add_tile(Tile::new(2, Cell::new(0, 0)));
        game.add_tile(Tile::new(4, Cell::new(1, 0)));
        game.add_tile(Tile::new(4, Cell::new(0, 1)));
        game.add_tile(Tile::new(2, Cell::new(1, 1)));

        assert!(game.is_game_over());

        // A finished game still accepts tilts; nothing can move here.
        assert!(!game.tilt(Direction::Up));
        assert!(game.is_game_over());
    }

    #[test]
    fn test_clear_keeps_the_high_water_score() {
        let mut game = GameState::with_config(GameConfig::new(4).with_winning_tile(8));
        game.add_tile(Tile::new(4, Cell::new(0, 0)));
        game.add_tile(Tile::new(4, Cell::new(1, 0)));
        game.tilt(Direction::Left);

        assert!(game.is_game_over());
        assert_eq!(game.max_score(), 8);

        game.clear();

        assert_eq!(game.score(), 0);
        assert!(!game.is_game_over());
        assert_eq!(game.grid().count_empty(), 16);
        assert!(game.history().is_empty());
        assert_eq!(game.max_score(), 8);
    }

    #[test]
    fn test_snapshot_round_trip() {
        let mut game = GameState::new(4);
        game.add_tile(Tile::new(2, Cell::new(0, 0)));
        game.add_tile(Tile::new(2, Cell::new(1, 0)));
        game.tilt(Direction::Left);

        let snapshot = game.snapshot();
        assert_eq!(snapshot.values[0][0], 4);
        assert_eq!(snapshot.score, 4);

        let rebuilt = GameState::from_snapshot(&snapshot);
        assert_eq!(rebuilt, game);
    }

    #[test]
    fn test_from_snapshot_restores_the_flag_verbatim() {
        // A playable board recorded as finished stays finished.
        let snapshot = Snapshot::new(
            vec![
                vec![2, 0, 0, 0],
                vec![0, 0, 0, 0],
                vec![0, 0, 0, 0],
                vec![0, 0, 0, 0],
            ],
            0,
            0,
            true,
        );

        let game = GameState::from_snapshot(&snapshot);
        assert!(game.is_game_over());
    }

    #[test]
    fn test_replay_reproduces_the_state() {
        let mut game = GameState::new(4);
        game.add_tile(Tile::new(2, Cell::new(0, 0)));
        game.add_tile(Tile::new(2, Cell::new(1, 0)));
        game.tilt(Direction::Left);
        game.add_tile(Tile::new(4, Cell::new(3, 3)));
        game.tilt(Direction::Down);

        let replayed = GameState::replay(*game.config(), game.history().iter().copied());

        assert_eq!(replayed, game);
        assert_eq!(replayed.snapshot(), game.snapshot());
    }

    #[test]
    fn test_history_points_sum_to_score() {
        let mut game = GameState::new(4);
        game.add_tile(Tile::new(2, Cell::new(0, 0)));
        game.add_tile(Tile::new(2, Cell::new(1, 0)));
        game.tilt(Direction::Left);
        game.add_tile(Tile::new(4, Cell::new(1, 0)));
        game.tilt(Direction::Left);

        let from_log: u64 = game.history().iter().map(MoveRecord::points).sum();
        assert_eq!(from_log, game.score());
    }

    #[test]
    fn test_equality_ignores_move_order() {
        let mut a = GameState::new(4);
        a.add_tile(Tile::new(2, Cell::new(0, 0)));
        a.add_tile(Tile::new(4, Cell::new(3, 3)));

        let mut b = GameState::new(4);
        b.add_tile(Tile::new(4, Cell::new(3, 3)));
        b.add_tile(Tile::new(2, Cell::new(0, 0)));

        assert_eq!(a, b);
        assert_ne!(a.history(), b.history());
    }

    #[test]
    fn test_equal_states_hash_alike() {
        use std::collections::hash_map::DefaultHasher;

        let hash = |state: &GameState| {
            let mut hasher = DefaultHasher::new();
            state.hash(&mut hasher);
            hasher.finish()
        };

        let mut a = GameState::new(4);
        a.add_tile(Tile::new(2, Cell::new(1, 1)));
        let mut b = GameState::new(4);
        b.add_tile(Tile::new(2, Cell::new(1, 1)));

        assert_eq!(hash(&a), hash(&b));
    }

    #[test]
    fn test_equality_is_structural_not_textual() {
        let mut a = GameState::new(4);
        a.add_tile(Tile::new(2, Cell::new(0, 0)));

        let mut b = GameState::new(4);
        b.add_tile(Tile::new(2, Cell::new(0, 1)));

        assert_ne!(a, b);
    }

    #[test]
    fn test_serialization() {
        let mut game = GameState::new(4);
        game.add_tile(Tile::new(2, Cell::new(2, 2)));
        game.tilt(Direction::Right);

        let json = serde_json::to_string(&game).unwrap();
        let deserialized: GameState = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized, game);
        assert_eq!(deserialized.history(), game.history());
        assert_eq!(deserialized.config(), game.config());
    }
}
