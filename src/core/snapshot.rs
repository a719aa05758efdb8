//! Structural state images.
//!
//! A `Snapshot` freezes a game into plain values: the board as a grid of
//! numbers, the score, the high-water score, and the terminal flag.
//! Snapshots compare and hash structurally and encode to compact bytes,
//! which makes them usable as search keys, test fixtures, and training
//! data rows.

use serde::{Deserialize, Serialize};

/// A structural image of a game at one point in time.
///
/// `values[row][column]` holds the tile value at that square, with row 0
/// at the bottom and 0 meaning empty.
///
/// ## Example
///
/// ```
/// use twenty48_rules::core::Snapshot;
///
/// let snapshot = Snapshot::new(
///     vec![
///         vec![4, 0],
///         vec![0, 2],
///     ],
///     4,
///     0,
///     false,
/// );
///
/// assert_eq!(snapshot.size(), 2);
/// assert_eq!(snapshot.values[0][0], 4); // Bottom-left
/// assert_eq!(snapshot.values[1][1], 2); // Top-right
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Snapshot {
    /// Board values, `values[row][column]`, row 0 at the bottom, 0 = empty.
    pub values: Vec<Vec<u32>>,

    /// Score of the game in progress.
    pub score: u64,

    /// High-water score across games.
    pub max_score: u64,

    /// Whether the game had ended.
    pub game_over: bool,
}

impl Snapshot {
    /// Create a snapshot from raw parts.
    ///
    /// # Panics
    ///
    /// Panics if `values` is not square.
    #[must_use]
    pub fn new(values: Vec<Vec<u32>>, score: u64, max_score: u64, game_over: bool) -> Self {
        let size = values.len();
        assert!(
            values.iter().all(|row| row.len() == size),
            "Snapshot rows must all match the board size"
        );

        Self {
            values,
            score,
            max_score,
            game_over,
        }
    }

    /// Get the board's side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.values.len()
    }

    /// Encode to compact bytes.
    ///
    /// # Errors
    ///
    /// Returns any encoder error.
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    /// Decode bytes produced by [`Snapshot::to_bytes`].
    ///
    /// # Errors
    ///
    /// Returns an error when the bytes do not decode to a snapshot or the
    /// decoded board is not square.
    pub fn from_bytes(bytes: &[u8]) -> Result<Snapshot, bincode::Error> {
        let snapshot: Snapshot = bincode::deserialize(bytes)?;

        let size = snapshot.values.len();
        if snapshot.values.iter().any(|row| row.len() != size) {
            return Err(Box::new(bincode::ErrorKind::Custom(
                "snapshot rows must all match the board size".to_string(),
            )));
        }

        Ok(snapshot)
    }
}
