//! The single-line merge pass.
//!
//! A tilt is `size` independent line passes. Each pass sees one line's
//! occupied values ordered nearest the destination edge first, with the
//! gaps already gone, and produces the surviving values plus the points
//! scored.
//!
//! ## Merge rules
//!
//! - Equal neighbors merge into one tile of doubled value.
//! - A merged tile never merges again within the same pass.
//! - When three equal values meet, the pair nearer the edge merges;
//!   `[2, 2, 2]` becomes `[4, 2]`, never `[2, 4]`.
//! - Each merge scores the doubled value.

use smallvec::SmallVec;

/// Outcome of merging one line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MergedLine {
    /// Surviving values, nearest the destination edge first.
    /// SmallVec keeps the classic 4x4 board heap-free.
    pub values: SmallVec<[u32; 4]>,

    /// Points scored: the sum of every merge's doubled value.
    pub points: u64,
}

/// Merge one line's occupied values toward the destination edge.
///
/// `values` holds only the occupied squares of a line, ordered nearest
/// the destination edge first.
///
/// ```
/// use twenty48_rules::rules::merge_line;
///
/// let line = merge_line(&[2, 2, 2]);
/// assert_eq!(line.values.as_slice(), &[4, 2]);
/// assert_eq!(line.points, 4);
/// ```
#[must_use]
pub fn merge_line(values: &[u32]) -> MergedLine {
    let mut line = MergedLine::default();
    let mut merged_last = false;

    for &value in values {
        match line.values.last_mut() {
            // Only a tile that is not itself a merge result can absorb.
            Some(last) if *last == value && !merged_last => {
                *last *= 2;
                line.points += u64::from(*last);
                merged_last = true;
            }
            _ => {
                line.values.push(value);
                merged_last = false;
            }
        }
    }

    line
}
