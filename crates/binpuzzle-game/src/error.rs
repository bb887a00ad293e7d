use binpuzzle_core::{RangeError, TargetRange};

/// Errors returned by [`Puzzle`](crate::Puzzle) operations.
///
/// All of them are caused by caller input; the puzzle state is left
/// unchanged when one is returned.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::From,
    derive_more::IsVariant,
)]
pub enum PuzzleError {
    /// The bounds passed to the constructor are inverted.
    #[display("cannot create puzzle: {_0}")]
    #[from]
    InvalidRange(RangeError),
    /// The column index does not exist.
    #[display("column index {index} is out of range for {len} columns")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of columns in the puzzle.
        len: usize,
    },
    /// A forced target lies outside the puzzle range.
    #[display("target {target} is outside {range}")]
    TargetOutOfRange {
        /// The requested target.
        target: u64,
        /// The range of the puzzle.
        range: TargetRange,
    },
}
