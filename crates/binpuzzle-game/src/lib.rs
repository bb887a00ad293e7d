//! Game logic for the binary number puzzle.
//!
//! A [`Puzzle`] picks a decimal target from a [`TargetRange`] and exposes a
//! row of binary columns sized for the range's upper bound. The caller flips
//! columns with [`Puzzle::toggle_column`] and submits the row with
//! [`Puzzle::check_answer`]. A correct answer rolls the next target.
//!
//! Targets are drawn from an injectable random source. Use
//! [`Puzzle::with_seed`] for a reproducible session, or
//! [`Puzzle::with_rng`] to supply any [`rand::Rng`].
//!
//! # Examples
//!
//! ```
//! use binpuzzle_game::Puzzle;
//!
//! let mut puzzle = Puzzle::new(0, 15)?;
//! let target = puzzle.target();
//!
//! let width = puzzle.column_count();
//! for i in 0..width {
//!     if (target >> (width - 1 - i)) & 1 == 1 {
//!         puzzle.toggle_column(i)?;
//!     }
//! }
//! assert!(puzzle.check_answer());
//! # Ok::<(), binpuzzle_game::PuzzleError>(())
//! ```
//!
//! [`TargetRange`]: binpuzzle_core::TargetRange

pub use self::{
    error::PuzzleError,
    puzzle::Puzzle,
    seed::{ParseSeedError, PuzzleSeed},
};

pub mod difficulty;
mod error;
mod puzzle;
mod seed;
