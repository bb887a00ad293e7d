//! Core data structures for the binary number puzzle.
//!
//! The puzzle shows a decimal target and a row of binary digit columns. The
//! player flips columns until the row, read as a binary number, equals the
//! target. This crate provides the value types that the game logic is built
//! on:
//!
//! - [`bit`]: [`Bit`], a single binary digit
//! - [`columns`]: [`BitColumns`], the fixed-width row of digits, most
//!   significant first
//! - [`range`]: [`TargetRange`], the validated inclusive bounds for targets
//!
//! # Examples
//!
//! ```
//! use binpuzzle_core::{Bit, BitColumns, TargetRange};
//!
//! let range = TargetRange::new(0, 7)?;
//! let mut columns = BitColumns::zeros(range.bit_width());
//!
//! assert_eq!(columns.toggle(1), Some(Bit::One));
//! assert_eq!(columns.value(), 2);
//! # Ok::<(), binpuzzle_core::RangeError>(())
//! ```

pub mod bit;
pub mod columns;
pub mod range;

pub use self::{
    bit::Bit,
    columns::{BitColumns, MAX_COLUMNS, bit_width},
    range::{RangeError, TargetRange},
};
