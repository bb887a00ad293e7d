//! Fixed-width row of binary digit columns.

use std::fmt::{self, Display, Write as _};

use tinyvec::ArrayVec;

use crate::Bit;

/// Maximum number of columns a row can hold.
///
/// Target values are `u64`, so 64 columns are always enough.
pub const MAX_COLUMNS: usize = u64::BITS as usize;

/// Returns the number of columns needed to write `max` in binary.
///
/// This is `ceil(log2(max + 1))`, except that `0` still needs one column.
///
/// # Examples
///
/// ```
/// use binpuzzle_core::bit_width;
///
/// assert_eq!(bit_width(0), 1);
/// assert_eq!(bit_width(1), 1);
/// assert_eq!(bit_width(7), 3);
/// assert_eq!(bit_width(8), 4);
/// assert_eq!(bit_width(u64::MAX), 64);
/// ```
#[must_use]
pub const fn bit_width(max: u64) -> usize {
    let width = (u64::BITS - max.leading_zeros()) as usize;
    if width == 0 { 1 } else { width }
}

/// An ordered row of binary digit columns.
///
/// Column `0` is the most significant (leftmost) bit. The width is fixed when
/// the row is created; digits change only through [`toggle`](Self::toggle).
///
/// # Examples
///
/// ```
/// use binpuzzle_core::{Bit, BitColumns};
///
/// let mut columns = BitColumns::for_max_value(7);
/// assert_eq!(columns.len(), 3);
///
/// columns.toggle(0);
/// columns.toggle(2);
/// assert_eq!(columns.to_string(), "101");
/// assert_eq!(columns.value(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BitColumns {
    bits: ArrayVec<[Bit; MAX_COLUMNS]>,
}

impl BitColumns {
    /// Creates a row of `width` zero columns.
    ///
    /// # Panics
    ///
    /// Panics if `width` is zero or greater than [`MAX_COLUMNS`].
    #[must_use]
    pub fn zeros(width: usize) -> Self {
        assert!(
            (1..=MAX_COLUMNS).contains(&width),
            "Invalid column width: {width}"
        );
        let mut bits = ArrayVec::new();
        bits.resize(width, Bit::Zero);
        Self { bits }
    }

    /// Creates a row of zero columns wide enough to hold `max`.
    #[must_use]
    pub fn for_max_value(max: u64) -> Self {
        Self::zeros(bit_width(max))
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Always `false`; a row has at least one column.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Returns the digit at `index`, or `None` if there is no such column.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Bit> {
        self.bits.get(index).copied()
    }

    /// Flips the digit at `index` and returns its new value.
    ///
    /// Returns `None` and leaves the row untouched if `index` is out of range.
    pub fn toggle(&mut self, index: usize) -> Option<Bit> {
        self.bits.get_mut(index).map(Bit::toggle)
    }

    /// Returns an iterator over the digits, most significant first.
    pub fn iter(&self) -> impl Iterator<Item = Bit> + '_ {
        self.bits.iter().copied()
    }

    /// Reads the digits as a big-endian binary number.
    ///
    /// Computes `sum(digit[i] * 2^(n-1-i))` for `i` in `0..n`.
    #[must_use]
    pub fn value(&self) -> u64 {
        self.iter()
            .fold(0, |acc, bit| (acc << 1) | u64::from(bit.value()))
    }
}

impl Display for BitColumns {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            f.write_char(if bit.is_set() { '1' } else { '0' })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_bit_width_edge_cases() {
        assert_eq!(bit_width(0), 1);
        assert_eq!(bit_width(1), 1);
        assert_eq!(bit_width(2), 2);
        assert_eq!(bit_width(3), 2);
        assert_eq!(bit_width(4), 3);
        assert_eq!(bit_width(255), 8);
        assert_eq!(bit_width(256), 9);
        assert_eq!(bit_width(u64::MAX), MAX_COLUMNS);
    }

    #[test]
    fn test_new_row_is_all_zero() {
        let columns = BitColumns::for_max_value(100);
        assert_eq!(columns.len(), 7);
        assert!(!columns.is_empty());
        assert!(columns.iter().all(|bit| bit == Bit::Zero));
        assert_eq!(columns.value(), 0);
        assert_eq!(columns.to_string(), "0000000");
    }

    #[test]
    fn test_toggle_and_read() {
        let mut columns = BitColumns::zeros(3);
        assert_eq!(columns.toggle(0), Some(Bit::One));
        assert_eq!(columns.toggle(2), Some(Bit::One));
        assert_eq!(columns.get(0), Some(Bit::One));
        assert_eq!(columns.get(1), Some(Bit::Zero));
        assert_eq!(columns.value(), 5);

        assert_eq!(columns.toggle(0), Some(Bit::Zero));
        assert_eq!(columns.value(), 1);
    }

    #[test]
    fn test_out_of_range_index() {
        let mut columns = BitColumns::zeros(3);
        assert_eq!(columns.get(3), None);
        assert_eq!(columns.toggle(99), None);
        assert_eq!(columns.value(), 0);
    }

    #[test]
    fn test_full_width_value() {
        let mut columns = BitColumns::for_max_value(u64::MAX);
        for i in 0..columns.len() {
            columns.toggle(i);
        }
        assert_eq!(columns.value(), u64::MAX);
    }

    #[test]
    #[should_panic(expected = "Invalid column width: 0")]
    fn test_zero_width_panics() {
        let _ = BitColumns::zeros(0);
    }

    proptest! {
        #[test]
        fn test_width_matches_log2(max in 0u64..=u64::MAX) {
            let expected = if max == 0 { 1 } else { 64 - max.leading_zeros() as usize };
            prop_assert_eq!(BitColumns::for_max_value(max).len(), expected);
            // Every value up to `max` fits in the row.
            prop_assert!(u128::from(max) < (1u128 << expected));
        }

        #[test]
        fn test_value_is_big_endian(toggles in proptest::collection::vec(0usize..8, 0..32)) {
            let mut columns = BitColumns::zeros(8);
            for index in &toggles {
                columns.toggle(*index);
            }
            let expected = columns
                .iter()
                .enumerate()
                .map(|(i, bit)| u64::from(bit.value()) << (7 - i))
                .sum::<u64>();
            prop_assert_eq!(columns.value(), expected);
            prop_assert_eq!(u64::from_str_radix(&columns.to_string(), 2).unwrap(), expected);
        }
    }
}
