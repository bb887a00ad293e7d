//! Inclusive bounds for target generation.

use std::{
    fmt::{self, Display},
    ops::RangeInclusive,
};

use crate::columns::bit_width;

/// Errors that can occur when building a [`TargetRange`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum RangeError {
    /// The lower bound is greater than the upper bound.
    #[display("invalid target range: min {min} is greater than max {max}")]
    InvalidRange {
        /// The requested lower bound.
        min: u64,
        /// The requested upper bound.
        max: u64,
    },
}

/// Inclusive `[min, max]` range that puzzle targets are drawn from.
///
/// The constructor rejects `min > max`, so every `TargetRange` is non-empty.
///
/// # Examples
///
/// ```
/// use binpuzzle_core::{RangeError, TargetRange};
///
/// let range = TargetRange::new(3, 12)?;
/// assert!(range.contains(12));
/// assert_eq!(range.bit_width(), 4);
///
/// assert_eq!(
///     TargetRange::new(5, 4),
///     Err(RangeError::InvalidRange { min: 5, max: 4 })
/// );
/// # Ok::<(), RangeError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TargetRange {
    min: u64,
    max: u64,
}

impl TargetRange {
    /// Creates a range from inclusive bounds.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::InvalidRange`] if `min > max`.
    pub const fn new(min: u64, max: u64) -> Result<Self, RangeError> {
        if min > max {
            return Err(RangeError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Returns the inclusive lower bound.
    #[must_use]
    pub const fn min(&self) -> u64 {
        self.min
    }

    /// Returns the inclusive upper bound.
    #[must_use]
    pub const fn max(&self) -> u64 {
        self.max
    }

    /// Returns `true` if `value` lies within the bounds.
    #[must_use]
    pub const fn contains(&self, value: u64) -> bool {
        self.min <= value && value <= self.max
    }

    /// Returns the number of binary columns needed to write the upper bound.
    #[must_use]
    pub const fn bit_width(&self) -> usize {
        bit_width(self.max)
    }

    /// Returns the bounds as a standard inclusive range.
    #[must_use]
    pub const fn as_range(&self) -> RangeInclusive<u64> {
        self.min..=self.max
    }
}

impl TryFrom<RangeInclusive<u64>> for TargetRange {
    type Error = RangeError;

    fn try_from(range: RangeInclusive<u64>) -> Result<Self, Self::Error> {
        Self::new(*range.start(), *range.end())
    }
}

impl Display for TargetRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_ranges() {
        let range = TargetRange::new(0, 0).unwrap();
        assert_eq!(range.min(), 0);
        assert_eq!(range.max(), 0);
        assert_eq!(range.bit_width(), 1);
        assert!(range.contains(0));
        assert!(!range.contains(1));

        let range = TargetRange::try_from(4..=7).unwrap();
        assert_eq!(range.as_range(), 4..=7);
        assert_eq!(range.bit_width(), 3);
        assert!(!range.contains(3));
        assert_eq!(range.to_string(), "[4, 7]");
    }

    #[test]
    fn test_inverted_range_is_rejected() {
        let err = TargetRange::new(10, 9).unwrap_err();
        assert_eq!(err, RangeError::InvalidRange { min: 10, max: 9 });
        assert_eq!(
            err.to_string(),
            "invalid target range: min 10 is greater than max 9"
        );
    }
}
