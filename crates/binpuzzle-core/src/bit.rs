//! Binary digit representation.

use std::fmt::{self, Display};

/// A single binary digit, either 0 or 1.
///
/// Each column of a puzzle holds one `Bit`. Using an enum instead of a raw
/// integer keeps the value restricted to 0 and 1 at compile time.
///
/// # Examples
///
/// ```
/// use binpuzzle_core::Bit;
///
/// let mut bit = Bit::Zero;
/// bit.toggle();
/// assert_eq!(bit, Bit::One);
/// assert_eq!(bit.value(), 1);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Bit {
    /// The digit 0.
    #[default]
    Zero = 0,
    /// The digit 1.
    One = 1,
}

impl Bit {
    /// Creates a bit from a `bool`, mapping `true` to [`Bit::One`].
    #[must_use]
    pub const fn from_bool(value: bool) -> Self {
        if value { Self::One } else { Self::Zero }
    }

    /// Returns the numeric value of this bit (0 or 1).
    ///
    /// # Examples
    ///
    /// ```
    /// use binpuzzle_core::Bit;
    ///
    /// assert_eq!(Bit::Zero.value(), 0);
    /// assert_eq!(Bit::One.value(), 1);
    /// ```
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns `true` if this bit is set.
    #[must_use]
    pub const fn is_set(self) -> bool {
        matches!(self, Self::One)
    }

    /// Returns the opposite bit.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Zero => Self::One,
            Self::One => Self::Zero,
        }
    }

    /// Flips this bit in place and returns the new value.
    ///
    /// # Examples
    ///
    /// ```
    /// use binpuzzle_core::Bit;
    ///
    /// let mut bit = Bit::One;
    /// assert_eq!(bit.toggle(), Bit::Zero);
    /// assert_eq!(bit.toggle(), Bit::One);
    /// ```
    pub fn toggle(&mut self) -> Self {
        *self = self.flipped();
        *self
    }
}

impl Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.value(), f)
    }
}

impl From<Bit> for u8 {
    fn from(bit: Bit) -> u8 {
        bit.value()
    }
}

impl From<bool> for Bit {
    fn from(value: bool) -> Self {
        Self::from_bool(value)
    }
}
