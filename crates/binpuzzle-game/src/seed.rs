//! Reproducible seeds for puzzle sessions.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use rand::SeedableRng as _;
use rand_pcg::Pcg64;

/// Errors returned when parsing a [`PuzzleSeed`] from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseSeedError {
    /// The text is not exactly 64 characters long.
    #[display("invalid seed length: expected 64 hex digits, got {len}")]
    InvalidLength {
        /// Length of the rejected text.
        len: usize,
    },
    /// The text contains a character that is not a hex digit.
    #[display("invalid hex digit {ch:?} at position {position}")]
    InvalidHexDigit {
        /// Byte offset of the offending character.
        position: usize,
        /// The offending character.
        ch: char,
    },
}

/// A 256-bit seed for the random source of a puzzle.
///
/// Two puzzles built from the same seed and range roll the same sequence of
/// targets. The text form is 64 lowercase hex digits.
///
/// # Examples
///
/// ```
/// use binpuzzle_game::PuzzleSeed;
///
/// let seed: PuzzleSeed = "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef"
///     .parse()?;
/// assert_eq!(
///     seed.to_string(),
///     "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef"
/// );
/// # Ok::<(), binpuzzle_game::ParseSeedError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

impl PuzzleSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Draws a fresh seed from the thread-local random generator.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::random())
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Builds the deterministic generator for this seed.
    #[must_use]
    pub fn to_rng(&self) -> Pcg64 {
        Pcg64::from_seed(self.0)
    }
}

impl Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for PuzzleSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 64 {
            return Err(ParseSeedError::InvalidLength { len: s.len() });
        }
        let mut bytes = [0; 32];
        let mut digits = s.char_indices().map(|(position, ch)| {
            ch.to_digit(16)
                .and_then(|digit| u8::try_from(digit).ok())
                .ok_or(ParseSeedError::InvalidHexDigit { position, ch })
        });
        let mut next_digit = || {
            digits
                .next()
                .unwrap_or(Err(ParseSeedError::InvalidLength { len: s.len() }))
        };
        for byte in &mut bytes {
            *byte = (next_digit()? << 4) | next_digit()?;
        }
        Ok(Self(bytes))
    }
}

#[cfg(test)]
mod tests {
    use rand::Rng as _;

    use super::*;

    const SEED: &str = "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1";

    #[test]
    fn test_display_parses_back() {
        let seed = PuzzleSeed::from_str(SEED).unwrap();
        assert_eq!(seed.to_string(), SEED);
        assert_eq!(seed.as_bytes()[0], 0xc1);
        assert_eq!(seed.as_bytes()[31], 0xf1);

        let random = PuzzleSeed::random();
        assert_eq!(random.to_string().parse::<PuzzleSeed>(), Ok(random));
    }

    #[test]
    fn test_uppercase_is_accepted() {
        let seed = PuzzleSeed::from_str(&SEED.to_ascii_uppercase()).unwrap();
        assert_eq!(seed.to_string(), SEED);
    }

    #[test]
    fn test_invalid_seeds() {
        assert_eq!(
            PuzzleSeed::from_str("abcd"),
            Err(ParseSeedError::InvalidLength { len: 4 })
        );

        let mut text = SEED.to_owned();
        text.replace_range(10..11, "g");
        assert_eq!(
            PuzzleSeed::from_str(&text),
            Err(ParseSeedError::InvalidHexDigit {
                position: 10,
                ch: 'g'
            })
        );
    }

    #[test]
    fn test_non_ascii_seed_is_rejected() {
        let text = format!("\u{e9}{}", "a".repeat(62));
        assert_eq!(text.len(), 64);
        assert_eq!(
            PuzzleSeed::from_str(&text),
            Err(ParseSeedError::InvalidHexDigit {
                position: 0,
                ch: '\u{e9}'
            })
        );

        let text = format!("{}\u{e9}", "a".repeat(62));
        assert_eq!(
            PuzzleSeed::from_str(&text),
            Err(ParseSeedError::InvalidHexDigit {
                position: 62,
                ch: '\u{e9}'
            })
        );
    }

    #[test]
    fn test_same_seed_same_stream() {
        let seed = PuzzleSeed::from_bytes([7; 32]);
        let mut a = seed.to_rng();
        let mut b = seed.to_rng();
        for _ in 0..16 {
            assert_eq!(a.random::<u64>(), b.random::<u64>());
        }
    }
}
