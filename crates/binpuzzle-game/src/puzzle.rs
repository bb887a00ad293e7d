use binpuzzle_core::{Bit, BitColumns, TargetRange};
use rand::Rng;
use rand_pcg::Pcg64;

use crate::{
    PuzzleError, PuzzleSeed,
    difficulty::{BoxedDifficultyPolicy, DifficultyPolicy, FixedDifficulty},
};

/// A decimal-to-binary puzzle session.
///
/// Holds a row of binary columns wide enough for the largest target, the
/// current target, and the random source used to roll targets. The player
/// toggles columns until the row, read as a big-endian binary number, equals
/// the target. A correct answer rolls a new target; the columns keep their
/// digits.
///
/// # Example
///
/// ```
/// use binpuzzle_game::Puzzle;
///
/// let mut puzzle = Puzzle::new(0, 7)?;
/// assert_eq!(puzzle.column_count(), 3);
///
/// puzzle.set_target(5)?;
/// puzzle.toggle_column(0)?;
/// assert!(!puzzle.check_answer());
/// puzzle.toggle_column(2)?;
/// assert!(puzzle.check_answer());
/// # Ok::<(), binpuzzle_game::PuzzleError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Puzzle<R = Pcg64> {
    range: TargetRange,
    columns: BitColumns,
    target: u64,
    solved: usize,
    seed: Option<PuzzleSeed>,
    difficulty: BoxedDifficultyPolicy,
    rng: R,
}

impl Puzzle {
    /// Creates a puzzle for targets in `[min, max]` with a fresh random seed.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::InvalidRange`] if `min > max`.
    pub fn new(min: u64, max: u64) -> Result<Self, PuzzleError> {
        let range = TargetRange::new(min, max)?;
        Ok(Self::with_seed(range, PuzzleSeed::random()))
    }

    /// Creates a puzzle whose targets are rolled from `seed`.
    ///
    /// The same seed and range always produce the same sequence of targets.
    ///
    /// # Example
    ///
    /// ```
    /// use binpuzzle_core::TargetRange;
    /// use binpuzzle_game::{Puzzle, PuzzleSeed};
    ///
    /// let range = TargetRange::new(1, 100)?;
    /// let seed = PuzzleSeed::from_bytes([42; 32]);
    /// let a = Puzzle::with_seed(range, seed);
    /// let b = Puzzle::with_seed(range, seed);
    /// assert_eq!(a.target(), b.target());
    /// assert_eq!(a.seed(), Some(seed));
    /// # Ok::<(), binpuzzle_core::RangeError>(())
    /// ```
    #[must_use]
    pub fn with_seed(range: TargetRange, seed: PuzzleSeed) -> Self {
        let mut puzzle = Self::with_rng(range, seed.to_rng());
        puzzle.seed = Some(seed);
        puzzle
    }
}

impl<R> Puzzle<R>
where
    R: Rng,
{
    /// Creates a puzzle that rolls targets from an injected random source.
    ///
    /// The columns start at zero and the first target is rolled immediately.
    #[must_use]
    pub fn with_rng(range: TargetRange, rng: R) -> Self {
        let columns = BitColumns::zeros(range.bit_width());
        log::debug!(
            "created puzzle: range={range}, columns={}",
            columns.len()
        );
        let mut puzzle = Self {
            range,
            columns,
            target: range.min(),
            solved: 0,
            seed: None,
            difficulty: Box::new(FixedDifficulty::new()),
            rng,
        };
        puzzle.roll_target();
        puzzle
    }

    /// Replaces the difficulty policy consulted after each correct answer.
    #[must_use]
    pub fn with_difficulty<P>(mut self, policy: P) -> Self
    where
        P: DifficultyPolicy + 'static,
    {
        self.difficulty = Box::new(policy);
        self
    }

    /// Returns the inclusive range targets are drawn from.
    #[must_use]
    pub fn range(&self) -> &TargetRange {
        &self.range
    }

    /// Returns the number the player has to write in binary.
    #[must_use]
    pub fn target(&self) -> u64 {
        self.target
    }

    /// Returns the columns, most significant first.
    #[must_use]
    pub fn columns(&self) -> &BitColumns {
        &self.columns
    }

    /// Returns the number of columns.
    ///
    /// This is `ceil(log2(max + 1))`, and at least one.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Returns the digit of the column at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::IndexOutOfRange`] if there is no such column.
    pub fn digit(&self, index: usize) -> Result<Bit, PuzzleError> {
        self.columns
            .get(index)
            .ok_or(PuzzleError::IndexOutOfRange {
                index,
                len: self.columns.len(),
            })
    }

    /// Returns the current columns read as a big-endian binary number.
    #[must_use]
    pub fn guess_value(&self) -> u64 {
        self.columns.value()
    }

    /// Returns how many targets have been solved in this session.
    #[must_use]
    pub fn solved_count(&self) -> usize {
        self.solved
    }

    /// Returns the seed of the random source, if the puzzle was built from one.
    #[must_use]
    pub fn seed(&self) -> Option<PuzzleSeed> {
        self.seed
    }

    /// Returns the active difficulty policy.
    #[must_use]
    pub fn difficulty(&self) -> &dyn DifficultyPolicy {
        self.difficulty.as_ref()
    }

    /// Flips the column at `index` and returns its new digit.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::IndexOutOfRange`] if there is no such column.
    /// The columns are left untouched in that case.
    ///
    /// # Example
    ///
    /// ```
    /// use binpuzzle_core::Bit;
    /// use binpuzzle_game::{Puzzle, PuzzleError};
    ///
    /// let mut puzzle = Puzzle::new(0, 7)?;
    /// assert_eq!(puzzle.toggle_column(1)?, Bit::One);
    /// assert_eq!(puzzle.toggle_column(1)?, Bit::Zero);
    /// assert!(puzzle.toggle_column(99).unwrap_err().is_index_out_of_range());
    /// # Ok::<(), PuzzleError>(())
    /// ```
    pub fn toggle_column(&mut self, index: usize) -> Result<Bit, PuzzleError> {
        let len = self.columns.len();
        let bit = self
            .columns
            .toggle(index)
            .ok_or(PuzzleError::IndexOutOfRange { index, len })?;
        log::trace!("toggled column {index} to {bit}: {}", self.columns);
        Ok(bit)
    }

    /// Checks whether the columns spell out the target.
    ///
    /// On a correct answer the difficulty policy is consulted, a new target is
    /// rolled and `true` is returned. The columns are not reset. On a wrong
    /// answer nothing changes and `false` is returned.
    pub fn check_answer(&mut self) -> bool {
        let guess = self.columns.value();
        if guess != self.target {
            log::trace!("wrong answer: guess={guess}, target={}", self.target);
            return false;
        }

        self.solved += 1;
        log::info!(
            "solved target {} as {} ({} solved)",
            self.target,
            self.columns,
            self.solved
        );
        self.increase_difficulty();
        self.roll_target();
        true
    }

    /// Lets the difficulty policy react to the current session.
    ///
    /// Called by [`check_answer`](Self::check_answer) after every correct
    /// answer.
    pub fn increase_difficulty(&mut self) {
        self.difficulty
            .increase_difficulty(&self.range, self.solved);
    }

    /// Replaces the current target.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::TargetOutOfRange`] if `target` is outside the
    /// puzzle range.
    pub fn set_target(&mut self, target: u64) -> Result<(), PuzzleError> {
        if !self.range.contains(target) {
            return Err(PuzzleError::TargetOutOfRange {
                target,
                range: self.range,
            });
        }
        self.target = target;
        Ok(())
    }

    fn roll_target(&mut self) {
        self.target = self.rng.random_range(self.range.as_range());
        log::debug!("rolled target {} in {}", self.target, self.range);
    }
}
