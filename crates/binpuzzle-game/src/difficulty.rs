//! Difficulty progression policies.
//!
//! A [`Puzzle`](crate::Puzzle) consults its policy every time the player
//! solves a target. Only [`FixedDifficulty`] ships today; the range and the
//! column count of a puzzle do not change after construction.

use std::fmt::Debug;

use binpuzzle_core::TargetRange;

/// A strategy for raising the difficulty after a correct answer.
pub trait DifficultyPolicy: Debug + Send + Sync {
    /// Returns the name of the policy.
    fn name(&self) -> &'static str;

    /// Returns a boxed clone of the policy.
    fn clone_box(&self) -> BoxedDifficultyPolicy;

    /// Called after a correct answer, before the next target is rolled.
    ///
    /// `solved` already includes the answer that triggered the call.
    fn increase_difficulty(&mut self, range: &TargetRange, solved: usize);
}

/// A boxed difficulty policy.
pub type BoxedDifficultyPolicy = Box<dyn DifficultyPolicy>;

impl Clone for BoxedDifficultyPolicy {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

const NAME: &str = "fixed";

/// A policy that never changes the difficulty.
///
/// # Examples
///
/// ```
/// use binpuzzle_core::TargetRange;
/// use binpuzzle_game::difficulty::{DifficultyPolicy, FixedDifficulty};
///
/// let mut policy = FixedDifficulty::new();
/// policy.increase_difficulty(&TargetRange::new(0, 7)?, 1);
/// assert_eq!(policy.name(), "fixed");
/// # Ok::<(), binpuzzle_core::RangeError>(())
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct FixedDifficulty;

impl FixedDifficulty {
    /// Creates a new `FixedDifficulty` policy.
    #[must_use]
    pub const fn new() -> Self {
        FixedDifficulty
    }
}

impl DifficultyPolicy for FixedDifficulty {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedDifficultyPolicy {
        Box::new(*self)
    }

    fn increase_difficulty(&mut self, _range: &TargetRange, _solved: usize) {}
}
