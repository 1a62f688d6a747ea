//! The per-solve random generator.
//!
//! One `SolveRng` is created per solve and threaded explicitly through
//! seeding and search; nothing in the workspace touches process-wide
//! randomness.  Production solves seed from system entropy, tests seed from a
//! fixed `u64` so candidate order and group assignment are repeatable.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Random generator owned by a single optimization pass.
///
/// `SmallRng` is fast and `Send`; there is never more than one user at a time.
pub struct SolveRng(SmallRng);

impl SolveRng {
    /// Seed deterministically.
    pub fn new(seed: u64) -> Self {
        SolveRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed from the operating system's entropy source.
    pub fn from_entropy() -> Self {
        SolveRng(SmallRng::from_entropy())
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Shuffle a mutable slice in-place (Fisher-Yates).
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.0);
    }
}
