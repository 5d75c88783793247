//! Deterministic per-ghost RNG wrapper.
//!
//! # Determinism strategy
//!
//! Each ghost gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (slot * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive slots uniformly across the seed space.  This
//! means:
//!
//! - Ghosts never share RNG state, so the frightened-mode randomness of one
//!   agent cannot perturb another's.
//! - Replays with the same global seed reproduce every run exactly.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Per-ghost deterministic RNG.
///
/// Create one per ghost at level start; the `slot` is the ghost's position
/// in the group's fixed update order.
pub struct GhostRng(SmallRng);

impl GhostRng {
    /// Seed deterministically from the run's global seed and a ghost slot.
    pub fn new(global_seed: u64, slot: u32) -> Self {
        let seed = global_seed ^ (slot as u64).wrapping_mul(MIXING_CONSTANT);
        GhostRng(SmallRng::seed_from_u64(seed))
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
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

    /// Choose a random element from a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}
