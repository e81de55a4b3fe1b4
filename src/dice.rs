//! Randomness source for the initial palette choice.
//!
//! Nothing in the crate reaches for ambient global randomness: callers build a
//! [`RandomSource`] and pass it in, so tests can swap in a scripted one.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Non-cryptographic source of the few random decisions the generator makes.
pub trait RandomSource {
    /// Fair coin flip. Each call is an independent trial.
    fn decide(&mut self) -> bool;

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn pick_index(&mut self, len: usize) -> usize;

    /// Uniform hue in `0.0..360.0` degrees.
    fn pick_hue(&mut self) -> f32;
}

/// [`RandomSource`] backed by any [`rand::Rng`].
#[derive(Debug, Clone)]
pub struct RngDice<R> {
    rng: R,
}

impl<R: Rng> RngDice<R> {
    /// Wraps an existing generator.
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngDice<StdRng> {
    /// A fresh generator seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// A reproducible generator; the same seed always yields the same rolls.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// `seeded` when a seed is given, `from_entropy` otherwise.
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::seeded)
    }
}

impl<R: Rng> RandomSource for RngDice<R> {
    fn decide(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }

    fn pick_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }

    fn pick_hue(&mut self) -> f32 {
        self.rng.gen_range(0.0..360.0)
    }
}
