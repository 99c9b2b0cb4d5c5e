//! Seeded random source for quantum-correction jitter.
//!
//! The engine owns exactly one source behind a mutex, so draws are
//! serialised. Parallel batches interleave those draws in worker order,
//! which makes jittered parallel output non-reproducible; sequential calls
//! with the same seed reproduce exactly.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::StandardNormal;

/// Injectable source of jitter samples.
pub trait JitterSource: Send {
    /// Sample from N(0, 1).
    fn standard_normal(&mut self) -> f64;

    /// Sample uniformly from [-1, 1).
    fn uniform(&mut self) -> f64;

    /// Restart the sequence from `seed`.
    fn reseed(&mut self, seed: u64);
}

/// ChaCha8-backed [`JitterSource`].
///
/// # Example
/// ```
/// use hyperspatial_projection::jitter::{JitterSource, SeededJitter};
///
/// let mut a = SeededJitter::new(7);
/// let mut b = SeededJitter::new(7);
/// assert_eq!(a.standard_normal(), b.standard_normal());
/// ```
#[derive(Debug, Clone)]
pub struct SeededJitter {
    rng: ChaCha8Rng,
}

impl SeededJitter {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl JitterSource for SeededJitter {
    #[inline]
    fn standard_normal(&mut self) -> f64 {
        self.rng.sample(StandardNormal)
    }

    #[inline]
    fn uniform(&mut self) -> f64 {
        self.rng.gen_range(-1.0..1.0)
    }

    fn reseed(&mut self, seed: u64) {
        self.rng = ChaCha8Rng::seed_from_u64(seed);
    }
}

/// Source that always returns zero. Useful for noise-free evaluation.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroJitter;

impl JitterSource for ZeroJitter {
    fn standard_normal(&mut self) -> f64 {
        0.0
    }

    fn uniform(&mut self) -> f64 {
        0.0
    }

    fn reseed(&mut self, _seed: u64) {}
}
