// src/core/random_source.rs

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Witness source for the randomized primality tests.
///
/// Wraps a ChaCha8 generator so tests can be seeded deterministically while
/// the driver draws from OS entropy. Each test owns its own instance; draws
/// are independent, so no state is shared between tests.
pub struct RandomSource {
    rng: ChaCha8Rng,
}

impl RandomSource {
    /// Entropy-seeded source for production use.
    pub fn new() -> Self {
        let mut seed = [0u8; 32];
        rand::rng().fill(&mut seed);
        RandomSource {
            rng: ChaCha8Rng::from_seed(seed),
        }
    }

    /// Deterministically seeded source for reproducible test runs.
    pub fn from_seed(seed: u64) -> Self {
        RandomSource {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Uniform draw from the half-open range [min_value, max_value).
    pub fn next_range(&mut self, min_value: u64, max_value: u64) -> u64 {
        self.rng.random_range(min_value..max_value)
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::new()
    }
}
