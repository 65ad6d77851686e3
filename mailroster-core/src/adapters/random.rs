//! Randomness adapters
//!
//! [`OsRandom`] draws from the operating system CSPRNG and is what the
//! application uses. [`SeededRandom`] is a ChaCha-based generator seeded from
//! a number, for reproducible demos and tests.

use rand::rngs::{OsRng, StdRng};
use rand::{Rng, SeedableRng};

use crate::ports::RandomSource;

/// Operating system random source
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn next_below(&mut self, bound: usize) -> usize {
        OsRng.gen_range(0..bound)
    }
}

/// Deterministic random source
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_below(&mut self, bound: usize) -> usize {
        self.rng.gen_range(0..bound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_os_random_stays_in_range() {
        let mut rng = OsRandom;
        for bound in [1, 9, 20, 100] {
            for _ in 0..200 {
                assert!(rng.next_below(bound) < bound);
            }
        }
    }

    #[test]
    fn test_seeded_random_is_reproducible() {
        let mut a = SeededRandom::new(42);
        let mut b = SeededRandom::new(42);
        let left: Vec<_> = (0..32).map(|_| a.next_below(100)).collect();
        let right: Vec<_> = (0..32).map(|_| b.next_below(100)).collect();
        assert_eq!(left, right);
        assert!(left.iter().all(|v| *v < 100));
    }
}
