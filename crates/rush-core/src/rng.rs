//! Random number generator abstraction for determinism.
//!
//! In production, this wraps a real RNG. In tests, a seeded or scripted
//! implementation is injected.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Abstraction over random number generation.
pub trait DeterministicRng: Send + Sync {
    /// Generate a random `u32` in the range `[min, max]` inclusive.
    fn next_u32_range(&mut self, min: u32, max: u32) -> u32;
}

/// Production RNG backed by `StdRng`.
#[derive(Debug, Clone)]
pub struct SystemRng(StdRng);

impl SystemRng {
    /// Creates an RNG seeded from operating system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self(StdRng::from_os_rng())
    }

    /// Creates a reproducible RNG from a fixed seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl DeterministicRng for SystemRng {
    fn next_u32_range(&mut self, min: u32, max: u32) -> u32 {
        self.0.random_range(min..=max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_u32_range_is_inclusive_on_both_ends() {
        let mut rng = SystemRng::seeded(7);
        let mut saw_min = false;
        let mut saw_max = false;

        for _ in 0..1_000 {
            let value = rng.next_u32_range(1, 3);
            assert!((1..=3).contains(&value));
            saw_min |= value == 1;
            saw_max |= value == 3;
        }

        assert!(saw_min);
        assert!(saw_max);
    }

    #[test]
    fn test_degenerate_range_returns_the_single_value() {
        let mut rng = SystemRng::from_entropy();
        assert_eq!(rng.next_u32_range(1, 1), 1);
    }

    #[test]
    fn test_same_seed_produces_same_sequence() {
        let mut a = SystemRng::seeded(42);
        let mut b = SystemRng::seeded(42);
        let left: Vec<u32> = (0..16).map(|_| a.next_u32_range(0, 1_000_000)).collect();
        let right: Vec<u32> = (0..16).map(|_| b.next_u32_range(0, 1_000_000)).collect();
        assert_eq!(left, right);
    }
}
