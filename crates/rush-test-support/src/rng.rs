//! Scripted random sources for driving the bucket sampler in tests.

use rush_core::rng::DeterministicRng;

/// Always answers with the low end of the requested range: bucket 15, then
/// rowid 1. Good enough when a test only needs some valid draw.
#[derive(Debug)]
pub struct MockRng;

impl DeterministicRng for MockRng {
    fn next_u32_range(&mut self, min: u32, _max: u32) -> u32 {
        min
    }
}

/// Replays a fixed list of draws, ignoring the requested bounds.
///
/// Each sample consumes two values, the bucket and then the rowid, so
/// `vec![15, 42]` selects rowid 42 from bucket 15. Out-of-range values are
/// passed through untouched, which lets tests exercise the sampler's bounds
/// checks. Running past the end of the list panics.
#[derive(Debug)]
pub struct SequenceRng {
    values: Vec<u32>,
    index: usize,
}

impl SequenceRng {
    /// Replays `values` in order.
    #[must_use]
    pub fn new(values: Vec<u32>) -> Self {
        Self { values, index: 0 }
    }

    /// How many values have been drawn.
    #[must_use]
    pub fn draws(&self) -> usize {
        self.index
    }
}

impl DeterministicRng for SequenceRng {
    fn next_u32_range(&mut self, _min: u32, _max: u32) -> u32 {
        let drawn = self.values[self.index];
        self.index += 1;
        drawn
    }
}
