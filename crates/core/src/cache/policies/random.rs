//! Random Replacement Policy.
//!
//! This policy evicts a uniformly selected way from the set. It uses a
//! simple xorshift generator to produce pseudo-random numbers, avoiding the
//! overhead of a full RNG.
//!
//! Unlike LRU and LFU, random selection does not special-case invalid ways:
//! every way, empty or resident, is an equally eligible candidate. The
//! policy is deliberately metadata-agnostic, so preferring empty ways would
//! reintroduce exactly the state inspection it exists to avoid.

use super::ReplacementEngine;
use crate::cache::CacheSet;

/// Random engine state.
#[derive(Debug)]
pub struct RandomEngine {
    /// Internal state for the pseudo-random number generator.
    state: u64,
}

impl RandomEngine {
    /// Creates a new Random engine with the default seed.
    pub const fn new() -> Self {
        Self::with_seed(123456789)
    }

    /// Creates a new Random engine with an explicit non-zero seed.
    ///
    /// Deterministic seeding keeps trace replays reproducible.
    pub const fn with_seed(seed: u64) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ReplacementEngine for RandomEngine {
    /// Identifies the victim way to evict.
    ///
    /// Generates a pseudo-random number and maps it to a way index.
    fn find_victim(&mut self, set: &CacheSet) -> usize {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        (x as usize) % set.ways.len()
    }

    /// Access patterns do not affect random selection; this is a no-op.
    fn touch(&mut self, _set: &mut CacheSet, _way: usize) {}
}
