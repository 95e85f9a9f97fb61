//! RNG module - the randomness boundary of the engine
//!
//! The spawner never reaches for a global generator. It asks a [`SpawnSource`]
//! for a cell and a value, so callers decide where randomness comes from:
//! any `rand::Rng` works out of the box, and tests can script the answers.
//!
//! Also provides [`SimpleRng`], a small LCG the game state uses so that a seed
//! reproduces the same game everywhere.

use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

use crate::types::{Position, SPAWN_VALUES};

/// Source of the two random decisions a spawn needs
pub trait SpawnSource {
    /// Pick one of `free` uniformly. `None` only when `free` is empty.
    fn choose_position(&mut self, free: &[Position]) -> Option<Position>;

    /// Pick one of [`SPAWN_VALUES`] uniformly.
    fn choose_value(&mut self) -> u32;
}

impl<R: Rng + ?Sized> SpawnSource for R {
    fn choose_position(&mut self, free: &[Position]) -> Option<Position> {
        free.choose(self).copied()
    }

    fn choose_value(&mut self) -> u32 {
        SPAWN_VALUES[self.gen_range(0..SPAWN_VALUES.len())]
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Current generator state; feeding it to [`SimpleRng::new`] resumes the stream
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RngCore for SimpleRng {
    fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    fn next_u64(&mut self) -> u64 {
        let hi = u64::from(self.next_u32());
        let lo = u64::from(self.next_u32());
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
