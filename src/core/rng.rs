//! Deterministic random number generation for tie-breaking.
//!
//! The recursive engine picks uniformly among equally good moves. Seeding
//! makes that choice reproducible: the same seed and the same sequence of
//! searches always yield the same moves.
//!
//! ```
//! use rust_minimax::core::SearchRng;
//!
//! let mut a = SearchRng::new(7);
//! let mut b = SearchRng::new(7);
//! let moves = ["A", "B", "C"];
//! assert_eq!(a.choose(&moves), b.choose(&moves));
//! ```

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Seedable, forkable RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct SearchRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl SearchRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Fork an independent but deterministic stream.
    ///
    /// Gives each engine in a match its own tie-break stream from one seed.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }

    /// Seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}
