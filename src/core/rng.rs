//! Deterministic random number generation for deck construction and shuffling.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical decks
//! - **Forkable**: Each new game gets its own independent stream
//!
//! ## Usage
//!
//! ```
//! use memorize::core::GameRng;
//!
//! let mut session_rng = GameRng::new(42);
//!
//! // Every new game forks a fresh stream from the session RNG
//! let mut game_rng = session_rng.fork();
//!
//! let mut glyphs = vec!["A", "B", "C", "D"];
//! game_rng.shuffle(&mut glyphs);
//! assert_eq!(glyphs.len(), 4);
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG handle injected into the matching engine.
///
/// Uses ChaCha8 for speed. Nothing in the crate touches ambient randomness;
/// every shuffle goes through one of these.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Fork this RNG to create an independent stream.
    ///
    /// Each fork produces a different but deterministic sequence.
    /// The session forks once per new game.
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

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }
}
