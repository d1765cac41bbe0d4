//! Deterministic random number generation for battles.
//!
//! Every random choice an ability makes (random friend, random enemy,
//! random tier-3 spawn) and the optional battle-start tie shuffle draw from
//! a `BattleRng` injected by the caller. One seed replays one battle.
//!
//! Streams can be split two ways:
//!
//! - [`BattleRng::fork`] hands out a fresh stream per call, used by
//!   [`BattleSeries`](crate::battle::BattleSeries) to give each battle its own.
//! - [`BattleRng::for_context`] derives a named stream from the seed alone,
//!   so side draws (opponent picks) leave the battle stream where it was.
//!
//! ```
//! use pet_battler::core::BattleRng;
//!
//! let mut series = BattleRng::new(42);
//! let mut first = series.fork();
//!
//! let mut replay = BattleRng::new(42);
//! assert_eq!(first.gen_range(0..1000), replay.fork().gen_range(0..1000));
//! ```

use std::hash::{Hash, Hasher};
use std::ops::Range;

use rand::seq::{index, SliceRandom};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHasher;
use serde::{Deserialize, Serialize};

/// Weyl increment spacing fork seeds apart.
const FORK_STEP: u64 = 0x9E37_79B9_7F4A_7C15;

/// Seeded ChaCha8 stream.
#[derive(Clone, Debug)]
pub struct BattleRng {
    stream: ChaCha8Rng,
    seed: u64,
    forks: u64,
}

impl BattleRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::resume(seed, 0, 0)
    }

    fn resume(seed: u64, word_pos: u128, forks: u64) -> Self {
        let mut stream = ChaCha8Rng::seed_from_u64(seed);
        stream.set_word_pos(word_pos);
        Self { stream, seed, forks }
    }

    /// Split off the next child stream.
    ///
    /// The n-th fork of a seed is always the same stream, and forking does
    /// not consume values from `self`.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.forks += 1;
        Self::new(self.seed.wrapping_add(self.forks.wrapping_mul(FORK_STEP)))
    }

    /// Stream named by `context`, derived from the seed only.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        let mut hasher = FxHasher::default();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    pub fn gen_range(&mut self, range: Range<i32>) -> i32 {
        self.stream.gen_range(range)
    }

    /// Coin flip that lands true with `probability`.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.stream.gen_bool(probability)
    }

    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.stream);
    }

    #[must_use]
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.stream)
    }

    /// Up to `amount` distinct indices from `0..len`, ascending.
    ///
    /// Ascending order lets callers apply picks in roster order. Asking for
    /// more than `len` returns every index.
    pub fn sample(&mut self, len: usize, amount: usize) -> Vec<usize> {
        let mut picked = index::sample(&mut self.stream, len, amount.min(len)).into_vec();
        picked.sort_unstable();
        picked
    }

    /// Snapshot of the stream position.
    #[must_use]
    pub fn state(&self) -> BattleRngState {
        BattleRngState {
            seed: self.seed,
            word_pos: self.stream.get_word_pos(),
            forks: self.forks,
        }
    }

    /// Continue exactly where `state` was taken.
    #[must_use]
    pub fn from_state(state: &BattleRngState) -> Self {
        Self::resume(state.seed, state.word_pos, state.forks)
    }
}

/// Saved [`BattleRng`] position, small enough to store with a replay.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleRngState {
    pub seed: u64,
    /// ChaCha8 word counter.
    pub word_pos: u128,
    /// Forks handed out so far.
    pub forks: u64,
}
