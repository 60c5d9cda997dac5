//! Seeded deck randomization.
//!
//! The coach view can fill the whole deck with random cards or drop a
//! random card into one slot. Both draw from a card pool and never pick a
//! card the deck already holds.
//!
//! ```
//! use lonorix::deck::{DeckRng, DeckSlots, POPULAR_CARDS};
//!
//! let mut rng = DeckRng::new(42);
//! let deck = DeckSlots::randomized(&POPULAR_CARDS, &mut rng);
//! assert!(deck.readiness().is_ready());
//!
//! // Same seed, same deck
//! let again = DeckSlots::randomized(&POPULAR_CARDS, &mut DeckRng::new(42));
//! assert_eq!(deck, again);
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::slots::{DeckSlots, DECK_SIZE};
use crate::error::{Error, Result};

/// Deterministic RNG for deck randomization.
#[derive(Clone, Debug)]
pub struct DeckRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl DeckRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.inner)
    }
}

impl DeckSlots {
    /// A deck of up to 8 distinct random cards from `pool`.
    ///
    /// Duplicates in the pool are drawn at most once. A pool with fewer
    /// than 8 distinct cards leaves the remaining slots blank.
    #[must_use]
    pub fn randomized<S: AsRef<str>>(pool: &[S], rng: &mut DeckRng) -> Self {
        let mut candidates: Vec<&str> = Vec::with_capacity(pool.len());
        for name in pool.iter().map(|s| s.as_ref().trim()) {
            if !name.is_empty() && !candidates.iter().any(|c| c.eq_ignore_ascii_case(name)) {
                candidates.push(name);
            }
        }
        rng.shuffle(&mut candidates);
        DeckSlots::from_names(candidates.into_iter().take(DECK_SIZE))
    }

    /// Put a random pool card that is not yet in the deck into `index`.
    ///
    /// Returns `Ok(false)` and leaves the deck untouched when every pool
    /// card is already used.
    pub fn fill_slot_randomly<S: AsRef<str>>(
        &mut self,
        index: usize,
        pool: &[S],
        rng: &mut DeckRng,
    ) -> Result<bool> {
        if index >= DECK_SIZE {
            return Err(Error::SlotOutOfRange { index });
        }

        let unused: Vec<&str> = pool
            .iter()
            .map(|s| s.as_ref().trim())
            .filter(|name| !name.is_empty() && !self.contains(name))
            .collect();

        match rng.choose(&unused) {
            Some(&name) => {
                let name = name.to_string();
                self.set(index, name)?;
                Ok(true)
            }
            None => {
                tracing::debug!(index, "no unused card left to fill slot");
                Ok(false)
            }
        }
    }
}
