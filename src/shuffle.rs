//! Seeded shoe generation.
//!
//! A shoe is fully determined by a 32-bit seed and a deck count, which is what
//! lets a save record store four bytes instead of the whole draw order.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, STANDARD_DECK};

/// Expands a 32-bit seed into two 64-bit generator words.
///
/// The first word repeats the seed in both halves. The second places the
/// seed's upper 16 bits in bits 48..64, the whole seed in bits 16..48 and the
/// seed's lower 16 bits in bits 0..16, so the two words never share a bit
/// layout.
///
/// # Example
///
/// ```
/// use bjsave::shuffle::expand_seed;
///
/// let (high, low) = expand_seed(0x1234_5678);
/// assert_eq!(high, 0x1234_5678_1234_5678);
/// assert_eq!(low, 0x1234_1234_5678_5678);
/// ```
#[must_use]
pub fn expand_seed(seed: u32) -> (u64, u64) {
    let seed = u64::from(seed);
    let first = seed | (seed << 32);
    let top = (seed & 0xFFFF_0000) << 32;
    let middle = seed << 16;
    let bottom = seed & 0x0000_FFFF;
    (first, top | middle | bottom)
}

fn rng_for(seed: u32) -> ChaCha8Rng {
    let (high, low) = expand_seed(seed);
    let mut key = [0u8; 32];
    key[..8].copy_from_slice(&high.to_le_bytes());
    key[8..16].copy_from_slice(&low.to_le_bytes());
    ChaCha8Rng::from_seed(key)
}

/// Builds `deck_count` standard decks and shuffles them with `seed`.
///
/// The same seed and deck count always produce the same order.
#[must_use]
pub fn shuffle(deck_count: u8, seed: u32) -> Vec<Card> {
    let mut cards = Vec::with_capacity(usize::from(deck_count) * DECK_SIZE);
    for _ in 0..deck_count {
        cards.extend_from_slice(&STANDARD_DECK);
    }

    cards.shuffle(&mut rng_for(seed));
    cards
}

/// Returns a seed derived from the wall clock.
///
/// Milliseconds since the Unix epoch, truncated to the low 32 bits (these wrap
/// roughly every 49.7 days).
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[must_use]
pub fn fresh_seed() -> u32 {
    chrono::Utc::now().timestamp_millis() as u32
}

/// Shuffles a new shoe with a clock-derived seed, returning the cards and the
/// seed that produced them.
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[must_use]
pub fn shuffle_fresh(deck_count: u8) -> (Vec<Card>, u32) {
    let seed = fresh_seed();
    (shuffle(deck_count, seed), seed)
}

/// A shuffled draw stack consumed from the front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shoe {
    /// Every card of the shoe in draw order, including those already dealt.
    cards: Vec<Card>,
    /// Number of cards drawn so far.
    dealt: usize,
    /// Seed the order was generated from.
    seed: u32,
}

impl Shoe {
    /// Creates a freshly shuffled shoe.
    #[must_use]
    pub fn shuffled(deck_count: u8, seed: u32) -> Self {
        tracing::debug!(deck_count, seed, "shuffling shoe");
        Self {
            cards: shuffle(deck_count, seed),
            dealt: 0,
            seed,
        }
    }

    /// Creates a shoe with no cards.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cards: Vec::new(),
            dealt: 0,
            seed: 0,
        }
    }

    /// Creates a shoe that deals `cards` in the given order.
    #[doc(hidden)]
    #[must_use]
    pub const fn stacked(cards: Vec<Card>, seed: u32) -> Self {
        Self {
            cards,
            dealt: 0,
            seed,
        }
    }

    /// Draws the next card.
    pub fn draw(&mut self) -> Option<Card> {
        let card = self.cards.get(self.dealt).copied()?;
        self.dealt += 1;
        Some(card)
    }

    /// Skips `count` cards as if they had been dealt.
    ///
    /// Returns `false`, leaving the shoe untouched, if fewer than `count`
    /// cards remain.
    pub fn fast_forward(&mut self, count: usize) -> bool {
        if count > self.remaining() {
            return false;
        }
        self.dealt += count;
        true
    }

    /// Returns the cards still to be dealt, next card first.
    #[must_use]
    pub fn draw_stack(&self) -> &[Card] {
        &self.cards[self.dealt..]
    }

    /// Returns the number of cards still to be dealt.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len() - self.dealt
    }

    /// Returns the number of cards dealt since the shoe was shuffled.
    #[must_use]
    pub const fn cards_dealt(&self) -> usize {
        self.dealt
    }

    /// Returns the total number of cards in the shoe.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the shoe holds no cards at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the seed the shoe was shuffled with.
    #[must_use]
    pub const fn seed(&self) -> u32 {
        self.seed
    }
}

impl Default for Shoe {
    fn default() -> Self {
        Self::empty()
    }
}
