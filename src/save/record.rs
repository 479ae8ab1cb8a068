//! Fixed-width binary record of the persisted game state.
//!
//! Layout (little-endian):
//!
//! | bytes  | field               |
//! |--------|---------------------|
//! | 0..4   | shuffle seed (u32)  |
//! | 4..6   | reshuffle threshold |
//! | 6..8   | cards dealt         |
//! | 8      | deck count          |
//! | 9      | flags               |
//! | 10..12 | player money        |
//! | 12     | payout numerator    |
//!
//! Flag bit 0 is hit-on-soft-17, bit 1 is reshuffle-pending; the other bits
//! are written as zero and ignored on read.

use crate::error::{DecodeError, LengthField};

/// Length of an encoded record in bytes.
pub const RECORD_LEN: usize = 13;

const HIT_ON_SOFT_17: u8 = 0b01;
const NEED_RESHUFFLE: u8 = 0b10;

/// The part of the game state that is persisted.
///
/// Hands and the draw stack are not stored; the draw stack is rebuilt from
/// `seed`, `deck_count` and `cards_dealt`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SavableGameState {
    /// Seed the current shoe was shuffled with.
    pub seed: u32,
    /// Cards dealt before a reshuffle is scheduled.
    pub reshuffle_threshold: u16,
    /// Cards dealt from the current shoe.
    pub cards_dealt: u16,
    /// Number of decks in the shoe.
    pub deck_count: u8,
    /// Whether the dealer hits a soft 17.
    pub hit_on_soft_17: bool,
    /// Whether a reshuffle is pending for the next round.
    pub need_reshuffle: bool,
    /// Player money.
    pub money: u16,
    /// Natural blackjack payout numerator.
    pub payout_numerator: u8,
}

impl SavableGameState {
    /// Packs the state into its 13-byte record.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; RECORD_LEN] {
        let mut buf = [0u8; RECORD_LEN];
        buf[0..4].copy_from_slice(&self.seed.to_le_bytes());
        buf[4..6].copy_from_slice(&self.reshuffle_threshold.to_le_bytes());
        buf[6..8].copy_from_slice(&self.cards_dealt.to_le_bytes());
        buf[8] = self.deck_count;

        let mut flags = 0;
        if self.hit_on_soft_17 {
            flags |= HIT_ON_SOFT_17;
        }
        if self.need_reshuffle {
            flags |= NEED_RESHUFFLE;
        }
        buf[9] = flags;

        buf[10..12].copy_from_slice(&self.money.to_le_bytes());
        buf[12] = self.payout_numerator;
        buf
    }

    /// Unpacks a record produced by [`to_bytes`](Self::to_bytes).
    ///
    /// Only the first 13 bytes are read.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Length`] if fewer than 13 bytes are supplied.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
        let Some(buf) = bytes.first_chunk::<RECORD_LEN>() else {
            return Err(DecodeError::Length {
                field: LengthField::Record,
                expected: RECORD_LEN,
                found: bytes.len(),
            });
        };

        Ok(Self {
            seed: u32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]),
            reshuffle_threshold: u16::from_le_bytes([buf[4], buf[5]]),
            cards_dealt: u16::from_le_bytes([buf[6], buf[7]]),
            deck_count: buf[8],
            hit_on_soft_17: buf[9] & HIT_ON_SOFT_17 != 0,
            need_reshuffle: buf[9] & NEED_RESHUFFLE != 0,
            money: u16::from_le_bytes([buf[10], buf[11]]),
            payout_numerator: buf[12],
        })
    }
}
