//! Error types for game actions and save restoration.

use core::fmt;

use thiserror::Error;

/// Errors that can occur when applying an action to the game.
///
/// A rejected action never changes the game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The action is not legal in the current phase or config step.
    #[error("invalid game state for this action")]
    InvalidState,
    /// It is the dealer's turn.
    #[error("not the player's turn")]
    NotYourTurn,
    /// The bet is not one of the offered bet sizes.
    #[error("bet amount is not offered")]
    InvalidBet,
    /// Insufficient funds for this action.
    #[error("insufficient funds for this action")]
    InsufficientFunds,
    /// No cards left in the shoe.
    #[error("no cards left in the shoe")]
    NoCards,
}

/// Alphabet a save-string segment is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alphabet {
    /// The 45-character payload alphabet.
    Base45,
    /// The 32-character checksum alphabet.
    Base32,
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Base45 => f.write_str("base45"),
            Self::Base32 => f.write_str("base32"),
        }
    }
}

/// Save-string segment whose length is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthField {
    /// Bytes of the decoded state record.
    Record,
    /// Characters of the checksum.
    Checksum,
}

impl fmt::Display for LengthField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Record => f.write_str("record bytes"),
            Self::Checksum => f.write_str("checksum characters"),
        }
    }
}

/// Errors that can occur when decoding a save string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The line does not contain exactly one of a separator.
    #[error("invalid format: expected exactly one {separator:?} separator, found {found}")]
    Format {
        /// The separator that was counted.
        separator: char,
        /// How many times it occurred.
        found: usize,
    },
    /// A character outside the segment's alphabet.
    #[error("invalid character {found:?} at position {position}: not in the {alphabet} alphabet")]
    Alphabet {
        /// The alphabet being decoded.
        alphabet: Alphabet,
        /// Byte offset of the character within the segment.
        position: usize,
        /// The offending character.
        found: char,
    },
    /// A segment decoded to the wrong length.
    #[error("invalid length: expected {expected} {field}, got {found}")]
    Length {
        /// The segment that was measured.
        field: LengthField,
        /// Required length.
        expected: usize,
        /// Actual length.
        found: usize,
    },
    /// The stored checksum does not match the record.
    #[error("checksum mismatch: expected {expected:#07x}, got {found:#07x}")]
    ChecksumMismatch {
        /// Checksum recomputed from the record.
        expected: u32,
        /// Checksum carried by the save string.
        found: u32,
    },
    /// The record passed its checksum but describes a shoe that cannot exist.
    #[error("impossible shoe: {cards_dealt} cards dealt from {deck_count} decks")]
    ImpossibleShoe {
        /// Stored deck count.
        deck_count: u8,
        /// Stored number of cards dealt.
        cards_dealt: u16,
    },
}
