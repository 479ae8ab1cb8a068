//! A single-player blackjack engine with compact, checksummed save strings
//! and optional `no_std` support.
//!
//! [`GameState`] drives a round from the setup wizard through betting,
//! player actions, dealer play and settlement. The shoe is derived from a
//! 32-bit seed, so the whole game fits in a 13-byte record that [`save`]
//! turns into a short line a player can copy by hand.
//!
//! # Example
//!
//! ```
//! use bjsave::{Action, GameOptions, GameState, Payout, save};
//!
//! let options = GameOptions::default()
//!     .with_payout(Payout::ThreeToTwo)
//!     .with_decks(2);
//! let game = GameState::new_game(options, 42);
//!
//! let (game, result) = game.apply(Action::Bet(20));
//! assert!(result.is_ok());
//!
//! let line = game.save_line("2024-01-01-12:00:00");
//! let restored = GameState::restore(save::decode_save(&line).unwrap()).unwrap();
//! assert_eq!(restored.draw_stack(), game.draw_stack());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod save;
pub mod shuffle;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, STANDARD_DECK, Suit};
pub use error::{ActionError, DecodeError};
pub use game::{Action, ConfigStep, Event, GameState, Phase, Turn};
pub use hand::{DealerHand, Hand, evaluate};
pub use options::{GameOptions, Payout, Penetration};
pub use result::{HOUSE_LIMIT, Outcome, RoundResult, Settlement, settle};
pub use save::SavableGameState;
pub use shuffle::Shoe;
