//! Game phase, turn, and the action/event vocabulary.

use alloc::string::String;

use crate::error::DecodeError;
use crate::options::{Payout, Penetration};
use crate::result::RoundResult;

/// Step of the setup wizard.
///
/// New games run `StartUp → Payout → DealerRule → Decks → Penetration →
/// StartConfirm`; loading runs `StartUp → Load → LoadConfirm | LoadFail`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigStep {
    /// Choose between a new game and loading a save.
    StartUp,
    /// Choose the natural blackjack payout.
    Payout,
    /// Choose whether the dealer hits a soft 17.
    DealerRule,
    /// Choose the number of decks.
    Decks,
    /// Choose the deck penetration; the shoe is shuffled here.
    Penetration,
    /// Confirm the new game.
    StartConfirm,
    /// Pick a save line.
    Load,
    /// Confirm the loaded game.
    LoadConfirm,
    /// The chosen save line could not be restored.
    LoadFail,
}

impl ConfigStep {
    /// Returns the step that "back" leads to.
    ///
    /// `None` for [`StartUp`](Self::StartUp), where going back leaves the game
    /// for language selection.
    #[must_use]
    pub const fn predecessor(self) -> Option<Self> {
        match self {
            Self::StartUp => None,
            Self::Payout | Self::Load => Some(Self::StartUp),
            Self::DealerRule => Some(Self::Payout),
            Self::Decks => Some(Self::DealerRule),
            Self::Penetration => Some(Self::Decks),
            Self::StartConfirm => Some(Self::Penetration),
            Self::LoadConfirm | Self::LoadFail => Some(Self::Load),
        }
    }
}

/// Game phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Setting up or loading a game.
    Config(ConfigStep),
    /// Waiting for a bet.
    Bet,
    /// A round is in progress.
    Play,
    /// The round has been settled.
    End,
    /// The player can no longer afford the minimum bet.
    GameOver,
}

/// Whose turn it is during a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Turn {
    /// The player acts.
    Player,
    /// The dealer plays out their hand.
    Dealer,
}

/// Input to the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Start configuring a new game.
    NewGame,
    /// Go to the save picker.
    LoadGame,
    /// Restore the given save line.
    LoadSave(String),
    /// Pick the natural blackjack payout.
    ChoosePayout(Payout),
    /// Pick the dealer's soft-17 rule.
    ChooseDealerRule {
        /// Whether the dealer hits a soft 17.
        hit_on_soft_17: bool,
    },
    /// Pick the deck count. Zero falls back to one deck.
    ChooseDecks(u8),
    /// Pick the penetration and shuffle the shoe.
    ChoosePenetration {
        /// Share of the shoe dealt before reshuffling.
        penetration: Penetration,
        /// Seed for the new shoe.
        seed: u32,
    },
    /// Confirm a configured or loaded game.
    Confirm,
    /// Return to the previous setup step.
    Back,
    /// Place a bet and deal the round.
    Bet(u16),
    /// Take a card.
    Hit,
    /// Keep the hand and let the dealer play.
    Stand,
    /// Double the stake, take one card, then stand.
    Double,
    /// Give up the hand for half the stake.
    Surrender,
    /// Start the next round.
    Restart {
        /// Seed used if a reshuffle is pending.
        seed: u32,
    },
}

/// Notable result of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A round was settled.
    RoundOver(RoundResult),
    /// The chosen save line was rejected.
    LoadFailed(DecodeError),
    /// The shoe was reshuffled before the next round.
    Reshuffled {
        /// Seed of the new shoe.
        seed: u32,
    },
    /// The game ended because the player ran out of money.
    GameOver,
    /// The player backed out of the first setup step.
    ExitToLanguageSelection,
}
