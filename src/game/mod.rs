//! Game engine and state management.
//!
//! [`GameState`] is a plain value. Every transition goes through
//! [`GameState::apply`], which takes the state by value and hands back the
//! next one; a rejected action hands back the state unchanged.

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;
use crate::error::{ActionError, DecodeError};
use crate::hand::{DealerHand, Hand};
use crate::options::{GameOptions, Penetration, bet_options};
use crate::save::{self, SavableGameState};
use crate::shuffle::Shoe;

mod actions;
mod bet;
mod config;
mod dealer;
pub mod state;

pub use state::{Action, ConfigStep, Event, Phase, Turn};

/// The authoritative state of a single-player blackjack game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// Current phase (and setup step while configuring).
    phase: Phase,
    /// Whose turn it is while a round is in play.
    turn: Turn,
    /// The shoe being dealt from.
    shoe: Shoe,
    /// The player's hand.
    player_hand: Hand,
    /// The dealer's hand.
    dealer_hand: DealerHand,
    /// Stake of the current round.
    bet: u16,
    /// Player money, excluding the stake in play.
    money: u16,
    /// Cards dealt before a reshuffle is scheduled.
    reshuffle_threshold: u16,
    /// Number of decks in the shoe.
    deck_count: u8,
    /// Natural blackjack payout numerator.
    payout_numerator: u8,
    /// Whether the dealer hits a soft 17.
    hit_on_soft_17: bool,
    /// Whether the shoe is reshuffled before the next round.
    need_reshuffle: bool,
}

impl GameState {
    fn blank(phase: Phase, options: GameOptions) -> Self {
        Self {
            phase,
            turn: Turn::Player,
            shoe: Shoe::empty(),
            player_hand: Hand::new(),
            dealer_hand: DealerHand::new(),
            bet: 0,
            money: options.starting_money,
            reshuffle_threshold: 0,
            deck_count: options.decks,
            payout_numerator: options.payout.numerator(),
            hit_on_soft_17: options.hit_on_soft_17,
            need_reshuffle: false,
        }
    }

    /// Creates a game at the first setup step.
    #[must_use]
    pub fn start() -> Self {
        Self::blank(Phase::Config(ConfigStep::StartUp), GameOptions::default())
    }

    /// Creates a configured game waiting for the first bet.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsave::{GameOptions, GameState, Phase};
    ///
    /// let game = GameState::new_game(GameOptions::default().with_decks(2), 42);
    /// assert_eq!(game.phase(), Phase::Bet);
    /// assert_eq!(game.draw_stack().len(), 104);
    /// assert_eq!(game.reshuffle_threshold(), 52);
    /// ```
    #[must_use]
    pub fn new_game(options: GameOptions, seed: u32) -> Self {
        let mut state = Self::blank(Phase::Bet, options);
        state.deck_count = options.decks.max(1);
        state.open_shoe(options.penetration, seed);
        state
    }

    /// Rebuilds a game from a saved record, waiting for the next bet.
    ///
    /// The shoe is reshuffled from the stored seed and deck count, then
    /// advanced past the cards that had already been dealt.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::ImpossibleShoe`] if the record has no decks or
    /// claims more cards dealt than the shoe holds.
    pub fn restore(saved: SavableGameState) -> Result<Self, DecodeError> {
        let impossible = DecodeError::ImpossibleShoe {
            deck_count: saved.deck_count,
            cards_dealt: saved.cards_dealt,
        };
        if saved.deck_count == 0 {
            return Err(impossible);
        }

        let mut shoe = Shoe::shuffled(saved.deck_count, saved.seed);
        if !shoe.fast_forward(usize::from(saved.cards_dealt)) {
            return Err(impossible);
        }

        tracing::debug!(
            seed = saved.seed,
            cards_dealt = saved.cards_dealt,
            money = saved.money,
            "restored saved game"
        );

        Ok(Self {
            phase: Phase::Bet,
            turn: Turn::Player,
            shoe,
            player_hand: Hand::new(),
            dealer_hand: DealerHand::new(),
            bet: 0,
            money: saved.money,
            reshuffle_threshold: saved.reshuffle_threshold,
            deck_count: saved.deck_count,
            payout_numerator: saved.payout_numerator,
            hit_on_soft_17: saved.hit_on_soft_17,
            need_reshuffle: saved.need_reshuffle,
        })
    }

    /// Replaces the shoe with `cards`, dealt in the given order.
    #[doc(hidden)]
    #[must_use]
    pub fn with_draw_stack(mut self, cards: Vec<Card>) -> Self {
        self.shoe = Shoe::stacked(cards, self.shoe.seed());
        self
    }

    /// Applies an action, returning the next state and what happened.
    ///
    /// On error the returned state is the one passed in.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsave::{Action, GameOptions, GameState, Phase};
    ///
    /// let game = GameState::new_game(GameOptions::default(), 7);
    /// let (game, result) = game.apply(Action::Bet(10));
    /// assert!(result.is_ok());
    /// assert!(matches!(game.phase(), Phase::Play | Phase::End));
    /// ```
    #[must_use]
    pub fn apply(mut self, action: Action) -> (Self, Result<Option<Event>, ActionError>) {
        let snapshot = self.clone();
        match self.dispatch(action) {
            Ok(event) => (self, Ok(event)),
            Err(err) => {
                tracing::debug!(%err, phase = ?snapshot.phase, "action rejected");
                (snapshot, Err(err))
            }
        }
    }

    fn dispatch(&mut self, action: Action) -> Result<Option<Event>, ActionError> {
        match (self.phase, action) {
            (Phase::Config(step), action) => self.configure(step, action),
            (Phase::Bet, Action::Bet(amount)) => self.place_bet(amount),
            (Phase::Play, Action::Hit) => self.hit(),
            (Phase::Play, Action::Stand) => self.stand(),
            (Phase::Play, Action::Double) => self.double_down(),
            (Phase::Play, Action::Surrender) => self.surrender(),
            (Phase::End, Action::Restart { seed }) => self.restart(seed),
            _ => Err(ActionError::InvalidState),
        }
    }

    /// Shuffles a fresh shoe for the current deck count.
    fn open_shoe(&mut self, penetration: Penetration, seed: u32) {
        self.reshuffle_threshold = penetration.threshold(self.deck_count);
        self.shoe = Shoe::shuffled(self.deck_count, seed);
        self.need_reshuffle = false;
        self.player_hand.clear();
        self.dealer_hand.clear();
    }

    /// Draws a card and schedules a reshuffle once the threshold is reached.
    fn draw(&mut self) -> Result<Card, ActionError> {
        let card = self.shoe.draw().ok_or(ActionError::NoCards)?;
        if !self.need_reshuffle && self.cards_dealt() >= self.reshuffle_threshold {
            tracing::debug!(
                cards_dealt = self.cards_dealt(),
                threshold = self.reshuffle_threshold,
                "reshuffle scheduled for next round"
            );
            self.need_reshuffle = true;
        }
        Ok(card)
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns whose turn it is.
    #[must_use]
    pub const fn turn(&self) -> Turn {
        self.turn
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player_hand
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.dealer_hand
    }

    /// Returns the player's total.
    #[must_use]
    pub fn player_total(&self) -> u8 {
        self.player_hand.value()
    }

    /// Returns the dealer's full total, hole card included.
    #[must_use]
    pub fn dealer_total(&self) -> u8 {
        self.dealer_hand.value()
    }

    /// Returns whether the dealer holds a soft 17.
    #[must_use]
    pub fn dealer_is_soft_17(&self) -> bool {
        self.dealer_hand.is_soft_17()
    }

    /// Returns the stake of the current round.
    #[must_use]
    pub const fn bet(&self) -> u16 {
        self.bet
    }

    /// Returns the player's money, excluding the stake in play.
    #[must_use]
    pub const fn money(&self) -> u16 {
        self.money
    }

    /// Returns the number of cards dealt from the current shoe.
    #[must_use]
    pub const fn cards_dealt(&self) -> u16 {
        self.shoe.cards_dealt() as u16
    }

    /// Returns the number of cards dealt before a reshuffle is scheduled.
    #[must_use]
    pub const fn reshuffle_threshold(&self) -> u16 {
        self.reshuffle_threshold
    }

    /// Returns whether the shoe will be reshuffled before the next round.
    #[must_use]
    pub const fn needs_reshuffle(&self) -> bool {
        self.need_reshuffle
    }

    /// Returns the number of decks in the shoe.
    #[must_use]
    pub const fn deck_count(&self) -> u8 {
        self.deck_count
    }

    /// Returns the natural blackjack payout numerator.
    #[must_use]
    pub const fn payout_numerator(&self) -> u8 {
        self.payout_numerator
    }

    /// Returns whether the dealer hits a soft 17.
    #[must_use]
    pub const fn hit_on_soft_17(&self) -> bool {
        self.hit_on_soft_17
    }

    /// Returns the seed the current shoe was shuffled with.
    #[must_use]
    pub const fn seed(&self) -> u32 {
        self.shoe.seed()
    }

    /// Returns the cards left to deal, next card first.
    #[must_use]
    pub fn draw_stack(&self) -> &[Card] {
        self.shoe.draw_stack()
    }

    /// Returns whether doubling is on offer: a round is in play on the
    /// player's turn and the player can cover the stake again.
    #[must_use]
    pub fn can_double(&self) -> bool {
        self.phase == Phase::Play && self.turn == Turn::Player && self.money >= self.bet
    }

    /// Returns the bet sizes the player can afford.
    #[must_use]
    pub fn bet_options(&self) -> &'static [u16] {
        bet_options(self.money)
    }

    /// Returns the persisted subset of the state.
    #[must_use]
    pub fn savable(&self) -> SavableGameState {
        SavableGameState {
            seed: self.seed(),
            reshuffle_threshold: self.reshuffle_threshold,
            cards_dealt: self.cards_dealt(),
            deck_count: self.deck_count,
            hit_on_soft_17: self.hit_on_soft_17,
            need_reshuffle: self.need_reshuffle,
            money: self.money,
            payout_numerator: self.payout_numerator,
        }
    }

    /// Encodes the state as `<base45 record>=<base32 checksum>`.
    #[must_use]
    pub fn encode_save(&self) -> String {
        save::encode_save(&self.savable())
    }

    /// Builds a complete save line labelled with `timestamp`.
    #[must_use]
    pub fn save_line(&self, timestamp: &str) -> String {
        save::format_line(timestamp, &self.savable())
    }
}

impl From<&GameState> for SavableGameState {
    fn from(state: &GameState) -> Self {
        state.savable()
    }
}
