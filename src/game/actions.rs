use crate::error::ActionError;
use crate::options::MIN_BET;
use crate::result::Outcome;
use crate::shuffle::Shoe;

use super::dealer::Stake;
use super::{Event, GameState, Phase, Turn};

impl GameState {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.phase != Phase::Play {
            return Err(ActionError::InvalidState);
        }
        if self.turn != Turn::Player {
            return Err(ActionError::NotYourTurn);
        }
        Ok(())
    }

    /// Draws a card for the player, settling with `bust_outcome` on a bust.
    fn draw_for_player(&mut self, bust_outcome: Outcome) -> Result<Option<Event>, ActionError> {
        let card = self.draw()?;
        self.player_hand.add_card(card);
        if self.player_hand.is_bust() {
            return Ok(Some(self.finish_round(bust_outcome)));
        }
        Ok(None)
    }

    /// Player action: take one card. A total of 21 does not end the turn.
    pub(super) fn hit(&mut self) -> Result<Option<Event>, ActionError> {
        self.ensure_player_turn()?;
        self.draw_for_player(Outcome::NormalLoss)
    }

    /// Player action: stand and let the dealer play.
    pub(super) fn stand(&mut self) -> Result<Option<Event>, ActionError> {
        self.ensure_player_turn()?;
        self.dealer_play(Stake::Single).map(Some)
    }

    /// Player action: double the stake, take exactly one card, then stand.
    ///
    /// The second stake is only taken or paid at settlement, so the player
    /// must still hold at least the original bet.
    pub(super) fn double_down(&mut self) -> Result<Option<Event>, ActionError> {
        self.ensure_player_turn()?;
        if self.money < self.bet {
            return Err(ActionError::InsufficientFunds);
        }

        if let Some(event) = self.draw_for_player(Outcome::DoubleLoss)? {
            return Ok(Some(event));
        }
        self.dealer_play(Stake::Doubled).map(Some)
    }

    /// Player action: give up the hand and recover half the stake.
    pub(super) fn surrender(&mut self) -> Result<Option<Event>, ActionError> {
        self.ensure_player_turn()?;
        Ok(Some(self.finish_round(Outcome::Surrender)))
    }

    /// Moves on from a settled round.
    ///
    /// Ends the game if the player can no longer afford the minimum bet,
    /// otherwise reshuffles with `seed` when a reshuffle is pending.
    pub(super) fn restart(&mut self, seed: u32) -> Result<Option<Event>, ActionError> {
        self.player_hand.clear();
        self.dealer_hand.clear();
        self.bet = 0;
        self.turn = Turn::Player;

        if self.money < MIN_BET {
            tracing::info!(money = self.money, "game over");
            self.phase = Phase::GameOver;
            return Ok(Some(Event::GameOver));
        }

        self.phase = Phase::Bet;
        if !self.need_reshuffle {
            return Ok(None);
        }

        tracing::debug!(seed, cards_dealt = self.cards_dealt(), "reshuffling shoe");
        self.shoe = Shoe::shuffled(self.deck_count, seed);
        self.need_reshuffle = false;
        Ok(Some(Event::Reshuffled { seed }))
    }
}
