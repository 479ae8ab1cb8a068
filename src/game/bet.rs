use crate::error::ActionError;
use crate::options::BET_OPTIONS;
use crate::result::Outcome;

use super::{Event, GameState, Phase, Turn};

/// Cards needed for the opening deal.
const OPENING_CARDS: usize = 4;

impl GameState {
    /// Takes the stake and deals the opening hands.
    ///
    /// Settles the round at once when either side holds a natural.
    pub(super) fn place_bet(&mut self, amount: u16) -> Result<Option<Event>, ActionError> {
        if !BET_OPTIONS.contains(&amount) {
            return Err(ActionError::InvalidBet);
        }
        if amount > self.money {
            return Err(ActionError::InsufficientFunds);
        }
        if self.shoe.remaining() < OPENING_CARDS {
            return Err(ActionError::NoCards);
        }

        self.bet = amount;
        self.money -= amount;
        self.deal_opening_hands()
    }

    fn deal_opening_hands(&mut self) -> Result<Option<Event>, ActionError> {
        self.player_hand.clear();
        self.dealer_hand.clear();
        self.turn = Turn::Player;
        self.phase = Phase::Play;

        // Player, dealer, player, dealer.
        for _ in 0..2 {
            let card = self.draw()?;
            self.player_hand.add_card(card);
            let card = self.draw()?;
            self.dealer_hand.add_card(card);
        }

        let player_natural = self.player_hand.value() == 21;
        let dealer_natural = self.dealer_hand.value() == 21;
        let outcome = match (player_natural, dealer_natural) {
            (true, true) => Outcome::NormalDraw,
            (true, false) => Outcome::NaturalBlackjackWin,
            (false, true) => Outcome::NormalLoss,
            (false, false) => return Ok(None),
        };
        Ok(Some(self.finish_round(outcome)))
    }
}
