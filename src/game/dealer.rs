use core::cmp::Ordering;

use crate::error::ActionError;
use crate::hand::evaluate;
use crate::result::{Outcome, RoundResult, settle};

use super::{Event, GameState, Phase, Turn};

/// Whether the round's stake was doubled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Stake {
    Single,
    Doubled,
}

impl Stake {
    const fn win(self) -> Outcome {
        match self {
            Self::Single => Outcome::NormalWin,
            Self::Doubled => Outcome::DoubleWin,
        }
    }

    const fn draw(self) -> Outcome {
        match self {
            Self::Single => Outcome::NormalDraw,
            Self::Doubled => Outcome::DoubleDraw,
        }
    }

    const fn loss(self) -> Outcome {
        match self {
            Self::Single => Outcome::NormalLoss,
            Self::Doubled => Outcome::DoubleLoss,
        }
    }
}

impl GameState {
    /// Whether the dealer must draw another card.
    ///
    /// The dealer draws on 16 or less, and on a soft 17 when the table hits
    /// soft 17.
    fn dealer_must_hit(&self) -> bool {
        let (total, soft_17) = evaluate(self.dealer_hand.cards());
        total <= 16 || (soft_17 && self.hit_on_soft_17)
    }

    /// Reveals the hole card, draws out the dealer's hand and settles.
    pub(super) fn dealer_play(&mut self, stake: Stake) -> Result<Event, ActionError> {
        self.turn = Turn::Dealer;
        self.dealer_hand.reveal_hole();

        while self.dealer_must_hit() {
            let card = self.draw()?;
            self.dealer_hand.add_card(card);
        }

        let outcome = if self.dealer_hand.is_bust() {
            stake.win()
        } else {
            match self.player_hand.value().cmp(&self.dealer_hand.value()) {
                Ordering::Greater => stake.win(),
                Ordering::Equal => stake.draw(),
                Ordering::Less => stake.loss(),
            }
        };
        Ok(self.finish_round(outcome))
    }

    /// Settles the round and moves to the end phase.
    pub(super) fn finish_round(&mut self, outcome: Outcome) -> Event {
        self.dealer_hand.reveal_hole();
        let settlement = settle(self.payout_numerator, self.bet, self.money, outcome);
        self.money = settlement.money;
        self.phase = Phase::End;

        let result = RoundResult {
            outcome,
            player_total: self.player_hand.value(),
            dealer_total: self.dealer_hand.value(),
            dealer_bust: self.dealer_hand.is_bust(),
            bet: self.bet,
            money: self.money,
            house_broke: settlement.house_broke,
        };

        if settlement.house_broke {
            tracing::warn!(money = self.money, ?outcome, "house limit reached, winnings withheld");
        }
        tracing::debug!(
            ?outcome,
            player_total = result.player_total,
            dealer_total = result.dealer_total,
            money = self.money,
            "round settled"
        );

        Event::RoundOver(result)
    }
}
