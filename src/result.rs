//! Round outcomes and money settlement.

use crate::options::MIN_BET;

/// Purse size at which the house stops paying out wins.
pub const HOUSE_LIMIT: u16 = 65_000;

/// How a round ended for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player was dealt a natural and the dealer was not.
    NaturalBlackjackWin,
    /// Player won without doubling.
    NormalWin,
    /// Player won after doubling.
    DoubleWin,
    /// Push without doubling (including two naturals).
    NormalDraw,
    /// Push after doubling.
    DoubleDraw,
    /// Player lost without doubling.
    NormalLoss,
    /// Player lost after doubling.
    DoubleLoss,
    /// Player surrendered.
    Surrender,
}

impl Outcome {
    /// Returns whether the outcome pays the player more than the stake back.
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(
            self,
            Self::NaturalBlackjackWin | Self::NormalWin | Self::DoubleWin
        )
    }
}

/// Result of settling a round against the player's purse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settlement {
    /// Money after settlement.
    pub money: u16,
    /// The player won but the purse was already at [`HOUSE_LIMIT`], so nothing
    /// was paid.
    pub house_broke: bool,
}

/// Settles a round.
///
/// The stake was taken from `money` when the bet was placed, so a plain loss
/// leaves `money` unchanged and a doubled loss takes the stake a second time.
/// Naturals pay `bet * (10 + payout_numerator) / 10`, truncated.
///
/// # Example
///
/// ```
/// use bjsave::{Outcome, settle};
///
/// let settled = settle(15, 10, 100, Outcome::NaturalBlackjackWin);
/// assert_eq!(settled.money, 125);
/// assert!(!settled.house_broke);
/// ```
#[must_use]
pub fn settle(payout_numerator: u8, bet: u16, money: u16, outcome: Outcome) -> Settlement {
    if money >= HOUSE_LIMIT && outcome.is_win() {
        return Settlement {
            money,
            house_broke: true,
        };
    }

    let stake = u32::from(bet);
    let credit = match outcome {
        Outcome::NaturalBlackjackWin => stake * (10 + u32::from(payout_numerator)) / 10,
        Outcome::NormalWin => stake * 2,
        Outcome::DoubleWin => stake * 3,
        Outcome::NormalDraw | Outcome::DoubleDraw => stake,
        Outcome::NormalLoss => 0,
        Outcome::DoubleLoss => {
            return Settlement {
                money: money.saturating_sub(bet),
                house_broke: false,
            };
        }
        Outcome::Surrender => stake / 2,
    };

    Settlement {
        money: (u32::from(money) + credit).min(u32::from(u16::MAX)) as u16,
        house_broke: false,
    }
}

/// Summary of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// How the round ended.
    pub outcome: Outcome,
    /// The player's final total.
    pub player_total: u8,
    /// The dealer's final total.
    pub dealer_total: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// The stake placed for the round.
    pub bet: u16,
    /// Money after settlement.
    pub money: u16,
    /// Whether a win went unpaid because the purse hit [`HOUSE_LIMIT`].
    pub house_broke: bool,
}

impl RoundResult {
    /// Returns whether the player can no longer afford the minimum bet.
    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.money < MIN_BET
    }
}
