//! Setup wizard: new-game configuration and save loading.

use crate::error::ActionError;
use crate::options::{GameOptions, MIN_BET, Penetration};
use crate::save;

use super::{Action, ConfigStep, Event, GameState, Phase};

impl GameState {
    pub(super) fn configure(
        &mut self,
        step: ConfigStep,
        action: Action,
    ) -> Result<Option<Event>, ActionError> {
        match (step, action) {
            (_, Action::Back) => Ok(self.step_back(step)),
            (
                ConfigStep::StartUp | ConfigStep::Load | ConfigStep::LoadFail,
                Action::NewGame,
            ) => {
                *self = Self::blank(Phase::Config(ConfigStep::Payout), GameOptions::default());
                Ok(None)
            }
            (ConfigStep::StartUp, Action::LoadGame) => {
                self.phase = Phase::Config(ConfigStep::Load);
                Ok(None)
            }
            (ConfigStep::Load, Action::LoadSave(line)) => Ok(self.load(&line)),
            (ConfigStep::Payout, Action::ChoosePayout(payout)) => {
                self.payout_numerator = payout.numerator();
                self.phase = Phase::Config(ConfigStep::DealerRule);
                Ok(None)
            }
            (ConfigStep::DealerRule, Action::ChooseDealerRule { hit_on_soft_17 }) => {
                self.hit_on_soft_17 = hit_on_soft_17;
                self.phase = Phase::Config(ConfigStep::Decks);
                Ok(None)
            }
            (ConfigStep::Decks, Action::ChooseDecks(decks)) => {
                if decks == 0 {
                    tracing::warn!("deck count of zero, using one deck");
                }
                self.deck_count = decks.max(1);
                self.phase = Phase::Config(ConfigStep::Penetration);
                Ok(None)
            }
            (ConfigStep::Penetration, Action::ChoosePenetration { penetration, seed }) => {
                let offered = Penetration::options(self.deck_count);
                let penetration = if offered.contains(&penetration) {
                    penetration
                } else {
                    tracing::warn!(
                        ?penetration,
                        decks = self.deck_count,
                        "penetration not offered for this shoe, using half"
                    );
                    Penetration::Half
                };
                self.money = GameOptions::default().starting_money;
                self.open_shoe(penetration, seed);
                self.phase = Phase::Config(ConfigStep::StartConfirm);
                Ok(None)
            }
            (ConfigStep::StartConfirm, Action::Confirm) => {
                tracing::info!(
                    decks = self.deck_count,
                    payout = self.payout_numerator,
                    hit_on_soft_17 = self.hit_on_soft_17,
                    "new game started"
                );
                self.phase = Phase::Bet;
                Ok(None)
            }
            (ConfigStep::LoadConfirm, Action::Confirm) => {
                if self.money < MIN_BET {
                    self.phase = Phase::GameOver;
                    return Ok(Some(Event::GameOver));
                }
                self.phase = Phase::Bet;
                Ok(None)
            }
            _ => Err(ActionError::InvalidState),
        }
    }

    fn step_back(&mut self, step: ConfigStep) -> Option<Event> {
        match step.predecessor() {
            Some(previous) => {
                self.phase = Phase::Config(previous);
                None
            }
            None => Some(Event::ExitToLanguageSelection),
        }
    }

    /// Restores `line` into this state, or records why it was rejected.
    fn load(&mut self, line: &str) -> Option<Event> {
        match save::decode_save(line).and_then(Self::restore) {
            Ok(restored) => {
                *self = restored;
                self.phase = Phase::Config(ConfigStep::LoadConfirm);
                None
            }
            Err(err) => {
                tracing::warn!(%err, "save line rejected");
                self.phase = Phase::Config(ConfigStep::LoadFail);
                Some(Event::LoadFailed(err))
            }
        }
    }
}
