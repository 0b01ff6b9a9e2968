use crate::card::Card;
use crate::dealer;
use crate::error::ShowdownError;
use crate::events::{GameEvent, Seat};
use crate::hand::BLACKJACK;
use crate::result::{HandOutcome, RoundResult};

use super::{GameSession, Phase, rejected};

/// One step of the dealer's play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealerStep {
    /// The dealer took a card.
    Drew(Card),
    /// The dealer stopped and the round was settled.
    Settled(RoundResult),
}

/// The dealer's remaining steps, produced lazily.
///
/// Each call to `next` performs one step. Dropping the iterator part way
/// loses nothing: the session stays in [`Phase::DealerTurn`] and a new
/// iterator picks up where the old one stopped. The sequence ends after
/// the round is settled or aborted.
#[derive(Debug)]
pub struct DealerSteps<'a> {
    session: &'a mut GameSession,
}

impl Iterator for DealerSteps<'_> {
    type Item = Result<DealerStep, ShowdownError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.session.phase != Phase::DealerTurn {
            return None;
        }
        Some(self.session.dealer_step())
    }
}

impl GameSession {
    fn compare_hands(&self) -> HandOutcome {
        let Some(round) = self.round.as_ref() else {
            return HandOutcome::Push;
        };

        let player = round.player.value();
        let dealer = round.dealer.value();

        if dealer > BLACKJACK {
            HandOutcome::DealerBust
        } else if dealer > player {
            HandOutcome::Lose
        } else if dealer < player {
            HandOutcome::Win
        } else {
            HandOutcome::Push
        }
    }

    /// Performs one dealer decision.
    ///
    /// The dealer draws while under 17 and holding fewer than five cards.
    /// Once it stops, the totals are compared and the round is settled.
    ///
    /// # Errors
    ///
    /// Returns [`ShowdownError::InvalidState`] outside the dealer's turn, or
    /// [`ShowdownError::NoCards`] if the shoe could not supply a card, in
    /// which case the round is aborted.
    pub fn dealer_step(&mut self) -> Result<DealerStep, ShowdownError> {
        if self.phase != Phase::DealerTurn {
            return Err(rejected(ShowdownError::InvalidState));
        }

        let must_draw = self
            .round
            .as_ref()
            .is_some_and(|round| dealer::should_draw(&round.dealer));

        if must_draw {
            match self.deal_to(Seat::Dealer, false) {
                Ok(card) => Ok(DealerStep::Drew(card)),
                Err(err) => {
                    self.abort_round(err);
                    Err(ShowdownError::NoCards)
                }
            }
        } else {
            let outcome = self.compare_hands();
            Ok(DealerStep::Settled(self.settle(outcome)))
        }
    }

    /// Returns the dealer's remaining steps as a lazy iterator.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{DealerStep, GameSession, Phase, TableOptions};
    ///
    /// let mut session = GameSession::new(TableOptions::default(), 3).unwrap();
    /// session.place_bet(10).unwrap();
    /// if session.phase() == Phase::PlayerTurn {
    ///     session.stand().unwrap();
    ///     for step in session.dealer_steps() {
    ///         if let Ok(DealerStep::Drew(card)) = step {
    ///             let _ = card;
    ///         }
    ///     }
    /// }
    /// assert_ne!(session.phase(), Phase::DealerTurn);
    /// ```
    pub const fn dealer_steps(&mut self) -> DealerSteps<'_> {
        DealerSteps { session: self }
    }

    /// Plays the dealer's hand to the end and settles the round.
    ///
    /// # Errors
    ///
    /// Returns an error under the same conditions as [`GameSession::dealer_step`].
    pub fn play_dealer(&mut self) -> Result<RoundResult, ShowdownError> {
        loop {
            if let DealerStep::Settled(result) = self.dealer_step()? {
                return Ok(result);
            }
        }
    }

    /// Pays out the round and records it.
    pub(super) fn settle(&mut self, outcome: HandOutcome) -> RoundResult {
        self.set_phase(Phase::Settled);
        self.reveal_hole();

        let (bet, player_value, dealer_value) =
            self.round.as_ref().map_or((0, 0, 0), |round| {
                (round.bet, round.player.value(), round.dealer.value())
            });

        let multiplier = if outcome == HandOutcome::Blackjack {
            self.options.blackjack_pays
        } else {
            1.0
        };
        let net = self.bankroll.settle(outcome.result(), bet, multiplier);
        self.stats.record(outcome.result());

        let result = RoundResult {
            outcome,
            bet,
            net,
            player_value,
            dealer_value,
            chips: self.bankroll.chips(),
        };
        self.history.push(result.into());
        if let Some(round) = self.round.as_mut() {
            round.result = Some(result);
        }

        log::info!(
            "round settled: {outcome:?} ({player_value} vs {dealer_value}), net {net}, chips {}",
            result.chips
        );
        self.events.push(GameEvent::RoundSettled { outcome, net });
        self.say(outcome.comment_category());

        if self.bankroll.is_empty() {
            self.enter_game_over();
        } else {
            self.set_phase(Phase::Idle);
        }

        result
    }
}
