use crate::card::Card;
use crate::dealer::CommentCategory;
use crate::error::ActionError;
use crate::events::{GameEvent, Seat};
use crate::hand::BLACKJACK;
use crate::result::HandOutcome;

use super::{GameSession, Phase, rejected};

impl GameSession {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        match self.phase {
            Phase::PlayerTurn => Ok(()),
            Phase::DealerTurn => Err(ActionError::DealerPlaying),
            _ => Err(ActionError::InvalidState),
        }
    }

    /// Reveals the hole card and hands play to the dealer.
    pub(super) fn begin_dealer_turn(&mut self) {
        self.reveal_hole();
        self.set_phase(Phase::DealerTurn);
    }

    /// Player action: Hit (draw a card).
    ///
    /// Going over 21 settles the round as a loss. Reaching exactly 21 stands
    /// automatically.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn, or
    /// [`ActionError::NoCards`] if the shoe could not supply a card, in which
    /// case the round is aborted.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn().map_err(rejected)?;

        let card = match self.deal_to(Seat::Player, false) {
            Ok(card) => card,
            Err(err) => {
                self.abort_round(err);
                return Err(ActionError::NoCards);
            }
        };

        let value = self.round.as_ref().map_or(0, |round| round.player.value());
        if value > BLACKJACK {
            self.settle(HandOutcome::Bust);
        } else if value == BLACKJACK {
            self.begin_dealer_turn();
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// Reveals the hole card and moves to [`Phase::DealerTurn`]; the dealer's
    /// play is then consumed with [`GameSession::dealer_step`],
    /// [`GameSession::dealer_steps`] or [`GameSession::play_dealer`].
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::DealerPlaying`] if the dealer is already
    /// playing, or [`ActionError::InvalidState`] outside the player's turn.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn().map_err(rejected)?;
        self.begin_dealer_turn();
        Ok(())
    }

    /// Clears a settled round from the table.
    ///
    /// Chips and statistics are not touched.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::NothingToContinue`] when the table is already
    /// clear, or [`ActionError::InvalidState`] while a round is in play or
    /// the game is over.
    pub fn continue_round(&mut self) -> Result<(), ActionError> {
        match (self.phase, self.round.is_some()) {
            (Phase::Idle, true) => {}
            (Phase::Idle, false) => return Err(rejected(ActionError::NothingToContinue)),
            _ => return Err(rejected(ActionError::InvalidState)),
        }

        self.round = None;
        self.events.push(GameEvent::TableCleared);
        self.say(CommentCategory::Welcome);
        Ok(())
    }
}
