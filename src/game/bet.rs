use crate::dealer::CommentCategory;
use crate::error::{BetError, ShoeError};
use crate::events::{GameEvent, Seat};
use crate::result::HandOutcome;

use super::{GameSession, Phase, Round, rejected};

impl GameSession {
    fn validate_bet(&self, amount: u32) -> Result<(), BetError> {
        match self.phase {
            Phase::Idle => {}
            Phase::GameOver => return Err(BetError::GameOver),
            _ => return Err(BetError::RoundInProgress),
        }

        let minimum = self.options.minimum_bet;
        if amount < minimum || amount == 0 {
            return Err(BetError::BelowMinimum { minimum });
        }

        let increment = self.options.bet_increment;
        if increment > 0 && amount % increment != 0 {
            return Err(BetError::NotMultiple { increment });
        }

        let chips = self.bankroll.chips();
        if amount > chips {
            return Err(BetError::InsufficientFunds { chips });
        }

        Ok(())
    }

    /// Deals two cards to the player, then the dealer's up card and hole card.
    fn deal_opening(&mut self) -> Result<(), ShoeError> {
        self.deal_to(Seat::Player, false)?;
        self.deal_to(Seat::Player, false)?;
        self.deal_to(Seat::Dealer, false)?;
        self.deal_to(Seat::Dealer, true)?;
        Ok(())
    }

    /// Places a bet and deals the opening hands.
    ///
    /// A bet is accepted in [`Phase::Idle`] when it is at least the table
    /// minimum, a multiple of the bet increment, and no more than the chips
    /// held. A settled round still on the table is cleared first. A player
    /// natural settles immediately at the blackjack payout; otherwise the
    /// session waits in [`Phase::PlayerTurn`].
    ///
    /// Chips only change at settlement.
    ///
    /// # Errors
    ///
    /// Returns an error, leaving the session untouched, if a round is in
    /// progress, the game is over, or the amount is invalid. Returns
    /// [`BetError::NoCards`] if the shoe could not supply the deal, in which
    /// case the round is aborted.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{BetError, GameSession, TableOptions};
    ///
    /// let mut session = GameSession::new(TableOptions::default(), 7).unwrap();
    /// assert_eq!(
    ///     session.place_bet(7).unwrap_err(),
    ///     BetError::NotMultiple { increment: 5 }
    /// );
    /// session.place_bet(20).unwrap();
    /// assert_eq!(session.bet(), Some(20));
    /// ```
    pub fn place_bet(&mut self, amount: u32) -> Result<(), BetError> {
        self.validate_bet(amount).map_err(rejected)?;

        log::info!("bet of {amount} accepted");
        self.round = Some(Round::new(amount));
        self.events.push(GameEvent::BetPlaced { amount });
        self.set_phase(Phase::Betting);
        self.say(CommentCategory::Welcome);
        self.events.push(GameEvent::Shuffling);

        self.set_phase(Phase::Dealing);
        if let Err(err) = self.deal_opening() {
            self.abort_round(err);
            return Err(BetError::NoCards);
        }

        let natural = self
            .round
            .as_ref()
            .is_some_and(|round| round.player.is_blackjack());
        if natural {
            self.settle(HandOutcome::Blackjack);
        } else {
            self.set_phase(Phase::PlayerTurn);
        }

        Ok(())
    }
}
