//! Round phases and the round in play.

use crate::hand::{DealerHand, Hand};
use crate::result::RoundResult;

/// Where the table is in the round cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// No round in play; a bet may be placed.
    Idle,
    /// A bet was accepted.
    Betting,
    /// Opening cards are being dealt.
    Dealing,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// The dealer plays out the hand.
    DealerTurn,
    /// Chips and statistics are being updated.
    Settled,
    /// The bankroll is empty; only a reset leaves this phase.
    GameOver,
}

impl Phase {
    /// Returns whether a round is being played.
    #[must_use]
    pub const fn is_round_active(self) -> bool {
        matches!(
            self,
            Self::Betting | Self::Dealing | Self::PlayerTurn | Self::DealerTurn | Self::Settled
        )
    }
}

/// The round on the table: the bet and both hands.
///
/// A settled round stays on the table, with its result, until it is cleared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub(crate) bet: u32,
    pub(crate) player: Hand,
    pub(crate) dealer: DealerHand,
    pub(crate) result: Option<RoundResult>,
}

impl Round {
    pub(crate) const fn new(bet: u32) -> Self {
        Self {
            bet,
            player: Hand::new(),
            dealer: DealerHand::new(),
            result: None,
        }
    }

    /// Returns the bet.
    #[must_use]
    pub const fn bet(&self) -> u32 {
        self.bet
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer(&self) -> &DealerHand {
        &self.dealer
    }

    /// Returns the result once the round has been settled.
    #[must_use]
    pub const fn result(&self) -> Option<&RoundResult> {
        self.result.as_ref()
    }

    /// Returns whether the round has been settled.
    #[must_use]
    pub const fn is_settled(&self) -> bool {
        self.result.is_some()
    }
}
