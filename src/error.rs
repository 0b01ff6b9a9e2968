//! Error types for table operations.
//!
//! The `Display` text of each variant doubles as the message shown to the
//! player when a command is rejected.

use thiserror::Error;

/// Errors that can occur when building a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Rank outside `1..=13`.
    #[error("invalid card rank {0}")]
    InvalidRank(u8),
}

/// Errors raised by the shoe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShoeError {
    /// A shoe needs at least one deck.
    #[error("a shoe needs at least one deck")]
    InvalidConfiguration,
    /// No card could be drawn even after replenishing.
    #[error("the shoe is empty")]
    EmptyShoe,
}

/// Errors that can occur when placing a bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// A round is already being played.
    #[error("game in progress, finish this round first")]
    RoundInProgress,
    /// The bankroll is empty; only a reset can start a new game.
    #[error("game over, you're out of chips")]
    GameOver,
    /// Bet is below the table minimum.
    #[error("minimum bet is ${minimum}")]
    BelowMinimum {
        /// Table minimum.
        minimum: u32,
    },
    /// Bet is not a multiple of the table increment.
    #[error("bets must be placed in increments of ${increment}")]
    NotMultiple {
        /// Table increment.
        increment: u32,
    },
    /// Bet exceeds the bankroll.
    #[error("you don't have enough chips, you have ${chips}")]
    InsufficientFunds {
        /// Chips currently held.
        chips: u32,
    },
    /// The shoe ran dry while dealing; the round was aborted.
    #[error("no cards left in the shoe, round aborted")]
    NoCards,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The action is not valid in the current phase.
    #[error("that action is not available right now")]
    InvalidState,
    /// The dealer is already playing out the hand.
    #[error("the dealer is already playing")]
    DealerPlaying,
    /// There is no settled round on the table to clear.
    #[error("there is no finished round to clear")]
    NothingToContinue,
    /// The shoe ran dry; the round was aborted.
    #[error("no cards left in the shoe, round aborted")]
    NoCards,
}

/// Errors that can occur while the dealer plays and the round settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowdownError {
    /// The dealer is not playing.
    #[error("invalid game state for the dealer turn")]
    InvalidState,
    /// The shoe ran dry; the round was aborted.
    #[error("no cards left in the shoe, round aborted")]
    NoCards,
}
