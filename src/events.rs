//! Notifications for the presentation layer.
//!
//! The session never calls into the UI. It queues [`GameEvent`]s as it
//! changes state and the adapter drains them after each command, applying
//! whatever pacing, animation or audio it likes.

use alloc::vec::Vec;

use crate::card::Card;
use crate::dealer::{CommentCategory, Gesture};
use crate::game::Phase;
use crate::result::HandOutcome;

/// Who received a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    /// The player.
    Player,
    /// The dealer.
    Dealer,
}

/// Something the presentation layer may want to react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The round moved to a new phase.
    PhaseChanged(Phase),
    /// A bet was accepted.
    BetPlaced {
        /// The bet.
        amount: u32,
    },
    /// Shuffle flourish before the deal.
    Shuffling,
    /// A card landed in a hand.
    CardDealt {
        /// Receiving hand.
        seat: Seat,
        /// The card.
        card: Card,
        /// Whether the card is dealt face down.
        concealed: bool,
    },
    /// The shoe ran low and was replaced by a fresh deck.
    ShoeReplenished,
    /// The dealer turned over the hole card.
    HoleCardRevealed(Card),
    /// The round was settled.
    RoundSettled {
        /// How it was decided.
        outcome: HandOutcome,
        /// Chips won (positive) or lost (negative).
        net: i64,
    },
    /// Table talk.
    DealerComment {
        /// What prompted it.
        category: CommentCategory,
        /// The line.
        text: &'static str,
    },
    /// Opening line for a fresh table.
    DealerGreeting {
        /// The line.
        text: &'static str,
    },
    /// Dealer avatar cue.
    DealerGesture(Gesture),
    /// A settled round was cleared from the table.
    TableCleared,
    /// The round was abandoned because the shoe could not supply a card.
    RoundAborted,
    /// The bankroll is empty.
    GameOver,
    /// Chips, statistics, history and shoe were reset.
    GameReset,
}

/// Queue of pending notifications.
#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<GameEvent>,
}

impl EventBus {
    /// Creates an empty queue.
    #[must_use]
    pub const fn new() -> Self {
        Self { queue: Vec::new() }
    }

    /// Queues an event.
    pub fn push(&mut self, event: GameEvent) {
        self.queue.push(event);
    }

    /// Removes and yields every queued event, oldest first.
    pub fn drain(&mut self) -> impl Iterator<Item = GameEvent> + '_ {
        self.queue.drain(..)
    }

    /// Returns the queued events without removing them.
    #[must_use]
    pub fn pending(&self) -> &[GameEvent] {
        &self.queue
    }

    /// Returns the number of queued events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Returns whether nothing is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
