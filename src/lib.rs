//! A single-player blackjack table engine with optional `no_std` support.
//!
//! The crate provides a [`GameSession`] that owns the shoe, both hands, the
//! bankroll and the statistics, and moves a round through betting, dealing,
//! the player's turn, the dealer's turn and settlement. Presentation layers
//! drive it with commands and react to the [`GameEvent`]s it queues.
//!
//! # Example
//!
//! ```no_run
//! use bjtable::{GameSession, TableOptions};
//!
//! let mut session = GameSession::new(TableOptions::default(), 42).unwrap();
//! session.place_bet(20).unwrap();
//! for event in session.drain_events() {
//!     let _ = event;
//! }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod bankroll;
pub mod card;
pub mod dealer;
pub mod error;
pub mod events;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod shoe;

// Re-export main types
pub use bankroll::{Bankroll, History, Statistics};
pub use card::{Card, DECK_SIZE, Suit};
pub use dealer::{CommentCategory, Gesture};
pub use error::{ActionError, BetError, CardError, ShoeError, ShowdownError};
pub use events::{EventBus, GameEvent, Seat};
pub use game::{DealerStep, DealerSteps, GameSession, Phase, Round};
pub use hand::{DealerHand, Hand, total_of};
pub use options::TableOptions;
pub use result::{HandOutcome, HistoryEntry, Outcome, RoundResult};
pub use shoe::Shoe;
