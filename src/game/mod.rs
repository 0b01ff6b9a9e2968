//! Game session and round flow.

use core::fmt::Display;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::bankroll::{Bankroll, History, Statistics};
use crate::card::Card;
use crate::dealer::{self, CommentCategory, Gesture};
use crate::error::ShoeError;
use crate::events::{EventBus, GameEvent, Seat};
use crate::hand::{DealerHand, HOLE_INDEX, Hand};
use crate::options::TableOptions;
use crate::result::{HistoryEntry, RoundResult};
use crate::shoe::Shoe;

mod actions;
mod bet;
mod dealer_turn;
pub mod state;

pub use dealer_turn::{DealerStep, DealerSteps};
pub use state::{Phase, Round};

fn rejected<E: Display>(err: E) -> E {
    log::warn!("command rejected: {err}");
    err
}

/// A single-player blackjack table.
///
/// The session owns the shoe, the round in play, the bankroll, the statistics
/// and the history. Every command runs to completion before returning, and
/// the changes it makes are announced through [`GameSession::drain_events`].
#[derive(Debug)]
pub struct GameSession {
    options: TableOptions,
    shoe: Shoe,
    rng: ChaCha8Rng,
    phase: Phase,
    round: Option<Round>,
    bankroll: Bankroll,
    stats: Statistics,
    history: History,
    events: EventBus,
}

impl GameSession {
    /// Opens a table with the given seed.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::InvalidConfiguration`] if `options.decks` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{GameSession, Phase, TableOptions};
    ///
    /// let session = GameSession::new(TableOptions::default(), 42).unwrap();
    /// assert_eq!(session.phase(), Phase::Idle);
    /// assert_eq!(session.chips(), 200);
    /// ```
    pub fn new(options: TableOptions, seed: u64) -> Result<Self, ShoeError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let shoe = Shoe::build(options.decks, &mut rng)?;
        let bankroll = Bankroll::new(options.starting_chips);

        let mut session = Self {
            options,
            shoe,
            rng,
            phase: Phase::Idle,
            round: None,
            bankroll,
            stats: Statistics::default(),
            history: History::new(),
            events: EventBus::new(),
        };
        session.open_table();

        Ok(session)
    }

    fn open_table(&mut self) {
        let text = dealer::greeting(&mut self.rng);
        self.events.push(GameEvent::DealerGreeting { text });
        self.events.push(GameEvent::DealerGesture(Gesture::Wave));

        if self.bankroll.is_empty() {
            self.enter_game_over();
        }
    }

    fn enter_game_over(&mut self) {
        log::info!("bankroll empty, game over");
        self.events.push(GameEvent::GameOver);
        self.set_phase(Phase::GameOver);
    }

    fn set_phase(&mut self, phase: Phase) {
        if self.phase != phase {
            log::debug!("phase {:?} -> {phase:?}", self.phase);
            self.phase = phase;
            self.events.push(GameEvent::PhaseChanged(phase));
        }
    }

    fn say(&mut self, category: CommentCategory) {
        let text = dealer::comment(category, &mut self.rng);
        self.events.push(GameEvent::DealerComment { category, text });
    }

    /// Draws a card from the shoe.
    fn draw(&mut self) -> Result<Card, ShoeError> {
        let drawn = self.shoe.draw(&mut self.rng)?;
        if drawn.replenished {
            log::info!("shoe replenished with a fresh deck");
            self.events.push(GameEvent::ShoeReplenished);
        }
        let card = drawn.card;
        log::debug!("drew {card:?}, {} left in shoe", self.shoe.len());
        Ok(card)
    }

    /// Draws a card into the given hand of the current round.
    fn deal_to(&mut self, seat: Seat, concealed: bool) -> Result<Card, ShoeError> {
        let card = self.draw()?;

        if let Some(round) = self.round.as_mut() {
            match seat {
                Seat::Player => round.player.add_card(card),
                Seat::Dealer => round.dealer.add_card(card),
            }
        }

        self.events.push(GameEvent::CardDealt {
            seat,
            card,
            concealed,
        });
        if seat == Seat::Dealer {
            self.events.push(GameEvent::DealerGesture(Gesture::Deal));
        }

        Ok(card)
    }

    fn reveal_hole(&mut self) {
        let Some(round) = self.round.as_mut() else {
            return;
        };
        if round.dealer.is_hole_revealed() {
            return;
        }

        round.dealer.reveal_hole();
        if let Some(&card) = round.dealer.cards().get(HOLE_INDEX) {
            self.events.push(GameEvent::HoleCardRevealed(card));
        }
    }

    /// Abandons the round after the shoe failed to supply a card.
    ///
    /// Chips and statistics are left as they were before the bet.
    fn abort_round(&mut self, err: ShoeError) {
        log::error!("round aborted: {err}");
        self.round = None;
        self.events.push(GameEvent::RoundAborted);
        self.set_phase(Phase::Idle);
    }

    /// Starts the game over: chips back to the starting amount, statistics
    /// and history cleared, a fresh shoe, and no round on the table.
    ///
    /// Valid in every phase.
    pub fn reset(&mut self) {
        self.bankroll = Bankroll::new(self.options.starting_chips);
        self.stats = Statistics::default();
        self.history.clear();
        self.round = None;
        self.shoe = Shoe::build(self.options.decks, &mut self.rng).unwrap_or_else(|err| {
            log::error!("could not rebuild shoe: {err}");
            Shoe::default()
        });

        log::info!("game reset with {} chips", self.bankroll.chips());
        self.events.push(GameEvent::GameReset);
        self.set_phase(Phase::Idle);
        self.open_table();
    }

    /// Returns the table options.
    #[must_use]
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the player's chips.
    #[must_use]
    pub const fn chips(&self) -> u32 {
        self.bankroll.chips()
    }

    /// Returns the bankroll.
    #[must_use]
    pub const fn bankroll(&self) -> &Bankroll {
        &self.bankroll
    }

    /// Returns the win/loss/tie counters.
    #[must_use]
    pub const fn statistics(&self) -> &Statistics {
        &self.stats
    }

    /// Returns the full round log.
    #[must_use]
    pub const fn history(&self) -> &History {
        &self.history
    }

    /// Returns the rounds shown to the player, oldest first.
    #[must_use]
    pub fn recent_history(&self) -> &[HistoryEntry] {
        self.history.recent(self.options.history_window)
    }

    /// Returns the round on the table, if any.
    #[must_use]
    pub const fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    /// Returns the current bet, if a round is on the table.
    #[must_use]
    pub fn bet(&self) -> Option<u32> {
        self.round.as_ref().map(Round::bet)
    }

    /// Returns the player's hand, if a round is on the table.
    #[must_use]
    pub fn player_hand(&self) -> Option<&Hand> {
        self.round.as_ref().map(Round::player)
    }

    /// Returns the dealer's hand, if a round is on the table.
    ///
    /// Use [`DealerHand::concealed_index`] to find the face-down card.
    #[must_use]
    pub fn dealer_hand(&self) -> Option<&DealerHand> {
        self.round.as_ref().map(Round::dealer)
    }

    /// Returns the result of the round on the table, once settled.
    #[must_use]
    pub fn last_result(&self) -> Option<&RoundResult> {
        self.round.as_ref().and_then(Round::result)
    }

    /// Returns the number of cards remaining in the shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.shoe.len()
    }

    /// Returns the shoe.
    #[must_use]
    pub const fn shoe(&self) -> &Shoe {
        &self.shoe
    }

    /// Returns the shoe for replacement, e.g. to stack the deck in tests.
    pub const fn shoe_mut(&mut self) -> &mut Shoe {
        &mut self.shoe
    }

    /// Removes and yields every queued notification, oldest first.
    pub fn drain_events(&mut self) -> impl Iterator<Item = GameEvent> + '_ {
        self.events.drain()
    }

    /// Returns the queued notifications without removing them.
    #[must_use]
    pub fn pending_events(&self) -> &[GameEvent] {
        self.events.pending()
    }
}
