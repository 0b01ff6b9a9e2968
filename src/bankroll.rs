//! Chip balance, win/loss counters and the round log.

use alloc::vec::Vec;

use crate::result::{HistoryEntry, Outcome};

#[cfg(feature = "std")]
fn floor_amount(amount: f64) -> u32 {
    amount.floor() as u32
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn floor_amount(amount: f64) -> u32 {
    libm::floor(amount) as u32
}

/// The player's chips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bankroll {
    chips: u32,
}

impl Bankroll {
    /// Creates a bankroll holding `chips`.
    #[must_use]
    pub const fn new(chips: u32) -> Self {
        Self { chips }
    }

    /// Returns the current balance.
    #[must_use]
    pub const fn chips(&self) -> u32 {
        self.chips
    }

    /// Returns whether the balance has run out.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.chips == 0
    }

    /// Applies a settled round and returns the net change.
    ///
    /// A win pays `floor(bet * multiplier)`, a loss takes the bet, a tie
    /// changes nothing.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{Bankroll, Outcome};
    ///
    /// let mut bankroll = Bankroll::new(100);
    /// assert_eq!(bankroll.settle(Outcome::Win, 15, 1.5), 22);
    /// assert_eq!(bankroll.chips(), 122);
    /// ```
    pub fn settle(&mut self, outcome: Outcome, bet: u32, multiplier: f64) -> i64 {
        match outcome {
            Outcome::Win => {
                let won = floor_amount(f64::from(bet) * multiplier);
                self.chips = self.chips.saturating_add(won);
                i64::from(won)
            }
            Outcome::Loss => {
                let lost = bet.min(self.chips);
                self.chips -= lost;
                -i64::from(lost)
            }
            Outcome::Tie => 0,
        }
    }
}

/// Per-session win/loss/tie counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Statistics {
    /// Rounds settled.
    pub games_played: u32,
    /// Rounds won.
    pub wins: u32,
    /// Rounds lost.
    pub losses: u32,
    /// Rounds pushed.
    pub ties: u32,
}

impl Statistics {
    /// Counts one settled round.
    pub const fn record(&mut self, outcome: Outcome) {
        self.games_played += 1;
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Loss => self.losses += 1,
            Outcome::Tie => self.ties += 1,
        }
    }

    /// Percentage of rounds won, `0.0` before any round is played.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            f64::from(self.wins) / f64::from(self.games_played) * 100.0
        }
    }
}

/// Insertion-ordered log of settled rounds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Creates an empty log.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends a round.
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    /// Returns every round, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Returns the last `count` rounds, oldest first.
    #[must_use]
    pub fn recent(&self, count: usize) -> &[HistoryEntry] {
        let start = self.entries.len().saturating_sub(count);
        &self.entries[start..]
    }

    /// Returns the number of logged rounds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the log is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Forgets every round.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::HandOutcome;

    fn entry(bet: u32) -> HistoryEntry {
        HistoryEntry {
            bet,
            outcome: HandOutcome::Push,
            net: 0,
            player_value: 18,
            dealer_value: 18,
        }
    }

    #[test]
    fn blackjack_payout_rounds_down() {
        let mut bankroll = Bankroll::new(200);
        assert_eq!(bankroll.settle(Outcome::Win, 25, 1.5), 37);
        assert_eq!(bankroll.chips(), 237);
    }

    #[test]
    fn loss_and_tie() {
        let mut bankroll = Bankroll::new(50);
        assert_eq!(bankroll.settle(Outcome::Tie, 20, 1.0), 0);
        assert_eq!(bankroll.chips(), 50);
        assert_eq!(bankroll.settle(Outcome::Loss, 50, 1.0), -50);
        assert!(bankroll.is_empty());
    }

    #[test]
    fn win_rate_is_a_percentage() {
        let mut stats = Statistics::default();
        assert!(stats.win_rate().abs() < f64::EPSILON);

        stats.record(Outcome::Win);
        stats.record(Outcome::Loss);
        stats.record(Outcome::Tie);
        stats.record(Outcome::Win);
        assert_eq!(stats.games_played, 4);
        assert!((stats.win_rate() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn recent_keeps_the_newest_entries() {
        let mut history = History::new();
        for bet in [5, 10, 15, 20, 25, 30, 35] {
            history.push(entry(bet));
        }

        let bets: Vec<u32> = history.recent(5).iter().map(|e| e.bet).collect();
        assert_eq!(bets, vec![15, 20, 25, 30, 35]);
        assert_eq!(history.recent(50).len(), 7);
        assert_eq!(history.len(), 7);
    }
}
