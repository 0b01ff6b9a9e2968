//! Round result types for settlement.

use crate::dealer::CommentCategory;

/// How a round was decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandOutcome {
    /// Player was dealt a two-card 21.
    Blackjack,
    /// Player's total beat the dealer's.
    Win,
    /// Dealer went over 21.
    DealerBust,
    /// Dealer's total beat the player's.
    Lose,
    /// Player went over 21.
    Bust,
    /// Equal totals.
    Push,
}

impl HandOutcome {
    /// Collapses the outcome into the win/loss/tie column it is counted in.
    #[must_use]
    pub const fn result(self) -> Outcome {
        match self {
            Self::Blackjack | Self::Win | Self::DealerBust => Outcome::Win,
            Self::Lose | Self::Bust => Outcome::Loss,
            Self::Push => Outcome::Tie,
        }
    }

    /// Returns the dealer's comment category for this outcome.
    #[must_use]
    pub const fn comment_category(self) -> CommentCategory {
        match self {
            Self::Blackjack => CommentCategory::Blackjack,
            Self::Win => CommentCategory::Win,
            Self::DealerBust => CommentCategory::DealerBust,
            Self::Lose => CommentCategory::Lose,
            Self::Bust => CommentCategory::Bust,
            Self::Push => CommentCategory::Tie,
        }
    }
}

/// Win, loss or tie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player won chips.
    Win,
    /// Player lost the bet.
    Loss,
    /// Bet returned.
    Tie,
}

/// Result of a settled round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// How the round was decided.
    pub outcome: HandOutcome,
    /// The bet.
    pub bet: u32,
    /// Chips won (positive) or lost (negative).
    pub net: i64,
    /// The player's final total.
    pub player_value: u16,
    /// The dealer's final total.
    pub dealer_value: u16,
    /// Bankroll after settlement.
    pub chips: u32,
}

/// One line of the round log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryEntry {
    /// The bet.
    pub bet: u32,
    /// How the round was decided.
    pub outcome: HandOutcome,
    /// Chips won (positive) or lost (negative).
    pub net: i64,
    /// The player's final total.
    pub player_value: u16,
    /// The dealer's final total.
    pub dealer_value: u16,
}

impl From<RoundResult> for HistoryEntry {
    fn from(result: RoundResult) -> Self {
        Self {
            bet: result.bet,
            outcome: result.outcome,
            net: result.net,
            player_value: result.player_value,
            dealer_value: result.dealer_value,
        }
    }
}
