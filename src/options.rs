//! Table configuration.

/// Configuration options for a blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjtable::TableOptions;
///
/// let options = TableOptions::default()
///     .with_starting_chips(500)
///     .with_minimum_bet(10);
/// assert_eq!(options.starting_chips, 500);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TableOptions {
    /// Number of decks in the initial shoe and after a reset.
    pub decks: u8,
    /// Chips held at the start of a game and after a reset.
    pub starting_chips: u32,
    /// Smallest accepted bet.
    pub minimum_bet: u32,
    /// Bets must be a multiple of this amount.
    pub bet_increment: u32,
    /// Blackjack payout ratio.
    pub blackjack_pays: f64,
    /// Number of history entries shown by [`recent_history`](crate::GameSession::recent_history).
    pub history_window: usize,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            decks: 1,
            starting_chips: 200,
            minimum_bet: 5,
            bet_increment: 5,
            blackjack_pays: 1.5,
            history_window: 5,
        }
    }
}

impl TableOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_decks(6);
    /// assert_eq!(options.decks, 6);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the starting chips.
    #[must_use]
    pub const fn with_starting_chips(mut self, chips: u32) -> Self {
        self.starting_chips = chips;
        self
    }

    /// Sets the minimum bet.
    #[must_use]
    pub const fn with_minimum_bet(mut self, minimum: u32) -> Self {
        self.minimum_bet = minimum;
        self
    }

    /// Sets the bet increment.
    ///
    /// An increment of zero accepts any amount at or above the minimum.
    #[must_use]
    pub const fn with_bet_increment(mut self, increment: u32) -> Self {
        self.bet_increment = increment;
        self
    }

    /// Sets the blackjack payout ratio.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_blackjack_pays(1.2);
    /// assert_eq!(options.blackjack_pays, 1.2);
    /// ```
    #[must_use]
    pub const fn with_blackjack_pays(mut self, ratio: f64) -> Self {
        self.blackjack_pays = ratio;
        self
    }

    /// Sets how many history entries are shown.
    #[must_use]
    pub const fn with_history_window(mut self, window: usize) -> Self {
        self.history_window = window;
        self
    }
}
