//! Card types.

use crate::error::CardError;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// All four suits, in shoe build order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Hearts, Self::Diamonds, Self::Clubs];
}

/// Lowest legal rank (Ace).
pub const ACE: u8 = 1;

/// Highest legal rank (King).
pub const KING: u8 = 13;

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// A playing card.
///
/// Cards are immutable once built. The rank is validated on construction, so
/// a `Card` always carries a rank in `1..=13`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    suit: Suit,
    rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] if `rank` is outside `1..=13`.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{Card, Suit};
    ///
    /// let king = Card::new(Suit::Clubs, 13).unwrap();
    /// assert_eq!(king.blackjack_value(), 10);
    /// assert!(Card::new(Suit::Clubs, 14).is_err());
    /// ```
    pub const fn new(suit: Suit, rank: u8) -> Result<Self, CardError> {
        if rank < ACE || rank > KING {
            return Err(CardError::InvalidRank(rank));
        }
        Ok(Self { suit, rank })
    }

    /// Builds a card from a rank the caller already knows is in range.
    pub(crate) const fn from_valid(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Returns the suit.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the rank (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    #[must_use]
    pub const fn rank(&self) -> u8 {
        self.rank
    }

    /// Returns whether the card is an ace.
    #[must_use]
    pub const fn is_ace(&self) -> bool {
        self.rank == ACE
    }

    /// Returns the card's face value before any ace correction.
    ///
    /// Aces count 11, court cards 10, everything else its rank.
    #[must_use]
    pub const fn blackjack_value(&self) -> u8 {
        match self.rank {
            ACE => 11,
            2..=10 => self.rank,
            _ => 10,
        }
    }
}
