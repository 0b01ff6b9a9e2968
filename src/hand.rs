//! Player and dealer hands, and the hand evaluator.

use alloc::vec::Vec;

use crate::card::Card;

/// Best total a hand can reach without busting.
pub const BLACKJACK: u16 = 21;

/// Index of the dealer's hole card.
pub const HOLE_INDEX: usize = 1;

fn evaluate_cards(cards: &[Card]) -> (u16, bool) {
    let mut value: u32 = 0;
    let mut aces: u32 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        value = value.saturating_add(u32::from(card.blackjack_value()));
    }

    // Reduce against the full sum; clamp only once aces are spent.
    while value > u32::from(BLACKJACK) && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    (u16::try_from(value).unwrap_or(u16::MAX), aces > 0)
}

/// Computes the best blackjack total of `cards`.
///
/// Every ace starts at 11; while the total is over 21, one ace at a time is
/// counted as 1 instead. The total is recomputed from scratch on each call.
///
/// # Example
///
/// ```
/// use bjtable::{Card, Suit, total_of};
///
/// let hand = [
///     Card::new(Suit::Spades, 1).unwrap(),
///     Card::new(Suit::Hearts, 1).unwrap(),
///     Card::new(Suit::Clubs, 9).unwrap(),
/// ];
/// assert_eq!(total_of(&hand), 21);
/// ```
#[must_use]
pub fn total_of(cards: &[Card]) -> u16 {
    evaluate_cards(cards).0
}

/// Returns whether `cards` still count an ace as 11.
#[must_use]
pub fn is_soft(cards: &[Card]) -> bool {
    evaluate_cards(cards).1
}

/// The player's hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the value of the hand.
    #[must_use]
    pub fn value(&self) -> u16 {
        total_of(&self.cards)
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        is_soft(&self.cards)
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }

    /// Returns whether the hand is a two-card 21.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.value() == BLACKJACK
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// The dealer's hand.
///
/// The second card is the hole card. It is part of the hand from the deal
/// onward but stays out of [`DealerHand::visible_value`] until revealed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DealerHand {
    cards: Vec<Card>,
    hole_revealed: bool,
}

impl DealerHand {
    /// Creates a new empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            hole_revealed: false,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns all cards in the hand, the hole card included.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the visible card (first card).
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Returns whether the hole card is revealed.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// Reveals the hole card.
    pub const fn reveal_hole(&mut self) {
        self.hole_revealed = true;
    }

    /// Returns the index of the concealed card, if one is currently hidden.
    #[must_use]
    pub fn concealed_index(&self) -> Option<usize> {
        (!self.hole_revealed && self.cards.len() > HOLE_INDEX).then_some(HOLE_INDEX)
    }

    /// Returns whether the card at `index` is hidden from the player.
    #[must_use]
    pub fn is_concealed(&self, index: usize) -> bool {
        self.concealed_index() == Some(index)
    }

    /// Calculates the value the player can see.
    #[must_use]
    pub fn visible_value(&self) -> u16 {
        if self.hole_revealed {
            self.value()
        } else {
            self.up_card().map_or(0, |card| u16::from(card.blackjack_value()))
        }
    }

    /// Calculates the full value of the hand.
    #[must_use]
    pub fn value(&self) -> u16 {
        total_of(&self.cards)
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        is_soft(&self.cards)
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Suit;

    fn hand(ranks: &[u8]) -> Vec<Card> {
        ranks
            .iter()
            .map(|&rank| Card::new(Suit::Diamonds, rank).unwrap())
            .collect()
    }

    #[test]
    fn court_cards_count_ten() {
        assert_eq!(total_of(&hand(&[13, 12])), 20);
        assert_eq!(total_of(&hand(&[11, 10])), 20);
    }

    #[test]
    fn ace_with_ten_is_blackjack() {
        let mut player = Hand::new();
        for card in hand(&[1, 13]) {
            player.add_card(card);
        }
        assert_eq!(player.value(), 21);
        assert!(player.is_blackjack());
        assert!(player.is_soft());
    }

    #[test]
    fn aces_are_reduced_one_at_a_time() {
        assert_eq!(total_of(&hand(&[1, 1, 9])), 21);
        assert_eq!(total_of(&hand(&[1, 1])), 12);
        assert_eq!(total_of(&hand(&[1, 1, 1, 1])), 14);
        assert_eq!(total_of(&hand(&[1, 9, 5])), 15);
        assert!(!is_soft(&hand(&[1, 9, 5])));
    }

    #[test]
    fn hard_bust_keeps_unreduced_sum() {
        assert_eq!(total_of(&hand(&[10, 9, 5])), 24);
        assert_eq!(total_of(&hand(&[1, 10, 9, 5])), 25);
        assert_eq!(total_of(&[]), 0);
    }

    #[test]
    fn long_hands_total_past_u8_range() {
        assert_eq!(total_of(&hand(&[1; 26])), 26);
        assert_eq!(total_of(&hand(&[10; 30])), 300);

        let mut cards = hand(&[13; 25]);
        cards.extend(hand(&[1; 3]));
        assert_eq!(total_of(&cards), 253);
        assert!(!is_soft(&cards));
    }

    #[test]
    fn three_card_21_is_not_blackjack() {
        let mut player = Hand::new();
        for card in hand(&[7, 7, 7]) {
            player.add_card(card);
        }
        assert_eq!(player.value(), 21);
        assert!(!player.is_blackjack());
    }

    #[test]
    fn hole_card_is_concealed_until_revealed() {
        let mut dealer = DealerHand::new();
        for card in hand(&[10, 6]) {
            dealer.add_card(card);
        }

        assert_eq!(dealer.concealed_index(), Some(HOLE_INDEX));
        assert!(dealer.is_concealed(1));
        assert!(!dealer.is_concealed(0));
        assert_eq!(dealer.visible_value(), 10);
        assert_eq!(dealer.value(), 16);

        dealer.reveal_hole();
        assert_eq!(dealer.concealed_index(), None);
        assert_eq!(dealer.visible_value(), 16);
    }
}
