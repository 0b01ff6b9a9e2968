//! The shoe: the drawable pool of shuffled cards.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{ACE, Card, DECK_SIZE, KING, Suit};
use crate::error::ShoeError;

/// A draw is preceded by a fresh deck once the shoe holds this many cards or fewer.
pub const REPLENISH_THRESHOLD: usize = 10;

/// Number of decks used when the shoe replenishes itself mid-game.
pub const REPLENISH_DECKS: u8 = 1;

/// A card taken from the shoe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Drawn {
    /// The card.
    pub card: Card,
    /// Whether the shoe was rebuilt before this card was taken.
    pub replenished: bool,
}

/// An ordered pool of cards. The top of the shoe is the end of the sequence.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Shoe {
    cards: Vec<Card>,
}

impl Shoe {
    /// Builds a shuffled shoe of `num_decks` standard decks.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::InvalidConfiguration`] if `num_decks` is zero.
    pub fn build<R: Rng + ?Sized>(num_decks: u8, rng: &mut R) -> Result<Self, ShoeError> {
        let mut shoe = Self::unshuffled(num_decks)?;
        shoe.shuffle(rng);
        Ok(shoe)
    }

    /// Builds `num_decks` standard decks in suit and rank order, without shuffling.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::InvalidConfiguration`] if `num_decks` is zero.
    pub fn unshuffled(num_decks: u8) -> Result<Self, ShoeError> {
        if num_decks < 1 {
            return Err(ShoeError::InvalidConfiguration);
        }

        let mut cards = Vec::with_capacity(num_decks as usize * DECK_SIZE);
        for _ in 0..num_decks {
            for suit in Suit::ALL {
                for rank in ACE..=KING {
                    cards.push(Card::from_valid(suit, rank));
                }
            }
        }

        Ok(Self { cards })
    }

    /// Creates a shoe holding exactly `cards`; the last card is drawn first.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Shuffles the shoe in place.
    ///
    /// Fisher-Yates from the last index down, so every ordering is equally likely.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Takes the top card.
    ///
    /// When the shoe is down to [`REPLENISH_THRESHOLD`] cards or fewer it is
    /// first discarded and replaced by a freshly shuffled single deck.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::EmptyShoe`] if no card is available after replenishing.
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Drawn, ShoeError> {
        let replenished = self.cards.len() <= REPLENISH_THRESHOLD;
        if replenished {
            *self = Self::build(REPLENISH_DECKS, rng)?;
        }

        let card = self.cards.pop().ok_or(ShoeError::EmptyShoe)?;
        Ok(Drawn { card, replenished })
    }

    /// Returns the cards still in the shoe, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the shoe is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    fn card(suit: Suit, rank: u8) -> Card {
        Card::new(suit, rank).unwrap()
    }

    #[test]
    fn zero_decks_is_rejected() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(
            Shoe::build(0, &mut rng).unwrap_err(),
            ShoeError::InvalidConfiguration
        );
        assert_eq!(
            Shoe::unshuffled(0).unwrap_err(),
            ShoeError::InvalidConfiguration
        );
    }

    #[test]
    fn single_deck_holds_every_card_once() {
        let shoe = Shoe::unshuffled(1).unwrap();
        assert_eq!(shoe.len(), DECK_SIZE);

        let mut seen = [[0u8; 13]; 4];
        for c in shoe.cards() {
            let suit = Suit::ALL.iter().position(|s| *s == c.suit()).unwrap();
            seen[suit][(c.rank() - 1) as usize] += 1;
        }
        assert!(seen.iter().flatten().all(|&n| n == 1));
    }

    #[test]
    fn multi_deck_shoe_scales() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let shoe = Shoe::build(4, &mut rng).unwrap();
        assert_eq!(shoe.len(), 4 * DECK_SIZE);
        let aces = shoe.cards().iter().filter(|c| c.is_ace()).count();
        assert_eq!(aces, 16);
    }

    #[test]
    fn draw_takes_from_the_end() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut cards = vec![card(Suit::Clubs, 2); 11];
        cards.push(card(Suit::Hearts, 1));
        let mut shoe = Shoe::from_cards(cards);

        let drawn = shoe.draw(&mut rng).unwrap();
        assert_eq!(drawn.card, card(Suit::Hearts, 1));
        assert!(!drawn.replenished);
        assert_eq!(shoe.len(), 11);
    }

    #[test]
    fn low_shoe_is_replenished_before_drawing() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut shoe = Shoe::from_cards(vec![card(Suit::Spades, 5); REPLENISH_THRESHOLD]);

        let drawn = shoe.draw(&mut rng).unwrap();
        assert!(drawn.replenished);
        assert_eq!(shoe.len(), DECK_SIZE - 1);

        let mut empty = Shoe::default();
        let drawn = empty.draw(&mut rng).unwrap();
        assert!(drawn.replenished);
        assert_eq!(empty.len(), DECK_SIZE - 1);
    }

    #[test]
    fn shuffle_is_uniform_over_small_shoe() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let base = [
            card(Suit::Hearts, 1),
            card(Suit::Hearts, 2),
            card(Suit::Hearts, 3),
        ];
        let mut counts = [0u32; 6];

        for _ in 0..6000 {
            let mut shoe = Shoe::from_cards(base.to_vec());
            shoe.shuffle(&mut rng);
            let ranks: Vec<u8> = shoe.cards().iter().map(Card::rank).collect();
            let index = match ranks.as_slice() {
                [1, 2, 3] => 0,
                [1, 3, 2] => 1,
                [2, 1, 3] => 2,
                [2, 3, 1] => 3,
                [3, 1, 2] => 4,
                _ => 5,
            };
            counts[index] += 1;
        }

        for count in counts {
            assert!((850..=1150).contains(&count), "skewed permutation count {count}");
        }
    }
}
