//! Dealer policy and table talk.
//!
//! The dealer plays a fixed strategy: draw while the hand is under
//! [`STAND_ON`] and holds fewer than [`MAX_CARDS`] cards. The card cap is a
//! house rule of this table, not standard blackjack. Randomness only enters
//! through the flavor text, which has no effect on outcomes.

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::hand::DealerHand;

/// The dealer stands once the hand reaches this total.
pub const STAND_ON: u16 = 17;

/// The dealer never holds more than this many cards.
pub const MAX_CARDS: usize = 5;

/// Returns whether the dealer must take another card.
#[must_use]
pub fn should_draw(hand: &DealerHand) -> bool {
    hand.value() < STAND_ON && hand.len() < MAX_CARDS
}

/// Situations the dealer comments on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommentCategory {
    /// A bet was accepted or the table was cleared.
    Welcome,
    /// The player beat the dealer's total.
    Win,
    /// The dealer won.
    Lose,
    /// The player was dealt a natural.
    Blackjack,
    /// The player went over 21.
    Bust,
    /// Push.
    Tie,
    /// The dealer went over 21.
    DealerBust,
}

impl CommentCategory {
    /// Returns the lines the dealer picks from.
    #[must_use]
    pub const fn pool(self) -> &'static [&'static str] {
        match self {
            Self::Welcome => &[
                "Take a seat, let's dance with the cards!",
                "Fresh meat, huh? Let's play!",
                "Welcome, pal! Hope you brought your lucky socks!",
            ],
            Self::Win => &[
                "Beginner's luck, eh? Won't last long!",
                "You got me this time, you sneaky devil!",
                "Wow, you're making me look bad here!",
            ],
            Self::Lose => &[
                "Ha! Another victory for your friendly dealer!",
                "Better luck next time, champ!",
                "My cards are hotter than yours, huh?",
            ],
            Self::Blackjack => &[
                "Blackjack?! You're killing me here!",
                "21 on the dot? You're a wizard!",
                "Perfect hand? I'm impressed... and annoyed!",
            ],
            Self::Bust => &[
                "Boom! You went kaboom!",
                "Over 21? That's my favorite number!",
                "Busted! Dealer's still in the game!",
            ],
            Self::Tie => &[
                "A tie? How boring!",
                "Push! We're too evenly matched!",
                "Even steven, huh? Lame!",
            ],
            Self::DealerBust => &[
                "Oops! I overcooked it!",
                "Dealer down! You got lucky there!",
                "Bust! Guess I'm not perfect after all!",
            ],
        }
    }
}

const GREETINGS: [&str; 4] = [
    "Hey there, hotshot! Ready to lose some chips?",
    "Welcome to my table, where I always win!",
    "Alright, rookie, let's see what you've got!",
    "Step right up, I'm feeling generous today... or not!",
];

const FALLBACK: &str = "Let's play!";

/// Picks a line for `category` uniformly at random.
#[must_use]
pub fn comment<R: Rng + ?Sized>(category: CommentCategory, rng: &mut R) -> &'static str {
    category.pool().choose(rng).copied().unwrap_or(FALLBACK)
}

/// Picks the dealer's opening line for a fresh table.
#[must_use]
pub fn greeting<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    GREETINGS.choose(rng).copied().unwrap_or(FALLBACK)
}

/// Body-language cues for the dealer's avatar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gesture {
    /// Greeting a new game.
    Wave,
    /// Dealing a card to the dealer's own hand.
    Deal,
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::card::{Card, Suit};

    fn dealer(ranks: &[u8]) -> DealerHand {
        let mut hand = DealerHand::new();
        for &rank in ranks {
            hand.add_card(Card::new(Suit::Spades, rank).unwrap());
        }
        hand
    }

    #[test]
    fn draws_on_16_stands_on_17() {
        assert!(should_draw(&dealer(&[10, 6])));
        assert!(!should_draw(&dealer(&[10, 7])));
        assert!(!should_draw(&dealer(&[1, 6])));
        assert!(!should_draw(&dealer(&[10, 9, 5])));
    }

    #[test]
    fn never_takes_a_sixth_card() {
        let hand = dealer(&[2, 2, 2, 2, 3]);
        assert_eq!(hand.value(), 11);
        assert!(!should_draw(&hand));
        assert!(should_draw(&dealer(&[2, 2, 2, 3])));
    }

    #[test]
    fn comments_come_from_their_pool() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        for category in [
            CommentCategory::Welcome,
            CommentCategory::Win,
            CommentCategory::Lose,
            CommentCategory::Blackjack,
            CommentCategory::Bust,
            CommentCategory::Tie,
            CommentCategory::DealerBust,
        ] {
            for _ in 0..10 {
                assert!(category.pool().contains(&comment(category, &mut rng)));
            }
        }
        assert!(GREETINGS.contains(&greeting(&mut rng)));
    }
}
