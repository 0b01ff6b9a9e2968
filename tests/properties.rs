use bjtable::{Card, GameSession, Outcome, Phase, Suit, TableOptions, total_of};
use proptest::prelude::*;

fn any_suit() -> impl Strategy<Value = Suit> {
    prop_oneof![
        Just(Suit::Spades),
        Just(Suit::Hearts),
        Just(Suit::Diamonds),
        Just(Suit::Clubs),
    ]
}

fn any_card() -> impl Strategy<Value = Card> {
    (any_suit(), 1u8..=13u8).prop_map(|(suit, rank)| Card::new(suit, rank).unwrap())
}

proptest! {
    #[test]
    fn total_reduces_only_as_many_aces_as_needed(cards in prop::collection::vec(any_card(), 0..40)) {
        let raw: u32 = cards.iter().map(|c| u32::from(c.blackjack_value())).sum();
        let aces = cards.iter().filter(|c| c.is_ace()).count() as u32;
        let total = u32::from(total_of(&cards));

        prop_assert!(total <= raw);
        prop_assert_eq!((raw - total) % 10, 0);
        let reduced = (raw - total) / 10;
        prop_assert!(reduced <= aces);

        if total > 21 {
            // No ace left to reduce.
            prop_assert_eq!(reduced, aces);
        }
        if reduced > 0 {
            // One fewer reduction would have busted.
            prop_assert!(total + 10 > 21);
        }
    }

    #[test]
    fn total_does_not_depend_on_card_order(cards in prop::collection::vec(any_card(), 0..9)) {
        let mut reversed = cards.clone();
        reversed.reverse();
        prop_assert_eq!(total_of(&cards), total_of(&reversed));
    }

    #[test]
    fn every_settlement_counts_once(
        seed in any::<u64>(),
        bets in prop::collection::vec(1u32..=8, 1..20),
        hit_below in 12u16..=18,
    ) {
        let mut session = GameSession::new(TableOptions::default(), seed).unwrap();

        for units in bets {
            let bet = units * 5;
            if session.phase() == Phase::GameOver || bet > session.chips() {
                break;
            }

            let before = *session.statistics();
            let chips_before = session.chips();

            session.place_bet(bet).unwrap();
            while session.phase() == Phase::PlayerTurn {
                if session.player_hand().unwrap().value() < hit_below {
                    session.hit().unwrap();
                } else {
                    session.stand().unwrap();
                }
            }
            if session.phase() == Phase::DealerTurn {
                session.play_dealer().unwrap();
            }

            let after = *session.statistics();
            let result = *session.last_result().unwrap();
            prop_assert_eq!(after.games_played, before.games_played + 1);
            prop_assert_eq!(
                (after.wins - before.wins) + (after.losses - before.losses) + (after.ties - before.ties),
                1
            );

            let delta = i64::from(session.chips()) - i64::from(chips_before);
            prop_assert_eq!(delta, result.net);
            match result.outcome.result() {
                Outcome::Win => {
                    prop_assert_eq!(after.wins, before.wins + 1);
                    prop_assert!(result.net >= i64::from(bet));
                }
                Outcome::Loss => {
                    prop_assert_eq!(after.losses, before.losses + 1);
                    prop_assert_eq!(result.net, -i64::from(bet));
                }
                Outcome::Tie => {
                    prop_assert_eq!(after.ties, before.ties + 1);
                    prop_assert_eq!(result.net, 0);
                }
            }
            prop_assert_eq!(session.history().len() as u32, after.games_played);
            prop_assert!(session.dealer_hand().unwrap().len() <= 5);
        }
    }
}
