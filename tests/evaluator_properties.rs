use parallel_poker::cards::{Card, Rank, Suit};
use parallel_poker::evaluator::{evaluate, HandRank, HandRules};
use parallel_poker::generator::generate_parallel_hands;
use parallel_poker::modifiers::DeckModifications;
use parallel_poker::shop::{default_shop_weights, select_shop_options};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn full_deck() -> Vec<Card> {
    Rank::ALL.into_iter().flat_map(|r| Suit::ALL.into_iter().map(move |s| Card::new(r, s))).collect()
}

/// Five distinct faces from a standard deck.
fn any_hand() -> impl Strategy<Value = Vec<Card>> {
    Just(full_deck()).prop_shuffle().prop_map(|deck| deck.into_iter().take(5).collect())
}

fn with_flag(cards: &[Card], index: usize, wild: bool) -> Vec<Card> {
    let mut out = cards.to_vec();
    let c = out[index];
    out[index] = if wild { Card::wild(c.rank(), c.suit()) } else { Card::dead(c.rank(), c.suit()) };
    out
}

proptest! {
    #[test]
    fn score_sits_in_rank_band(hand in any_hand()) {
        let r = evaluate(&hand, &HandRules::default()).unwrap();
        prop_assert!(r.score >= r.rank.base_score());
        prop_assert!(r.score < r.rank.base_score() + 1000);
        prop_assert_ne!(r.rank, HandRank::FiveOfAKind);
        prop_assert_eq!(r.multiplier, 0);
    }

    #[test]
    fn evaluation_ignores_card_order(hand in any_hand()) {
        let mut reversed = hand.clone();
        reversed.reverse();
        let a = evaluate(&hand, &HandRules::default()).unwrap();
        let b = evaluate(&reversed, &HandRules::default()).unwrap();
        prop_assert_eq!(a.rank, b.rank);
        prop_assert_eq!(a.score, b.score);
    }

    #[test]
    fn wild_card_never_hurts(hand in any_hand(), index in 0usize..5) {
        let rules = HandRules::default();
        let plain = evaluate(&hand, &rules).unwrap();
        let wild = evaluate(&with_flag(&hand, index, true), &rules).unwrap();
        prop_assert!(wild.rank >= plain.rank, "{:?} -> {:?}", plain.rank, wild.rank);
    }

    #[test]
    fn dead_card_never_helps(hand in any_hand(), index in 0usize..5) {
        let rules = HandRules::default();
        let plain = evaluate(&hand, &rules).unwrap();
        let dead = evaluate(&with_flag(&hand, index, false), &rules).unwrap();
        prop_assert!(dead.rank <= plain.rank, "{:?} -> {:?}", plain.rank, dead.rank);
        prop_assert!(dead.winning_cards.iter().all(|c| !c.is_dead()));
    }

    #[test]
    fn parallel_hands_keep_holds(
        hand in any_hand(),
        held in proptest::sample::subsequence(vec![0usize, 1, 2, 3, 4], 0..=5),
        count in 1usize..20,
        seed in any::<u64>(),
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let hands = generate_parallel_hands(&mut rng, &hand, &held, count, &DeckModifications::new()).unwrap();
        prop_assert_eq!(hands.len(), count);
        for h in &hands {
            for &i in &held {
                prop_assert!(h.cards()[i].same_face(hand[i]));
                prop_assert!(!h.cards()[i].same_instance(hand[i]));
            }
            for i in (0..5).filter(|i| !held.contains(i)) {
                prop_assert!(!h.cards()[i].same_face(hand[i]));
            }
            let cards = h.cards();
            for i in 0..5 {
                for j in (i + 1)..5 {
                    prop_assert!(!cards[i].same_face(cards[j]));
                }
            }
        }
    }

    #[test]
    fn shop_returns_requested_count(count in 0usize..12, seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let offers = select_shop_options(&mut rng, &default_shop_weights(), count);
        prop_assert_eq!(offers.len(), count);
        if count <= 5 {
            let mut distinct = offers.clone();
            distinct.sort();
            distinct.dedup();
            prop_assert_eq!(distinct.len(), count);
        }
    }
}
