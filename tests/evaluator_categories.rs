use parallel_poker::cards::{parse_cards, Card, Rank, Suit};
use parallel_poker::evaluator::{evaluate, HandRank, HandRules};

fn rank_of(s: &str) -> HandRank {
    evaluate(&parse_cards(s).unwrap(), &HandRules::default()).unwrap().rank
}

#[test]
fn category_royal_flush() {
    let xs = [
        Card::new(Rank::Ace, Suit::Hearts),
        Card::new(Rank::King, Suit::Hearts),
        Card::new(Rank::Queen, Suit::Hearts),
        Card::new(Rank::Jack, Suit::Hearts),
        Card::new(Rank::Ten, Suit::Hearts),
    ];
    let e = evaluate(&xs, &HandRules::default()).unwrap();
    assert!(matches!(e.rank, HandRank::RoyalFlush));
    assert_eq!(e.winning_cards.len(), 5);
}

#[test]
fn category_straight_flush() {
    let xs = [
        Card::new(Rank::Five, Suit::Diamonds),
        Card::new(Rank::Six, Suit::Diamonds),
        Card::new(Rank::Seven, Suit::Diamonds),
        Card::new(Rank::Eight, Suit::Diamonds),
        Card::new(Rank::Nine, Suit::Diamonds),
    ];
    let e = evaluate(&xs, &HandRules::default()).unwrap();
    assert!(matches!(e.rank, HandRank::StraightFlush));
}

#[test]
fn category_four_of_a_kind() {
    assert_eq!(rank_of("9c 9d 9h 9s Ac"), HandRank::FourOfAKind);
}

#[test]
fn category_full_house() {
    assert_eq!(rank_of("3c 3d 3h Js Jc"), HandRank::FullHouse);
}

#[test]
fn category_flush() {
    assert_eq!(rank_of("Kh Th 8h 6h 3h"), HandRank::Flush);
}

#[test]
fn category_straight_and_wheel() {
    assert_eq!(rank_of("6c 7d 8h 9s Tc"), HandRank::Straight);
    let wheel = evaluate(&parse_cards("Ac 2d 3h 4s 5c").unwrap(), &HandRules::default()).unwrap();
    assert_eq!(wheel.rank, HandRank::Straight);
    let six_high = evaluate(&parse_cards("2d 3h 4s 5c 6c").unwrap(), &HandRules::default()).unwrap();
    assert!(six_high.score > wheel.score);
}

#[test]
fn category_three_of_a_kind_is_not_full_house() {
    assert_eq!(rank_of("Kh Kd Kc 5s 2h"), HandRank::ThreeOfAKind);
}

#[test]
fn category_two_pair() {
    assert_eq!(rank_of("4h 4d 9c 9s Kh"), HandRank::TwoPair);
}

#[test]
fn one_pair_needs_jacks_or_better() {
    assert_eq!(rank_of("Jh Jd 5c 8s 2h"), HandRank::OnePair);
    assert_eq!(rank_of("10h 10d 5c 8s 2h"), HandRank::HighCard);
    let tens = parse_cards("10h 10d 5c 8s 2h").unwrap();
    let any = evaluate(&tens, &HandRules::any_pair()).unwrap();
    assert_eq!(any.rank, HandRank::OnePair);
}

#[test]
fn wild_card_completes_quads() {
    assert_eq!(rank_of("Kh Kd Kc As* 2h"), HandRank::FourOfAKind);
}

#[test]
fn five_of_a_kind_only_with_wilds() {
    let e = evaluate(&parse_cards("Kh Kd Kc Ks 2h*").unwrap(), &HandRules::default()).unwrap();
    assert_eq!(e.rank, HandRank::FiveOfAKind);
    assert!(e.score > evaluate(&parse_cards("Ah Kh Qh Jh Th").unwrap(), &HandRules::default()).unwrap().score);
}

#[test]
fn dead_cards_do_not_count() {
    // The aces only pair while both are live.
    assert_eq!(rank_of("Ah Ad Kc 7s 2h"), HandRank::OnePair);
    assert_eq!(rank_of("Ah Ad! Kc 7s 2h"), HandRank::HighCard);
    // Four live hearts are not a flush.
    assert_eq!(rank_of("2h 5h 9h Jh Kh!"), HandRank::HighCard);
}

#[test]
fn all_dead_hand_is_empty_high_card() {
    let e = evaluate(&parse_cards("Ah! Kh! Qh! Jh! Th!").unwrap(), &HandRules::default()).unwrap();
    assert_eq!(e.rank, HandRank::HighCard);
    assert_eq!(e.score, 0);
    assert!(e.winning_cards.is_empty());
}

#[test]
fn scores_fall_in_rank_bands() {
    let quads = evaluate(&parse_cards("9c 9d 9h 9s Ac").unwrap(), &HandRules::default()).unwrap();
    assert!((8_000..9_000).contains(&quads.score));
    let straight = evaluate(&parse_cards("6c 7d 8h 9s Tc").unwrap(), &HandRules::default()).unwrap();
    assert!((5_000..6_000).contains(&straight.score));
}
