pub(crate) mod detector;
pub(crate) mod hand_analysis;
pub(crate) mod rank_groups;
pub(crate) mod straight_info;
pub(crate) mod suit_info;
pub(crate) mod wild;

use crate::cards::{Card, Rank};
use crate::hand::{ensure_hand_size, HandError};
use core::cmp::Ordering;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Width of one score band. Every tier owns `[tier * BAND, (tier + 1) * BAND)`.
pub const SCORE_BAND: u32 = 1000;

/// Poker hand rank from weakest to strongest.
///
/// The discriminant is the tier index used for scoring: `score / 1000`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
#[repr(u8)]
pub enum HandRank {
    HighCard = 1,
    OnePair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
    RoyalFlush = 10,
    /// Only reachable with at least one wild card.
    FiveOfAKind = 11,
}

impl HandRank {
    pub const ALL: [HandRank; 11] = [
        HandRank::HighCard,
        HandRank::OnePair,
        HandRank::TwoPair,
        HandRank::ThreeOfAKind,
        HandRank::Straight,
        HandRank::Flush,
        HandRank::FullHouse,
        HandRank::FourOfAKind,
        HandRank::StraightFlush,
        HandRank::RoyalFlush,
        HandRank::FiveOfAKind,
    ];

    pub const fn tier(self) -> u32 {
        self as u32
    }

    /// Lowest score a result of this rank can carry.
    pub const fn base_score(self) -> u32 {
        self.tier() * SCORE_BAND
    }

    /// Reward-table key, e.g. `"royal-flush"`.
    pub const fn key(self) -> &'static str {
        match self {
            HandRank::HighCard => "high-card",
            HandRank::OnePair => "one-pair",
            HandRank::TwoPair => "two-pair",
            HandRank::ThreeOfAKind => "three-of-a-kind",
            HandRank::Straight => "straight",
            HandRank::Flush => "flush",
            HandRank::FullHouse => "full-house",
            HandRank::FourOfAKind => "four-of-a-kind",
            HandRank::StraightFlush => "straight-flush",
            HandRank::RoyalFlush => "royal-flush",
            HandRank::FiveOfAKind => "five-of-a-kind",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
            HandRank::RoyalFlush => "Royal Flush",
            HandRank::FiveOfAKind => "Five of a Kind",
        }
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandRankParseError {
    #[error("unknown hand rank: '{0}'")]
    Unknown(String),
}

impl FromStr for HandRank {
    type Err = HandRankParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        HandRank::ALL
            .into_iter()
            .find(|r| r.key().eq_ignore_ascii_case(t))
            .ok_or_else(|| HandRankParseError::Unknown(s.to_string()))
    }
}

/// Rules that change how hands are classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandRules {
    /// Pairs below this rank score as high card ("Jacks or Better").
    pub min_pair_rank: Rank,
}

impl HandRules {
    pub const fn jacks_or_better() -> Self {
        Self { min_pair_rank: Rank::Jack }
    }

    pub const fn any_pair() -> Self {
        Self { min_pair_rank: Rank::Two }
    }
}

impl Default for HandRules {
    fn default() -> Self {
        Self::jacks_or_better()
    }
}

/// Outcome of evaluating one hand. Ordering and equality follow `score`.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct HandResult {
    pub rank: HandRank,
    /// Reward multiplier; 0 until a reward table has been applied.
    pub multiplier: u32,
    pub score: u32,
    /// Cards that make up the rank. Wild cards appear as themselves, not as
    /// the value they were assigned.
    pub winning_cards: Vec<Card>,
}

impl HandResult {
    pub(crate) fn new(rank: HandRank, tiebreak: Rank, winning_cards: Vec<Card>) -> Self {
        Self {
            rank,
            multiplier: 0,
            score: rank.base_score() + u32::from(tiebreak.value()),
            winning_cards,
        }
    }

    /// Result for a hand whose five cards are all dead.
    pub fn nothing() -> Self {
        Self { rank: HandRank::HighCard, multiplier: 0, score: 0, winning_cards: Vec::new() }
    }

    /// Credits paid for this result at the given bet.
    pub fn payout(&self, bet: u64) -> u64 {
        u64::from(self.multiplier).saturating_mul(bet)
    }
}

impl Default for HandResult {
    fn default() -> Self {
        Self::nothing()
    }
}

impl Ord for HandResult {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score.cmp(&other.score)
    }
}

impl PartialOrd for HandResult {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for HandResult {
    fn eq(&self, other: &Self) -> bool {
        self.score == other.score
    }
}

impl Eq for HandResult {}

/// Evaluate exactly five cards, honouring dead and wild flags.
///
/// Dead cards are transparent: they never count towards a rank. Wild cards
/// take whatever value produces the strongest hand.
///
/// ```
/// use parallel_poker::cards::parse_cards;
/// use parallel_poker::evaluator::{evaluate, HandRank, HandRules};
///
/// let rules = HandRules::jacks_or_better();
/// let royal = parse_cards("Ah Kh Qh Jh 10h").unwrap();
/// assert_eq!(evaluate(&royal, &rules).unwrap().rank, HandRank::RoyalFlush);
///
/// let quads = parse_cards("Kh Kd Kc As* 2h").unwrap();
/// assert_eq!(evaluate(&quads, &rules).unwrap().rank, HandRank::FourOfAKind);
///
/// assert!(evaluate(&royal[..4], &rules).is_err());
/// ```
pub fn evaluate(cards: &[Card], rules: &HandRules) -> Result<HandResult, HandError> {
    ensure_hand_size(cards)?;

    let active: Vec<Card> = cards.iter().copied().filter(|c| !c.is_dead()).collect();
    if active.is_empty() {
        return Ok(HandResult::nothing());
    }

    let (wilds, regulars): (Vec<Card>, Vec<Card>) = active.into_iter().partition(|c| c.is_wild());
    if wilds.is_empty() {
        Ok(classify(&regulars, rules))
    } else {
        Ok(wild::resolve(&regulars, &wilds, rules))
    }
}

/// Classify non-wild, non-dead cards (one to five of them).
pub(crate) fn classify(active: &[Card], rules: &HandRules) -> HandResult {
    use detector::DETECTORS;
    use hand_analysis::HandAnalysis;

    let analysis = HandAnalysis::new(active);

    for detector in DETECTORS.iter() {
        if detector.detect(&analysis, rules) {
            return detector.build_result(&analysis, rules);
        }
    }

    // HighCard always matches; kept as a value so empty input cannot panic.
    HandResult::nothing()
}

/// Compare two hands under the same rules.
///
/// ```
/// use parallel_poker::cards::parse_cards;
/// use parallel_poker::evaluator::{compare_hands, HandRules};
/// use std::cmp::Ordering;
///
/// let flush = parse_cards("2h 7h 9h Jh Kh").unwrap();
/// let straight = parse_cards("5c 6d 7h 8s 9c").unwrap();
/// let ord = compare_hands(&flush, &straight, &HandRules::default()).unwrap();
/// assert_eq!(ord, Ordering::Greater);
/// ```
pub fn compare_hands(a: &[Card], b: &[Card], rules: &HandRules) -> Result<Ordering, HandError> {
    let ra = evaluate(a, rules)?;
    let rb = evaluate(b, rules)?;
    Ok(ra.cmp(&rb))
}
