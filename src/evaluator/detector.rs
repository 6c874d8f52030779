use super::hand_analysis::HandAnalysis;
use crate::cards::Rank;
use crate::evaluator::{HandRank, HandResult, HandRules};

/// Strategy pattern: each rank detector knows how to detect and build its result.
pub trait CategoryDetector {
    fn detect(&self, analysis: &HandAnalysis, rules: &HandRules) -> bool;
    fn build_result(&self, analysis: &HandAnalysis, rules: &HandRules) -> HandResult;
}

fn top_rank(analysis: &HandAnalysis) -> Rank {
    analysis.highest().map(|c| c.rank()).unwrap_or(Rank::Two)
}

// ============================================================================
// Detector Implementations (in priority order: highest to lowest)
// ============================================================================

/// Royal Flush: Ten to Ace, all same suit
pub struct RoyalFlushDetector;

impl CategoryDetector for RoyalFlushDetector {
    fn detect(&self, analysis: &HandAnalysis, _rules: &HandRules) -> bool {
        analysis.suit_info.is_flush && analysis.straight_info.is_broadway
    }

    fn build_result(&self, analysis: &HandAnalysis, _rules: &HandRules) -> HandResult {
        analysis.build_result(HandRank::RoyalFlush, Rank::Ace, analysis.sorted_cards.clone())
    }
}

/// Straight Flush: Five consecutive ranks, all same suit
pub struct StraightFlushDetector;

impl CategoryDetector for StraightFlushDetector {
    fn detect(&self, analysis: &HandAnalysis, _rules: &HandRules) -> bool {
        analysis.suit_info.is_flush && analysis.straight_info.is_straight
    }

    fn build_result(&self, analysis: &HandAnalysis, _rules: &HandRules) -> HandResult {
        let top = analysis.straight_info.top_rank.unwrap_or_else(|| top_rank(analysis));
        analysis.build_result(HandRank::StraightFlush, top, analysis.sorted_cards.clone())
    }
}

/// Four of a Kind: Four cards of the same rank
pub struct FourOfAKindDetector;

impl CategoryDetector for FourOfAKindDetector {
    fn detect(&self, analysis: &HandAnalysis, _rules: &HandRules) -> bool {
        analysis.rank_groups.quad().is_some()
    }

    fn build_result(&self, analysis: &HandAnalysis, _rules: &HandRules) -> HandResult {
        let quad = analysis.rank_groups.quad().unwrap_or_else(|| top_rank(analysis));
        analysis.build_result(HandRank::FourOfAKind, quad, analysis.cards_of_rank(quad))
    }
}

/// Full House: Three of a kind plus a pair
pub struct FullHouseDetector;

impl CategoryDetector for FullHouseDetector {
    fn detect(&self, analysis: &HandAnalysis, _rules: &HandRules) -> bool {
        analysis.rank_groups.has_full_house()
    }

    fn build_result(&self, analysis: &HandAnalysis, _rules: &HandRules) -> HandResult {
        let trips = analysis.rank_groups.trips().unwrap_or_else(|| top_rank(analysis));
        analysis.build_result(HandRank::FullHouse, trips, analysis.sorted_cards.clone())
    }
}

/// Flush: All five cards of the same suit
pub struct FlushDetector;

impl CategoryDetector for FlushDetector {
    fn detect(&self, analysis: &HandAnalysis, _rules: &HandRules) -> bool {
        analysis.suit_info.is_flush
    }

    fn build_result(&self, analysis: &HandAnalysis, _rules: &HandRules) -> HandResult {
        analysis.build_result(HandRank::Flush, top_rank(analysis), analysis.sorted_cards.clone())
    }
}

/// Straight: Five consecutive ranks (not all same suit)
pub struct StraightDetector;

impl CategoryDetector for StraightDetector {
    fn detect(&self, analysis: &HandAnalysis, _rules: &HandRules) -> bool {
        analysis.straight_info.is_straight
    }

    fn build_result(&self, analysis: &HandAnalysis, _rules: &HandRules) -> HandResult {
        let top = analysis.straight_info.top_rank.unwrap_or_else(|| top_rank(analysis));
        analysis.build_result(HandRank::Straight, top, analysis.sorted_cards.clone())
    }
}

/// Three of a Kind: Three cards of the same rank
pub struct ThreeOfAKindDetector;

impl CategoryDetector for ThreeOfAKindDetector {
    fn detect(&self, analysis: &HandAnalysis, _rules: &HandRules) -> bool {
        analysis.rank_groups.trips().is_some() && !analysis.rank_groups.has_full_house()
    }

    fn build_result(&self, analysis: &HandAnalysis, _rules: &HandRules) -> HandResult {
        let trips = analysis.rank_groups.trips().unwrap_or_else(|| top_rank(analysis));
        analysis.build_result(HandRank::ThreeOfAKind, trips, analysis.cards_of_rank(trips))
    }
}

/// Two Pair: Two pairs of cards, any ranks
pub struct TwoPairDetector;

impl CategoryDetector for TwoPairDetector {
    fn detect(&self, analysis: &HandAnalysis, _rules: &HandRules) -> bool {
        analysis.rank_groups.pairs().len() == 2
    }

    fn build_result(&self, analysis: &HandAnalysis, _rules: &HandRules) -> HandResult {
        let pairs = analysis.rank_groups.pairs();
        let high = pairs.first().copied().unwrap_or_else(|| top_rank(analysis));
        analysis.build_result(HandRank::TwoPair, high, analysis.cards_of_ranks(&pairs))
    }
}

/// One Pair: Two cards of the same rank, at or above the minimum pair rank.
/// Lower pairs fall through to high card.
pub struct OnePairDetector;

impl CategoryDetector for OnePairDetector {
    fn detect(&self, analysis: &HandAnalysis, rules: &HandRules) -> bool {
        matches!(analysis.rank_groups.pairs().as_slice(), [pair] if *pair >= rules.min_pair_rank)
    }

    fn build_result(&self, analysis: &HandAnalysis, _rules: &HandRules) -> HandResult {
        let pair = analysis.rank_groups.pairs().first().copied().unwrap_or_else(|| top_rank(analysis));
        analysis.build_result(HandRank::OnePair, pair, analysis.cards_of_rank(pair))
    }
}

/// High Card: nothing else matched
pub struct HighCardDetector;

impl CategoryDetector for HighCardDetector {
    fn detect(&self, analysis: &HandAnalysis, _rules: &HandRules) -> bool {
        !analysis.sorted_cards.is_empty()
    }

    fn build_result(&self, analysis: &HandAnalysis, _rules: &HandRules) -> HandResult {
        let winning: Vec<_> = analysis.highest().into_iter().collect();
        analysis.build_result(HandRank::HighCard, top_rank(analysis), winning)
    }
}

// ============================================================================
// Static detector list (in priority order)
// ============================================================================

pub const DETECTORS: [&dyn CategoryDetector; 10] = [
    &RoyalFlushDetector,
    &StraightFlushDetector,
    &FourOfAKindDetector,
    &FullHouseDetector,
    &FlushDetector,
    &StraightDetector,
    &ThreeOfAKindDetector,
    &TwoPairDetector,
    &OnePairDetector,
    &HighCardDetector,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn analyse(s: &str) -> HandAnalysis {
        HandAnalysis::new(&parse_cards(s).unwrap())
    }

    fn first_match(analysis: &HandAnalysis, rules: &HandRules) -> HandRank {
        DETECTORS
            .iter()
            .find(|d| d.detect(analysis, rules))
            .map(|d| d.build_result(analysis, rules).rank)
            .unwrap()
    }

    #[test]
    fn test_royal_flush_detector() {
        let a = analyse("Ah Kh Qh Jh Th");
        assert!(RoyalFlushDetector.detect(&a, &HandRules::default()));
        let r = RoyalFlushDetector.build_result(&a, &HandRules::default());
        assert_eq!(r.rank, HandRank::RoyalFlush);
        assert_eq!(r.score, 10_014);
    }

    #[test]
    fn test_straight_flush_tiebreak_uses_top() {
        let a = analyse("9h 8h 7h 6h 5h");
        let r = StraightFlushDetector.build_result(&a, &HandRules::default());
        assert_eq!(r.score, 9_009);
        let wheel = analyse("Ah 2h 3h 4h 5h");
        let r = StraightFlushDetector.build_result(&wheel, &HandRules::default());
        assert_eq!(r.score, 9_005);
    }

    #[test]
    fn test_four_of_a_kind_winning_cards() {
        let a = analyse("As Ah Ad Ac Ks");
        let r = FourOfAKindDetector.build_result(&a, &HandRules::default());
        assert_eq!(r.rank, HandRank::FourOfAKind);
        assert_eq!(r.winning_cards.len(), 4);
        assert_eq!(r.score, 8_014);
    }

    #[test]
    fn test_full_house_uses_trip_rank() {
        let a = analyse("3s 3h 3d Kc Ks");
        let r = FullHouseDetector.build_result(&a, &HandRules::default());
        assert_eq!(r.score, 7_003);
        assert_eq!(r.winning_cards.len(), 5);
    }

    #[test]
    fn test_two_pair_uses_higher_pair() {
        let a = analyse("As Ah 5d 5c Qs");
        let r = TwoPairDetector.build_result(&a, &HandRules::default());
        assert_eq!(r.score, 3_014);
        assert_eq!(r.winning_cards.len(), 4);
    }

    #[test]
    fn low_pair_falls_through_to_high_card() {
        let a = analyse("Th Td 5c 8s 2h");
        let rules = HandRules::jacks_or_better();
        assert!(!OnePairDetector.detect(&a, &rules));
        assert_eq!(first_match(&a, &rules), HandRank::HighCard);
        assert_eq!(first_match(&a, &HandRules::any_pair()), HandRank::OnePair);
    }

    #[test]
    fn trips_is_not_full_house() {
        let a = analyse("Kh Kd Kc 5s 2h");
        assert_eq!(first_match(&a, &HandRules::default()), HandRank::ThreeOfAKind);
    }

    #[test]
    fn test_high_card_keeps_top_card() {
        let a = analyse("As Kh Jd 9c 7s");
        let r = HighCardDetector.build_result(&a, &HandRules::default());
        assert_eq!(r.rank, HandRank::HighCard);
        assert_eq!(r.score, 1_014);
        assert_eq!(r.winning_cards.len(), 1);
    }

    #[test]
    fn test_detector_priority_straight_flush_over_flush() {
        let a = analyse("9h 8h 7h 6h 5h");
        assert!(StraightFlushDetector.detect(&a, &HandRules::default()));
        assert!(FlushDetector.detect(&a, &HandRules::default()));
        assert!(StraightDetector.detect(&a, &HandRules::default()));
        assert_eq!(first_match(&a, &HandRules::default()), HandRank::StraightFlush);
    }
}
