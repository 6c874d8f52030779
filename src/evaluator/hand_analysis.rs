use super::rank_groups::RankGroups;
use super::straight_info::StraightInfo;
use super::suit_info::SuitInfo;
use crate::cards::{Card, Rank};
use crate::evaluator::{HandRank, HandResult};

/// Pre-computed analysis of the active (non-dead, non-wild) cards of a hand.
/// Built once and shared by all category detectors.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    /// Active cards sorted ascending by rank, then suit.
    pub sorted_cards: Vec<Card>,
    pub rank_groups: RankGroups,
    pub suit_info: SuitInfo,
    pub straight_info: StraightInfo,
}

impl HandAnalysis {
    pub fn new(active: &[Card]) -> Self {
        let mut sorted_cards = active.to_vec();
        sorted_cards.sort_by(|a, b| a.rank().cmp(&b.rank()).then(a.suit().cmp(&b.suit())));

        let ranks: Vec<Rank> = sorted_cards.iter().map(|c| c.rank()).collect();
        let rank_groups = RankGroups::from_cards(&sorted_cards);
        let suit_info = SuitInfo::detect(&sorted_cards);
        let straight_info = StraightInfo::detect(&ranks);

        Self { sorted_cards, rank_groups, suit_info, straight_info }
    }

    pub fn highest(&self) -> Option<Card> {
        self.sorted_cards.last().copied()
    }

    pub fn cards_of_rank(&self, rank: Rank) -> Vec<Card> {
        self.sorted_cards.iter().copied().filter(|c| c.rank() == rank).collect()
    }

    pub fn cards_of_ranks(&self, ranks: &[Rank]) -> Vec<Card> {
        self.sorted_cards.iter().copied().filter(|c| ranks.contains(&c.rank())).collect()
    }

    pub fn build_result(&self, rank: HandRank, tiebreak: Rank, winning: Vec<Card>) -> HandResult {
        HandResult::new(rank, tiebreak, winning)
    }
}
