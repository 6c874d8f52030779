use crate::cards::{Card, Suit};
use crate::hand::HAND_SIZE;

/// Suit histogram of the active cards and whether they form a flush.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuitInfo {
    pub counts: [u8; 4],
    pub is_flush: bool,
    pub flush_suit: Option<Suit>,
}

impl SuitInfo {
    /// A flush needs five active cards of one suit; a hand carrying dead
    /// cards never qualifies.
    pub fn detect(cards: &[Card]) -> Self {
        let mut counts = [0u8; 4];
        for c in cards {
            counts[c.suit().index()] += 1;
        }

        let flush_suit = Suit::ALL
            .into_iter()
            .find(|s| usize::from(counts[s.index()]) == HAND_SIZE && cards.len() == HAND_SIZE);

        SuitInfo { counts, is_flush: flush_suit.is_some(), flush_suit }
    }
}
