use crate::cards::{parse_cards, Card};
use crate::evaluator::{evaluate, HandResult, HandRules};
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

/// Number of cards in every video poker hand.
pub const HAND_SIZE: usize = 5;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("a hand needs exactly 5 cards, got {0}")]
    InvalidHandSize(usize),
    #[error("card parse error: {0}")]
    CardParse(String),
}

/// Check the one structural rule every core operation shares.
pub(crate) fn ensure_hand_size(cards: &[Card]) -> Result<(), HandError> {
    if cards.len() != HAND_SIZE {
        return Err(HandError::InvalidHandSize(cards.len()));
    }
    Ok(())
}

static NEXT_HAND_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandId(u64);

impl HandId {
    pub fn fresh() -> Self {
        HandId(NEXT_HAND_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Exactly five cards plus an identity.
///
/// ```
/// use parallel_poker::hand::Hand;
///
/// let hand: Hand = "Ah Kh Qh Jh Th".parse().unwrap();
/// assert_eq!(hand.cards().len(), 5);
/// assert!("Ah Kh".parse::<Hand>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    id: HandId,
    cards: [Card; HAND_SIZE],
}

impl Hand {
    pub fn new(cards: [Card; HAND_SIZE]) -> Self {
        Self { id: HandId::fresh(), cards }
    }

    pub fn try_new(cards: Vec<Card>) -> Result<Self, HandError> {
        Self::from_slice(&cards)
    }

    pub fn from_slice(slice: &[Card]) -> Result<Self, HandError> {
        ensure_hand_size(slice)?;
        let mut cards = [slice[0]; HAND_SIZE];
        cards.copy_from_slice(slice);
        Ok(Self::new(cards))
    }

    pub fn id(&self) -> HandId {
        self.id
    }

    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    pub fn evaluate(&self, rules: &HandRules) -> HandResult {
        // Size is guaranteed by construction; the fallback never triggers.
        evaluate(&self.cards, rules).unwrap_or_default()
    }
}

impl FromStr for Hand {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Hand::try_new(cards)
    }
}
