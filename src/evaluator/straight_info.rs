use crate::cards::Rank;
use crate::hand::HAND_SIZE;

/// Whether the active ranks form a straight, its top rank, and whether it
/// runs Ten to Ace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    pub is_straight: bool,
    pub top_rank: Option<Rank>,
    pub is_broadway: bool,
}

impl StraightInfo {
    const NONE: StraightInfo = StraightInfo { is_straight: false, top_rank: None, is_broadway: false };

    /// Detect a straight from the active ranks in any order. Handles the wheel
    /// (A-2-3-4-5), where the Ace plays low and Five is the top rank.
    pub fn detect(ranks: &[Rank]) -> Self {
        if ranks.len() != HAND_SIZE {
            return Self::NONE;
        }

        let mut sorted: Vec<u8> = ranks.iter().map(|r| r.value()).collect();
        sorted.sort_unstable();

        let is_consecutive = sorted.windows(2).all(|w| w[1] == w[0] + 1);
        if is_consecutive {
            let low = sorted[0];
            let top = sorted[HAND_SIZE - 1];
            return StraightInfo {
                is_straight: true,
                top_rank: Rank::from_value(top),
                is_broadway: low == Rank::Ten.value() && top == Rank::Ace.value(),
            };
        }

        if sorted == [2u8, 3, 4, 5, 14] {
            return StraightInfo { is_straight: true, top_rank: Some(Rank::Five), is_broadway: false };
        }

        Self::NONE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_straight() {
        let info = StraightInfo::detect(&[Rank::King, Rank::Queen, Rank::Jack, Rank::Ten, Rank::Nine]);
        assert!(info.is_straight);
        assert_eq!(info.top_rank, Some(Rank::King));
        assert!(!info.is_broadway);
    }

    #[test]
    fn test_broadway() {
        let info = StraightInfo::detect(&[Rank::Ace, Rank::King, Rank::Queen, Rank::Jack, Rank::Ten]);
        assert!(info.is_straight);
        assert!(info.is_broadway);
        assert_eq!(info.top_rank, Some(Rank::Ace));
    }

    #[test]
    fn test_wheel() {
        let info = StraightInfo::detect(&[Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five]);
        assert!(info.is_straight);
        assert_eq!(info.top_rank, Some(Rank::Five));
        assert!(!info.is_broadway);
    }

    #[test]
    fn test_not_straight_pair() {
        let info = StraightInfo::detect(&[Rank::Ace, Rank::Ace, Rank::King, Rank::Queen, Rank::Jack]);
        assert!(!info.is_straight);
        assert_eq!(info.top_rank, None);
    }

    #[test]
    fn four_cards_never_straight() {
        let info = StraightInfo::detect(&[Rank::Five, Rank::Six, Rank::Seven, Rank::Eight]);
        assert!(!info.is_straight);
    }

    #[test]
    fn test_unsorted_input() {
        let info = StraightInfo::detect(&[Rank::Nine, Rank::King, Rank::Ten, Rank::Jack, Rank::Queen]);
        assert!(info.is_straight);
        assert_eq!(info.top_rank, Some(Rank::King));
    }
}
