use crate::cards::{Card, Rank};

/// Rank histogram of the active cards, grouped by frequency and sorted by
/// (count desc, rank desc).
///
/// Example: AAAKQ groups as [(Ace, 3), (King, 1), (Queen, 1)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    counts: [u8; 15],
    groups: Vec<(Rank, u8)>,
}

impl RankGroups {
    pub fn from_cards(cards: &[Card]) -> Self {
        let mut counts = [0u8; 15];
        for c in cards {
            counts[c.rank().value() as usize] += 1;
        }
        Self::from_counts(&counts)
    }

    /// The array is indexed by rank value (2-14).
    pub fn from_counts(rank_counts: &[u8; 15]) -> Self {
        let mut groups: Vec<(Rank, u8)> = Rank::ALL
            .iter()
            .copied()
            .map(|r| (r, rank_counts[r.value() as usize]))
            .filter(|(_, count)| *count > 0)
            .collect();
        groups.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));
        Self { counts: *rank_counts, groups }
    }

    pub fn count_of(&self, rank: Rank) -> u8 {
        self.counts[rank.value() as usize]
    }

    /// Rank of a four-of-a-kind, if present. Duplicated input can push a
    /// count past four; that still reads as quads.
    pub fn quad(&self) -> Option<Rank> {
        self.groups.iter().find(|(_, count)| *count >= 4).map(|(rank, _)| *rank)
    }

    pub fn trips(&self) -> Option<Rank> {
        self.groups.iter().find(|(_, count)| *count == 3).map(|(rank, _)| *rank)
    }

    /// All pair ranks, highest first.
    pub fn pairs(&self) -> Vec<Rank> {
        self.groups.iter().filter(|(_, count)| *count == 2).map(|(rank, _)| *rank).collect()
    }

    pub fn has_full_house(&self) -> bool {
        self.trips().is_some() && !self.pairs().is_empty()
    }

    /// True when no rank appears twice.
    pub fn all_distinct(&self) -> bool {
        self.groups.iter().all(|(_, count)| *count == 1)
    }

    #[cfg(test)]
    pub fn groups(&self) -> &[(Rank, u8)] {
        &self.groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn groups(s: &str) -> RankGroups {
        RankGroups::from_cards(&parse_cards(s).unwrap())
    }

    #[test]
    fn test_quad() {
        let g = groups("Ac Ad Ah As Kc");
        assert_eq!(g.quad(), Some(Rank::Ace));
        assert_eq!(g.trips(), None);
        assert_eq!(g.pairs(), vec![]);
    }

    #[test]
    fn test_full_house() {
        let g = groups("Ac Ad Ah Kc Kd");
        assert!(g.has_full_house());
        assert_eq!(g.trips(), Some(Rank::Ace));
        assert_eq!(g.pairs(), vec![Rank::King]);
    }

    #[test]
    fn test_two_pair_sorted_high_first() {
        let g = groups("Kc Kd Ac Ad Tc");
        assert_eq!(g.pairs(), vec![Rank::Ace, Rank::King]);
        assert!(!g.all_distinct());
    }

    #[test]
    fn test_partial_hand() {
        let g = groups("Kc Kd Kh");
        assert_eq!(g.trips(), Some(Rank::King));
        assert_eq!(g.count_of(Rank::King), 3);
        assert_eq!(g.count_of(Rank::Two), 0);
    }

    #[test]
    fn test_sorting() {
        let g = groups("5c Ac Tc");
        let ranks: Vec<Rank> = g.groups().iter().map(|(r, _)| *r).collect();
        assert_eq!(ranks, vec![Rank::Ace, Rank::Ten, Rank::Five]);
        assert!(g.all_distinct());
    }
}
