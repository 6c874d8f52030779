//! Best-hand search for hands holding wild cards.
//!
//! Each strategy targets one rank, strongest first. A strategy picks concrete
//! faces for every wild card, re-runs the regular classifier on the
//! substituted hand and returns the result if it reaches its target. The
//! first strategy to succeed wins, so a weaker rank is only reported when
//! every stronger one was proven unreachable.

use super::{classify, HandRank, HandResult, HandRules};
use crate::cards::{Card, Rank, Suit};
use crate::hand::HAND_SIZE;

type Strategy = fn(&WildSearch<'_>) -> Option<HandResult>;

const STRATEGIES: [Strategy; 10] = [
    five_of_a_kind,
    royal_flush,
    straight_flush,
    four_of_a_kind,
    full_house,
    flush,
    straight,
    three_of_a_kind,
    two_pair,
    one_pair,
];

/// Resolve `wilds` (non-empty) against the regular active cards.
pub(crate) fn resolve(regulars: &[Card], wilds: &[Card], rules: &HandRules) -> HandResult {
    let search = WildSearch::new(regulars, wilds, rules);
    STRATEGIES.iter().find_map(|strategy| strategy(&search)).unwrap_or_else(|| search.aces_high())
}

/// Every five-rank straight window, highest first, ending with the wheel.
fn straight_windows() -> impl Iterator<Item = [Rank; 5]> {
    let regular = (6u8..=14).rev().filter_map(|top| {
        let r = |offset: u8| Rank::from_value(top - offset);
        Some([r(4)?, r(3)?, r(2)?, r(1)?, r(0)?])
    });
    regular.chain(std::iter::once([Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five]))
}

struct WildSearch<'a> {
    regulars: &'a [Card],
    wilds: &'a [Card],
    rules: &'a HandRules,
    counts: [u8; 15],
}

impl<'a> WildSearch<'a> {
    fn new(regulars: &'a [Card], wilds: &'a [Card], rules: &'a HandRules) -> Self {
        let mut counts = [0u8; 15];
        for c in regulars {
            counts[c.rank().value() as usize] += 1;
        }
        Self { regulars, wilds, rules, counts }
    }

    fn wild_count(&self) -> usize {
        self.wilds.len()
    }

    /// Flushes, straights and full houses need five live cards.
    fn full(&self) -> bool {
        self.regulars.len() + self.wilds.len() == HAND_SIZE
    }

    fn count(&self, rank: Rank) -> usize {
        usize::from(self.counts[rank.value() as usize])
    }

    fn needed(&self, rank: Rank, k: usize) -> usize {
        k.saturating_sub(self.count(rank))
    }

    fn regulars_distinct(&self) -> bool {
        self.counts.iter().all(|&c| c <= 1)
    }

    /// Suits every regular card could share; all four when there are none.
    fn shared_suits(&self) -> impl Iterator<Item = Suit> + '_ {
        Suit::ALL.into_iter().filter(move |s| self.regulars.iter().all(|c| c.suit() == *s))
    }

    /// A suit that keeps assigned wilds out of any flush with the regulars.
    fn off_suit(&self) -> Suit {
        let first = self.regulars.first().map(|c| c.suit());
        Suit::ALL.into_iter().find(|s| Some(*s) != first).unwrap_or(Suit::Clubs)
    }

    /// `n` suits for copies of `rank`, preferring ones no regular card uses.
    fn suits_for(&self, rank: Rank, n: usize) -> Vec<Suit> {
        let taken: Vec<Suit> =
            self.regulars.iter().filter(|c| c.rank() == rank).map(|c| c.suit()).collect();
        let free: Vec<Suit> = Suit::ALL.into_iter().filter(|s| !taken.contains(s)).collect();
        (0..n).map(|i| free.get(i).copied().unwrap_or(Suit::ALL[i % Suit::ALL.len()])).collect()
    }

    fn faces_of(&self, rank: Rank, n: usize) -> Vec<(Rank, Suit)> {
        self.suits_for(rank, n).into_iter().map(|s| (rank, s)).collect()
    }

    /// Ranks of `window` the regulars do not cover, if the regulars fit in it.
    fn missing_from(&self, window: &[Rank; 5]) -> Option<Vec<Rank>> {
        if !self.full() || !self.regulars_distinct() {
            return None;
        }
        if !self.regulars.iter().all(|c| window.contains(&c.rank())) {
            return None;
        }
        let missing: Vec<Rank> = window.iter().copied().filter(|r| self.count(*r) == 0).collect();
        (missing.len() == self.wild_count()).then_some(missing)
    }

    /// Highest rank (optionally at or above `floor`) that `k` copies of can be
    /// assembled from regulars plus wilds.
    fn reachable_ranks(&self, k: usize, floor: Rank) -> impl Iterator<Item = Rank> + '_ {
        Rank::ALL
            .into_iter()
            .rev()
            .filter(move |r| *r >= floor && self.needed(*r, k) <= self.wild_count())
    }

    /// Leftover wilds default to Aces.
    fn fill(&self, faces: &mut Vec<(Rank, Suit)>) {
        let extra = self.wild_count().saturating_sub(faces.len());
        faces.extend(self.faces_of(Rank::Ace, extra));
        faces.truncate(self.wild_count());
    }

    fn substitute(&self, faces: &[(Rank, Suit)]) -> Vec<Card> {
        let mut cards = self.regulars.to_vec();
        cards.extend(self.wilds.iter().zip(faces).map(|(w, (r, s))| w.as_face(*r, *s)));
        cards
    }

    /// Winning cards are reported as the original wild cards.
    fn restore_wilds(&self, mut result: HandResult) -> HandResult {
        for card in result.winning_cards.iter_mut() {
            if let Some(w) = self.wilds.iter().find(|w| w.same_instance(*card)) {
                *card = *w;
            }
        }
        result
    }

    fn realize(&self, faces: &[(Rank, Suit)], target: HandRank) -> Option<HandResult> {
        if faces.len() != self.wild_count() {
            return None;
        }
        let result = classify(&self.substitute(faces), self.rules);
        (result.rank >= target).then(|| self.restore_wilds(result))
    }

    fn n_of_a_kind(&self, k: usize, floor: Rank, target: HandRank) -> Option<HandResult> {
        self.reachable_ranks(k, floor).find_map(|rank| {
            let mut faces = self.faces_of(rank, self.needed(rank, k));
            self.fill(&mut faces);
            self.realize(&faces, target)
        })
    }

    fn straight_flush_in<I>(&self, windows: I, target: HandRank) -> Option<HandResult>
    where
        I: IntoIterator<Item = [Rank; 5]>,
    {
        windows.into_iter().find_map(|window| {
            let missing = self.missing_from(&window)?;
            self.shared_suits().find_map(|suit| {
                let faces: Vec<_> = missing.iter().map(|r| (*r, suit)).collect();
                self.realize(&faces, target)
            })
        })
    }

    fn aces_high(&self) -> HandResult {
        let suit = self.off_suit();
        let faces: Vec<_> = (0..self.wild_count()).map(|_| (Rank::Ace, suit)).collect();
        self.restore_wilds(classify(&self.substitute(&faces), self.rules))
    }
}

// ============================================================================
// Strategies (strongest first)
// ============================================================================

fn five_of_a_kind(s: &WildSearch<'_>) -> Option<HandResult> {
    if !s.full() {
        return None;
    }
    let rank = s.reachable_ranks(HAND_SIZE, Rank::Two).next()?;
    let mut winning = s.regulars.to_vec();
    winning.extend_from_slice(s.wilds);
    Some(HandResult::new(HandRank::FiveOfAKind, rank, winning))
}

fn royal_flush(s: &WildSearch<'_>) -> Option<HandResult> {
    let broadway = [Rank::Ten, Rank::Jack, Rank::Queen, Rank::King, Rank::Ace];
    s.straight_flush_in([broadway], HandRank::RoyalFlush)
}

fn straight_flush(s: &WildSearch<'_>) -> Option<HandResult> {
    s.straight_flush_in(straight_windows(), HandRank::StraightFlush)
}

fn four_of_a_kind(s: &WildSearch<'_>) -> Option<HandResult> {
    s.n_of_a_kind(4, Rank::Two, HandRank::FourOfAKind)
}

fn full_house(s: &WildSearch<'_>) -> Option<HandResult> {
    if !s.full() {
        return None;
    }
    for trips in Rank::ALL.into_iter().rev() {
        for pair in Rank::ALL.into_iter().rev().filter(|p| *p != trips) {
            let fits = s.regulars.iter().all(|c| c.rank() == trips || c.rank() == pair);
            if !fits || s.count(trips) > 3 || s.count(pair) > 2 {
                continue;
            }
            let (need_t, need_p) = (s.needed(trips, 3), s.needed(pair, 2));
            if need_t + need_p != s.wild_count() {
                continue;
            }
            let mut faces = s.faces_of(trips, need_t);
            faces.extend(s.faces_of(pair, need_p));
            if let Some(result) = s.realize(&faces, HandRank::FullHouse) {
                return Some(result);
            }
        }
    }
    None
}

fn flush(s: &WildSearch<'_>) -> Option<HandResult> {
    if !s.full() {
        return None;
    }
    s.shared_suits().find_map(|suit| {
        let faces: Vec<_> = Rank::ALL
            .into_iter()
            .rev()
            .filter(|r| s.count(*r) == 0)
            .take(s.wild_count())
            .map(|r| (r, suit))
            .collect();
        s.realize(&faces, HandRank::Flush)
    })
}

fn straight(s: &WildSearch<'_>) -> Option<HandResult> {
    let suit = s.off_suit();
    straight_windows().find_map(|window| {
        let missing = s.missing_from(&window)?;
        let faces: Vec<_> = missing.into_iter().map(|r| (r, suit)).collect();
        s.realize(&faces, HandRank::Straight)
    })
}

fn three_of_a_kind(s: &WildSearch<'_>) -> Option<HandResult> {
    s.n_of_a_kind(3, Rank::Two, HandRank::ThreeOfAKind)
}

fn two_pair(s: &WildSearch<'_>) -> Option<HandResult> {
    for high in Rank::ALL.into_iter().rev() {
        for low in Rank::ALL.into_iter().rev().filter(|l| *l < high) {
            let (need_h, need_l) = (s.needed(high, 2), s.needed(low, 2));
            if need_h + need_l > s.wild_count() {
                continue;
            }
            let mut faces = s.faces_of(high, need_h);
            faces.extend(s.faces_of(low, need_l));
            s.fill(&mut faces);
            if let Some(result) = s.realize(&faces, HandRank::TwoPair) {
                return Some(result);
            }
        }
    }
    None
}

fn one_pair(s: &WildSearch<'_>) -> Option<HandResult> {
    s.n_of_a_kind(2, s.rules.min_pair_rank, HandRank::OnePair)
}
