use crate::cards::Card;
use crate::deck::Deck;

/// Changes the player has made to the deck over a run.
///
/// Dead and wild cards join the draw pool as extra entries; removed faces
/// leave it. None of them are consumed by a draw, so the same special card
/// may show up in many parallel hands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeckModifications {
    pub dead_cards: Vec<Card>,
    pub wild_cards: Vec<Card>,
    pub removed_cards: Vec<Card>,
    /// How many removals were bought, including ones that matched nothing.
    pub removal_count: u32,
}

impl DeckModifications {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.dead_cards.is_empty() && self.wild_cards.is_empty() && self.removed_cards.is_empty()
    }

    /// Add a dead copy of `card`'s face.
    pub fn add_dead(&mut self, card: Card) {
        self.dead_cards.push(Card::dead(card.rank(), card.suit()));
    }

    /// Add a wild copy of `card`'s face.
    pub fn add_wild(&mut self, card: Card) {
        self.wild_cards.push(Card::wild(card.rank(), card.suit()));
    }

    /// Take `card`'s face out of the deck.
    pub fn remove(&mut self, card: Card) {
        self.removal_count += 1;
        if !self.removed_cards.iter().any(|c| c.same_face(card)) {
            self.removed_cards.push(Card::new(card.rank(), card.suit()));
        }
    }

    /// Standard deck minus removed faces, plus every special card.
    pub fn deck(&self) -> Deck {
        let mut deck = Deck::standard();
        deck.remove_faces(&self.removed_cards);
        deck.extend(self.special_cards());
        deck
    }

    /// Pool replacement cards are drawn from: [`Self::deck`] minus the
    /// natural faces in `base`. Special cards are never excluded by the base
    /// hand, and a special card in `base` does not exclude its natural face.
    pub fn draw_pool(&self, base: &[Card]) -> Vec<Card> {
        let naturals: Vec<Card> = base.iter().copied().filter(|c| !c.is_wild() && !c.is_dead()).collect();
        let mut deck = Deck::standard();
        deck.remove_faces(&self.removed_cards);
        deck.remove_faces(&naturals);
        deck.extend(self.special_cards());
        deck.into_cards()
    }

    fn special_cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.dead_cards.iter().chain(&self.wild_cards).map(|c| c.reissue())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{parse_cards, Rank, Suit};

    #[test]
    fn empty_modifications_leave_a_standard_pool() {
        let mods = DeckModifications::new();
        assert!(mods.is_empty());
        assert_eq!(mods.deck().len(), 52);
        let base = parse_cards("Ah Kh Qh Jh Th").unwrap();
        assert_eq!(mods.draw_pool(&base).len(), 47);
    }

    #[test]
    fn special_cards_join_the_pool() {
        let mut mods = DeckModifications::new();
        mods.add_dead(Card::new(Rank::Two, Suit::Clubs));
        mods.add_wild(Card::new(Rank::Ace, Suit::Spades));
        let base = parse_cards("Ah Kh Qh Jh Th").unwrap();
        let pool = mods.draw_pool(&base);
        assert_eq!(pool.len(), 49);
        assert_eq!(pool.iter().filter(|c| c.is_dead()).count(), 1);
        assert_eq!(pool.iter().filter(|c| c.is_wild()).count(), 1);
    }

    #[test]
    fn base_hand_does_not_exclude_special_copies() {
        let mut mods = DeckModifications::new();
        mods.add_wild(Card::new(Rank::Ace, Suit::Hearts));
        let base = parse_cards("Ah Kh Qh Jh Th").unwrap();
        let pool = mods.draw_pool(&base);
        assert!(pool.iter().any(|c| c.is_wild() && c.rank() == Rank::Ace));
        assert!(!pool.iter().any(|c| !c.is_wild() && c.to_tuple() == (Rank::Ace, Suit::Hearts)));
    }

    #[test]
    fn special_base_cards_keep_their_natural_face() {
        let mods = DeckModifications::new();
        let base = parse_cards("Kh* Qd! 7c 4s 2h").unwrap();
        let pool = mods.draw_pool(&base);
        assert_eq!(pool.len(), 49);
        assert!(pool.iter().any(|c| c.to_tuple() == (Rank::King, Suit::Hearts)));
        assert!(pool.iter().any(|c| c.to_tuple() == (Rank::Queen, Suit::Diamonds)));
        assert!(!pool.iter().any(|c| c.to_tuple() == (Rank::Seven, Suit::Clubs)));
    }

    #[test]
    fn removal_counts_every_purchase() {
        let mut mods = DeckModifications::new();
        let two = Card::new(Rank::Two, Suit::Clubs);
        mods.remove(two);
        mods.remove(two);
        assert_eq!(mods.removal_count, 2);
        assert_eq!(mods.removed_cards.len(), 1);
        assert_eq!(mods.deck().len(), 51);
    }
}
