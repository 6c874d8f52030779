use crate::cards::Card;
use crate::hand::{ensure_hand_size, Hand, HandError, HAND_SIZE};
use crate::modifiers::DeckModifications;
use rand::seq::index::sample;
use rand::Rng;

/// Draw `count` independent hands from one base hand.
///
/// Held positions keep the base card's face. Every other position gets a card
/// from [`DeckModifications::draw_pool`], drawn without replacement within a
/// hand and independently across hands. Held indices past the hand are
/// ignored. Every emitted card carries a fresh identity.
///
/// ```
/// use parallel_poker::cards::parse_cards;
/// use parallel_poker::generator::generate_parallel_hands;
/// use parallel_poker::modifiers::DeckModifications;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let base = parse_cards("Ah Kd 7c 4s 2h").unwrap();
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
/// let hands = generate_parallel_hands(&mut rng, &base, &[0, 1], 5, &DeckModifications::new()).unwrap();
/// assert_eq!(hands.len(), 5);
/// for hand in &hands {
///     assert!(hand.cards()[0].same_face(base[0]));
///     assert!(hand.cards()[1].same_face(base[1]));
/// }
/// ```
pub fn generate_parallel_hands<R: Rng + ?Sized>(
    rng: &mut R,
    base: &[Card],
    held: &[usize],
    count: usize,
    mods: &DeckModifications,
) -> Result<Vec<Hand>, HandError> {
    ensure_hand_size(base)?;

    let mut is_held = [false; HAND_SIZE];
    for &i in held.iter().filter(|&&i| i < HAND_SIZE) {
        is_held[i] = true;
    }
    let open = is_held.iter().filter(|h| !**h).count();
    let pool = mods.draw_pool(base);

    log::debug!(
        "{:<32}{} hands, {} open, pool {}",
        "generating parallel hands",
        count,
        open,
        pool.len()
    );

    let hands = (0..count)
        .map(|_| {
            let mut draws = draw_replacements(rng, &pool, open).into_iter();
            let mut cards = [base[0]; HAND_SIZE];
            for (i, slot) in cards.iter_mut().enumerate() {
                // Only open slots consume a replacement.
                *slot = if is_held[i] {
                    base[i].reissue()
                } else {
                    draws.next().unwrap_or(base[i]).reissue()
                };
            }
            Hand::new(cards)
        })
        .collect();
    Ok(hands)
}

/// `n` cards from `pool`. Distinct entries when the pool is big enough,
/// otherwise repeated draws; nothing when the pool is empty.
fn draw_replacements<R: Rng + ?Sized>(rng: &mut R, pool: &[Card], n: usize) -> Vec<Card> {
    if pool.is_empty() {
        return Vec::new();
    }
    if pool.len() >= n {
        return sample(rng, pool.len(), n).into_iter().map(|i| pool[i]).collect();
    }
    log::trace!("draw pool of {} too small for {} cards, drawing with replacement", pool.len(), n);
    (0..n).map(|_| pool[rng.random_range(0..pool.len())]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{parse_cards, Rank, Suit};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    fn base() -> Vec<Card> {
        parse_cards("Ah Kd 7c 4s 2h").unwrap()
    }

    #[test]
    fn rejects_short_base_hand() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let short = &base()[..4];
        let err = generate_parallel_hands(&mut rng, short, &[], 3, &DeckModifications::new());
        assert_eq!(err.unwrap_err(), HandError::InvalidHandSize(4));
    }

    #[test]
    fn zero_count_yields_nothing() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let hands = generate_parallel_hands(&mut rng, &base(), &[], 0, &DeckModifications::new()).unwrap();
        assert!(hands.is_empty());
    }

    #[test]
    fn holding_everything_copies_the_base() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let base = base();
        let hands =
            generate_parallel_hands(&mut rng, &base, &[0, 1, 2, 3, 4], 3, &DeckModifications::new()).unwrap();
        for hand in &hands {
            for (card, original) in hand.cards().iter().zip(&base) {
                assert!(card.same_face(*original));
                assert!(!card.same_instance(*original));
            }
        }
    }

    #[test]
    fn replacements_avoid_base_faces_and_repeat_within_a_hand() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let base = base();
        let hands = generate_parallel_hands(&mut rng, &base, &[], 50, &DeckModifications::new()).unwrap();
        for hand in &hands {
            let faces: HashSet<_> = hand.cards().iter().map(|c| c.to_tuple()).collect();
            assert_eq!(faces.len(), 5);
            assert!(hand.cards().iter().all(|c| !base.iter().any(|b| b.same_face(*c))));
        }
    }

    #[test]
    fn out_of_range_holds_are_ignored() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let base = base();
        let hands = generate_parallel_hands(&mut rng, &base, &[0, 9, 42], 4, &DeckModifications::new()).unwrap();
        for hand in &hands {
            assert!(hand.cards()[0].same_face(base[0]));
            assert_eq!(hand.cards().len(), 5);
        }
    }

    #[test]
    fn every_open_slot_is_redrawn() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let base = base();
        let held = [0, 1];
        let hands = generate_parallel_hands(&mut rng, &base, &held, 200, &DeckModifications::new()).unwrap();
        for hand in &hands {
            for i in (0..HAND_SIZE).filter(|i| !held.contains(i)) {
                assert!(!hand.cards()[i].same_face(base[i]), "slot {i} kept {}", base[i]);
            }
        }
    }

    #[test]
    fn every_card_gets_a_fresh_identity() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let hands = generate_parallel_hands(&mut rng, &base(), &[0], 10, &DeckModifications::new()).unwrap();
        let ids: HashSet<_> = hands.iter().flat_map(|h| h.cards().iter().map(|c| c.id())).collect();
        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn special_cards_recur_across_hands() {
        let mut mods = DeckModifications::new();
        mods.removed_cards = crate::deck::Deck::standard().into_cards();
        mods.add_wild(Card::new(Rank::Ace, Suit::Spades));
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        let hands = generate_parallel_hands(&mut rng, &base(), &[0, 1, 2, 3], 6, &mods).unwrap();
        assert!(hands.iter().all(|h| h.cards()[4].is_wild()));
    }

    #[test]
    fn same_seed_same_hands() {
        let base = base();
        let run = |seed| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            generate_parallel_hands(&mut rng, &base, &[2], 8, &DeckModifications::new())
                .unwrap()
                .into_iter()
                .map(|h| h.cards().map(|c| c.to_tuple()))
                .collect::<Vec<_>>()
        };
        assert_eq!(run(11), run(11));
        assert_ne!(run(11), run(12));
    }
}
