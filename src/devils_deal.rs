use crate::cards::Card;
use crate::evaluator::{evaluate, HandResult, HandRules};
use crate::hand::{ensure_hand_size, HandError, HAND_SIZE};
use crate::rewards::{apply_rewards, RewardTable};

/// How many cards a Devil's Deal offers.
pub const OFFER_SIZE: usize = 3;

/// One deck card's best use in the current hand.
#[derive(Debug, Clone)]
pub struct DevilsDealCandidate {
    pub card: Card,
    /// Hand position the card does the most good in.
    pub position: usize,
    pub result: HandResult,
    pub payout: u64,
}

/// Score every card in `deck` by the best payout it reaches when swapped into
/// any one position of `hand`, best first.
///
/// The sort is stable, so equal payouts keep deck order. Ties on payout are
/// left alone even when one candidate has the stronger hand score.
pub fn rank_devils_deal_candidates(
    hand: &[Card],
    deck: &[Card],
    table: &RewardTable,
    bet: u64,
    rules: &HandRules,
) -> Result<Vec<DevilsDealCandidate>, HandError> {
    ensure_hand_size(hand)?;

    let mut candidates = Vec::with_capacity(deck.len());
    for &card in deck {
        let mut best: Option<DevilsDealCandidate> = None;
        for position in 0..HAND_SIZE {
            let mut trial = hand.to_vec();
            trial[position] = card;
            let result = apply_rewards(&evaluate(&trial, rules)?, table);
            let payout = result.payout(bet);
            if best.as_ref().map_or(true, |b| payout > b.payout) {
                best = Some(DevilsDealCandidate { card, position, result, payout });
            }
        }
        candidates.extend(best);
    }

    candidates.sort_by(|a, b| b.payout.cmp(&a.payout));
    log::debug!(
        "{:<32}{} candidates, best payout {}",
        "ranked devil's deal",
        candidates.len(),
        candidates.first().map_or(0, |c| c.payout)
    );
    Ok(candidates)
}

/// The three deck cards with the highest potential payout for `hand`.
///
/// ```
/// use parallel_poker::cards::parse_cards;
/// use parallel_poker::devils_deal::find_best_devils_deal_cards;
/// use parallel_poker::evaluator::HandRules;
/// use parallel_poker::rewards::RewardTable;
///
/// let hand = parse_cards("Ah Kh Qh Jh 2c").unwrap();
/// let deck = parse_cards("3d Th 9s").unwrap();
/// let best = find_best_devils_deal_cards(&hand, &deck, &RewardTable::default(), 5, &HandRules::default()).unwrap();
/// assert_eq!(best[0].to_string(), "Th");
/// ```
pub fn find_best_devils_deal_cards(
    hand: &[Card],
    deck: &[Card],
    table: &RewardTable,
    bet: u64,
    rules: &HandRules,
) -> Result<Vec<Card>, HandError> {
    let ranked = rank_devils_deal_candidates(hand, deck, table, bet, rules)?;
    Ok(ranked.into_iter().take(OFFER_SIZE).map(|c| c.card).collect())
}
