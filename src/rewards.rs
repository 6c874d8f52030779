use crate::evaluator::{HandRank, HandResult};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Hand rank → payout multiplier. Ranks missing from the table pay 0.
///
/// Serializes as a plain map keyed by rank key:
/// `{"royal-flush": 800, "one-pair": 1}`. Unknown keys are skipped on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RewardTable(BTreeMap<HandRank, u32>);

impl RewardTable {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Classic 9/6 Jacks or Better, plus a five-of-a-kind line for wild play.
    pub fn jacks_or_better() -> Self {
        [
            (HandRank::FiveOfAKind, 1000),
            (HandRank::RoyalFlush, 800),
            (HandRank::StraightFlush, 50),
            (HandRank::FourOfAKind, 25),
            (HandRank::FullHouse, 9),
            (HandRank::Flush, 6),
            (HandRank::Straight, 4),
            (HandRank::ThreeOfAKind, 3),
            (HandRank::TwoPair, 2),
            (HandRank::OnePair, 1),
        ]
        .into_iter()
        .collect()
    }

    pub fn multiplier(&self, rank: HandRank) -> u32 {
        self.0.get(&rank).copied().unwrap_or(0)
    }

    pub fn set(&mut self, rank: HandRank, multiplier: u32) {
        self.0.insert(rank, multiplier);
    }

    pub fn iter(&self) -> impl Iterator<Item = (HandRank, u32)> + '_ {
        self.0.iter().map(|(r, m)| (*r, *m))
    }
}

impl Default for RewardTable {
    fn default() -> Self {
        Self::jacks_or_better()
    }
}

impl FromIterator<(HandRank, u32)> for RewardTable {
    fn from_iter<I: IntoIterator<Item = (HandRank, u32)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'de> Deserialize<'de> for RewardTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, u32>::deserialize(deserializer)?;
        Ok(raw
            .into_iter()
            .filter_map(|(key, multiplier)| match key.parse::<HandRank>() {
                Ok(rank) => Some((rank, multiplier)),
                Err(err) => {
                    log::warn!("{:<32}{}", "skipping reward line", err);
                    None
                }
            })
            .collect())
    }
}

/// Copy of `result` with its multiplier looked up in `table`.
///
/// ```
/// use parallel_poker::cards::parse_cards;
/// use parallel_poker::evaluator::{evaluate, HandRules};
/// use parallel_poker::rewards::{apply_rewards, RewardTable};
///
/// let result = evaluate(&parse_cards("Jh Jd 4c 8s 2h").unwrap(), &HandRules::default()).unwrap();
/// let paid = apply_rewards(&result, &RewardTable::jacks_or_better());
/// assert_eq!(paid.multiplier, 1);
/// assert_eq!(result.multiplier, 0);
/// ```
pub fn apply_rewards(result: &HandResult, table: &RewardTable) -> HandResult {
    let mut out = result.clone();
    out.multiplier = table.multiplier(result.rank);
    out
}
