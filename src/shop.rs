//! Between-round shop: which upgrades are offered and what they cost.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Everything the shop can sell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShopOption {
    /// Play more parallel hands every round.
    ExtraHands,
    /// Add a wild card to the deck.
    WildCard,
    /// Take the lowest card out of the deck.
    RemoveCard,
    /// One Devil's Deal charge.
    DevilsDeal,
    /// Start the next round with a higher streak.
    StreakBoost,
}

impl ShopOption {
    pub const ALL: [ShopOption; 5] = [
        ShopOption::ExtraHands,
        ShopOption::WildCard,
        ShopOption::RemoveCard,
        ShopOption::DevilsDeal,
        ShopOption::StreakBoost,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            ShopOption::ExtraHands => "Extra Hands",
            ShopOption::WildCard => "Wild Card",
            ShopOption::RemoveCard => "Remove Card",
            ShopOption::DevilsDeal => "Devil's Deal",
            ShopOption::StreakBoost => "Streak Boost",
        }
    }
}

impl fmt::Display for ShopOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Relative chance of each option being offered.
pub type ShopWeights = BTreeMap<ShopOption, u32>;

/// Credits charged for each option. Missing options are free.
pub type ShopPrices = BTreeMap<ShopOption, u64>;

pub fn default_shop_weights() -> ShopWeights {
    [
        (ShopOption::ExtraHands, 30),
        (ShopOption::WildCard, 20),
        (ShopOption::RemoveCard, 25),
        (ShopOption::DevilsDeal, 10),
        (ShopOption::StreakBoost, 15),
    ]
    .into_iter()
    .collect()
}

pub fn default_shop_prices() -> ShopPrices {
    [
        (ShopOption::ExtraHands, 50),
        (ShopOption::WildCard, 120),
        (ShopOption::RemoveCard, 40),
        (ShopOption::DevilsDeal, 150),
        (ShopOption::StreakBoost, 60),
    ]
    .into_iter()
    .collect()
}

/// Pick `count` items from `weights` by roulette over the weight left in the
/// pool, without replacement. Once every item has been picked the rest is
/// filled by cycling through all items heaviest first.
///
/// Zero-weight items are only picked after every weighted item is gone.
/// Returns nothing when `weights` is empty.
pub fn select_weighted<T, R>(rng: &mut R, weights: &[(T, u32)], count: usize) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    if weights.is_empty() {
        return Vec::new();
    }

    let mut pool: Vec<(T, u32)> = weights.to_vec();
    let mut picked = Vec::with_capacity(count);
    while picked.len() < count && !pool.is_empty() {
        let total: u64 = pool.iter().map(|(_, w)| u64::from(*w)).sum();
        let index = if total == 0 {
            0
        } else {
            let mut roll = rng.random_range(0..total);
            pool.iter()
                .position(|(_, w)| {
                    let w = u64::from(*w);
                    if roll < w {
                        true
                    } else {
                        roll -= w;
                        false
                    }
                })
                .unwrap_or(0)
        };
        picked.push(pool.remove(index).0);
    }

    if picked.len() < count {
        let mut by_weight: Vec<&(T, u32)> = weights.iter().collect();
        by_weight.sort_by(|a, b| b.1.cmp(&a.1));
        let missing = count - picked.len();
        picked.extend(by_weight.iter().cycle().take(missing).map(|(item, _)| item.clone()));
    }
    picked
}

/// Shop offers for one visit.
///
/// ```
/// use parallel_poker::shop::{default_shop_weights, select_shop_options};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(3);
/// assert_eq!(select_shop_options(&mut rng, &default_shop_weights(), 8).len(), 8);
/// ```
pub fn select_shop_options<R: Rng + ?Sized>(
    rng: &mut R,
    weights: &ShopWeights,
    count: usize,
) -> Vec<ShopOption> {
    let table: Vec<(ShopOption, u32)> = weights.iter().map(|(o, w)| (*o, *w)).collect();
    let offers = select_weighted(rng, &table, count);
    log::debug!("{:<32}{:?}", "shop offers", offers);
    offers
}
