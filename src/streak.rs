//! Win-streak multiplier.
//!
//! A streak counter climbs by one on every paying hand and slips by one on
//! every losing hand. Once it reaches the base threshold the player enters
//! tier 0; each further tier needs `threshold_increment * growth^i` more.

use serde::{Deserialize, Serialize};

/// Tier search stops here however long the streak gets.
pub const MAX_TIER: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StreakConfig {
    pub enabled: bool,
    pub base_threshold: u32,
    pub threshold_increment: f64,
    pub exponential_growth: f64,
    pub base_multiplier: f64,
    pub multiplier_increment: f64,
}

impl Default for StreakConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_threshold: 5,
            threshold_increment: 5.0,
            exponential_growth: 1.5,
            base_multiplier: 1.5,
            multiplier_increment: 0.5,
        }
    }
}

impl StreakConfig {
    pub fn disabled() -> Self {
        Self { enabled: false, ..Self::default() }
    }
}

/// Streak count at which `tier` begins.
pub fn tier_threshold(tier: u32, config: &StreakConfig) -> f64 {
    let mut threshold = f64::from(config.base_threshold);
    let mut step = config.threshold_increment;
    for _ in 0..tier {
        threshold += step;
        step *= config.exponential_growth;
    }
    threshold
}

/// Tier reached by `streak`, or `None` below the base threshold.
pub fn tier(streak: u32, config: &StreakConfig) -> Option<u32> {
    if !config.enabled || streak < config.base_threshold {
        return None;
    }
    let streak = f64::from(streak);
    let mut tier = 0;
    while tier < MAX_TIER && streak >= tier_threshold(tier + 1, config) {
        tier += 1;
    }
    Some(tier)
}

/// Payout multiplier for the current streak; 1.0 below the first tier.
///
/// ```
/// use parallel_poker::streak::{calculate_streak_multiplier, StreakConfig};
///
/// let config = StreakConfig::default();
/// assert_eq!(calculate_streak_multiplier(4, &config), 1.0);
/// assert_eq!(calculate_streak_multiplier(5, &config), 1.5);
/// assert_eq!(calculate_streak_multiplier(10, &config), 2.0);
/// ```
pub fn calculate_streak_multiplier(streak: u32, config: &StreakConfig) -> f64 {
    match tier(streak, config) {
        Some(t) => config.base_multiplier + f64::from(t) * config.multiplier_increment,
        None => 1.0,
    }
}

/// Streak count the player needs to reach the next tier, rounded up.
pub fn next_threshold(streak: u32, config: &StreakConfig) -> u32 {
    let next = match tier(streak, config) {
        Some(t) => tier_threshold(t + 1, config),
        None => f64::from(config.base_threshold),
    };
    next.ceil() as u32
}

/// Fraction of the current tier span covered, in `[0, 1]`.
///
/// Before the first tier the span runs from 0 to the base threshold.
pub fn streak_progress(streak: u32, config: &StreakConfig) -> f64 {
    if !config.enabled {
        return 0.0;
    }
    let (start, end) = match tier(streak, config) {
        Some(t) => (tier_threshold(t, config), tier_threshold(t + 1, config)),
        None => (0.0, f64::from(config.base_threshold)),
    };
    let span = end - start;
    if span <= 0.0 {
        return 1.0;
    }
    ((f64::from(streak) - start) / span).clamp(0.0, 1.0)
}

/// Running streak for one run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StreakState {
    pub count: u32,
    pub config: StreakConfig,
}

impl StreakState {
    pub fn new(config: StreakConfig) -> Self {
        Self { count: 0, config }
    }

    /// Update the counter for one resolved hand.
    pub fn record(&mut self, payout: u64) {
        if payout > 0 {
            self.count = self.count.saturating_add(1);
        } else {
            self.count = self.count.saturating_sub(1);
        }
    }

    pub fn multiplier(&self) -> f64 {
        calculate_streak_multiplier(self.count, &self.config)
    }

    pub fn tier(&self) -> Option<u32> {
        tier(self.count, &self.config)
    }

    pub fn next_threshold(&self) -> u32 {
        next_threshold(self.count, &self.config)
    }

    pub fn progress(&self) -> f64 {
        streak_progress(self.count, &self.config)
    }
}
