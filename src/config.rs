//! Game configuration.
//!
//! A [`GameConfig`] is an immutable value handed to a run; nothing in the
//! crate reads configuration from global state. Presets come from
//! [`GameMode`], custom setups from JSON.

use crate::cards::Rank;
use crate::evaluator::HandRules;
use crate::failure::FailureThresholds;
use crate::rewards::RewardTable;
use crate::shop::{default_shop_prices, default_shop_weights, ShopOption, ShopPrices, ShopWeights};
use crate::streak::StreakConfig;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest number of parallel hands a run may reach.
pub const MAX_PARALLEL_HANDS: usize = 100;

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("config is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameMode {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl GameMode {
    pub const ALL: [GameMode; 3] = [GameMode::Easy, GameMode::Normal, GameMode::Hard];

    pub const fn label(self) -> &'static str {
        match self {
            GameMode::Easy => "Easy",
            GameMode::Normal => "Normal",
            GameMode::Hard => "Hard",
        }
    }

    pub fn next(self) -> Self {
        match self {
            GameMode::Easy => GameMode::Normal,
            GameMode::Normal => GameMode::Hard,
            GameMode::Hard => GameMode::Easy,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            GameMode::Easy => GameMode::Hard,
            GameMode::Normal => GameMode::Easy,
            GameMode::Hard => GameMode::Normal,
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// When endless mode starts and what it demands.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EndlessConfig {
    /// First round the failure checks run after.
    pub start_round: u32,
    pub thresholds: FailureThresholds,
}

impl Default for EndlessConfig {
    fn default() -> Self {
        Self { start_round: 10, thresholds: FailureThresholds::default() }
    }
}

/// Economy of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub starting_credits: u64,
    pub base_minimum_bet: u64,
    /// Minimum bet grows by this factor every round.
    pub minimum_bet_growth: f64,
    pub starting_hands: usize,
    /// Parallel hands added by one Extra Hands purchase.
    pub extra_hands_step: usize,
    /// Streak points added by one Streak Boost purchase.
    pub streak_boost: u32,
    pub shop_option_count: usize,
    pub shop_weights: ShopWeights,
    pub shop_prices: ShopPrices,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            starting_credits: 500,
            base_minimum_bet: 5,
            minimum_bet_growth: 1.2,
            starting_hands: 5,
            extra_hands_step: 2,
            streak_boost: 3,
            shop_option_count: 3,
            shop_weights: default_shop_weights(),
            shop_prices: default_shop_prices(),
        }
    }
}

impl RunConfig {
    /// Minimum bet per hand in `round` (1-based), rounded up.
    pub fn minimum_bet(&self, round: u32) -> u64 {
        let steps = round.saturating_sub(1);
        let growth = self.minimum_bet_growth.powi(steps.min(i32::MAX as u32) as i32);
        let bet = (self.base_minimum_bet as f64 * growth).ceil();
        if bet >= u64::MAX as f64 {
            u64::MAX
        } else {
            (bet as u64).max(self.base_minimum_bet)
        }
    }

    pub fn price(&self, option: ShopOption) -> u64 {
        self.shop_prices.get(&option).copied().unwrap_or(0)
    }
}

/// Everything a run needs to know.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub mode: GameMode,
    pub rules: HandRules,
    pub rewards: RewardTable,
    pub streak: StreakConfig,
    pub endless: EndlessConfig,
    pub run: RunConfig,
}

impl GameConfig {
    pub fn for_mode(mode: GameMode) -> Self {
        match mode {
            GameMode::Easy => Self {
                mode,
                rules: HandRules { min_pair_rank: Rank::Ten },
                streak: StreakConfig { base_threshold: 3, ..StreakConfig::default() },
                endless: EndlessConfig {
                    start_round: 12,
                    thresholds: FailureThresholds {
                        bet_multiplier: Some(1.25),
                        minimum_efficiency: Some(0.0),
                        minimum_winning_hands: Some(1),
                        minimum_win_percent: None,
                    },
                },
                run: RunConfig {
                    starting_credits: 1_000,
                    minimum_bet_growth: 1.1,
                    starting_hands: 10,
                    shop_option_count: 4,
                    ..RunConfig::default()
                },
                ..Self::default()
            },
            GameMode::Normal => Self::default(),
            GameMode::Hard => Self {
                mode,
                streak: StreakConfig {
                    base_threshold: 7,
                    multiplier_increment: 0.25,
                    ..StreakConfig::default()
                },
                endless: EndlessConfig {
                    start_round: 8,
                    thresholds: FailureThresholds {
                        bet_multiplier: Some(2.0),
                        minimum_efficiency: Some(25.0),
                        minimum_winning_hands: Some(2),
                        minimum_win_percent: Some(20.0),
                    },
                },
                run: RunConfig {
                    starting_credits: 300,
                    base_minimum_bet: 10,
                    minimum_bet_growth: 1.35,
                    starting_hands: 3,
                    shop_option_count: 2,
                    ..RunConfig::default()
                },
                ..Self::default()
            },
        }
    }

    /// Parse and validate a config. Missing fields take Normal-mode values.
    ///
    /// ```
    /// use parallel_poker::config::GameConfig;
    ///
    /// let config = GameConfig::from_json_str(r#"{"run": {"starting_credits": 50}}"#).unwrap();
    /// assert_eq!(config.run.starting_credits, 50);
    /// assert!(GameConfig::from_json_str(r#"{"run": {"base_minimum_bet": 0}}"#).is_err());
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: &str| Err(ConfigError::Invalid(msg.to_string()));
        if self.run.base_minimum_bet == 0 {
            return invalid("base_minimum_bet must be at least 1");
        }
        let growth = self.run.minimum_bet_growth;
        if growth.is_nan() || growth < 1.0 {
            return invalid("minimum_bet_growth must be at least 1.0");
        }
        if self.run.starting_hands == 0 || self.run.starting_hands > MAX_PARALLEL_HANDS {
            return invalid("starting_hands must be between 1 and 100");
        }
        if self.run.starting_credits < self.run.base_minimum_bet.saturating_mul(self.run.starting_hands as u64) {
            return invalid("starting_credits cannot cover the first round");
        }
        if self.streak.enabled && self.streak.exponential_growth.partial_cmp(&0.0) != Some(std::cmp::Ordering::Greater) {
            return invalid("streak exponential_growth must be positive");
        }
        if self.streak.threshold_increment < 0.0 || self.streak.multiplier_increment < 0.0 {
            return invalid("streak increments must not be negative");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::HandRank;

    #[test]
    fn presets_are_valid() {
        for mode in GameMode::ALL {
            let config = GameConfig::for_mode(mode);
            assert_eq!(config.mode, mode);
            config.validate().unwrap();
        }
    }

    #[test]
    fn hard_is_harder_than_easy() {
        let easy = GameConfig::for_mode(GameMode::Easy);
        let hard = GameConfig::for_mode(GameMode::Hard);
        assert!(easy.run.starting_credits > hard.run.starting_credits);
        assert!(easy.endless.start_round > hard.endless.start_round);
        assert!(easy.rules.min_pair_rank < hard.rules.min_pair_rank);
    }

    #[test]
    fn minimum_bet_escalates_and_rounds_up() {
        let run = RunConfig { base_minimum_bet: 10, minimum_bet_growth: 1.25, ..RunConfig::default() };
        assert_eq!(run.minimum_bet(0), 10);
        assert_eq!(run.minimum_bet(1), 10);
        assert_eq!(run.minimum_bet(2), 13);
        assert_eq!(run.minimum_bet(3), 16);
    }

    #[test]
    fn json_round_trip_keeps_everything() {
        let config = GameConfig::for_mode(GameMode::Hard);
        let json = config.to_json_string().unwrap();
        let back = GameConfig::from_json_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config =
            GameConfig::from_json_str(r#"{"rules": {"min_pair_rank": "Queen"}, "rewards": {"flush": 9}}"#)
                .unwrap();
        assert_eq!(config.rules.min_pair_rank, Rank::Queen);
        assert_eq!(config.rewards.multiplier(HandRank::Flush), 9);
        assert_eq!(config.rewards.multiplier(HandRank::OnePair), 0);
        assert_eq!(config.run, RunConfig::default());
    }

    #[test]
    fn rejects_broken_configs() {
        assert!(matches!(GameConfig::from_json_str("{"), Err(ConfigError::Json(_))));
        let err = GameConfig::from_json_str(r#"{"run": {"starting_hands": 0}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        let err = GameConfig::from_json_str(r#"{"run": {"minimum_bet_growth": 0.5}}"#).unwrap_err();
        assert!(err.to_string().contains("minimum_bet_growth"));
    }
}
