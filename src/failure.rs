//! Endless-mode failure checks, run once per round transition.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Why an endless run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailureState {
    MinimumBetMultiplier,
    MinimumCreditEfficiency,
    MinimumWinningHands,
    MinimumWinPercent,
}

impl FailureState {
    pub const fn describe(self) -> &'static str {
        match self {
            FailureState::MinimumBetMultiplier => "bet fell below the endless minimum",
            FailureState::MinimumCreditEfficiency => "earnings per round fell too low",
            FailureState::MinimumWinningHands => "too few winning hands last round",
            FailureState::MinimumWinPercent => "win rate last round fell too low",
        }
    }
}

impl fmt::Display for FailureState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// Limits an endless run must stay above. `None` disables a check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FailureThresholds {
    pub bet_multiplier: Option<f64>,
    pub minimum_efficiency: Option<f64>,
    pub minimum_winning_hands: Option<u32>,
    /// Percent of last round's hands that paid, 0 to 100.
    pub minimum_win_percent: Option<f64>,
}

impl FailureThresholds {
    pub const fn disabled() -> Self {
        Self {
            bet_multiplier: None,
            minimum_efficiency: None,
            minimum_winning_hands: None,
            minimum_win_percent: None,
        }
    }
}

impl Default for FailureThresholds {
    fn default() -> Self {
        Self {
            bet_multiplier: Some(1.5),
            minimum_efficiency: Some(10.0),
            minimum_winning_hands: Some(1),
            minimum_win_percent: None,
        }
    }
}

/// Aggregate run state the checks look at.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FailureCheckState {
    pub endless: bool,
    pub bet: u64,
    pub base_minimum_bet: u64,
    pub round: u32,
    pub total_earnings: i64,
    pub winning_hands_last_round: u32,
    pub hands_last_round: u32,
}

impl FailureCheckState {
    /// Average net credits per completed round; 0 before the first round.
    pub fn efficiency(&self) -> f64 {
        if self.round == 0 {
            0.0
        } else {
            self.total_earnings as f64 / f64::from(self.round)
        }
    }

    pub fn win_percent(&self) -> f64 {
        if self.hands_last_round == 0 {
            0.0
        } else {
            100.0 * f64::from(self.winning_hands_last_round) / f64::from(self.hands_last_round)
        }
    }
}

/// First failed check in priority order, or `None` while the run survives.
///
/// ```
/// use parallel_poker::failure::{check_failure_conditions, FailureCheckState, FailureState, FailureThresholds};
///
/// let state = FailureCheckState { endless: true, bet: 10, base_minimum_bet: 10, round: 4, total_earnings: 0, ..Default::default() };
/// let failure = check_failure_conditions(&state, &FailureThresholds::default());
/// assert_eq!(failure, Some(FailureState::MinimumBetMultiplier));
/// ```
pub fn check_failure_conditions(
    state: &FailureCheckState,
    thresholds: &FailureThresholds,
) -> Option<FailureState> {
    if !state.endless {
        return None;
    }

    let failure = if thresholds
        .bet_multiplier
        .is_some_and(|m| (state.bet as f64) < (state.base_minimum_bet as f64 * m).ceil())
    {
        Some(FailureState::MinimumBetMultiplier)
    } else if thresholds.minimum_efficiency.is_some_and(|min| state.efficiency() < min) {
        Some(FailureState::MinimumCreditEfficiency)
    } else if thresholds.minimum_winning_hands.is_some_and(|min| state.winning_hands_last_round < min) {
        Some(FailureState::MinimumWinningHands)
    } else if thresholds.minimum_win_percent.is_some_and(|min| state.win_percent() < min) {
        Some(FailureState::MinimumWinPercent)
    } else {
        None
    };

    log::debug!("{:<32}round {} -> {:?}", "failure check", state.round, failure);
    failure
}
