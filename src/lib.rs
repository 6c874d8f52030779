//! parallel-poker: video poker played across many hands at once
//!
//! Goals:
//! - Deterministic five-card evaluation with wild and dead cards
//! - Seeded runs: parallel hands, streaks, shop, Devil's Deal, endless failure checks
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: score a hand
//! ```
//! use parallel_poker::cards::parse_cards;
//! use parallel_poker::evaluator::{evaluate, HandRank, HandRules};
//!
//! let cards = parse_cards("Ah Kh Qh Jh Th").unwrap();
//! let result = evaluate(&cards, &HandRules::default()).unwrap();
//! assert_eq!(result.rank, HandRank::RoyalFlush);
//! assert_eq!(result.score, 10_014);
//! ```
//!
//! ## Quick start: play a round
//! ```
//! use parallel_poker::config::GameConfig;
//! use parallel_poker::game::{Phase, Run};
//!
//! let mut run = Run::new(GameConfig::default(), 7);
//! run.deal().unwrap();
//! run.toggle_hold(0).unwrap();
//! let hands = run.draw().unwrap().hands.len();
//! assert_eq!(hands, run.parallel_hands());
//! assert_eq!(run.end_round().unwrap(), Phase::Shop);
//! ```
//!
//! ## TUI
//! Run the interactive TUI with:
//! ```sh
//! cargo run --bin parallel-poker
//! ```

pub mod cards;
pub mod config;
pub mod deck;
pub mod devils_deal;
pub mod evaluator;
pub mod failure;
pub mod game;
pub mod generator;
pub mod hand;
pub mod modifiers;
pub mod rewards;
pub mod shop;
pub mod streak;
pub mod tui;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
