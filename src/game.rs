use crate::cards::{Card, Rank, Suit};
use crate::config::{GameConfig, MAX_PARALLEL_HANDS};
use crate::devils_deal::{rank_devils_deal_candidates, DevilsDealCandidate, OFFER_SIZE};
use crate::evaluator::{HandRank, HandResult};
use crate::failure::{check_failure_conditions, FailureCheckState, FailureState};
use crate::generator::generate_parallel_hands;
use crate::hand::{Hand, HandError, HAND_SIZE};
use crate::modifiers::DeckModifications;
use crate::rewards::apply_rewards;
use crate::shop::{select_shop_options, ShopOption};
use crate::streak::StreakState;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::BTreeMap;

/// Card removal stops once the deck is this small.
pub const MIN_DECK_SIZE: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Phase {
    /// Choosing the bet for the next deal.
    Betting,
    /// Five cards dealt; choosing holds.
    Holding,
    /// Parallel hands drawn and paid.
    Results,
    Shop,
    GameOver,
}

impl Phase {
    pub fn label(self) -> &'static str {
        match self {
            Phase::Betting => "Betting",
            Phase::Holding => "Holding",
            Phase::Results => "Results",
            Phase::Shop => "Shop",
            Phase::GameOver => "Game Over",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameOverReason {
    Failure(FailureState),
    OutOfCredits,
}

impl GameOverReason {
    pub fn describe(self) -> &'static str {
        match self {
            GameOverReason::Failure(f) => f.describe(),
            GameOverReason::OutOfCredits => "not enough credits for the minimum stake",
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RunError {
    #[error("not allowed during {actual:?}, expected {expected:?}")]
    WrongPhase { expected: Phase, actual: Phase },
    #[error("not enough credits: need {needed}, have {available}")]
    InsufficientCredits { needed: u64, available: u64 },
    #[error("bet too small: min {min}, got {got}")]
    BetTooLow { min: u64, got: u64 },
    #[error("no choice at index {0}")]
    InvalidIndex(usize),
    #[error("no Devil's Deal charges left")]
    NoDevilsDealCharges,
    #[error("{0} cannot be bought right now")]
    PurchaseUnavailable(ShopOption),
    #[error(transparent)]
    Hand(#[from] HandError),
}

/// One parallel hand after scoring.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct HandOutcome {
    pub hand: Hand,
    /// Result with the reward multiplier applied.
    pub result: HandResult,
    /// Streak multiplier in force when this hand was paid.
    pub streak_multiplier: f64,
    pub payout: u64,
}

/// Everything that happened in one round.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct RoundOutcome {
    pub round: u32,
    pub bet: u64,
    pub wagered: u64,
    pub total_payout: u64,
    pub hands: Vec<HandOutcome>,
}

impl RoundOutcome {
    pub fn winning_hands(&self) -> usize {
        self.hands.iter().filter(|h| h.payout > 0).count()
    }

    /// Credits won minus credits staked.
    pub fn net(&self) -> i64 {
        let payout = i64::try_from(self.total_payout).unwrap_or(i64::MAX);
        let wagered = i64::try_from(self.wagered).unwrap_or(i64::MAX);
        payout.saturating_sub(wagered)
    }

    pub fn best(&self) -> Option<&HandOutcome> {
        self.hands.iter().max_by_key(|h| h.result.score)
    }

    /// How many hands landed on each rank.
    pub fn rank_counts(&self) -> BTreeMap<HandRank, usize> {
        let mut counts = BTreeMap::new();
        for h in &self.hands {
            *counts.entry(h.result.rank).or_insert(0) += 1;
        }
        counts
    }
}

/// One roguelike run: rounds of deal, hold, draw and shop until the run ends.
///
/// ```
/// use parallel_poker::config::GameConfig;
/// use parallel_poker::game::{Phase, Run};
///
/// let mut run = Run::new(GameConfig::default(), 7);
/// run.deal().unwrap();
/// run.toggle_hold(0).unwrap();
/// let drawn = run.draw().unwrap().hands.len();
/// assert_eq!(drawn, run.parallel_hands());
/// run.end_round().unwrap();
/// assert_eq!(run.phase(), Phase::Shop);
/// ```
#[derive(Debug)]
pub struct Run {
    config: GameConfig,
    rng: ChaCha8Rng,
    phase: Phase,
    round: u32,
    credits: u64,
    bet: u64,
    parallel_hands: usize,
    dealt: Vec<Card>,
    held: [bool; HAND_SIZE],
    mods: DeckModifications,
    streak: StreakState,
    devils_deal_charges: u32,
    shop_offers: Vec<ShopOption>,
    total_earnings: i64,
    history: Vec<RoundOutcome>,
    game_over: Option<GameOverReason>,
}

impl Run {
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let bet = config.run.minimum_bet(1);
        let mut run = Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            phase: Phase::Betting,
            round: 1,
            credits: config.run.starting_credits,
            bet,
            parallel_hands: config.run.starting_hands.clamp(1, MAX_PARALLEL_HANDS),
            dealt: Vec::new(),
            held: [false; HAND_SIZE],
            mods: DeckModifications::new(),
            streak: StreakState::new(config.streak),
            devils_deal_charges: 0,
            shop_offers: Vec::new(),
            total_earnings: 0,
            history: Vec::new(),
            game_over: None,
            config,
        };
        run.check_credits();
        log::debug!("{:<32}{} mode, seed {}", "new run", run.config.mode, seed);
        run
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current round, starting at 1.
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn credits(&self) -> u64 {
        self.credits
    }

    /// Bet per parallel hand.
    pub fn bet(&self) -> u64 {
        self.bet
    }

    pub fn minimum_bet(&self) -> u64 {
        self.config.run.minimum_bet(self.round)
    }

    pub fn parallel_hands(&self) -> usize {
        self.parallel_hands
    }

    /// Credits one deal costs at the current bet.
    pub fn stake(&self) -> u64 {
        self.bet.saturating_mul(self.parallel_hands as u64)
    }

    pub fn dealt(&self) -> &[Card] {
        &self.dealt
    }

    pub fn held(&self) -> &[bool; HAND_SIZE] {
        &self.held
    }

    pub fn held_indices(&self) -> Vec<usize> {
        (0..HAND_SIZE).filter(|&i| self.held[i]).collect()
    }

    pub fn streak(&self) -> &StreakState {
        &self.streak
    }

    pub fn modifications(&self) -> &DeckModifications {
        &self.mods
    }

    pub fn devils_deal_charges(&self) -> u32 {
        self.devils_deal_charges
    }

    pub fn shop_offers(&self) -> &[ShopOption] {
        &self.shop_offers
    }

    /// Net credits won over the whole run.
    pub fn total_earnings(&self) -> i64 {
        self.total_earnings
    }

    pub fn game_over(&self) -> Option<GameOverReason> {
        self.game_over
    }

    /// Whether failure checks apply to this round.
    pub fn is_endless(&self) -> bool {
        self.round >= self.config.endless.start_round
    }

    pub fn last_round(&self) -> Option<&RoundOutcome> {
        self.history.last()
    }

    pub fn history_recent(&self, n: usize) -> &[RoundOutcome] {
        let start = self.history.len().saturating_sub(n);
        &self.history[start..]
    }

    /// Up to `n` rounds ending `offset` rounds before the latest.
    pub fn history_recent_offset(&self, n: usize, offset: usize) -> &[RoundOutcome] {
        let len = self.history.len();
        let offset = offset.min(len.saturating_sub(n));
        let end = len.saturating_sub(offset);
        let start = end.saturating_sub(n);
        &self.history[start..end]
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    fn ensure_phase(&self, expected: Phase) -> Result<(), RunError> {
        if self.phase != expected {
            return Err(RunError::WrongPhase { expected, actual: self.phase });
        }
        Ok(())
    }

    fn end_run(&mut self, reason: GameOverReason) {
        log::debug!("{:<32}round {}: {:?}", "run over", self.round, reason);
        self.game_over = Some(reason);
        self.phase = Phase::GameOver;
    }

    /// Ends the run when the minimum stake is out of reach.
    fn check_credits(&mut self) {
        let minimum = self.minimum_bet().saturating_mul(self.parallel_hands as u64);
        if self.credits < minimum {
            self.end_run(GameOverReason::OutOfCredits);
        }
    }

    /// Change the bet per hand before dealing.
    pub fn set_bet(&mut self, bet: u64) -> Result<(), RunError> {
        self.ensure_phase(Phase::Betting)?;
        let min = self.minimum_bet();
        if bet < min {
            return Err(RunError::BetTooLow { min, got: bet });
        }
        let needed = bet.saturating_mul(self.parallel_hands as u64);
        if needed > self.credits {
            return Err(RunError::InsufficientCredits { needed, available: self.credits });
        }
        self.bet = bet;
        Ok(())
    }

    /// Pay the stake and deal five cards from a fresh shuffle.
    pub fn deal(&mut self) -> Result<(), RunError> {
        self.ensure_phase(Phase::Betting)?;
        let stake = self.stake();
        if stake > self.credits {
            return Err(RunError::InsufficientCredits { needed: stake, available: self.credits });
        }

        let mut deck = self.mods.deck();
        deck.shuffle_with(&mut self.rng);
        let dealt = deck.draw_n(HAND_SIZE);
        if dealt.len() != HAND_SIZE {
            return Err(HandError::InvalidHandSize(dealt.len()).into());
        }

        self.credits -= stake;
        self.dealt = dealt;
        self.held = [false; HAND_SIZE];
        self.phase = Phase::Holding;
        log::debug!("{:<32}round {}, stake {}", "dealt", self.round, stake);
        Ok(())
    }

    pub fn toggle_hold(&mut self, index: usize) -> Result<(), RunError> {
        self.ensure_phase(Phase::Holding)?;
        let slot = self.held.get_mut(index).ok_or(RunError::InvalidIndex(index))?;
        *slot = !*slot;
        Ok(())
    }

    /// Draw every parallel hand, score it and pay out.
    ///
    /// Hands are paid in order; each one uses the streak multiplier in force
    /// before it, then moves the streak.
    pub fn draw(&mut self) -> Result<&RoundOutcome, RunError> {
        self.ensure_phase(Phase::Holding)?;
        let held = self.held_indices();
        let hands =
            generate_parallel_hands(&mut self.rng, &self.dealt, &held, self.parallel_hands, &self.mods)?;

        let mut outcomes = Vec::with_capacity(hands.len());
        let mut total_payout = 0u64;
        for hand in hands {
            let result = apply_rewards(&hand.evaluate(&self.config.rules), &self.config.rewards);
            let streak_multiplier = self.streak.multiplier();
            let payout = (result.payout(self.bet) as f64 * streak_multiplier).floor() as u64;
            self.streak.record(payout);
            total_payout = total_payout.saturating_add(payout);
            outcomes.push(HandOutcome { hand, result, streak_multiplier, payout });
        }

        let outcome = RoundOutcome {
            round: self.round,
            bet: self.bet,
            wagered: self.stake(),
            total_payout,
            hands: outcomes,
        };
        self.credits = self.credits.saturating_add(total_payout);
        self.total_earnings = self.total_earnings.saturating_add(outcome.net());
        log::debug!(
            "{:<32}round {}: {} of {} hands paid {}, streak {}",
            "drew parallel hands",
            self.round,
            outcome.winning_hands(),
            outcome.hands.len(),
            total_payout,
            self.streak.count
        );
        self.history.push(outcome);
        self.phase = Phase::Results;
        Ok(&self.history[self.history.len() - 1])
    }

    /// Close the round: run the endless checks, then open the shop.
    pub fn end_round(&mut self) -> Result<Phase, RunError> {
        self.ensure_phase(Phase::Results)?;
        if self.is_endless() {
            let last = self.history.last();
            let state = FailureCheckState {
                endless: true,
                bet: self.bet,
                base_minimum_bet: self.config.run.base_minimum_bet,
                round: self.round,
                total_earnings: self.total_earnings,
                winning_hands_last_round: last.map_or(0, |r| r.winning_hands() as u32),
                hands_last_round: last.map_or(0, |r| r.hands.len() as u32),
            };
            if let Some(failure) = check_failure_conditions(&state, &self.config.endless.thresholds) {
                self.end_run(GameOverReason::Failure(failure));
                return Ok(self.phase);
            }
        }
        self.shop_offers =
            select_shop_options(&mut self.rng, &self.config.run.shop_weights, self.config.run.shop_option_count);
        self.phase = Phase::Shop;
        Ok(self.phase)
    }

    /// Buy the shop offer at `index`. Each offer can be bought once.
    pub fn buy(&mut self, index: usize) -> Result<ShopOption, RunError> {
        self.ensure_phase(Phase::Shop)?;
        let option = *self.shop_offers.get(index).ok_or(RunError::InvalidIndex(index))?;
        let price = self.config.run.price(option);
        if price > self.credits {
            return Err(RunError::InsufficientCredits { needed: price, available: self.credits });
        }

        match option {
            ShopOption::ExtraHands => {
                if self.parallel_hands >= MAX_PARALLEL_HANDS {
                    return Err(RunError::PurchaseUnavailable(option));
                }
                self.parallel_hands =
                    (self.parallel_hands + self.config.run.extra_hands_step).min(MAX_PARALLEL_HANDS);
            }
            ShopOption::WildCard => {
                let face = self.random_face();
                self.mods.add_wild(face);
            }
            ShopOption::RemoveCard => {
                let card = self.lowest_removable().ok_or(RunError::PurchaseUnavailable(option))?;
                self.mods.remove(card);
            }
            ShopOption::DevilsDeal => self.devils_deal_charges += 1,
            ShopOption::StreakBoost => {
                self.streak.count = self.streak.count.saturating_add(self.config.run.streak_boost);
            }
        }

        self.credits -= price;
        self.shop_offers.remove(index);
        log::debug!("{:<32}{} for {}", "bought", option, price);
        Ok(option)
    }

    /// Leave the shop and start the next round.
    pub fn leave_shop(&mut self) -> Result<(), RunError> {
        self.ensure_phase(Phase::Shop)?;
        self.shop_offers.clear();
        self.dealt.clear();
        self.held = [false; HAND_SIZE];
        self.round += 1;

        if self.is_endless() {
            let face = self.random_face();
            self.mods.add_dead(face);
        }

        let min = self.minimum_bet();
        let affordable = self.credits / (self.parallel_hands as u64).max(1);
        self.bet = self.bet.min(affordable).max(min);
        self.phase = Phase::Betting;
        self.check_credits();
        Ok(())
    }

    /// Best three cards a Devil's Deal could swap into the dealt hand.
    pub fn devils_deal_offers(&self) -> Result<Vec<DevilsDealCandidate>, RunError> {
        self.ensure_phase(Phase::Holding)?;
        if self.devils_deal_charges == 0 {
            return Err(RunError::NoDevilsDealCharges);
        }
        let pool = self.mods.draw_pool(&self.dealt);
        let mut ranked =
            rank_devils_deal_candidates(&self.dealt, &pool, &self.config.rewards, self.bet, &self.config.rules)?;
        ranked.truncate(OFFER_SIZE);
        Ok(ranked)
    }

    /// Spend a charge: swap offer `index` into its best position and hold it.
    pub fn take_devils_deal(&mut self, index: usize) -> Result<Card, RunError> {
        let offer = self.devils_deal_offers()?.into_iter().nth(index).ok_or(RunError::InvalidIndex(index))?;
        let card = offer.card.reissue();
        self.dealt[offer.position] = card;
        self.held[offer.position] = true;
        self.devils_deal_charges -= 1;
        log::debug!("{:<32}{} at {}", "took devil's deal", card, offer.position);
        Ok(card)
    }

    fn random_face(&mut self) -> Card {
        let rank = Rank::ALL[self.rng.random_range(0..Rank::ALL.len())];
        let suit = Suit::ALL[self.rng.random_range(0..Suit::ALL.len())];
        Card::new(rank, suit)
    }

    fn lowest_removable(&self) -> Option<Card> {
        if self.mods.deck().len() <= MIN_DECK_SIZE {
            return None;
        }
        Rank::ALL
            .into_iter()
            .flat_map(|r| Suit::ALL.into_iter().map(move |s| Card::new(r, s)))
            .find(|c| !self.mods.removed_cards.iter().any(|removed| removed.same_face(*c)))
    }
}
