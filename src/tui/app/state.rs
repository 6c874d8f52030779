use crate::config::{GameConfig, GameMode};
use crate::devils_deal::DevilsDealCandidate;
use crate::game::{Phase, Run, RunError};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Scene {
    Menu,
    Table,
}

/// High-level input actions for the TUI controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputAction {
    MenuNext,
    MenuPrev,
    MenuInc,
    MenuDec,
    MenuApply,
    MenuCancel,
    ToggleMenu,
    ToggleHelp,
    ToggleHistory,
    HistoryUp,
    HistoryDown,
    /// Deal, draw, close the round or leave the shop, whichever comes next.
    Advance,
    ToggleHold(usize),
    BetUp,
    BetDown,
    Buy(usize),
    DevilsDealOpen,
    DevilsDealPick(usize),
    DevilsDealCancel,
}

#[derive(Debug)]
#[non_exhaustive]
pub struct AppState {
    pub scene: Scene,
    pub started: Instant,
    pub run: Run,
    // Menu config being edited
    pub menu_index: usize,
    pub cfg_mode: GameMode,
    pub cfg_parallel_hands: usize,
    pub cfg_seed: u64,
    /// Base config the menu presets are layered on; `None` uses the mode presets.
    pub(crate) base_config: Option<GameConfig>,
    help_open: bool,
    history_open: bool,
    history_offset: usize,
    devils_deal: Option<Vec<DevilsDealCandidate>>,
    action_error: Option<String>,
    action_error_at: Option<Instant>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(None, 0)
    }
}

impl AppState {
    pub const HISTORY_PAGE_SIZE: usize = 20;
    const ACTION_ERROR_TTL: Duration = Duration::from_secs(3);

    /// App starting at the menu. `config`, when given, replaces the mode
    /// presets for every run started from the menu.
    pub fn new(config: Option<GameConfig>, seed: u64) -> Self {
        let initial = config.clone().unwrap_or_default();
        Self {
            scene: Scene::Menu,
            started: Instant::now(),
            menu_index: 0,
            cfg_mode: initial.mode,
            cfg_parallel_hands: initial.run.starting_hands,
            cfg_seed: seed,
            run: Run::new(initial, seed),
            base_config: config,
            help_open: false,
            history_open: false,
            history_offset: 0,
            devils_deal: None,
            action_error: None,
            action_error_at: None,
        }
    }

    pub fn action_error(&self) -> Option<&str> {
        self.action_error.as_deref()
    }

    fn clear_action_error(&mut self) {
        self.action_error = None;
        self.action_error_at = None;
    }

    fn report(&mut self, result: Result<(), RunError>) -> bool {
        match result {
            Ok(()) => {
                self.clear_action_error();
                true
            }
            Err(err) => {
                self.action_error = Some(err.to_string());
                self.action_error_at = Some(Instant::now());
                false
            }
        }
    }

    pub fn help_open(&self) -> bool {
        self.help_open
    }

    pub fn history_open(&self) -> bool {
        self.history_open
    }

    pub fn history_offset(&self) -> usize {
        self.history_offset
    }

    pub fn devils_deal_open(&self) -> bool {
        self.devils_deal.is_some()
    }

    pub fn devils_deal_offers(&self) -> &[DevilsDealCandidate] {
        self.devils_deal.as_deref().unwrap_or(&[])
    }

    pub(crate) fn close_help(&mut self) {
        self.help_open = false;
    }

    pub(crate) fn close_history(&mut self) {
        self.history_open = false;
    }

    fn on_table(&self) -> bool {
        self.scene == Scene::Table
    }

    /// Run the next step of the round for the current phase.
    pub fn advance(&mut self) -> bool {
        let result = match self.run.phase() {
            Phase::Betting => self.run.deal(),
            Phase::Holding => self.run.draw().map(|_| ()),
            Phase::Results => self.run.end_round().map(|_| ()),
            Phase::Shop => self.run.leave_shop(),
            _ => return false,
        };
        self.history_offset = 0;
        self.report(result)
    }

    fn step_bet(&mut self, up: bool) -> bool {
        let step = self.run.minimum_bet().max(1);
        let bet = if up {
            self.run.bet().saturating_add(step)
        } else {
            self.run.bet().saturating_sub(step).max(self.run.minimum_bet())
        };
        let result = self.run.set_bet(bet);
        self.report(result)
    }

    fn open_devils_deal(&mut self) -> bool {
        match self.run.devils_deal_offers() {
            Ok(offers) => {
                self.devils_deal = Some(offers);
                self.clear_action_error();
                true
            }
            Err(err) => self.report(Err(err)),
        }
    }

    fn pick_devils_deal(&mut self, index: usize) -> bool {
        if self.devils_deal.is_none() {
            return false;
        }
        let result = self.run.take_devils_deal(index).map(|_| ());
        if result.is_ok() {
            self.devils_deal = None;
        }
        self.report(result)
    }

    pub fn handle_input(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::ToggleMenu => {
                self.toggle_menu();
                false
            }
            InputAction::ToggleHelp => {
                if self.on_table() {
                    self.history_open = false;
                    self.help_open = !self.help_open;
                }
                false
            }
            InputAction::ToggleHistory => {
                if self.on_table() {
                    self.help_open = false;
                    if !self.history_open {
                        self.history_offset = 0;
                    }
                    self.history_open = !self.history_open;
                }
                false
            }
            InputAction::HistoryUp => {
                if self.on_table() && self.history_open {
                    let max_offset = self.run.history_len().saturating_sub(Self::HISTORY_PAGE_SIZE);
                    self.history_offset = (self.history_offset + 1).min(max_offset);
                }
                false
            }
            InputAction::HistoryDown => {
                if self.on_table() && self.history_open && self.history_offset > 0 {
                    self.history_offset -= 1;
                }
                false
            }
            InputAction::MenuNext => {
                if self.scene == Scene::Menu {
                    self.menu_next();
                }
                false
            }
            InputAction::MenuPrev => {
                if self.scene == Scene::Menu {
                    self.menu_prev();
                }
                false
            }
            InputAction::MenuInc => {
                if self.scene == Scene::Menu {
                    self.menu_inc();
                }
                false
            }
            InputAction::MenuDec => {
                if self.scene == Scene::Menu {
                    self.menu_dec();
                }
                false
            }
            InputAction::MenuApply => {
                if self.scene == Scene::Menu {
                    self.apply_menu();
                }
                false
            }
            InputAction::MenuCancel => {
                if self.scene == Scene::Menu {
                    self.cancel_menu();
                }
                false
            }
            InputAction::Advance => self.on_table() && !self.devils_deal_open() && self.advance(),
            InputAction::ToggleHold(i) => {
                if !self.on_table() {
                    return false;
                }
                let result = self.run.toggle_hold(i);
                self.report(result)
            }
            InputAction::BetUp => self.on_table() && self.step_bet(true),
            InputAction::BetDown => self.on_table() && self.step_bet(false),
            InputAction::Buy(i) => {
                if !self.on_table() {
                    return false;
                }
                let result = self.run.buy(i).map(|_| ());
                self.report(result)
            }
            InputAction::DevilsDealOpen => self.on_table() && self.open_devils_deal(),
            InputAction::DevilsDealPick(i) => self.on_table() && self.pick_devils_deal(i),
            InputAction::DevilsDealCancel => {
                self.devils_deal = None;
                false
            }
        }
    }

    /// Periodic housekeeping from the controller loop.
    pub fn on_tick(&mut self) {
        if let Some(at) = self.action_error_at {
            if at.elapsed() >= Self::ACTION_ERROR_TTL {
                self.clear_action_error();
            }
        }
    }

    /// Start a fresh run with the menu settings.
    pub(crate) fn restart(&mut self, config: GameConfig) {
        self.run = Run::new(config, self.cfg_seed);
        self.devils_deal = None;
        self.history_offset = 0;
        self.clear_action_error();
    }
}
