use crate::config::{GameConfig, MAX_PARALLEL_HANDS};

use super::AppState;

#[derive(Debug, Clone, Copy)]
enum MenuItem {
    Mode,
    ParallelHands,
    Seed,
}

const MENU_ITEMS: [MenuItem; 3] = [MenuItem::Mode, MenuItem::ParallelHands, MenuItem::Seed];

impl MenuItem {
    fn display(self, app: &AppState) -> String {
        match self {
            MenuItem::Mode => format!("Mode: {}", app.cfg_mode),
            MenuItem::ParallelHands => format!("Parallel Hands: {}", app.cfg_parallel_hands),
            MenuItem::Seed => format!("Seed: {}", app.cfg_seed),
        }
    }

    fn inc(self, app: &mut AppState) {
        match self {
            MenuItem::Mode => {
                app.cfg_mode = app.cfg_mode.next();
                app.cfg_parallel_hands = app.mode_config().run.starting_hands;
            }
            MenuItem::ParallelHands => {
                if app.cfg_parallel_hands < MAX_PARALLEL_HANDS {
                    app.cfg_parallel_hands += 1;
                }
            }
            MenuItem::Seed => {
                app.cfg_seed = app.cfg_seed.wrapping_add(1);
            }
        }
    }

    fn dec(self, app: &mut AppState) {
        match self {
            MenuItem::Mode => {
                app.cfg_mode = app.cfg_mode.prev();
                app.cfg_parallel_hands = app.mode_config().run.starting_hands;
            }
            MenuItem::ParallelHands => {
                if app.cfg_parallel_hands > 1 {
                    app.cfg_parallel_hands -= 1;
                }
            }
            MenuItem::Seed => {
                app.cfg_seed = app.cfg_seed.wrapping_sub(1);
            }
        }
    }
}

impl AppState {
    pub fn menu_items_display(&self) -> Vec<String> {
        MENU_ITEMS.iter().map(|item| item.display(self)).collect()
    }

    pub fn toggle_menu(&mut self) {
        self.close_help();
        self.close_history();
        self.scene = match self.scene {
            super::Scene::Menu => super::Scene::Table,
            _ => {
                self.open_menu();
                super::Scene::Menu
            }
        };
    }

    // --- Menu operations ---
    pub fn open_menu(&mut self) {
        self.close_help();
        self.close_history();
        self.menu_index = 0;
        self.cfg_mode = self.run.config().mode;
        self.cfg_parallel_hands = self.run.config().run.starting_hands;
        self.scene = super::Scene::Menu;
    }

    /// Preset for the selected mode, or the loaded config when one was given.
    fn mode_config(&self) -> GameConfig {
        match &self.base_config {
            Some(base) if base.mode == self.cfg_mode => base.clone(),
            _ => GameConfig::for_mode(self.cfg_mode),
        }
    }

    pub fn apply_menu(&mut self) {
        let mut config = self.mode_config();
        let hands = self.cfg_parallel_hands.clamp(1, MAX_PARALLEL_HANDS);
        self.cfg_parallel_hands = hands;
        config.run.starting_hands = hands;
        // Make sure the first round is affordable.
        let first_stake = config.run.minimum_bet(1).saturating_mul(hands as u64);
        config.run.starting_credits = config.run.starting_credits.max(first_stake);

        self.restart(config);
        self.scene = super::Scene::Table;
    }

    pub fn cancel_menu(&mut self) {
        self.scene = super::Scene::Table;
    }

    pub fn menu_next(&mut self) {
        self.menu_index = (self.menu_index + 1) % MENU_ITEMS.len();
    }
    pub fn menu_prev(&mut self) {
        self.menu_index = (self.menu_index + MENU_ITEMS.len() - 1) % MENU_ITEMS.len();
    }
    pub fn menu_inc(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.inc(self);
    }
    pub fn menu_dec(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.dec(self);
    }
}
