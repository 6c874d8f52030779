use parallel_poker::config::GameMode;
use parallel_poker::game::Phase;
use parallel_poker::tui::app::{AppState, InputAction, Scene};

fn setup_table_app() -> AppState {
    let mut app = AppState::default();
    app.apply_menu();
    app
}

#[test]
fn menu_navigation_and_apply() {
    let mut app = AppState::default();
    assert!(matches!(app.scene, Scene::Menu));
    let start = app.menu_index;
    let _ = app.handle_input(InputAction::MenuNext);
    assert_ne!(app.menu_index, start);
    let _ = app.handle_input(InputAction::MenuPrev);
    assert_eq!(app.menu_index, start);
    let _ = app.handle_input(InputAction::MenuApply);
    assert!(matches!(app.scene, Scene::Table));
}

#[test]
fn menu_mode_change_resets_hands() {
    let mut app = AppState::default();
    assert_eq!(app.cfg_mode, GameMode::Normal);
    let _ = app.handle_input(InputAction::MenuInc);
    assert_eq!(app.cfg_mode, GameMode::Hard);
    assert_eq!(app.cfg_parallel_hands, 3);
    let _ = app.handle_input(InputAction::MenuApply);
    assert_eq!(app.run.config().mode, GameMode::Hard);
    assert_eq!(app.run.parallel_hands(), 3);
}

#[test]
fn help_and_history_toggle() {
    let mut app = setup_table_app();
    let _ = app.handle_input(InputAction::ToggleHelp);
    assert!(app.help_open());
    let _ = app.handle_input(InputAction::ToggleHistory);
    assert!(!app.help_open());
    assert!(app.history_open());
    let _ = app.handle_input(InputAction::ToggleHistory);
    assert!(!app.history_open());
}

#[test]
fn hold_and_draw_through_inputs() {
    let mut app = setup_table_app();
    assert!(app.handle_input(InputAction::Advance));
    assert!(app.handle_input(InputAction::ToggleHold(0)));
    assert!(app.handle_input(InputAction::ToggleHold(4)));
    assert_eq!(app.run.held_indices(), vec![0, 4]);
    assert!(app.handle_input(InputAction::Advance));
    assert_eq!(app.run.phase(), Phase::Results);
    assert_eq!(app.run.last_round().map(|r| r.hands.len()), Some(app.run.parallel_hands()));
}

#[test]
fn bet_steps_by_minimum() {
    let mut app = setup_table_app();
    let min = app.run.minimum_bet();
    assert!(app.handle_input(InputAction::BetUp));
    assert_eq!(app.run.bet(), min * 2);
    assert!(app.handle_input(InputAction::BetDown));
    assert_eq!(app.run.bet(), min);
    assert!(app.handle_input(InputAction::BetDown));
    assert_eq!(app.run.bet(), min);
}

#[test]
fn devils_deal_needs_a_charge() {
    let mut app = setup_table_app();
    let _ = app.handle_input(InputAction::Advance);
    assert!(!app.handle_input(InputAction::DevilsDealOpen));
    assert!(!app.devils_deal_open());
    assert!(app.action_error().is_some());
}
