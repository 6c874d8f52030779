use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use parallel_poker::config::GameConfig;
use parallel_poker::tui::{app::AppState, controller};
use ratatui::prelude::*;
use std::io::{self, IsTerminal, Stdout};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Path of a debug log file; logging stays off when unset.
const LOG_ENV: &str = "PARALLEL_POKER_LOG";
/// Path of a JSON [`GameConfig`] replacing the mode presets.
const CONFIG_ENV: &str = "PARALLEL_POKER_CONFIG";
/// Fixed seed for reproducible runs.
const SEED_ENV: &str = "PARALLEL_POKER_SEED";

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(
        stdout,
        crossterm::terminal::EnterAlternateScreen,
        crossterm::event::EnableMouseCapture
    )?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        crossterm::event::DisableMouseCapture,
        crossterm::terminal::LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;
    Ok(())
}

/// File-only logger; the terminal belongs to the TUI.
fn init_logging() -> io::Result<()> {
    let Ok(path) = std::env::var(LOG_ENV) else {
        return Ok(());
    };
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let file = std::fs::File::create(path)?;
    simplelog::WriteLogger::init(log::LevelFilter::Debug, config, file).map_err(io::Error::other)
}

fn load_config() -> io::Result<Option<GameConfig>> {
    let Ok(path) = std::env::var(CONFIG_ENV) else {
        return Ok(None);
    };
    let text = std::fs::read_to_string(&path)?;
    let config = GameConfig::from_json_str(&text).map_err(io::Error::other)?;
    log::info!("{:<32}{}", "loaded config", path);
    Ok(Some(config))
}

fn seed() -> u64 {
    std::env::var(SEED_ENV).ok().and_then(|s| s.parse().ok()).unwrap_or_else(|| {
        SystemTime::now().duration_since(UNIX_EPOCH).map(|d| d.as_secs()).unwrap_or_default()
    })
}

fn main() -> io::Result<()> {
    if !io::stdout().is_terminal() {
        println!(
            "parallel-poker TUI requires a real terminal (TTY).\nRun in Terminal and press q to quit. Version: {}",
            parallel_poker::VERSION
        );
        return Ok(());
    }
    init_logging()?;
    let config = load_config()?;
    let seed = seed();
    log::info!("{:<32}{}", "starting with seed", seed);

    let mut terminal = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let mut app = AppState::new(config, seed);

    let res = controller::run(&mut terminal, &mut app, tick_rate);

    // Always attempt to restore terminal
    restore_terminal(terminal)?;
    res
}
