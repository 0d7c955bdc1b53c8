//! Terminal UI: mounts the game on the terminal and runs the event loop.

mod app;
mod input;
mod ui;

use std::io::{self, Stdout, Write};
use std::sync::Arc;

use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use tracing::{debug, error, info, instrument, warn};
use tracing_subscriber::EnvFilter;

use crate::config::GameConfig;
use crate::game::Game;

pub use app::{App, Focus};
pub use input::{Action, Direction, action_for, move_cursor};
pub use ui::{
    BoardView, CELL_HEIGHT, CELL_WIDTH, HELP, HistoryView, ORDER_BUTTON, ScreenLayout, draw,
};

/// Runs the TUI until the user quits.
pub fn run_tui(config: GameConfig) -> Result<()> {
    init_logging(&config)?;
    info!("Starting tic-tac-toe TUI");

    let dimensions = config.dimensions()?;
    let game = Game::with_dimensions(dimensions).with_list_reversed(*config.list_reversed());
    let mut app = App::new(game);

    let guard = TerminalGuard::enter(io::stdout())?;
    let res = Terminal::new(CrosstermBackend::new(io::stdout()))
        .map_err(anyhow::Error::from)
        .and_then(|mut terminal| run_app(&mut terminal, &mut app));
    drop(guard);

    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
    }
    info!(moves = app.game().history().len() - 1, "Exiting");
    res
}

/// Restores the terminal when dropped. Kills raw mode, mouse capture and the
/// alternate screen on every exit path, including early errors.
struct TerminalGuard<W: Write> {
    out: W,
}

impl<W: Write> TerminalGuard<W> {
    /// Enables raw mode, enters the alternate screen and captures the mouse.
    fn enter(out: W) -> io::Result<Self> {
        enable_raw_mode()?;
        let mut guard = Self { out };
        execute!(guard.out, EnterAlternateScreen, EnableMouseCapture)?;
        Ok(guard)
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        if let Err(e) = disable_raw_mode() {
            warn!(error = %e, "Failed to disable raw mode");
        }
        if let Err(e) = execute!(self.out, LeaveAlternateScreen, DisableMouseCapture, Show) {
            warn!(error = %e, "Failed to restore terminal screen");
        }
    }
}

/// Logs to a file so output does not interfere with the TUI.
fn init_logging(config: &GameConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

/// Draw, wait for one event, dispatch it; repeat.
#[instrument(skip_all)]
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| draw(f, app))?;
        if app.should_quit() {
            return Ok(());
        }

        let event = event::read()?;
        let size = terminal.size()?;
        app.handle_event(event, Rect::new(0, 0, size.width, size.height));
    }
}
