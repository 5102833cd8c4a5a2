//! Terminal front end for tictactoe_timeline.
//!
//! The event loop is synchronous: block on one terminal event, apply it to
//! the [`App`], redraw.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod input;
pub mod ui;

pub use app::{App, Control, Focus};
pub use cli::Cli;
pub use config::{ConfigError, TuiConfig};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io;
use tracing::{error, info, instrument, warn};

/// Sets up the terminal, runs the game until the user quits, and restores
/// the terminal on every exit path.
#[instrument(skip(config))]
pub fn run(config: &TuiConfig) -> Result<()> {
    info!("Starting tic-tac-toe TUI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    restore_on_err(
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture),
        restore_terminal,
    )
    .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = restore_on_err(Terminal::new(backend), restore_terminal)
        .context("Failed to create terminal")?;

    let app = App::new(*config.language(), *config.initial_sort());
    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
    }
    info!("Exited cleanly");
    res
}

/// Draw / read / dispatch loop.
pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    loop {
        let mut drawn = None;
        terminal.draw(|f| drawn = Some(ui::draw(f, &app)))?;
        if let Some(layout) = drawn {
            app.set_layout(layout);
        }

        let event = event::read().context("Failed to read terminal event")?;
        if app.handle_event(event) == Control::Quit {
            info!(
                steps = app.state().history().last_step(),
                "User quit"
            );
            return Ok(());
        }
    }
}

/// Hands `result` back unchanged, running `restore` first if it is an error.
fn restore_on_err<T, E>(result: Result<T, E>, restore: impl FnOnce()) -> Result<T, E> {
    if result.is_err() {
        restore();
    }
    result
}

/// Best-effort undo of raw mode, the alternate screen and mouse capture.
fn restore_terminal() {
    if let Err(e) = disable_raw_mode() {
        warn!(error = %e, "Failed to disable raw mode");
    }
    if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture) {
        warn!(error = %e, "Failed to leave alternate screen");
    }
}
