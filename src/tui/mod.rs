//! Terminal User Interface (TUI) for stint.
//!
//! Provides the interactive timer and the analytics chart.
//! Built with ratatui and crossterm.

mod app;
mod event;
mod ui;

pub use app::{App, View};
pub use event::{map_key, Action};

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::error::StintError;

/// Run the TUI application.
///
/// A session still running when the user quits is discarded.
///
/// # Errors
///
/// Returns an error if the TUI fails to initialize or run.
pub fn run(app: &mut App) -> Result<(), StintError> {
    // Setup terminal
    enable_raw_mode()
        .map_err(|e| StintError::Terminal(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| StintError::Terminal(format!("Failed to setup terminal: {e}")))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| StintError::Terminal(format!("Failed to create terminal: {e}")))?;

    let result = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    if app.tracker.engine().elapsed_ms() > 0 {
        tracing::info!(
            elapsed_ms = app.tracker.engine().elapsed_ms(),
            "quit with unsaved session"
        );
    }

    result
}

/// Run the main application loop.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), StintError> {
    loop {
        // Draw UI
        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| StintError::Terminal(format!("Failed to draw: {e}")))?;

        // Handle events
        match event::handle_events(app)? {
            Some(Action::Quit) => break,
            Some(action) => apply(app, action),
            None => {
                app.tick();
            }
        }
    }

    Ok(())
}

/// Apply an action to the app state.
pub fn apply(app: &mut App, action: Action) {
    match action {
        Action::Quit => {}
        Action::Toggle => app.toggle(),
        Action::Stop => {
            app.stop();
        }
        Action::SwitchView => app.switch_view(),
        Action::RequestClear => app.request_clear(),
        Action::AnswerClear(answer) => app.answer_clear(answer),
        Action::Input(c) => app.push_char(c),
        Action::Backspace => app.backspace(),
    }
}
