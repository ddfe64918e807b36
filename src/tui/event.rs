//! Event handling for the TUI.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::StintError;
use crate::features::focus::Confirmation;
use crate::tui::app::App;

/// Action to take after handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application.
    Quit,
    /// Start, pause or resume the timer.
    Toggle,
    /// Stop and save the session.
    Stop,
    /// Switch between tracker and analytics.
    SwitchView,
    /// Ask to clear all history.
    RequestClear,
    /// Answer the clear prompt.
    AnswerClear(Confirmation),
    /// Type into the task field.
    Input(char),
    /// Delete from the task field.
    Backspace,
}

/// Translate a key press into an action.
///
/// While the clear prompt is open every key answers it.
#[must_use]
pub fn map_key(key: KeyEvent, pending_clear: bool) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if ctrl && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    if pending_clear {
        let answer = match key.code {
            KeyCode::Char(c) => Confirmation::from_answer(&c.to_string()),
            _ => Confirmation::Declined,
        };
        return Some(Action::AnswerClear(answer));
    }

    match key.code {
        KeyCode::Char('s') if ctrl => Some(Action::Stop),
        KeyCode::Char('x') if ctrl => Some(Action::RequestClear),
        KeyCode::Char(_) if ctrl => None,
        KeyCode::Char(c) => Some(Action::Input(c)),
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Enter => Some(Action::Toggle),
        KeyCode::Tab | KeyCode::BackTab => Some(Action::SwitchView),
        KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

/// Wait for a terminal event until the next tick is due.
///
/// Returns an action to take, or None if no action is needed.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events(app: &App) -> Result<Option<Action>, StintError> {
    if !event::poll(app.poll_timeout())
        .map_err(|e| StintError::Terminal(format!("Event poll failed: {e}")))?
    {
        return Ok(None);
    }

    match event::read().map_err(|e| StintError::Terminal(format!("Event read failed: {e}")))? {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            Ok(map_key(key, app.pending_clear))
        }
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_basic_keys() {
        assert_eq!(map_key(key(KeyCode::Enter), false), Some(Action::Toggle));
        assert_eq!(map_key(key(KeyCode::Tab), false), Some(Action::SwitchView));
        assert_eq!(map_key(key(KeyCode::Esc), false), Some(Action::Quit));
        assert_eq!(map_key(key(KeyCode::Backspace), false), Some(Action::Backspace));
        assert_eq!(map_key(key(KeyCode::Char('q')), false), Some(Action::Input('q')));
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(map_key(ctrl('s'), false), Some(Action::Stop));
        assert_eq!(map_key(ctrl('x'), false), Some(Action::RequestClear));
        assert_eq!(map_key(ctrl('c'), false), Some(Action::Quit));
        assert_eq!(map_key(ctrl('a'), false), None);
    }

    #[test]
    fn test_clear_prompt_answers() {
        assert_eq!(
            map_key(key(KeyCode::Char('y')), true),
            Some(Action::AnswerClear(Confirmation::Accepted))
        );
        assert_eq!(
            map_key(key(KeyCode::Char('n')), true),
            Some(Action::AnswerClear(Confirmation::Declined))
        );
        assert_eq!(
            map_key(key(KeyCode::Enter), true),
            Some(Action::AnswerClear(Confirmation::Declined))
        );
        assert_eq!(map_key(ctrl('c'), true), Some(Action::Quit));
    }
}
