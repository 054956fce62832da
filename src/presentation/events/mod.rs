//! Event handling.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Result of event handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// Continue processing.
    Continue,
    /// Exit application.
    Exit,
    /// Event was consumed.
    Consumed,
}

/// Key classification shared by every screen.
pub struct EventHandler;

impl EventHandler {
    /// Whether the key should be handled at all. Release and repeat events are ignored.
    #[must_use]
    pub fn is_actionable(key: &KeyEvent) -> bool {
        key.kind == KeyEventKind::Press
    }

    /// Checks if key quits the app.
    ///
    /// `Ctrl+C` always quits. `Esc` quits from the login screen, where letters
    /// are typed into the form; `q` quits everywhere else unless a text field
    /// has focus.
    #[must_use]
    pub fn is_quit_event(key: &KeyEvent, on_login: bool, typing: bool) -> bool {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => true,
            KeyCode::Esc => on_login,
            KeyCode::Char('q') if key.modifiers == KeyModifiers::NONE => !on_login && !typing,
            _ => false,
        }
    }
}
