//! Actions that can be triggered by keybindings
//!
//! The viewer is read-only: every action either scrolls or quits.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// All mappable viewer actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Close the window
    Quit,
    /// Scroll up by N lines
    ScrollUp(u16),
    /// Scroll down by N lines
    ScrollDown(u16),
    /// Scroll left by N columns
    ScrollLeft(u16),
    /// Scroll right by N columns
    ScrollRight(u16),
    ScrollPageUp,
    ScrollPageDown,
    ScrollToTop,
    ScrollToBottom,
}

impl Action {
    /// Map a key press to an action. Key releases and unbound keys map to `None`.
    pub fn from_key(key: KeyEvent) -> Option<Self> {
        if key.kind == KeyEventKind::Release {
            return None;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') | KeyCode::Char('q') => Some(Action::Quit),
                KeyCode::Char('d') => Some(Action::ScrollPageDown),
                KeyCode::Char('u') => Some(Action::ScrollPageUp),
                _ => None,
            };
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            KeyCode::Up | KeyCode::Char('k') => Some(Action::ScrollUp(1)),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::ScrollDown(1)),
            KeyCode::Left | KeyCode::Char('h') => Some(Action::ScrollLeft(1)),
            KeyCode::Right | KeyCode::Char('l') => Some(Action::ScrollRight(1)),
            KeyCode::PageUp => Some(Action::ScrollPageUp),
            KeyCode::PageDown | KeyCode::Char(' ') => Some(Action::ScrollPageDown),
            KeyCode::Home | KeyCode::Char('g') => Some(Action::ScrollToTop),
            KeyCode::End | KeyCode::Char('G') => Some(Action::ScrollToBottom),
            _ => None,
        }
    }
}
