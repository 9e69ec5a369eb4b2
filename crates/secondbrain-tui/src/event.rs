//! Event handling for crossterm terminal events
//!
//! Polls for keyboard, resize, and tick events, and classifies key presses.

use crate::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use secondbrain_core::Screen;
use std::time::Duration;

/// Application events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// Key press event
    Key(KeyEvent),
    /// Poll timeout elapsed with nothing to do
    Tick,
    /// Terminal resize event
    Resize(u16, u16),
}

/// Poll for the next event with timeout
pub fn poll_event(timeout: Duration) -> Result<AppEvent> {
    if event::poll(timeout)? {
        match event::read()? {
            // Only presses; some terminals also report releases
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(AppEvent::Key(key)),
            Event::Resize(width, height) => Ok(AppEvent::Resize(width, height)),
            _ => Ok(AppEvent::Tick),
        }
    } else {
        Ok(AppEvent::Tick)
    }
}

/// Ctrl+C quits from anywhere, including while typing
pub fn is_force_quit_event(key: KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// `q` quits when no text field has focus
pub fn is_quit_event(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
}

/// Tab and Shift+Tab both flip between the two tabs
pub fn is_switch_tab_event(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Tab | KeyCode::BackTab)
}

/// Direct tab shortcuts. F1/F2 always work; `1`/`t` and `2`/`p` only when
/// the keyboard is not feeding a text field.
pub fn tab_shortcut(key: KeyEvent, typing: bool) -> Option<Screen> {
    match key.code {
        KeyCode::F(1) => Some(Screen::Today),
        KeyCode::F(2) => Some(Screen::Patients),
        KeyCode::Char('1') | KeyCode::Char('t') if !typing => Some(Screen::Today),
        KeyCode::Char('2') | KeyCode::Char('p') if !typing => Some(Screen::Patients),
        _ => None,
    }
}

pub fn is_up_event(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Up | KeyCode::Char('k'))
}

pub fn is_down_event(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Down | KeyCode::Char('j'))
}

/// Enter opens the selected row, or submits the add-task form
pub fn is_activate_event(key: KeyEvent) -> bool {
    key.code == KeyCode::Enter
}

pub fn is_back_event(key: KeyEvent) -> bool {
    key.code == KeyCode::Esc
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quit_events() {
        assert!(is_quit_event(key(KeyCode::Char('q'))));
        assert!(!is_quit_event(key(KeyCode::Char('a'))));

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(is_force_quit_event(ctrl_c));
        assert!(!is_force_quit_event(key(KeyCode::Char('c'))));
    }

    #[test]
    fn test_tab_shortcuts() {
        assert_eq!(tab_shortcut(key(KeyCode::F(1)), true), Some(Screen::Today));
        assert_eq!(tab_shortcut(key(KeyCode::F(2)), true), Some(Screen::Patients));
        assert_eq!(tab_shortcut(key(KeyCode::Char('2')), false), Some(Screen::Patients));
        assert_eq!(tab_shortcut(key(KeyCode::Char('2')), true), None);
        assert_eq!(tab_shortcut(key(KeyCode::Char('x')), false), None);
    }

    #[test]
    fn test_navigation_keys() {
        assert!(is_up_event(key(KeyCode::Up)));
        assert!(is_down_event(key(KeyCode::Char('j'))));
        assert!(is_activate_event(key(KeyCode::Enter)));
        assert!(is_back_event(key(KeyCode::Esc)));
        assert!(is_switch_tab_event(key(KeyCode::BackTab)));
    }
}
