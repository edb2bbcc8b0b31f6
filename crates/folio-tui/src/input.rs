use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, Mode};
use crate::keymap::{KeyBinding, Keymap};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    ScrollDown,
    ScrollUp,
    ScrollHalfPageDown,
    ScrollHalfPageUp,
    ScrollPageDown,
    ScrollPageUp,
    JumpToTop,
    JumpToBottom,
    PendingG, // First 'g' press, waiting for second 'g'
    NextSection,
    PrevSection,
    NextProject,
    PrevProject,
    GoToProject(usize), // 1-9, zero-based here
    OpenLink,
    ToggleTheme,
    ShowHelp,
    ExitMode,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App, keymap: &Keymap) -> Action {
    if app.mode == Mode::Help {
        // Any key closes help, quit still quits
        return match keymap.lookup(&key) {
            Some(Action::Quit) => Action::Quit,
            _ => Action::ExitMode,
        };
    }

    let binding = KeyBinding::from(key);

    if keymap.is_g_prefix(&binding) {
        return if app.pending_key == Some('g') {
            keymap.get_pending_g_action().copied().unwrap_or(Action::None)
        } else {
            Action::PendingG
        };
    }

    // Number row jumps straight to a project
    if let (KeyCode::Char(c @ '1'..='9'), KeyModifiers::NONE) = (key.code, key.modifiers) {
        let digit = c as usize - '1' as usize;
        return Action::GoToProject(digit);
    }

    keymap.lookup(&key).copied().unwrap_or(Action::None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};
    use folio_core::{AppConfig, Portfolio};
    use std::sync::Arc;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn app() -> App {
        App::new(Arc::new(AppConfig::default()), Portfolio::default()).unwrap()
    }

    #[test]
    fn test_digits_go_to_project() {
        let app = app();
        let keymap = Keymap::default();
        assert_eq!(
            handle_key_event(press(KeyCode::Char('1')), &app, &keymap),
            Action::GoToProject(0)
        );
        assert_eq!(
            handle_key_event(press(KeyCode::Char('9')), &app, &keymap),
            Action::GoToProject(8)
        );
        assert_eq!(
            handle_key_event(press(KeyCode::Char('0')), &app, &keymap),
            Action::None
        );
    }

    #[test]
    fn test_gg_sequence() {
        let mut app = app();
        let keymap = Keymap::default();
        assert_eq!(
            handle_key_event(press(KeyCode::Char('g')), &app, &keymap),
            Action::PendingG
        );
        app.pending_key = Some('g');
        assert_eq!(
            handle_key_event(press(KeyCode::Char('g')), &app, &keymap),
            Action::JumpToTop
        );
    }

    #[test]
    fn test_help_mode_swallows_keys() {
        let mut app = app();
        app.mode = Mode::Help;
        let keymap = Keymap::default();
        assert_eq!(
            handle_key_event(press(KeyCode::Char('l')), &app, &keymap),
            Action::ExitMode
        );
        assert_eq!(
            handle_key_event(press(KeyCode::Char('q')), &app, &keymap),
            Action::Quit
        );
    }

    #[test]
    fn test_carousel_keys() {
        let app = app();
        let keymap = Keymap::default();
        assert_eq!(
            handle_key_event(press(KeyCode::Char('h')), &app, &keymap),
            Action::PrevProject
        );
        assert_eq!(
            handle_key_event(press(KeyCode::Right), &app, &keymap),
            Action::NextProject
        );
    }
}
