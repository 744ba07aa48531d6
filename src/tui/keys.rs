/// Keyboard event to action mapping
///
/// This module handles converting crossterm KeyEvents into Actions.
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::trace;

use super::action::Action;
use super::state::{AppState, Screen};

/// Class of the solve button
pub const SOLVE_BUTTON: &str = "solve__button";
/// Class of the view-the-solution button
pub const VIEW_SOLUTION_BUTTON: &str = "button-empty";
/// Class of the continue button of the after view
pub const CONTINUE_BUTTON: &str = "continue";

/// Handle keys that work on every screen
fn handle_global_keys(key: &KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Tab => Some(Action::ToggleScreen),
        _ => None,
    }
}

/// Arrow keys walk the move tree
fn handle_nav_keys(key_code: KeyCode) -> Option<Action> {
    match key_code {
        KeyCode::Left => Some(Action::NavPrev),
        KeyCode::Right => Some(Action::NavNext),
        KeyCode::Up | KeyCode::Home => Some(Action::NavFirst),
        KeyCode::Down | KeyCode::End => Some(Action::NavLast),
        _ => None,
    }
}

/// Buttons are bound to uppercase letters so lowercase stays free for moves
fn handle_button_keys(key_code: KeyCode) -> Option<Action> {
    match key_code {
        KeyCode::Char('S') => Some(Action::ActivateButton(SOLVE_BUTTON)),
        KeyCode::Char('V') => Some(Action::ActivateButton(VIEW_SOLUTION_BUTTON)),
        KeyCode::Char('N') => Some(Action::ActivateButton(CONTINUE_BUTTON)),
        _ => None,
    }
}

/// Move input: UCI is files a-h, ranks 1-8 and promotion letters
fn handle_input_keys(key_code: KeyCode) -> Option<Action> {
    match key_code {
        KeyCode::Char(c) if is_uci_char(c) => Some(Action::InputChar(c)),
        KeyCode::Backspace => Some(Action::InputBackspace),
        KeyCode::Enter => Some(Action::SubmitMove),
        _ => None,
    }
}

fn is_uci_char(c: char) -> bool {
    matches!(c, 'a'..='h' | '1'..='8' | 'q' | 'r' | 'n')
}

pub fn key_to_action(key: KeyEvent, state: &AppState) -> Option<Action> {
    trace!("KEY: {:?} on {:?}", key, state.screen);

    if let Some(action) = handle_global_keys(&key) {
        return Some(action);
    }

    match state.screen {
        Screen::Puzzle => handle_nav_keys(key.code)
            .or_else(|| handle_button_keys(key.code))
            .or_else(|| handle_input_keys(key.code)),
        Screen::Insight => None,
    }
}
