//! Input module - Keyboard handling for game controls

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => Some(GameAction::Flap),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),
        _ => None,
    }
}

/// Check if key should quit the game
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
