//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if should_quit(key) {
        return Some(GameAction::Quit);
    }

    match key.code {
        // Movement
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(GameAction::MoveUp),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(GameAction::MoveDown),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(GameAction::MoveLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(GameAction::MoveRight),

        // Actions
        KeyCode::Enter | KeyCode::Char(' ') => Some(GameAction::Select),
        KeyCode::Char('f') | KeyCode::Char('F') => Some(GameAction::ToggleFlag),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
