//! Key mapping from terminal events to game actions.

use crate::types::{Direction, GameAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Movement
        KeyCode::Up | KeyCode::Char('n') | KeyCode::Char('N') => {
            Some(GameAction::Move(Direction::North))
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(GameAction::Move(Direction::South))
        }
        KeyCode::Right | KeyCode::Char('e') | KeyCode::Char('E') => {
            Some(GameAction::Move(Direction::East))
        }
        KeyCode::Left | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(GameAction::Move(Direction::West))
        }

        // Shrinking
        KeyCode::Backspace | KeyCode::Char('b') | KeyCode::Char('B') => Some(GameAction::Undo),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Erase),
        KeyCode::Char('x') | KeyCode::Char('X') => Some(GameAction::Restart),

        // Selection
        KeyCode::Tab | KeyCode::Char('c') | KeyCode::Char('C') => Some(GameAction::NextChain),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_movement_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Up)),
            Some(GameAction::Move(Direction::North))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Down)),
            Some(GameAction::Move(Direction::South))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Right)),
            Some(GameAction::Move(Direction::East))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Left)),
            Some(GameAction::Move(Direction::West))
        );

        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('N'))),
            Some(GameAction::Move(Direction::North))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('s'))),
            Some(GameAction::Move(Direction::South))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('E'))),
            Some(GameAction::Move(Direction::East))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('w'))),
            Some(GameAction::Move(Direction::West))
        );
    }

    #[test]
    fn test_chain_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('B'))),
            Some(GameAction::Undo)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Backspace)),
            Some(GameAction::Undo)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('R'))),
            Some(GameAction::Erase)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('x'))),
            Some(GameAction::Restart)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('C'))),
            Some(GameAction::NextChain)
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('z'))), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
    }
}
