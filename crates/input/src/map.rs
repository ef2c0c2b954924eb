//! Mapping from terminal events to game input.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// Left-button pointer activity, in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Down { x: u16, y: u16 },
    Drag { x: u16, y: u16 },
    Up,
}

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),
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

/// Map mouse input to pointer events. Only the left button drives the game.
pub fn map_mouse_event(ev: MouseEvent) -> Option<PointerEvent> {
    match ev.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(PointerEvent::Down {
            x: ev.column,
            y: ev.row,
        }),
        MouseEventKind::Drag(MouseButton::Left) => Some(PointerEvent::Drag {
            x: ev.column,
            y: ev.row,
        }),
        MouseEventKind::Up(MouseButton::Left) => Some(PointerEvent::Up),
        _ => None,
    }
}
