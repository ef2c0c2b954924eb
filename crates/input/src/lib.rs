//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any layout. It maps
//! `crossterm` key events into [`crate::types::GameAction`]s and mouse events
//! into [`PointerEvent`]s in terminal cell coordinates. Turning a pointer
//! position into a tile is the view's job (it owns the layout).

pub mod map;

pub use word_hunt_types as types;

pub use map::{handle_key_event, map_mouse_event, should_quit, PointerEvent};
