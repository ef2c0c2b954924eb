//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It avoids widget/layout libraries and instead renders into a simple
//! framebuffer that is diffed and flushed to the terminal.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Own the screen layout, including pointer hit testing
//! - Allow precise control over tile aspect ratio (7x3 cells per tile)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use word_hunt_core as core;
pub use word_hunt_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{class_color, AnchorY, GameView, Layout, Viewport};
pub use renderer::{encode_frame, TerminalRenderer};
