//! Word Hunt (workspace facade crate).
//!
//! Re-exports the workspace crates as `word_hunt::{core,input,term,types}` and
//! hosts the pieces that tie them together: command-line/env configuration,
//! log setup, and the [`Session`] that routes terminal input into the game.

pub mod config;
pub mod logging;
pub mod session;

pub use word_hunt_core as core;
pub use word_hunt_input as input;
pub use word_hunt_term as term;
pub use word_hunt_types as types;

pub use config::Config;
pub use session::Session;
