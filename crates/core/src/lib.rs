//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and word lookup.
//! It has **no dependencies** on terminal rendering or input devices, making it:
//!
//! - **Deterministic**: the same actions always produce the same round
//! - **Testable**: unit tests for the selection rules and scoring
//! - **Portable**: can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: the 4x4 letter grid
//! - [`words`]: word-to-score table and its file format
//! - [`selection`]: the drag-selection state machine (adjacency, no revisits)
//! - [`game_state`]: scoring, found words, countdown and the star word
//! - [`snapshot`]: plain data handed to renderers
//!
//! # Game Rules
//!
//! - Press on a tile and drag across neighbouring tiles (including diagonals)
//! - A tile can be used once per word
//! - Releasing submits the word; each word scores once per round
//! - The round ends when the 80 second countdown reaches zero
//!
//! # Example
//!
//! ```
//! use word_hunt_core::{Board, GameState, WordList};
//! use word_hunt_types::{Coord, GameAction};
//!
//! let mut game = GameState::new(Board::default(), WordList::builtin());
//!
//! // Trace D-A-M along the bottom-left corner.
//! game.apply_action(GameAction::Press(Some(Coord::new(3, 0))));
//! game.apply_action(GameAction::Drag(Coord::new(3, 1)));
//! game.apply_action(GameAction::Drag(Coord::new(2, 1)));
//! assert_eq!(game.guess_label(), "DAM (+100)");
//!
//! assert!(game.apply_action(GameAction::Release));
//! assert_eq!(game.score(), 100);
//! ```
//!
//! # Timing
//!
//! Call [`GameState::tick`](game_state::GameState::tick) every frame with the
//! elapsed time in milliseconds.

pub mod board;
pub mod game_state;
pub mod selection;
pub mod snapshot;
pub mod words;

pub use word_hunt_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, BoardError};
pub use game_state::{countdown_label, FoundWord, GameState};
pub use selection::{Path, Selection};
pub use snapshot::{FoundSnapshot, GameSnapshot, RECENT_WORDS};
pub use words::{WordList, WordListError};
