//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! - **Grid**: 4x4 tiles, coordinates `(row, col)` with `(0, 0)` top-left
//! - **Longest path**: 16 tiles (every tile visited once)
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Loop timestep (~60 FPS) |
//! | `ROUND_SECONDS` | 80 | Length of one round |
//! | `MAX_ROUND_SECONDS` | 86400 | Longest configurable round (one day) |
//!
//! # Examples
//!
//! ```
//! use word_hunt_types::{Coord, GuessClass, GRID_SIZE};
//!
//! let a = Coord::new(0, 0);
//! assert!(a.is_adjacent(Coord::new(1, 1)));
//! assert!(!a.is_adjacent(Coord::new(0, 2)));
//! assert!(!a.is_adjacent(a));
//!
//! assert_eq!(GuessClass::Valid.as_str(), "valid");
//! assert_eq!(GRID_SIZE, 4);
//! ```

/// Tiles per row and per column.
pub const GRID_SIZE: u8 = 4;

/// Total number of tiles (and the longest possible path).
pub const TILE_COUNT: usize = (GRID_SIZE as usize) * (GRID_SIZE as usize);

/// Fixed loop timestep in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Length of a round in seconds.
pub const ROUND_SECONDS: u32 = 80;

/// Upper bound on a configured round length, in seconds.
pub const MAX_ROUND_SECONDS: u32 = 86_400;

/// Word that lights up the star when found.
pub const DEFAULT_BONUS_WORD: &str = "PROM";

/// The fixed letter layout, row by row.
pub const DEFAULT_BOARD: [&str; GRID_SIZE as usize] = ["PRSU", "ESOI", "RMTR", "DAPA"];


/// A tile position on the grid.
///
/// `row` grows downward, `col` grows to the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: u8,
    pub col: u8,
}

impl Coord {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Whether `other` is one of the eight neighbours of this tile.
    ///
    /// A tile is never adjacent to itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use word_hunt_types::Coord;
    ///
    /// assert!(Coord::new(2, 1).is_adjacent(Coord::new(1, 2)));
    /// assert!(Coord::new(2, 1).is_adjacent(Coord::new(2, 0)));
    /// assert!(!Coord::new(2, 1).is_adjacent(Coord::new(0, 1)));
    /// ```
    pub fn is_adjacent(&self, other: Coord) -> bool {
        if *self == other {
            return false;
        }
        self.row.abs_diff(other.row) <= 1 && self.col.abs_diff(other.col) <= 1
    }

    /// Flat row-major index.
    pub fn index(&self) -> usize {
        (self.row as usize) * (GRID_SIZE as usize) + (self.col as usize)
    }

    /// Whether the coordinate lies on the grid.
    pub fn in_bounds(&self) -> bool {
        self.row < GRID_SIZE && self.col < GRID_SIZE
    }
}

/// How the current guess relates to the word list and the words already found.
///
/// - **Invalid**: not in the word list (also the empty guess)
/// - **Valid**: in the word list and not found yet
/// - **AlreadyGuessed**: in the word list and found earlier this round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GuessClass {
    #[default]
    Invalid,
    Valid,
    AlreadyGuessed,
}

impl GuessClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            GuessClass::Invalid => "invalid",
            GuessClass::Valid => "valid",
            GuessClass::AlreadyGuessed => "already_guessed",
        }
    }
}

/// Game actions that can be applied to modify game state
///
/// Pointer input is resolved to tile coordinates before it reaches the core,
/// so the core never deals with screen positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Pointer pressed; `None` when the press missed every tile
    Press(Option<Coord>),
    /// Pointer dragged over a tile
    Drag(Coord),
    /// Pointer released; the traced word is evaluated
    Release,
    /// Start a fresh round
    Restart,
}

impl GameAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Press(_) => "press",
            GameAction::Drag(_) => "drag",
            GameAction::Release => "release",
            GameAction::Restart => "restart",
        }
    }
}
