use arrayvec::{ArrayString, ArrayVec};

use crate::selection::Path;
use crate::types::{GuessClass, GRID_SIZE, TILE_COUNT};

/// How many recently found words a snapshot carries.
pub const RECENT_WORDS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FoundSnapshot {
    pub word: ArrayString<TILE_COUNT>,
    pub points: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[char; GRID_SIZE as usize]; GRID_SIZE as usize],
    pub path: Path,
    pub guess: ArrayString<TILE_COUNT>,
    pub guess_class: GuessClass,
    pub guess_points: Option<u32>,
    pub word_count: u32,
    pub score: u32,
    pub remaining_secs: u32,
    pub game_over: bool,
    pub bonus_found: bool,
    /// Tiles highlighted after the round ends (the star word's path).
    pub reveal: Path,
    /// Most recent first.
    pub recent: ArrayVec<FoundSnapshot, RECENT_WORDS>,
}

impl GameSnapshot {
    /// Whether `(row, col)` is on the current drag path.
    pub fn on_path(&self, row: u8, col: u8) -> bool {
        self.path.iter().any(|c| c.row == row && c.col == col)
    }

    /// Whether `(row, col)` is part of the end-of-round reveal.
    pub fn revealed(&self, row: u8, col: u8) -> bool {
        self.reveal.iter().any(|c| c.row == row && c.col == col)
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[' '; GRID_SIZE as usize]; GRID_SIZE as usize],
            path: Path::new(),
            guess: ArrayString::new(),
            guess_class: GuessClass::Invalid,
            guess_points: None,
            word_count: 0,
            score: 0,
            remaining_secs: 0,
            game_over: false,
            bonus_found: false,
            reveal: Path::new(),
            recent: ArrayVec::new(),
        }
    }
}
