//! Board module - the 4x4 letter grid
//!
//! The board is a fixed grid of uppercase letters. Uses a flat array in
//! row-major order; coordinates are `(row, col)` with `(0, 0)` top-left.

use thiserror::Error;

use crate::types::{Coord, DEFAULT_BOARD, GRID_SIZE, TILE_COUNT};

/// Errors building a board from text rows.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("expected {expected} rows, got {found}")]
    RowCount { expected: usize, found: usize },

    #[error("row {row} has {found} letters, expected {expected}")]
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("row {row} contains non-letter character {ch:?}")]
    NotALetter { row: usize, ch: char },
}

/// The letter grid - 4 columns x 4 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of letters, row-major order (row * GRID_SIZE + col)
    letters: [char; TILE_COUNT],
}

impl Board {
    /// Build a board from text rows, one string per row.
    ///
    /// Letters are uppercased.
    ///
    /// # Examples
    ///
    /// ```
    /// use word_hunt_core::Board;
    /// use word_hunt_types::Coord;
    ///
    /// let board = Board::from_rows(&["abcd", "efgh", "ijkl", "mnop"]).unwrap();
    /// assert_eq!(board.letter(Coord::new(1, 2)), Some('G'));
    /// ```
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, BoardError> {
        let size = GRID_SIZE as usize;
        if rows.len() != size {
            return Err(BoardError::RowCount {
                expected: size,
                found: rows.len(),
            });
        }

        let mut letters = [' '; TILE_COUNT];
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let width = row.chars().count();
            if width != size {
                return Err(BoardError::RowWidth {
                    row: r,
                    expected: size,
                    found: width,
                });
            }
            for (c, ch) in row.chars().enumerate() {
                if !ch.is_ascii_alphabetic() {
                    return Err(BoardError::NotALetter { row: r, ch });
                }
                letters[r * size + c] = ch.to_ascii_uppercase();
            }
        }

        Ok(Self { letters })
    }

    /// Get the letter at `coord`.
    /// Returns None if out of bounds
    pub fn letter(&self, coord: Coord) -> Option<char> {
        if !coord.in_bounds() {
            return None;
        }
        Some(self.letters[coord.index()])
    }

    /// Iterate all tile coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        (0..GRID_SIZE).flat_map(|row| (0..GRID_SIZE).map(move |col| Coord::new(row, col)))
    }

    /// Concatenate the letters along a path.
    ///
    /// Out-of-bounds coordinates are skipped.
    pub fn spell(&self, path: &[Coord]) -> String {
        path.iter().filter_map(|&c| self.letter(c)).collect()
    }

    /// Copy the letters into a 2D grid (for snapshots).
    pub fn write_grid(&self, out: &mut [[char; GRID_SIZE as usize]; GRID_SIZE as usize]) {
        for coord in self.coords() {
            out[coord.row as usize][coord.col as usize] = self.letters[coord.index()];
        }
    }
}

impl Default for Board {
    /// The fixed game layout.
    fn default() -> Self {
        let size = GRID_SIZE as usize;
        let mut letters = [' '; TILE_COUNT];
        for (r, row) in DEFAULT_BOARD.iter().enumerate() {
            for (c, ch) in row.chars().enumerate() {
                letters[r * size + c] = ch;
            }
        }
        Self { letters }
    }
}
