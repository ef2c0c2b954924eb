//! Game state module - manages the complete game state
//!
//! This module ties together the board, the word list and the drag selection.
//! It handles scoring, the found-word bookkeeping, the round countdown and the
//! star (bonus word) progress.

use arrayvec::ArrayString;
use tracing::{debug, info};

use crate::selection::{Path, Selection};
use crate::snapshot::{FoundSnapshot, GameSnapshot};
use crate::types::*;
use crate::{Board, WordList};

/// A word the player found this round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundWord {
    pub word: String,
    pub points: u32,
    /// The tiles the player traced for it.
    pub path: Path,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    words: WordList,
    selection: Selection,
    /// Found words in the order they were found.
    found: Vec<FoundWord>,
    score: u32,
    round_ms: u32,
    remaining_ms: u32,
    game_over: bool,
    bonus_word: Option<String>,
    /// Rounds played so far, for the restart log.
    round: u32,
}

impl GameState {
    /// Create a new round on `board` using `words`.
    ///
    /// The round lasts [`ROUND_SECONDS`] and the star word is
    /// [`DEFAULT_BONUS_WORD`] until changed with the builder methods.
    pub fn new(board: Board, words: WordList) -> Self {
        let round_ms = ROUND_SECONDS * 1000;
        Self {
            board,
            words,
            selection: Selection::new(),
            found: Vec::new(),
            score: 0,
            round_ms,
            remaining_ms: round_ms,
            game_over: false,
            bonus_word: Some(DEFAULT_BONUS_WORD.to_string()),
            round: 1,
        }
    }

    /// Set the star word; `None` disables the star.
    pub fn with_bonus_word(mut self, word: Option<&str>) -> Self {
        self.bonus_word = word.map(str::to_uppercase);
        self
    }

    /// Set the round length, clamped to `1..=MAX_ROUND_SECONDS`.
    pub fn with_round_seconds(mut self, seconds: u32) -> Self {
        self.round_ms = seconds.clamp(1, MAX_ROUND_SECONDS) * 1000;
        self.remaining_ms = self.round_ms;
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn words(&self) -> &WordList {
        &self.words
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn found(&self) -> &[FoundWord] {
        &self.found
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn word_count(&self) -> u32 {
        self.found.len() as u32
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn bonus_word(&self) -> Option<&str> {
        self.bonus_word.as_deref()
    }

    /// Whole seconds left, rounded up.
    pub fn remaining_secs(&self) -> u32 {
        self.remaining_ms.div_ceil(1000)
    }

    /// Countdown as `M:SS`.
    pub fn countdown_label(&self) -> String {
        countdown_label(self.remaining_secs())
    }

    /// Letters along the current drag path.
    pub fn current_guess(&self) -> String {
        self.board.spell(self.selection.path())
    }

    pub fn is_found(&self, guess: &str) -> bool {
        self.found.iter().any(|f| f.word == guess)
    }

    /// Classify a guess against the word list and the words found so far.
    pub fn classify(&self, guess: &str) -> GuessClass {
        if self.is_found(guess) {
            GuessClass::AlreadyGuessed
        } else if self.words.is_word(guess) {
            GuessClass::Valid
        } else {
            GuessClass::Invalid
        }
    }

    /// Points for the current guess, if it is a word.
    pub fn guess_points(&self) -> Option<u32> {
        let guess = self.current_guess();
        self.words
            .is_word(&guess)
            .then(|| self.words.score(&guess))
    }

    /// Text shown for the current guess: `WORD (+N)` for words, else the bare letters.
    pub fn guess_label(&self) -> String {
        let guess = self.current_guess();
        match self.guess_points() {
            Some(points) => format!("{guess} (+{points})"),
            None => guess,
        }
    }

    pub fn bonus_found(&self) -> bool {
        self.bonus_path().is_some()
    }

    fn bonus_path(&self) -> Option<&Path> {
        let bonus = self.bonus_word.as_deref()?;
        self.found.iter().find(|f| f.word == bonus).map(|f| &f.path)
    }

    /// After the round ends, the traced path of the star word (if found).
    pub fn reveal_path(&self) -> Option<&Path> {
        if !self.game_over {
            return None;
        }
        self.bonus_path()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.board);

        out.path.clear();
        out.path
            .extend(self.selection.path().iter().copied());

        let guess = self.current_guess();
        out.guess.clear();
        // Paths hold at most TILE_COUNT single-letter tiles.
        let _ = out.guess.try_push_str(&guess);
        out.guess_class = self.classify(&guess);
        out.guess_points = self.guess_points();

        out.word_count = self.word_count();
        out.score = self.score;
        out.remaining_secs = self.remaining_secs();
        out.game_over = self.game_over;
        out.bonus_found = self.bonus_found();

        out.reveal.clear();
        if let Some(path) = self.reveal_path() {
            out.reveal.extend(path.iter().copied());
        }

        out.recent.clear();
        for f in self.found.iter().rev().take(out.recent.capacity()) {
            let mut word = ArrayString::new();
            let _ = word.try_push_str(&f.word);
            out.recent.push(FoundSnapshot {
                word,
                points: f.points,
            });
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Advance the countdown by `elapsed_ms`.
    ///
    /// Returns true on the tick that ends the round. A drag still in progress
    /// at that point is dropped without scoring.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.game_over {
            return false;
        }

        self.remaining_ms = self.remaining_ms.saturating_sub(elapsed_ms);
        if self.remaining_ms > 0 {
            return false;
        }

        self.game_over = true;
        self.selection.cancel();
        info!(
            score = self.score,
            words = self.word_count(),
            star = self.bonus_found(),
            "round over"
        );
        true
    }

    /// Apply an action.
    ///
    /// Returns whether the action had an effect. For `Release` that means
    /// points were awarded. Only `Restart` has an effect once the round is over.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if self.game_over && action != GameAction::Restart {
            return false;
        }

        match action {
            GameAction::Press(at) => {
                self.selection.press(at);
                true
            }
            GameAction::Drag(coord) => self.selection.drag(coord),
            GameAction::Release => self.submit(),
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    fn submit(&mut self) -> bool {
        let Some(path) = self.selection.release() else {
            return false;
        };
        let guess = self.board.spell(&path);
        let points = self.words.score(&guess);

        if points == 0 || self.is_found(&guess) {
            debug!(%guess, class = self.classify(&guess).as_str(), "guess not scored");
            return false;
        }

        self.score = self.score.saturating_add(points);
        self.found.push(FoundWord {
            word: guess,
            points,
            path,
        });
        if let Some(f) = self.found.last() {
            info!(word = %f.word, points, score = self.score, "word found");
        }
        true
    }

    fn restart(&mut self) {
        self.selection.cancel();
        self.found.clear();
        self.score = 0;
        self.remaining_ms = self.round_ms;
        self.game_over = false;
        self.round = self.round.saturating_add(1);
        info!(round = self.round, "round restarted");
    }
}

/// Format whole seconds as `M:SS`.
///
/// # Examples
///
/// ```
/// use word_hunt_core::countdown_label;
///
/// assert_eq!(countdown_label(80), "1:20");
/// assert_eq!(countdown_label(5), "0:05");
/// assert_eq!(countdown_label(0), "0:00");
/// ```
pub fn countdown_label(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}
