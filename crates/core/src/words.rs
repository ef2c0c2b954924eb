//! Word list module - the static word-to-score table
//!
//! Word files are line oriented:
//!
//! - Reading stops at the first empty line.
//! - `;` starts a comment that runs to the end of the line.
//! - A line of letters is a word, a line of digits is a score.
//! - Words and scores pair up in order of appearance.
//!
//! ```text
//! ; three letter words
//! MAP
//! 100
//! PROM ; the star word
//! 400
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

/// Word list bundled for the default board.
const BUILTIN_WORDS: &str = include_str!("../assets/words.txt");

#[derive(Debug, Error)]
pub enum WordListError {
    #[error("cannot read word list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("word {word:?} (line {line}) has no score")]
    MissingScore { word: String, line: usize },

    #[error("score on line {line} has no word")]
    UnpairedScore { line: usize },

    #[error("invalid score {text:?} on line {line}")]
    InvalidScore { text: String, line: usize },
}

/// Accepted words (uppercase) and their scores.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    scores: HashMap<String, u32>,
}

impl WordList {
    /// Parse a word file.
    ///
    /// # Examples
    ///
    /// ```
    /// use word_hunt_core::WordList;
    ///
    /// let words = WordList::parse("map\n100\nPROM ; star\n400\n").unwrap();
    /// assert_eq!(words.score("MAP"), 100);
    /// assert_eq!(words.score("PROM"), 400);
    /// assert_eq!(words.score("NOPE"), 0);
    /// ```
    pub fn parse(text: &str) -> Result<Self, WordListError> {
        // (word, line) and (score, line), paired by index afterwards.
        let mut words: Vec<(String, usize)> = Vec::new();
        let mut scores: Vec<(u32, usize)> = Vec::new();

        for (i, raw) in text.lines().enumerate() {
            let line_no = i + 1;
            let raw = raw.strip_suffix('\r').unwrap_or(raw);
            if raw.is_empty() {
                break;
            }

            let line = match raw.find(';') {
                Some(at) => &raw[..at],
                None => raw,
            }
            .trim();
            if line.is_empty() {
                continue;
            }

            if line.chars().all(char::is_alphabetic) {
                words.push((line.to_uppercase(), line_no));
            } else if line.chars().all(|c| c.is_ascii_digit()) {
                let score = line.parse().map_err(|_| WordListError::InvalidScore {
                    text: line.to_string(),
                    line: line_no,
                })?;
                scores.push((score, line_no));
            } else {
                debug!(line = line_no, "ignoring word list line");
            }
        }

        if let Some((word, line)) = words.get(scores.len()) {
            return Err(WordListError::MissingScore {
                word: word.clone(),
                line: *line,
            });
        }
        if let Some((_, line)) = scores.get(words.len()) {
            return Err(WordListError::UnpairedScore { line: *line });
        }

        let mut map = HashMap::with_capacity(words.len());
        for ((word, line), (score, _)) in words.into_iter().zip(scores) {
            if map.insert(word.clone(), score).is_some() {
                warn!(%word, line, "duplicate word, keeping the later score");
            }
        }

        Ok(Self { scores: map })
    }

    /// Read and parse a word file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, WordListError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| WordListError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    /// The bundled list for the default board.
    pub fn builtin() -> Self {
        // Parsed in `builtin_list_parses`.
        Self::parse(BUILTIN_WORDS).unwrap_or_default()
    }

    pub fn is_word(&self, guess: &str) -> bool {
        self.scores.contains_key(guess)
    }

    /// Score for `guess`, 0 when it is not a word.
    pub fn score(&self, guess: &str) -> u32 {
        self.scores.get(guess).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Coord, GRID_SIZE};
    use crate::Board;

    #[test]
    fn builtin_list_parses() {
        let words = WordList::parse(BUILTIN_WORDS).unwrap();
        assert_eq!(words.len(), 52);
        assert_eq!(words.score("PROM"), 400);
        assert_eq!(words.score("PRESTO"), 1400);
        assert_eq!(WordList::builtin(), words);
    }

    #[test]
    fn blank_line_ends_the_file() {
        let words = WordList::parse("MAP\n100\n\nTAP\n100\n").unwrap();
        assert!(words.is_word("MAP"));
        assert!(!words.is_word("TAP"));
    }

    #[test]
    fn comment_only_lines_do_not_end_the_file() {
        let words = WordList::parse("; header\nMAP\n100\n;\nTAP\n200\n").unwrap();
        assert_eq!(words.score("TAP"), 200);
    }

    #[test]
    fn words_and_scores_pair_by_order() {
        let words = WordList::parse("MAP\nTAP\n100\n250\n").unwrap();
        assert_eq!(words.score("MAP"), 100);
        assert_eq!(words.score("TAP"), 250);
    }

    #[test]
    fn lowercase_words_are_uppercased() {
        let words = WordList::parse("rest\n400\n").unwrap();
        assert!(words.is_word("REST"));
        assert!(!words.is_word("rest"));
    }

    #[test]
    fn mixed_lines_are_ignored() {
        let words = WordList::parse("MAP\nnot a word\n12ab\n100\n").unwrap();
        assert_eq!(words.len(), 1);
        assert_eq!(words.score("MAP"), 100);
    }

    #[test]
    fn crlf_line_endings() {
        let words = WordList::parse("MAP\r\n100\r\n\r\nTAP\r\n100\r\n").unwrap();
        assert_eq!(words.len(), 1);
    }

    #[test]
    fn word_without_score_is_an_error() {
        let err = WordList::parse("MAP\n100\nTAP\n").unwrap_err();
        match err {
            WordListError::MissingScore { word, line } => {
                assert_eq!(word, "TAP");
                assert_eq!(line, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn score_without_word_is_an_error() {
        let err = WordList::parse("MAP\n100\n200\n").unwrap_err();
        assert!(matches!(err, WordListError::UnpairedScore { line: 3 }));
    }

    #[test]
    fn overflowing_score_is_an_error() {
        let err = WordList::parse("MAP\n99999999999\n").unwrap_err();
        assert!(matches!(err, WordListError::InvalidScore { line: 2, .. }));
    }

    #[test]
    fn duplicate_word_keeps_later_score() {
        let words = WordList::parse("MAP\n100\nMAP\n300\n").unwrap();
        assert_eq!(words.len(), 1);
        assert_eq!(words.score("MAP"), 300);
    }

    #[test]
    fn load_reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        std::fs::write(&path, "STAR\n400\n").unwrap();

        let words = WordList::load(&path).unwrap();
        assert_eq!(words.score("STAR"), 400);

        let missing = WordList::load(dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(missing, WordListError::Io { .. }));
    }

    // Every bundled word must be traceable on the default board.
    #[test]
    fn builtin_words_are_on_the_default_board() {
        fn trace(board: &Board, word: &[char], at: Coord, used: &mut Vec<Coord>) -> bool {
            if board.letter(at) != Some(word[0]) {
                return false;
            }
            if word.len() == 1 {
                return true;
            }
            used.push(at);
            let found = board
                .coords()
                .any(|next| {
                    at.is_adjacent(next)
                        && !used.contains(&next)
                        && trace(board, &word[1..], next, used)
                });
            used.pop();
            found
        }

        let board = Board::default();
        let words = WordList::builtin();
        for word in words.scores.keys() {
            let chars: Vec<char> = word.chars().collect();
            let ok = board
                .coords()
                .any(|start| trace(&board, &chars, start, &mut Vec::new()));
            assert!(ok, "{word} cannot be traced");
            assert!(chars.len() <= (GRID_SIZE * GRID_SIZE) as usize);
        }
    }
}
