//! Runtime configuration from command-line flags and environment variables.
//!
//! | Flag | Env | Default |
//! |------|-----|---------|
//! | `--words <PATH>` | `WORD_HUNT_WORDS` | bundled list |
//! | `--seconds <N>` | `WORD_HUNT_SECONDS` | 80 (1 to 86400) |
//! | `--bonus <WORD>` | `WORD_HUNT_BONUS` | `PROM` |
//! | `--no-bonus` | | off |
//! | `--log-file <PATH>` | `WORD_HUNT_LOG` | no logging |
//! | `--debug` | | info level |

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{info, warn};

use crate::core::{Board, GameState, WordList};
use crate::types::{DEFAULT_BONUS_WORD, MAX_ROUND_SECONDS, ROUND_SECONDS};

#[derive(Debug, Clone, Parser)]
#[command(name = "word-hunt")]
#[command(about = "Drag across a 4x4 letter grid to find words before time runs out")]
#[command(version)]
pub struct Config {
    /// Word list file (word lines followed by score lines)
    #[arg(short, long, env = "WORD_HUNT_WORDS")]
    pub words: Option<PathBuf>,

    /// Round length in seconds
    #[arg(
        short,
        long,
        env = "WORD_HUNT_SECONDS",
        default_value_t = ROUND_SECONDS,
        value_parser = clap::value_parser!(u32).range(1..=MAX_ROUND_SECONDS as i64)
    )]
    pub seconds: u32,

    /// Word that fills the star when found
    #[arg(short, long, env = "WORD_HUNT_BONUS", default_value = DEFAULT_BONUS_WORD)]
    pub bonus: String,

    /// Play without a star word
    #[arg(long)]
    pub no_bonus: bool,

    /// Write logs to this file (the terminal is owned by the game)
    #[arg(long, env = "WORD_HUNT_LOG")]
    pub log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,
}

impl Config {
    /// Load the configured word list, falling back to the bundled one.
    pub fn load_words(&self) -> Result<WordList> {
        let words = match &self.words {
            Some(path) => WordList::load(path)
                .with_context(|| format!("loading word list {}", path.display()))?,
            None => WordList::builtin(),
        };
        if words.is_empty() {
            bail!("word list is empty");
        }
        info!(words = words.len(), source = ?self.words, "word list loaded");
        Ok(words)
    }

    /// The star word, uppercased; `None` when disabled.
    pub fn bonus_word(&self) -> Result<Option<String>> {
        if self.no_bonus {
            return Ok(None);
        }
        let word = self.bonus.trim();
        if word.is_empty() || !word.chars().all(char::is_alphabetic) {
            bail!("star word must be letters only, got {:?}", self.bonus);
        }
        Ok(Some(word.to_uppercase()))
    }

    /// Build the round described by this configuration.
    pub fn new_game(&self) -> Result<GameState> {
        let words = self.load_words()?;
        let bonus = self.bonus_word()?;
        if let Some(word) = &bonus {
            if !words.is_word(word) {
                warn!(%word, "star word is not in the word list and can never be found");
            }
        }

        Ok(GameState::new(Board::default(), words)
            .with_bonus_word(bonus.as_deref())
            .with_round_seconds(self.seconds))
    }
}
