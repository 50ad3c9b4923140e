//! Lexicon loading
//!
//! The trainer and the game consume two ordered word lists: the training
//! lexicon (secret pool, heuristic scoring) and the allowed lexicon (guess
//! universe, a superset). Both load once at startup; a malformed line aborts
//! the load instead of being skipped.

use crate::core::Word;
use anyhow::{Context, bail};
use std::fs;
use std::path::Path;

/// The training/allowed word-list pair
#[derive(Debug, Clone)]
pub struct Lexicon {
    training: Vec<Word>,
    allowed: Vec<Word>,
}

impl Lexicon {
    /// Load both lists from newline-delimited files
    ///
    /// # Errors
    /// Returns an error if either file is unreadable, contains an invalid
    /// word, or is empty.
    pub fn load<P: AsRef<Path>>(training_path: P, allowed_path: P) -> anyhow::Result<Self> {
        Ok(Self {
            training: load_from_file(training_path)?,
            allowed: load_from_file(allowed_path)?,
        })
    }

    /// Build a lexicon from already-validated word lists
    ///
    /// # Panics
    /// Panics if either list is empty.
    #[must_use]
    pub fn from_words(training: Vec<Word>, allowed: Vec<Word>) -> Self {
        assert!(!training.is_empty(), "training lexicon is empty");
        assert!(!allowed.is_empty(), "allowed lexicon is empty");
        Self { training, allowed }
    }

    /// Secret-selection pool, in file order
    #[must_use]
    pub fn training(&self) -> &[Word] {
        &self.training
    }

    /// Guess universe, in file order
    #[must_use]
    pub fn allowed(&self) -> &[Word] {
        &self.allowed
    }
}

/// Load words from a file, failing fast on the first invalid line
///
/// Blank lines are ignored; anything else must be a 5-letter lowercase
/// ASCII word.
///
/// # Errors
/// Returns an error naming the offending line, or if the list ends up empty.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Word>> {
    let path = path.as_ref();
    let content =
        fs::read_to_string(path).with_context(|| format!("reading word list {}", path.display()))?;

    let mut words = Vec::new();
    for (line_number, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let word = Word::new(trimmed).with_context(|| {
            format!(
                "invalid word '{trimmed}' at {}:{}",
                path.display(),
                line_number + 1
            )
        })?;
        words.push(word);
    }

    if words.is_empty() {
        bail!("word list {} is empty", path.display());
    }
    Ok(words)
}
