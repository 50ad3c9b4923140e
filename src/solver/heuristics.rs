//! Opener lists precomputed from the training lexicon
//!
//! Two rankings, built once and owned by the `Heuristics` value:
//! - positional: words scored by per-position letter frequency
//! - global: words scored by flat letter frequency over the whole lexicon
//!
//! Only the top 10 of each ranking is kept; the probs strategies walk these
//! lists turn by turn.

use crate::core::{WORD_LEN, Word};

const ALPHABET: usize = 26;

/// How deep each opener ranking goes
pub const OPENER_LIST_LEN: usize = 10;

/// Precomputed word rankings derived from the training lexicon
#[derive(Debug, Clone)]
pub struct Heuristics {
    positional_openers: Vec<Word>,
    global_openers: Vec<Word>,
}

impl Heuristics {
    /// Build both rankings from the training lexicon
    ///
    /// Ties keep the lexicon's original relative order (stable sort).
    #[must_use]
    pub fn from_training(train_words: &[Word]) -> Self {
        Self {
            positional_openers: top_words(train_words, positional_scores(train_words)),
            global_openers: top_words(train_words, global_scores(train_words)),
        }
    }

    /// Words ranked by per-position letter frequency, best first
    #[must_use]
    pub fn positional_openers(&self) -> &[Word] {
        &self.positional_openers
    }

    /// Words ranked by global letter frequency, best first
    #[must_use]
    pub fn global_openers(&self) -> &[Word] {
        &self.global_openers
    }
}

/// Score every word by `Σ ln(count[pos][letter] + 1)`
fn positional_scores(train_words: &[Word]) -> Vec<f64> {
    let mut counts = [[0u32; ALPHABET]; WORD_LEN];
    for word in train_words {
        for (i, &letter) in word.chars().iter().enumerate() {
            counts[i][usize::from(letter - b'a')] += 1;
        }
    }

    train_words
        .iter()
        .map(|word| {
            word.chars()
                .iter()
                .enumerate()
                .map(|(i, &letter)| f64::from(counts[i][usize::from(letter - b'a')] + 1).ln())
                .sum()
        })
        .collect()
}

/// Score every word by the summed global frequency of its letters
///
/// Duplicate letters in a word count every occurrence, matching the source
/// system's scoring.
fn global_scores(train_words: &[Word]) -> Vec<f64> {
    let mut counts = [0u32; ALPHABET];
    for word in train_words {
        for &letter in word.chars() {
            counts[usize::from(letter - b'a')] += 1;
        }
    }

    train_words
        .iter()
        .map(|word| {
            word.chars()
                .iter()
                .map(|&letter| f64::from(counts[usize::from(letter - b'a')]))
                .sum()
        })
        .collect()
}

/// Take the top-scored words, preserving lexicon order among ties
fn top_words(train_words: &[Word], scores: Vec<f64>) -> Vec<Word> {
    let mut order: Vec<usize> = (0..train_words.len()).collect();
    // sort_by is stable, so equal scores keep their original order
    order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));

    order
        .into_iter()
        .take(OPENER_LIST_LEN)
        .map(|i| train_words[i])
        .collect()
}
