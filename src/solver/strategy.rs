//! Guess selection strategies
//!
//! The five symbolic actions the policy chooses between, and the selector
//! that turns an action into a concrete word. The `ALL` order is load-bearing:
//! it fixes the Q-vector layout and the greedy argmax tie-break.
//!
//! Only `Exclude` and `Smart` consult the constraints; the other three ignore
//! them. That asymmetry comes from the source system and is kept.

use super::Heuristics;
use crate::core::{LetterSet, Word};
use crate::game::ConstraintSet;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::fmt;

/// A symbolic guess-selection strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Uniform choice from the remaining pool
    Random,
    /// Walk the positional-frequency opener list
    Probs1,
    /// Walk the global-frequency opener list
    Probs2,
    /// Constraint-filter the pool, then maximize letter coverage
    Smart,
    /// Drop words containing any gray letter, choose uniformly
    Exclude,
}

impl Action {
    /// Every action, in Q-vector order
    pub const ALL: [Self; 5] = [
        Self::Random,
        Self::Probs1,
        Self::Probs2,
        Self::Smart,
        Self::Exclude,
    ];

    /// Number of actions
    pub const COUNT: usize = Self::ALL.len();

    /// Position of this action in `ALL`
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Random => 0,
            Self::Probs1 => 1,
            Self::Probs2 => 2,
            Self::Smart => 3,
            Self::Exclude => 4,
        }
    }

    /// Action at `index` in `ALL`
    ///
    /// # Panics
    /// Panics if `index >= Action::COUNT`.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index]
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Probs1 => "probs1",
            Self::Probs2 => "probs2",
            Self::Smart => "smart",
            Self::Exclude => "exclude",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolve an action into a concrete guess from `pool`
///
/// `turn_index` is the number of guesses already made this game; the probs
/// strategies start their list scan there. Every branch ultimately falls back
/// to a uniform choice, so a word is always returned.
///
/// # Panics
/// Panics if `pool` is empty — an exhausted pool is a caller precondition
/// violation, not a recoverable state.
pub fn pick_word(
    action: Action,
    turn_index: usize,
    pool: &[Word],
    constraints: &ConstraintSet,
    heuristics: &Heuristics,
    rng: &mut impl Rng,
) -> Word {
    assert!(!pool.is_empty(), "candidate pool is exhausted");

    match action {
        Action::Random => random_word(pool, rng),
        Action::Probs1 => {
            pick_from_openers(heuristics.positional_openers(), turn_index, pool, rng)
        }
        Action::Probs2 => pick_from_openers(heuristics.global_openers(), turn_index, pool, rng),
        Action::Exclude => pick_excluding_grays(pool, constraints.grays(), rng),
        Action::Smart => pick_smart(pool, constraints, rng),
    }
}

fn random_word(pool: &[Word], rng: &mut impl Rng) -> Word {
    *pool.choose(rng).expect("pool checked non-empty")
}

/// First opener at or after `turn_index` that is still in the pool
fn pick_from_openers(
    openers: &[Word],
    turn_index: usize,
    pool: &[Word],
    rng: &mut impl Rng,
) -> Word {
    openers
        .get(turn_index..)
        .and_then(|rest| rest.iter().find(|w| pool.contains(w)))
        .copied()
        .unwrap_or_else(|| random_word(pool, rng))
}

/// Uniform choice among pool words sharing no letter with `grays`
fn pick_excluding_grays(pool: &[Word], grays: LetterSet, rng: &mut impl Rng) -> Word {
    let survivors: Vec<Word> = pool
        .iter()
        .filter(|w| !w.letters().intersects(grays))
        .copied()
        .collect();

    if survivors.is_empty() {
        random_word(pool, rng)
    } else {
        random_word(&survivors, rng)
    }
}

/// Best constraint-consistent word by distinct-letter coverage
///
/// The frequency table counts, for each letter, how many pool words contain
/// it (once per word). A survivor's score is that frequency summed over its
/// distinct letters, plus the distinct-letter count. Ties keep pool order.
fn pick_smart(pool: &[Word], constraints: &ConstraintSet, rng: &mut impl Rng) -> Word {
    let mut letter_freq = [0u32; 26];
    for word in pool {
        for letter in word.letters().iter() {
            letter_freq[usize::from(letter - b'a')] += 1;
        }
    }

    let mut best: Option<(u32, Word)> = None;
    for &word in pool {
        if !constraints.admits(word) {
            continue;
        }
        let letters = word.letters();
        let score = letters
            .iter()
            .map(|letter| letter_freq[usize::from(letter - b'a')])
            .sum::<u32>()
            + letters.len();

        // Strict comparison keeps the earliest pool word among ties
        if best.is_none_or(|(best_score, _)| score > best_score) {
            best = Some((score, word));
        }
    }

    best.map_or_else(|| random_word(pool, rng), |(_, word)| word)
}
