//! Wordle feedback scoring
//!
//! Feedback is the `(greens, yellows)` count pair for a guess against a
//! secret. It is deliberately not positionally resolved: this pair is the
//! entire observable state the learned policy conditions on.

use super::{WORD_LEN, Word};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Green/yellow counts for one guess
///
/// Invariant: `greens + yellows <= 5`, and `greens == 5` exactly when the
/// guess equals the secret.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Feedback {
    pub greens: u8,
    pub yellows: u8,
}

impl Feedback {
    /// All greens (winning guess)
    pub const PERFECT: Self = Self {
        greens: WORD_LEN as u8,
        yellows: 0,
    };

    /// Score `guess` against `secret`
    ///
    /// Two-pass algorithm with correct duplicate-letter handling:
    /// 1. Count greens, consuming the matched secret positions.
    /// 2. For each non-green guess position, scan unconsumed secret positions
    ///    left to right; the first match counts a yellow and consumes that
    ///    secret position.
    ///
    /// Pure function; the left-to-right scan is the tie-break for duplicates.
    ///
    /// # Examples
    /// ```
    /// use wordle_rl::core::{Feedback, Word};
    ///
    /// let guess = Word::new("trace").unwrap();
    /// let secret = Word::new("crane").unwrap();
    /// let fb = Feedback::score(guess, secret);
    /// assert_eq!((fb.greens, fb.yellows), (3, 1));
    /// ```
    #[must_use]
    pub fn score(guess: Word, secret: Word) -> Self {
        let mut used = [false; WORD_LEN];
        let mut greens = 0;

        for i in 0..WORD_LEN {
            if guess.char_at(i) == secret.char_at(i) {
                greens += 1;
                used[i] = true;
            }
        }

        let mut yellows = 0;
        for i in 0..WORD_LEN {
            if guess.char_at(i) == secret.char_at(i) {
                continue;
            }
            for j in 0..WORD_LEN {
                if !used[j] && secret.char_at(j) == guess.char_at(i) {
                    yellows += 1;
                    used[j] = true;
                    break;
                }
            }
        }

        Self { greens, yellows }
    }

    /// True if every position matched
    #[inline]
    #[must_use]
    pub const fn is_win(self) -> bool {
        self.greens as usize == WORD_LEN
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}G {}Y", self.greens, self.yellows)
    }
}
