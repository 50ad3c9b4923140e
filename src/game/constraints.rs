//! Accumulated letter knowledge for one game
//!
//! Greens pin a position, yellows exclude a letter at a position while
//! confirming it exists, grays exclude a letter everywhere. All three only
//! grow over the lifetime of a game.

use crate::core::{LetterSet, WORD_LEN, Word};

/// Green/yellow/gray knowledge accumulated across the turns of one game
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintSet {
    greens: [Option<u8>; WORD_LEN],
    yellows: [LetterSet; WORD_LEN],
    grays: LetterSet,
}

impl ConstraintSet {
    /// Fresh constraints with no knowledge
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one guess's evidence into the set
    ///
    /// Per position: an exact match records a green; a letter present
    /// elsewhere in the secret records a position exclusion; anything else
    /// lands in the gray set.
    ///
    /// Evidence is derived per position with no multiset accounting: a guess
    /// letter whose secret copies were all consumed by greens in the same
    /// guess still records a yellow exclusion, overstating what the feedback
    /// proved. Kept as-is from the source system.
    pub fn update(&mut self, guess: Word, secret: Word) {
        for i in 0..WORD_LEN {
            let letter = guess.char_at(i);
            if letter == secret.char_at(i) {
                self.greens[i] = Some(letter);
            } else if secret.has_letter(letter) {
                self.yellows[i].insert(letter);
            } else {
                self.grays.insert(letter);
            }
        }
    }

    /// Check a word against everything known so far
    ///
    /// Greens must match, every yellow letter must be present but away from
    /// its excluded slot, and no gray letter may appear.
    #[must_use]
    pub fn admits(&self, word: Word) -> bool {
        for i in 0..WORD_LEN {
            if let Some(green) = self.greens[i]
                && word.char_at(i) != green
            {
                return false;
            }
            for yellow in self.yellows[i].iter() {
                if word.char_at(i) == yellow || !word.has_letter(yellow) {
                    return false;
                }
            }
        }
        !word.letters().intersects(self.grays)
    }

    /// The confirmed letter at `position`, if any
    #[inline]
    #[must_use]
    pub const fn green(&self, position: usize) -> Option<u8> {
        self.greens[position]
    }

    /// Letters known wrong at `position`
    #[inline]
    #[must_use]
    pub const fn yellows_at(&self, position: usize) -> LetterSet {
        self.yellows[position]
    }

    /// Letters confirmed absent from the secret
    #[inline]
    #[must_use]
    pub const fn grays(&self) -> LetterSet {
        self.grays
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn update_records_all_three_kinds() {
        let mut constraints = ConstraintSet::new();
        constraints.update(word("trace"), word("crane"));

        // r, a, e green; c yellow at position 3; t gray
        assert_eq!(constraints.green(1), Some(b'r'));
        assert_eq!(constraints.green(2), Some(b'a'));
        assert_eq!(constraints.green(4), Some(b'e'));
        assert!(constraints.yellows_at(3).contains(b'c'));
        assert!(constraints.grays().contains(b't'));
    }

    #[test]
    fn monotonic_across_updates() {
        let secret = word("crane");
        let mut constraints = ConstraintSet::new();

        let guesses = [word("trace"), word("slate"), word("crane")];
        let mut previous = constraints.clone();

        for guess in guesses {
            constraints.update(guess, secret);

            for i in 0..WORD_LEN {
                if let Some(green) = previous.green(i) {
                    assert_eq!(constraints.green(i), Some(green));
                }
                for yellow in previous.yellows_at(i).iter() {
                    assert!(constraints.yellows_at(i).contains(yellow));
                }
            }
            for gray in previous.grays().iter() {
                assert!(constraints.grays().contains(gray));
            }
            previous = constraints.clone();
        }
    }

    #[test]
    fn admits_requires_green_match() {
        let mut constraints = ConstraintSet::new();
        constraints.update(word("trace"), word("crane"));

        assert!(constraints.admits(word("crane")));
        assert!(!constraints.admits(word("brine"))); // a not at position 2
    }

    #[test]
    fn admits_rejects_yellow_at_excluded_slot() {
        let mut constraints = ConstraintSet::new();
        constraints.update(word("cigar"), word("crane"));

        // c green at 0; r yellow at position 4
        assert!(!constraints.admits(word("cedar"))); // r back at position 4
        assert!(!constraints.admits(word("couch"))); // r missing entirely
        assert!(constraints.admits(word("crane")));
    }

    #[test]
    fn admits_rejects_gray_letters() {
        let mut constraints = ConstraintSet::new();
        constraints.update(word("moist"), word("crane"));

        assert!(!constraints.admits(word("storm")));
        assert!(constraints.admits(word("crane")));
    }

    #[test]
    fn duplicate_guess_letter_overstates_yellow_evidence() {
        // Secret CRANE has one e, consumed by the green at position 4; the
        // extra e's in EERIE still record yellows at positions 0 and 1.
        // Known soundness quirk kept from the source system: the per-position
        // rule never sends an in-secret letter to gray, but it can claim more
        // yellow evidence than the feedback proved.
        let mut constraints = ConstraintSet::new();
        constraints.update(word("eerie"), word("crane"));

        assert_eq!(constraints.green(4), Some(b'e'));
        assert!(constraints.yellows_at(0).contains(b'e'));
        assert!(constraints.yellows_at(1).contains(b'e'));
        assert!(!constraints.grays().contains(b'e'));

        // The true secret still passes the accumulated filter
        assert!(constraints.admits(word("crane")));
    }

    #[test]
    fn absent_letter_goes_gray_regardless_of_repeats() {
        let mut constraints = ConstraintSet::new();
        constraints.update(word("llama"), word("crane"));

        assert!(constraints.grays().contains(b'l'));
        assert!(constraints.grays().contains(b'm'));
        assert_eq!(constraints.green(2), Some(b'a'));
        assert!(constraints.yellows_at(4).contains(b'a'));
    }
}
