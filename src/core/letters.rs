//! Compact set of lowercase letters
//!
//! Stored as a 26-bit mask, one bit per letter of the alphabet.

/// A set of letters `a..=z`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// Add a letter to the set
    ///
    /// # Panics
    /// Panics in debug mode if `letter` is not lowercase ASCII.
    #[inline]
    pub const fn insert(&mut self, letter: u8) {
        debug_assert!(letter.is_ascii_lowercase());
        self.0 |= 1 << (letter - b'a');
    }

    /// Check membership
    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        letter.is_ascii_lowercase() && self.0 & (1 << (letter - b'a')) != 0
    }

    /// True if the two sets share any letter
    #[inline]
    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Number of letters in the set
    #[inline]
    #[must_use]
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    /// True if no letters are present
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate the letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (b'a'..=b'z').filter(move |&letter| self.contains(letter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_contains() {
        let mut set = LetterSet::default();
        assert!(set.is_empty());

        set.insert(b'a');
        set.insert(b'z');
        assert!(set.contains(b'a'));
        assert!(set.contains(b'z'));
        assert!(!set.contains(b'm'));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn insert_is_idempotent() {
        let mut set = LetterSet::default();
        set.insert(b'q');
        set.insert(b'q');
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn intersects() {
        let mut a = LetterSet::default();
        a.insert(b'c');
        a.insert(b'r');

        let mut b = LetterSet::default();
        b.insert(b'r');

        let mut c = LetterSet::default();
        c.insert(b'z');

        assert!(a.intersects(b));
        assert!(!a.intersects(c));
        assert!(!a.intersects(LetterSet::EMPTY));
    }

    #[test]
    fn iter_in_alphabetical_order() {
        let mut set = LetterSet::default();
        set.insert(b'e');
        set.insert(b'a');
        set.insert(b'c');

        let letters: Vec<u8> = set.iter().collect();
        assert_eq!(letters, vec![b'a', b'c', b'e']);
    }
}
