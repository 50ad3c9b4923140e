//! Core domain types
//!
//! Word values, letter sets, and feedback scoring.

mod feedback;
mod letters;
mod word;

pub use feedback::Feedback;
pub use letters::LetterSet;
pub use word::{Word, WordError};

/// Length every lexicon entry and guess must have
pub const WORD_LEN: usize = 5;

/// Number of turns a game lasts before it is lost
pub const MAX_TURNS: u8 = 6;
