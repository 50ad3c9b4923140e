//! Wordle RL bot
//!
//! Simulates the word-guessing game and drives an automated player that
//! picks guesses through a learned tabular policy over five heuristic
//! word-selection strategies. The compressed `(greens, yellows)` feedback
//! pair is the whole policy state, and the action space is the fixed set of
//! strategies — a deliberate design simplification, not an oversight.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_rl::core::{Feedback, Word};
//!
//! let guess = Word::new("trace").unwrap();
//! let secret = Word::new("crane").unwrap();
//!
//! let feedback = Feedback::score(guess, secret);
//! assert_eq!((feedback.greens, feedback.yellows), (3, 1));
//! ```

// Core domain types
pub mod core;

// Per-game state: constraints, environment, sessions
pub mod game;

// Decision engine: heuristics, strategies, Q-table, agent, trainer
pub mod solver;

// Lexicon loading
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
