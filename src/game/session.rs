//! One playable game
//!
//! `GameSession` composes an environment with the per-game candidate pool
//! and turn index, the way a serving layer would hold one entry per active
//! game id. It validates user input against the allowed lexicon; the bot
//! path draws from the pool and can never produce an invalid guess.

use super::{ConstraintSet, GameEnv, RewardShaping, StepOutcome};
use crate::core::{Feedback, Word};
use crate::solver::{Action, Heuristics, QTable, agent, pick_word};
use rand::Rng;
use std::fmt;

/// Errors surfaced to the session layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Caller-supplied secret is not in the allowed lexicon
    InvalidSecret(Word),
    /// Guess is not in the allowed lexicon
    InvalidGuess(Word),
    /// The game already ended
    GameOver,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSecret(word) => write!(f, "secret '{word}' is not an allowed word"),
            Self::InvalidGuess(word) => write!(f, "guess '{word}' is not an allowed word"),
            Self::GameOver => write!(f, "game is already over"),
        }
    }
}

impl std::error::Error for GameError {}

/// A bot turn: which action the policy chose and what it played
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BotMove {
    pub action: Action,
    pub guess: Word,
    pub outcome: StepOutcome,
}

/// One game plus its candidate pool
#[derive(Debug, Clone)]
pub struct GameSession<'a> {
    env: GameEnv,
    allowed: &'a [Word],
    remaining: Vec<Word>,
    turn_index: usize,
}

impl<'a> GameSession<'a> {
    /// Start a game
    ///
    /// A supplied secret must be in the allowed lexicon; with none, one is
    /// drawn uniformly from `answers`.
    ///
    /// # Errors
    /// Returns `GameError::InvalidSecret` for a secret outside `allowed`.
    ///
    /// # Panics
    /// Panics if `answers` is empty and no secret is supplied.
    pub fn start(
        answers: &[Word],
        allowed: &'a [Word],
        secret: Option<Word>,
        shaping: RewardShaping,
        rng: &mut impl Rng,
    ) -> Result<Self, GameError> {
        let env = match secret {
            Some(word) => {
                if !allowed.contains(&word) {
                    return Err(GameError::InvalidSecret(word));
                }
                GameEnv::new(word, shaping)
            }
            None => GameEnv::with_random_secret(answers, shaping, rng),
        };

        Ok(Self {
            env,
            allowed,
            remaining: allowed.to_vec(),
            turn_index: 0,
        })
    }

    /// Play a user-supplied guess
    ///
    /// # Errors
    /// Returns `GameError::InvalidGuess` for a word outside the allowed
    /// lexicon and `GameError::GameOver` once the game has ended.
    pub fn guess(&mut self, guess: Word) -> Result<StepOutcome, GameError> {
        if self.env.is_over() {
            return Err(GameError::GameOver);
        }
        if !self.allowed.contains(&guess) {
            return Err(GameError::InvalidGuess(guess));
        }
        Ok(self.play(guess))
    }

    /// Play one bot turn
    ///
    /// Greedy action from the current feedback state, resolved to a word by
    /// the strategy selector over this game's remaining pool.
    ///
    /// # Errors
    /// Returns `GameError::GameOver` once the game has ended.
    pub fn bot_move(
        &mut self,
        table: &QTable,
        heuristics: &Heuristics,
        rng: &mut impl Rng,
    ) -> Result<BotMove, GameError> {
        if self.env.is_over() {
            return Err(GameError::GameOver);
        }

        let action = agent::greedy(table, self.env.feedback());
        let guess = pick_word(
            action,
            self.turn_index,
            &self.remaining,
            self.env.constraints(),
            heuristics,
            rng,
        );
        let outcome = self.play(guess);

        Ok(BotMove {
            action,
            guess,
            outcome,
        })
    }

    fn play(&mut self, guess: Word) -> StepOutcome {
        if let Some(position) = self.remaining.iter().position(|w| *w == guess) {
            self.remaining.remove(position);
        }
        self.turn_index += 1;
        self.env.step(guess)
    }

    /// Feedback from the latest turn
    #[must_use]
    pub const fn feedback(&self) -> Feedback {
        self.env.feedback()
    }

    #[must_use]
    pub const fn constraints(&self) -> &ConstraintSet {
        self.env.constraints()
    }

    /// Guesses played so far
    #[must_use]
    pub const fn turn_index(&self) -> usize {
        self.turn_index
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.env.is_over()
    }

    /// The underlying environment (read-only)
    #[must_use]
    pub const fn env(&self) -> &GameEnv {
        &self.env
    }
}
