//! Game state machine
//!
//! One `GameEnv` owns one game: the hidden secret, the turn counter, the
//! latest feedback, and the accumulated constraints. Each `step` is a
//! deterministic transition; randomness only enters when a secret is drawn.

use super::ConstraintSet;
use crate::core::{Feedback, MAX_TURNS, Word};
use rand::Rng;
use rand::seq::IndexedRandom;

/// Where a game currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Reward formula applied on each step
///
/// Two variants exist in the history of this system; `LogBonus` is the
/// default, `Flat` stays selectable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewardShaping {
    /// `2·greens + yellows`, win bonus `100 − 15·log2(7 − turn)`,
    /// loss penalty `−1000`
    LogBonus,
    /// `5·greens + 2·yellows`, win bonus `+25`, loss penalty `−15`
    Flat,
}

impl RewardShaping {
    /// Resolve a shaping from its CLI name
    ///
    /// Supported names: "log" (default), "flat".
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "flat" => Self::Flat,
            _ => Self::LogBonus,
        }
    }

    /// Reward for a turn that produced `feedback`
    #[must_use]
    pub fn reward(self, feedback: Feedback, turn: u8, won: bool, lost: bool) -> f64 {
        match self {
            Self::LogBonus => {
                let mut reward = 2.0 * f64::from(feedback.greens) + f64::from(feedback.yellows);
                if won {
                    reward += 100.0 - 15.0 * f64::from(7 - turn).log2();
                } else if lost {
                    reward -= 1000.0;
                }
                reward
            }
            Self::Flat => {
                let mut reward = 5.0 * f64::from(feedback.greens) + 2.0 * f64::from(feedback.yellows);
                if won {
                    reward += 25.0;
                } else if lost {
                    reward -= 15.0;
                }
                reward
            }
        }
    }
}

/// Result of one `GameEnv::step`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepOutcome {
    pub feedback: Feedback,
    pub reward: f64,
    pub done: bool,
    /// Revealed only once the game is over
    pub secret: Option<Word>,
}

/// Per-game state machine
///
/// Single-owner and single-threaded; the session layer that created it is
/// responsible for its lifetime.
#[derive(Debug, Clone)]
pub struct GameEnv {
    secret: Word,
    turn: u8,
    status: GameStatus,
    feedback: Feedback,
    constraints: ConstraintSet,
    shaping: RewardShaping,
}

impl GameEnv {
    /// Start a game with a known secret
    ///
    /// The secret is not validated here; membership in the allowed lexicon is
    /// the caller's contract.
    #[must_use]
    pub fn new(secret: Word, shaping: RewardShaping) -> Self {
        Self {
            secret,
            turn: 0,
            status: GameStatus::InProgress,
            feedback: Feedback::default(),
            constraints: ConstraintSet::new(),
            shaping,
        }
    }

    /// Start a game with a secret drawn uniformly from `answers`
    ///
    /// # Panics
    /// Panics if `answers` is empty.
    #[must_use]
    pub fn with_random_secret(
        answers: &[Word],
        shaping: RewardShaping,
        rng: &mut impl Rng,
    ) -> Self {
        let secret = *answers.choose(rng).expect("answer lexicon is empty");
        Self::new(secret, shaping)
    }

    /// Play one guess
    ///
    /// Increments the turn, scores feedback, computes the shaped reward,
    /// folds the evidence into the constraints, and resolves termination:
    /// won on an exact match, lost when turn 6 passes without one.
    ///
    /// # Panics
    /// Panics in debug mode if called on a finished game.
    pub fn step(&mut self, guess: Word) -> StepOutcome {
        debug_assert!(
            self.status == GameStatus::InProgress,
            "step on a finished game"
        );

        self.turn += 1;
        let feedback = Feedback::score(guess, self.secret);

        let won = guess == self.secret;
        let lost = !won && self.turn == MAX_TURNS;
        if won {
            self.status = GameStatus::Won;
        } else if lost {
            self.status = GameStatus::Lost;
        }

        let reward = self.shaping.reward(feedback, self.turn, won, lost);

        self.constraints.update(guess, self.secret);
        self.feedback = feedback;

        let done = won || lost;
        StepOutcome {
            feedback,
            reward,
            done,
            secret: done.then_some(self.secret),
        }
    }

    /// The hidden secret; session layers must not expose it before the end
    #[inline]
    #[must_use]
    pub const fn secret(&self) -> Word {
        self.secret
    }

    /// Turns played so far (0..=6)
    #[inline]
    #[must_use]
    pub const fn turn(&self) -> u8 {
        self.turn
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Feedback from the latest guess, `(0, 0)` before the first
    #[inline]
    #[must_use]
    pub const fn feedback(&self) -> Feedback {
        self.feedback
    }

    #[inline]
    #[must_use]
    pub const fn constraints(&self) -> &ConstraintSet {
        &self.constraints
    }

    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        !matches!(self.status, GameStatus::InProgress)
    }
}
