//! Per-game state
//!
//! Accumulated constraints, the turn/reward state machine, and the session
//! wrapper that composes them with a candidate pool.

mod constraints;
mod env;
mod session;

pub use constraints::ConstraintSet;
pub use env::{GameEnv, GameStatus, RewardShaping, StepOutcome};
pub use session::{BotMove, GameError, GameSession};
