//! Decision engine
//!
//! Heuristic opener precomputation, the five-action strategy selector, the
//! tabular Q-value store, the policy agent, and the offline trainer.

pub mod agent;
mod heuristics;
mod qtable;
pub mod strategy;
pub mod trainer;

pub use heuristics::{Heuristics, OPENER_LIST_LEN};
pub use qtable::{ActionValues, QTable};
pub use strategy::{Action, pick_word};
pub use trainer::{TrainParams, TrainStats, train};
