//! Train command
//!
//! Runs the offline Q-learning loop and writes the policy artifact.

use crate::solver::{Heuristics, TrainParams, TrainStats, train};
use crate::wordlists::Lexicon;
use rand::Rng;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Result of a training run
pub struct TrainSummary {
    pub stats: TrainStats,
    pub states_visited: usize,
    pub output_path: PathBuf,
    pub duration: Duration,
}

/// Train a policy table and persist it to `output_path`
///
/// # Errors
/// Returns an error if the Q-table cannot be written.
pub fn run_train(
    lexicon: &Lexicon,
    params: &TrainParams,
    output_path: &Path,
    rng: &mut impl Rng,
) -> anyhow::Result<TrainSummary> {
    let heuristics = Heuristics::from_training(lexicon.training());

    let start = Instant::now();
    let (table, stats) = train(
        lexicon.training(),
        lexicon.allowed(),
        &heuristics,
        params,
        rng,
    );
    let duration = start.elapsed();

    table.save(output_path)?;

    Ok(TrainSummary {
        stats,
        states_visited: table.len(),
        output_path: output_path.to_path_buf(),
        duration,
    })
}
