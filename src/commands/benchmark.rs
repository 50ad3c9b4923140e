//! Benchmark command
//!
//! Plays many greedy games in parallel against a read-only Q-table and
//! aggregates win rate, turn distribution, and reward.

use crate::core::Word;
use crate::game::{GameEnv, RewardShaping};
use crate::solver::{Heuristics, QTable, agent, pick_word};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Aggregated results of a benchmark run
pub struct BenchmarkResult {
    pub total_games: usize,
    pub wins: usize,
    pub mean_turns_on_win: f64,
    pub mean_reward: f64,
    /// Turns taken → number of games (losses bucket under 6)
    pub turn_distribution: FxHashMap<usize, usize>,
    pub duration: Duration,
    pub games_per_second: f64,
}

impl BenchmarkResult {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.wins as f64 / self.total_games as f64
        }
    }
}

/// Play one greedy game and report (won, turns, reward)
fn play_game(
    secret: Word,
    allowed: &[Word],
    table: &QTable,
    heuristics: &Heuristics,
    shaping: RewardShaping,
    rng: &mut impl Rng,
) -> (bool, usize, f64) {
    let mut env = GameEnv::new(secret, shaping);
    let mut pool: Vec<Word> = allowed.to_vec();
    let mut turn_index = 0;
    let mut total_reward = 0.0;

    loop {
        let action = agent::greedy(table, env.feedback());
        let guess = pick_word(
            action,
            turn_index,
            &pool,
            env.constraints(),
            heuristics,
            rng,
        );
        if let Some(position) = pool.iter().position(|w| *w == guess) {
            pool.remove(position);
        }

        let outcome = env.step(guess);
        total_reward += outcome.reward;
        turn_index += 1;

        if outcome.done {
            return (outcome.feedback.is_win(), turn_index, total_reward);
        }
    }
}

/// Evaluate the trained policy over `secrets`
///
/// Games are independent, so they run on the rayon pool; the Q-table is
/// shared read-only and each game gets its own rng derived from `base_seed`
/// and its position, so a run is reproducible regardless of how rayon
/// schedules the games.
#[must_use]
pub fn run_benchmark(
    secrets: &[Word],
    allowed: &[Word],
    table: &QTable,
    heuristics: &Heuristics,
    shaping: RewardShaping,
    base_seed: u64,
) -> BenchmarkResult {
    let start = Instant::now();

    let games: Vec<(bool, usize, f64)> = secrets
        .par_iter()
        .enumerate()
        .map(|(index, &secret)| {
            let mut rng = StdRng::seed_from_u64(base_seed.wrapping_add(index as u64));
            play_game(secret, allowed, table, heuristics, shaping, &mut rng)
        })
        .collect();

    let duration = start.elapsed();
    let total_games = games.len();
    let wins = games.iter().filter(|(won, _, _)| *won).count();
    let winning_turns: usize = games
        .iter()
        .filter(|(won, _, _)| *won)
        .map(|(_, turns, _)| turns)
        .sum();
    let total_reward: f64 = games.iter().map(|(_, _, reward)| reward).sum();

    let mut turn_distribution: FxHashMap<usize, usize> = FxHashMap::default();
    for (_, turns, _) in &games {
        *turn_distribution.entry(*turns).or_insert(0) += 1;
    }

    BenchmarkResult {
        total_games,
        wins,
        mean_turns_on_win: if wins == 0 {
            0.0
        } else {
            winning_turns as f64 / wins as f64
        },
        mean_reward: if total_games == 0 {
            0.0
        } else {
            total_reward / total_games as f64
        },
        turn_distribution,
        duration,
        games_per_second: total_games as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
