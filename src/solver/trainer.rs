//! Offline Q-learning trainer
//!
//! Runs independent episodes against the game environment and folds each
//! transition into the Q-table with a one-step temporal-difference update.
//! Updates are serialized on a single thread; the parallel path in this
//! crate is evaluation, where the finished table is read-only.

use super::{Heuristics, QTable, agent, strategy};
use crate::core::Word;
use crate::game::{GameEnv, RewardShaping};
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;

/// Hyperparameters for one training run
///
/// All scalars are fixed for the whole run; there is no decay schedule.
#[derive(Debug, Clone, Copy)]
pub struct TrainParams {
    pub episodes: usize,
    /// Learning rate
    pub alpha: f64,
    /// Discount factor
    pub gamma: f64,
    /// Exploration probability
    pub epsilon: f64,
    pub shaping: RewardShaping,
}

impl Default for TrainParams {
    fn default() -> Self {
        Self {
            episodes: 200_000,
            alpha: 0.1,
            gamma: 0.1,
            epsilon: 0.05,
            shaping: RewardShaping::LogBonus,
        }
    }
}

/// Aggregate statistics for a finished run
#[derive(Debug, Clone, Copy)]
pub struct TrainStats {
    pub episodes: usize,
    pub wins: usize,
    pub mean_reward: f64,
}

impl TrainStats {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.episodes == 0 {
            0.0
        } else {
            self.wins as f64 / self.episodes as f64
        }
    }
}

/// Window size for the progress-bar statistics
const REPORT_EVERY: usize = 500;

/// Run the full training loop and return the learned table
///
/// Each episode draws a secret from `train_words` and plays with a private
/// candidate pool initialized to the entire `allowed` list. The pool shrinks
/// only by removing attempted guesses; constraint filtering happens inside
/// the individual strategies.
///
/// # Panics
/// Panics if either lexicon is empty.
pub fn train(
    train_words: &[Word],
    allowed: &[Word],
    heuristics: &Heuristics,
    params: &TrainParams,
    rng: &mut impl Rng,
) -> (QTable, TrainStats) {
    assert!(!train_words.is_empty(), "training lexicon is empty");
    assert!(!allowed.is_empty(), "allowed lexicon is empty");

    let mut table = QTable::new();
    let mut total_wins = 0;
    let mut total_reward = 0.0;

    let progress = ProgressBar::new(params.episodes as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .expect("static template is valid")
            .progress_chars("█▓▒░"),
    );

    let mut window_wins = 0;
    let mut window_reward = 0.0;

    for episode in 1..=params.episodes {
        let (won, episode_reward) =
            run_episode(train_words, allowed, heuristics, params, &mut table, rng);

        total_wins += usize::from(won);
        total_reward += episode_reward;
        window_wins += usize::from(won);
        window_reward += episode_reward;

        if episode % REPORT_EVERY == 0 {
            let win_rate = window_wins as f64 / REPORT_EVERY as f64 * 100.0;
            let mean_reward = window_reward / REPORT_EVERY as f64;
            progress.set_message(format!(
                "win rate {win_rate:.1}% | mean reward {mean_reward:.1}"
            ));
            window_wins = 0;
            window_reward = 0.0;
        }
        progress.inc(1);
    }
    progress.finish_and_clear();

    let stats = TrainStats {
        episodes: params.episodes,
        wins: total_wins,
        mean_reward: total_reward / params.episodes.max(1) as f64,
    };
    (table, stats)
}

/// Play one episode, applying TD updates along the way
///
/// Returns whether the episode was won and its accumulated reward.
fn run_episode(
    train_words: &[Word],
    allowed: &[Word],
    heuristics: &Heuristics,
    params: &TrainParams,
    table: &mut QTable,
    rng: &mut impl Rng,
) -> (bool, f64) {
    let mut env = GameEnv::with_random_secret(train_words, params.shaping, rng);
    let mut pool: Vec<Word> = allowed.to_vec();
    let mut turn_index = 0;
    let mut episode_reward = 0.0;
    let mut won = false;

    loop {
        let state = env.feedback();
        let action = agent::epsilon_greedy(table, state, params.epsilon, rng);
        let guess = strategy::pick_word(
            action,
            turn_index,
            &pool,
            env.constraints(),
            heuristics,
            rng,
        );
        // Order-preserving removal: pool order is the smart tie-break
        if let Some(position) = pool.iter().position(|w| *w == guess) {
            pool.remove(position);
        }

        let outcome = env.step(guess);
        episode_reward += outcome.reward;

        let next_max = if outcome.done {
            0.0
        } else {
            table.max_value(outcome.feedback)
        };
        let values = table.action_values_mut(state);
        let index = action.index();
        values[index] +=
            params.alpha * (outcome.reward + params.gamma * next_max - values[index]);

        turn_index += 1;
        if outcome.done {
            won = outcome.feedback.is_win();
            break;
        }
    }

    (won, episode_reward)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Feedback;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(t).unwrap()).collect()
    }

    #[test]
    fn training_populates_the_table() {
        let train = words(&["crane", "slate"]);
        let allowed = words(&["crane", "slate", "moist", "trace", "stale"]);
        let heuristics = Heuristics::from_training(&train);
        let params = TrainParams {
            episodes: 300,
            ..TrainParams::default()
        };
        let mut rng = StdRng::seed_from_u64(3);

        let (table, stats) = super::train(&train, &allowed, &heuristics, &params, &mut rng);

        assert!(!table.is_empty());
        // Every episode starts from the (0, 0) state
        assert!(
            table
                .action_values(Feedback::default())
                .iter()
                .any(|v| v.abs() > f64::EPSILON)
        );
        assert_eq!(stats.episodes, 300);
    }

    #[test]
    fn tiny_lexicon_trains_to_frequent_wins() {
        // With two possible secrets and six turns, almost every episode is
        // winnable; a short run should already win most of them.
        let train = words(&["crane", "slate"]);
        let allowed = words(&["crane", "slate", "moist"]);
        let heuristics = Heuristics::from_training(&train);
        let params = TrainParams {
            episodes: 500,
            ..TrainParams::default()
        };
        let mut rng = StdRng::seed_from_u64(5);

        let (_, stats) = super::train(&train, &allowed, &heuristics, &params, &mut rng);

        assert!(stats.win_rate() > 0.5, "win rate {}", stats.win_rate());
    }

    #[test]
    fn visited_states_are_valid_feedback_pairs() {
        let train = words(&["crane", "slate", "moist"]);
        let allowed = words(&["crane", "slate", "moist", "trace", "stale", "pudgy"]);
        let heuristics = Heuristics::from_training(&train);
        let params = TrainParams {
            episodes: 200,
            ..TrainParams::default()
        };
        let mut rng = StdRng::seed_from_u64(13);

        let (table, _) = super::train(&train, &allowed, &heuristics, &params, &mut rng);

        for (state, _) in table.entries() {
            assert!(state.greens <= 5);
            assert!(state.greens + state.yellows <= 5);
        }
    }

    #[test]
    fn default_hyperparameters() {
        let params = TrainParams::default();
        assert_eq!(params.episodes, 200_000);
        assert!((params.alpha - 0.1).abs() < f64::EPSILON);
        assert!((params.gamma - 0.1).abs() < f64::EPSILON);
        assert!((params.epsilon - 0.05).abs() < f64::EPSILON);
    }
}
