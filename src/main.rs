//! Wordle RL bot - CLI
//!
//! Train the tabular policy, replay single games, or benchmark a trained
//! table over many secrets.

use anyhow::Result;
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::PathBuf;
use wordle_rl::{
    commands::{run_benchmark, run_solve, run_train},
    core::Word,
    game::RewardShaping,
    output::{print_benchmark_result, print_solve_result, print_train_summary},
    solver::{Heuristics, QTable, TrainParams},
    wordlists::Lexicon,
};

#[derive(Parser)]
#[command(
    name = "wordle_rl",
    about = "Wordle bot combining heuristic strategies with tabular Q-learning",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Training word list (secret pool and heuristic scoring)
    #[arg(long, global = true, default_value = "data/train_words.txt")]
    train_words: PathBuf,

    /// Allowed word list (guess universe, superset of the training list)
    #[arg(long, global = true, default_value = "data/allowed_words.txt")]
    allowed_words: PathBuf,

    /// Q-table artifact path
    #[arg(short, long, global = true, default_value = "q_table.json")]
    qtable: PathBuf,

    /// Reward shaping: log (default) or flat
    #[arg(short, long, global = true, default_value = "log")]
    reward: String,

    /// RNG seed for reproducible runs (OS entropy if omitted)
    #[arg(short, long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Train the policy table and save it
    Train {
        /// Number of training episodes
        #[arg(short, long, default_value = "200000")]
        episodes: usize,

        /// Learning rate
        #[arg(long, default_value = "0.1")]
        alpha: f64,

        /// Discount factor
        #[arg(long, default_value = "0.1")]
        gamma: f64,

        /// Exploration probability
        #[arg(long, default_value = "0.05")]
        epsilon: f64,
    },

    /// Play one bot game against a given secret
    Solve {
        /// The secret word the bot must find
        word: String,
    },

    /// Evaluate the trained policy over many secrets
    Benchmark {
        /// Number of training-lexicon secrets to play
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let lexicon = Lexicon::load(&cli.train_words, &cli.allowed_words)?;
    let shaping = RewardShaping::from_name(&cli.reward);
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    match cli.command {
        Commands::Train {
            episodes,
            alpha,
            gamma,
            epsilon,
        } => {
            let params = TrainParams {
                episodes,
                alpha,
                gamma,
                epsilon,
                shaping,
            };
            let summary = run_train(&lexicon, &params, &cli.qtable, &mut rng)?;
            print_train_summary(&summary);
            Ok(())
        }
        Commands::Solve { word } => {
            let secret = Word::new(&word)?;
            let table = QTable::load(&cli.qtable)?;
            let result = run_solve(&lexicon, &table, secret, shaping, &mut rng)?;
            print_solve_result(&result);
            Ok(())
        }
        Commands::Benchmark { count } => {
            let table = QTable::load(&cli.qtable)?;
            let heuristics = Heuristics::from_training(lexicon.training());
            let secrets: Vec<Word> = lexicon.training().iter().take(count).copied().collect();
            // Derived from the seeded rng, so --seed makes the whole run
            // reproducible
            let base_seed = rng.random();
            let result = run_benchmark(
                &secrets,
                lexicon.allowed(),
                &table,
                &heuristics,
                shaping,
                base_seed,
            );
            print_benchmark_result(&result);
            Ok(())
        }
    }
}
