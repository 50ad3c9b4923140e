//! Terminal output formatting

use crate::commands::{BenchmarkResult, SolveResult, TrainSummary};
use colored::Colorize;

/// Print the summary of a training run
pub fn print_train_summary(summary: &TrainSummary) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "TRAINING COMPLETE".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Run:".bright_cyan().bold());
    println!("   Episodes:        {}", summary.stats.episodes);
    println!(
        "   Win rate:        {}",
        format!("{:.1}%", summary.stats.win_rate() * 100.0)
            .bright_yellow()
            .bold()
    );
    println!("   Mean reward:     {:.2}", summary.stats.mean_reward);
    println!("   States visited:  {}", summary.states_visited);
    println!("   Time taken:      {:.2}s", summary.duration.as_secs_f64());
    println!(
        "   Saved to:        {}",
        summary.output_path.display().to_string().green()
    );
}

/// Print a bot game transcript
pub fn print_solve_result(result: &SolveResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Secret: {}",
        result.secret.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, turn) in result.turns.iter().enumerate() {
        println!(
            "Turn {}: {} [{}] {} (reward {:+.1})",
            i + 1,
            turn.guess.text().to_uppercase(),
            turn.action.name().bright_blue(),
            feedback_squares(turn.feedback.greens, turn.feedback.yellows),
            turn.reward
        );
    }

    println!();
    if result.won {
        println!(
            "{}",
            format!("✅ Won in {} turns!", result.turns.len())
                .green()
                .bold()
        );
    } else {
        println!("{}", "❌ Lost after 6 turns".red().bold());
    }
    println!("Total reward: {:.1}", result.total_reward);
}

/// Print aggregated benchmark results
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.total_games);
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", result.win_rate() * 100.0)
            .bright_yellow()
            .bold()
    );
    println!("   Mean turns (won): {:.2}", result.mean_turns_on_win);
    println!("   Mean reward:      {:.2}", result.mean_reward);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    println!("\n📈 {}", "Turn distribution:".bright_cyan().bold());
    for turns in 1..=6 {
        if let Some(&count) = result.turn_distribution.get(&turns) {
            let pct = (count as f64 / result.total_games as f64) * 100.0;
            let bar_width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░".repeat(40_usize.saturating_sub(bar_width)).bright_black()
            );
            println!("   {turns}: {bar} {count:4} ({pct:5.1}%)");
        }
    }
}

/// Compact green/yellow square rendering for a feedback pair
fn feedback_squares(greens: u8, yellows: u8) -> String {
    let mut squares = String::new();
    for _ in 0..greens {
        squares.push('🟩');
    }
    for _ in 0..yellows {
        squares.push('🟨');
    }
    for _ in 0..(5 - greens - yellows) {
        squares.push('⬜');
    }
    squares
}
