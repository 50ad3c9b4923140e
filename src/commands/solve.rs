//! Solve command
//!
//! Plays one greedy bot game against a given secret and records the
//! turn-by-turn transcript.

use crate::core::{Feedback, Word};
use crate::game::{GameError, GameSession, RewardShaping};
use crate::solver::{Action, Heuristics, QTable};
use crate::wordlists::Lexicon;
use rand::Rng;

/// One bot turn in the transcript
pub struct TurnRecord {
    pub action: Action,
    pub guess: Word,
    pub feedback: Feedback,
    pub reward: f64,
}

/// Full transcript of one bot game
pub struct SolveResult {
    pub secret: Word,
    pub turns: Vec<TurnRecord>,
    pub won: bool,
    pub total_reward: f64,
}

/// Let the trained bot play out the game for `secret`
///
/// # Errors
/// Returns an error if the secret is not in the allowed lexicon.
pub fn run_solve(
    lexicon: &Lexicon,
    table: &QTable,
    secret: Word,
    shaping: RewardShaping,
    rng: &mut impl Rng,
) -> Result<SolveResult, GameError> {
    let heuristics = Heuristics::from_training(lexicon.training());
    let mut session = GameSession::start(
        lexicon.training(),
        lexicon.allowed(),
        Some(secret),
        shaping,
        rng,
    )?;

    let mut turns = Vec::new();
    let mut total_reward = 0.0;
    let mut won = false;

    while !session.is_over() {
        let bot_move = session.bot_move(table, &heuristics, rng)?;
        total_reward += bot_move.outcome.reward;
        won = bot_move.outcome.feedback.is_win();
        turns.push(TurnRecord {
            action: bot_move.action,
            guess: bot_move.guess,
            feedback: bot_move.outcome.feedback,
            reward: bot_move.outcome.reward,
        });
    }

    Ok(SolveResult {
        secret,
        turns,
        won,
        total_reward,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(t).unwrap()).collect()
    }

    #[test]
    fn solve_plays_at_most_six_turns() {
        let lexicon = Lexicon::from_words(
            words(&["crane", "slate"]),
            words(&["crane", "slate", "trace", "moist", "stale", "pudgy", "whelk"]),
        );
        let table = QTable::new();
        let mut rng = StdRng::seed_from_u64(33);

        let result = run_solve(
            &lexicon,
            &table,
            Word::new("crane").unwrap(),
            RewardShaping::LogBonus,
            &mut rng,
        )
        .unwrap();

        assert!(!result.turns.is_empty());
        assert!(result.turns.len() <= 6);
        if result.won {
            assert_eq!(result.turns.last().unwrap().feedback, Feedback::PERFECT);
        }
    }

    #[test]
    fn solve_rejects_unknown_secret() {
        let lexicon = Lexicon::from_words(words(&["crane"]), words(&["crane", "trace"]));
        let table = QTable::new();
        let mut rng = StdRng::seed_from_u64(34);

        let result = run_solve(
            &lexicon,
            &table,
            Word::new("zzzzz").unwrap(),
            RewardShaping::LogBonus,
            &mut rng,
        );
        assert!(result.is_err());
    }
}
