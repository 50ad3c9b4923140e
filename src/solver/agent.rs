//! Policy agent
//!
//! Action selection over the Q-table: deterministic greedy argmax for
//! inference, epsilon-greedy for training. Pure functions — the agent holds
//! no state of its own.

use super::{Action, QTable};
use crate::core::Feedback;
use rand::Rng;

/// Greedy argmax over the action values for `state`
///
/// Unseen states read as all-zero vectors, so the result is always defined.
/// Ties break toward the lowest action index in `Action::ALL`, which makes
/// inference fully deterministic.
#[must_use]
pub fn greedy(table: &QTable, state: Feedback) -> Action {
    let values = table.action_values(state);

    let mut best = Action::ALL[0];
    let mut best_value = values[0];
    for action in &Action::ALL[1..] {
        // Strict comparison keeps the lowest index among ties
        if values[action.index()] > best_value {
            best = *action;
            best_value = values[action.index()];
        }
    }
    best
}

/// Epsilon-greedy selection for training
///
/// With probability `epsilon`, a uniformly random action; otherwise the same
/// greedy argmax as inference.
pub fn epsilon_greedy(
    table: &QTable,
    state: Feedback,
    epsilon: f64,
    rng: &mut impl Rng,
) -> Action {
    if rng.random::<f64>() < epsilon {
        Action::from_index(rng.random_range(0..Action::COUNT))
    } else {
        greedy(table, state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn state(greens: u8, yellows: u8) -> Feedback {
        Feedback { greens, yellows }
    }

    #[test]
    fn unseen_state_selects_first_action() {
        let table = QTable::new();
        assert_eq!(greedy(&table, state(4, 1)), Action::Random);
    }

    #[test]
    fn greedy_selects_highest_value() {
        let mut table = QTable::new();
        table.action_values_mut(state(1, 2))[Action::Exclude.index()] = 7.0;
        table.action_values_mut(state(1, 2))[Action::Smart.index()] = 3.0;

        assert_eq!(greedy(&table, state(1, 2)), Action::Exclude);
    }

    #[test]
    fn greedy_is_deterministic() {
        let mut table = QTable::new();
        table.action_values_mut(state(2, 0))[Action::Probs2.index()] = 1.5;

        let first = greedy(&table, state(2, 0));
        for _ in 0..10 {
            assert_eq!(greedy(&table, state(2, 0)), first);
        }
    }

    #[test]
    fn ties_break_to_lowest_index() {
        let mut table = QTable::new();
        let values = table.action_values_mut(state(0, 3));
        values[Action::Probs1.index()] = 2.0;
        values[Action::Smart.index()] = 2.0;

        assert_eq!(greedy(&table, state(0, 3)), Action::Probs1);
    }

    #[test]
    fn epsilon_zero_matches_greedy() {
        let mut table = QTable::new();
        table.action_values_mut(state(1, 1))[Action::Smart.index()] = 5.0;
        let mut rng = StdRng::seed_from_u64(9);

        for _ in 0..50 {
            assert_eq!(
                epsilon_greedy(&table, state(1, 1), 0.0, &mut rng),
                Action::Smart
            );
        }
    }

    #[test]
    fn epsilon_one_explores_every_action() {
        let table = QTable::new();
        let mut rng = StdRng::seed_from_u64(11);

        let mut seen = [false; Action::COUNT];
        for _ in 0..200 {
            let action = epsilon_greedy(&table, state(0, 0), 1.0, &mut rng);
            seen[action.index()] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
