//! Tabular action-value store
//!
//! Maps a `Feedback` state to one expected-return value per action. States
//! appear on first visit during training; reads of unseen states yield a
//! zero vector, never an error. Persisted as a JSON array of entries.

use super::Action;
use crate::core::Feedback;
use anyhow::Context;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One action-value vector
pub type ActionValues = [f64; Action::COUNT];

/// State → action-value mapping learned by the trainer
#[derive(Debug, Clone, Default)]
pub struct QTable {
    values: FxHashMap<Feedback, ActionValues>,
}

/// On-disk representation: one entry per visited state
#[derive(Serialize, Deserialize)]
struct QEntry {
    state: Feedback,
    values: ActionValues,
}

impl QTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Action values for `state`, zero vector if unseen
    #[must_use]
    pub fn action_values(&self, state: Feedback) -> ActionValues {
        self.values
            .get(&state)
            .copied()
            .unwrap_or([0.0; Action::COUNT])
    }

    /// Mutable action values for `state`, inserting a zero vector on first
    /// visit
    pub fn action_values_mut(&mut self, state: Feedback) -> &mut ActionValues {
        self.values.entry(state).or_insert([0.0; Action::COUNT])
    }

    /// Largest action value for `state` (0 for unseen states)
    #[must_use]
    pub fn max_value(&self, state: Feedback) -> f64 {
        self.action_values(state)
            .into_iter()
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Number of states visited
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate visited states and their value vectors
    pub fn entries(&self) -> impl Iterator<Item = (Feedback, &ActionValues)> {
        self.values.iter().map(|(state, values)| (*state, values))
    }

    /// Write the table to `path` as JSON
    ///
    /// Entries are sorted by state so the artifact is byte-stable across runs
    /// with identical contents.
    ///
    /// # Errors
    /// Returns an error if the file cannot be written.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let mut entries: Vec<QEntry> = self
            .values
            .iter()
            .map(|(state, values)| QEntry {
                state: *state,
                values: *values,
            })
            .collect();
        entries.sort_by_key(|entry| entry.state);

        let json = serde_json::to_string_pretty(&entries)?;
        fs::write(path.as_ref(), json)
            .with_context(|| format!("writing Q-table to {}", path.as_ref().display()))
    }

    /// Load a table previously written by [`QTable::save`]
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let json = fs::read_to_string(path.as_ref())
            .with_context(|| format!("reading Q-table from {}", path.as_ref().display()))?;
        let entries: Vec<QEntry> = serde_json::from_str(&json).context("parsing Q-table JSON")?;

        let mut table = Self::new();
        for entry in entries {
            *table.action_values_mut(entry.state) = entry.values;
        }
        Ok(table)
    }
}
