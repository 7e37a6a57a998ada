//! Local best-score tracking for the terminal driver
//!
//! Persisted as JSON in the working directory; a missing or corrupt
//! file falls back to an empty table.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single high score entry
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Final episode score
    pub score: u64,
    /// Seed of the run, enough to replay it
    pub seed: u64,
}

/// High score table, sorted best first
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    const FILE_NAME: &'static str = "dino_dash_scores.json";

    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a score qualifies for the table.
    pub fn qualifies(&self, score: u64) -> bool {
        if score == 0 {
            return false;
        }
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        self.entries.last().is_some_and(|e| score > e.score)
    }

    /// Insert a score, keeping the table sorted and truncated. Returns the
    /// 1-indexed rank when the score made the table.
    pub fn add(&mut self, score: u64, seed: u64) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }
        let rank = self
            .entries
            .iter()
            .position(|e| score > e.score)
            .unwrap_or(self.entries.len());
        self.entries.insert(rank, HighScoreEntry { score, seed });
        self.entries.truncate(MAX_HIGH_SCORES);
        Some(rank + 1)
    }

    /// Best score on record.
    pub fn best(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }

    /// Load the table, falling back to an empty one on any error.
    pub fn load() -> Self {
        match fs::read_to_string(Self::FILE_NAME) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(scores) => scores,
                Err(err) => {
                    log::warn!("ignoring corrupt high-score file: {err}");
                    Self::new()
                }
            },
            Err(_) => Self::new(),
        }
    }

    /// Persist the table; failures are logged, never fatal.
    pub fn save(&self) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(err) = fs::write(Path::new(Self::FILE_NAME), json) {
                    log::warn!("could not save high scores: {err}");
                }
            }
            Err(err) => log::warn!("could not serialize high scores: {err}"),
        }
    }
}
