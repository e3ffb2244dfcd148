//! Lifetime statistics snapshot.

use moviequiz_core::QUESTIONS_PER_GAME;
use serde::{Deserialize, Serialize};

use super::game_result::GameResult;

/// Lifetime counters plus the best round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateStats {
    /// Completed rounds.
    pub games_count: u32,
    /// Correct answers across all rounds.
    pub lifetime_correct: u32,
    /// Questions across all rounds.
    pub lifetime_total: u32,
    /// The best round so far.
    pub best_game: GameResult,
}

impl AggregateStats {
    /// Lifetime accuracy as a percentage of `QUESTIONS_PER_GAME × games_count`.
    ///
    /// Returns `0.0` before the first game.
    #[must_use]
    pub fn total_accuracy(&self) -> f64 {
        if self.games_count == 0 {
            return 0.0;
        }
        f64::from(self.lifetime_correct)
            / (f64::from(QUESTIONS_PER_GAME) * f64::from(self.games_count))
            * 100.0
    }
}
