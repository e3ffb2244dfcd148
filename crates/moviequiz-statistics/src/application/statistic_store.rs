//! The statistics service.
//!
//! Reads and writes the six persisted fields through an injected
//! `KeyValueStore`. Not re-entrant: callers must not overlap
//! `record_game` calls.

use std::sync::Arc;

use moviequiz_core::clock::Clock;
use moviequiz_core::error::QuizError;
use moviequiz_core::storage::{KeyValueStore, StoredValue};
use tracing::info;

use crate::domain::aggregate_stats::AggregateStats;
use crate::domain::game_result::GameResult;
use crate::domain::keys::StatisticKey;

/// Notified after every recorded game.
pub trait StatsSubscriber: Send + Sync {
    /// Called with the statistics as persisted by `record_game`.
    fn did_store(&self, stats: &AggregateStats);
}

/// Persists game counts, lifetime accuracy and the best game.
pub struct StatisticStore {
    storage: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
    subscriber: Option<Arc<dyn StatsSubscriber>>,
}

impl StatisticStore {
    /// Creates a store over `storage`, stamping games with `clock`.
    #[must_use]
    pub fn new(storage: Arc<dyn KeyValueStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            storage,
            clock,
            subscriber: None,
        }
    }

    /// Registers the subscriber notified after each recorded game.
    #[must_use]
    pub fn with_subscriber(mut self, subscriber: Arc<dyn StatsSubscriber>) -> Self {
        self.subscriber = Some(subscriber);
        self
    }

    fn read_count(&self, key: StatisticKey) -> Result<u32, QuizError> {
        let value = self.storage.get(key.as_str())?;
        Ok(value
            .and_then(|v| v.as_int())
            .and_then(|n| u32::try_from(n).ok())
            .unwrap_or(0))
    }

    /// Number of completed rounds; `0` if never written.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Storage` if the store cannot be read.
    pub fn games_count(&self) -> Result<u32, QuizError> {
        self.read_count(StatisticKey::GamesCount)
    }

    /// The best round so far; `0/0` at the current time if never written.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Storage` if the store cannot be read.
    pub fn best_game(&self) -> Result<GameResult, QuizError> {
        let correct = self.read_count(StatisticKey::BestGameCorrect)?;
        let total = self.read_count(StatisticKey::BestGameTotal)?;
        let date = self
            .storage
            .get(StatisticKey::BestGameDate.as_str())?
            .and_then(|v| v.as_timestamp())
            .unwrap_or_else(|| self.clock.now());
        Ok(GameResult::new(correct, total, date))
    }

    /// Reads every persisted field.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Storage` if the store cannot be read.
    pub fn snapshot(&self) -> Result<AggregateStats, QuizError> {
        Ok(AggregateStats {
            games_count: self.games_count()?,
            lifetime_correct: self.read_count(StatisticKey::LifetimeCorrectAnswers)?,
            lifetime_total: self.read_count(StatisticKey::LifetimeTotalAnswers)?,
            best_game: self.best_game()?,
        })
    }

    /// Lifetime accuracy percentage; `0.0` before the first game.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Storage` if the store cannot be read.
    pub fn total_accuracy(&self) -> Result<f64, QuizError> {
        Ok(self.snapshot()?.total_accuracy())
    }

    /// Records a finished round and returns the updated statistics.
    ///
    /// The best game is replaced only by a strictly better ratio; ties keep
    /// the earlier record. All six fields are written in one batch.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Storage` if the store cannot be read or the batch
    /// cannot be written. Nothing is persisted in that case.
    pub fn record_game(&self, correct: u32, total: u32) -> Result<AggregateStats, QuizError> {
        let previous = self.snapshot()?;
        let current = GameResult::new(correct, total, self.clock.now());

        let is_new_record = current.is_better_than(&previous.best_game);
        let updated = AggregateStats {
            games_count: previous.games_count.saturating_add(1),
            lifetime_correct: previous.lifetime_correct.saturating_add(correct),
            lifetime_total: previous.lifetime_total.saturating_add(total),
            best_game: if is_new_record {
                current
            } else {
                previous.best_game
            },
        };

        self.storage.set_all(&[
            (
                StatisticKey::GamesCount.as_str(),
                StoredValue::Int(i64::from(updated.games_count)),
            ),
            (
                StatisticKey::BestGameCorrect.as_str(),
                StoredValue::Int(i64::from(updated.best_game.correct)),
            ),
            (
                StatisticKey::BestGameTotal.as_str(),
                StoredValue::Int(i64::from(updated.best_game.total)),
            ),
            (
                StatisticKey::BestGameDate.as_str(),
                StoredValue::Timestamp(updated.best_game.date),
            ),
            (
                StatisticKey::LifetimeCorrectAnswers.as_str(),
                StoredValue::Int(i64::from(updated.lifetime_correct)),
            ),
            (
                StatisticKey::LifetimeTotalAnswers.as_str(),
                StoredValue::Int(i64::from(updated.lifetime_total)),
            ),
        ])?;

        info!(
            correct,
            total,
            games_count = updated.games_count,
            is_new_record,
            "game recorded"
        );

        if let Some(subscriber) = &self.subscriber {
            subscriber.did_store(&updated);
        }

        Ok(updated)
    }
}

impl std::fmt::Debug for StatisticStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatisticStore")
            .field("has_subscriber", &self.subscriber.is_some())
            .finish_non_exhaustive()
    }
}
