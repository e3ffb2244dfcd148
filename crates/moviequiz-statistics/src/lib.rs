//! MovieQuiz — statistics.
//!
//! Keeps the lifetime game counters and the best-game record in a
//! key-value store, using the same six keys as earlier releases so existing
//! statistics carry over.

pub mod application;
pub mod domain;

pub use application::json_file_store::JsonFileStore;
pub use application::statistic_store::{StatisticStore, StatsSubscriber};
pub use domain::aggregate_stats::AggregateStats;
pub use domain::game_result::GameResult;
