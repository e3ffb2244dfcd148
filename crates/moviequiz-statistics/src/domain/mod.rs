//! Domain types for statistics.

pub mod aggregate_stats;
pub mod game_result;
pub mod keys;
