//! MovieQuiz Core — shared abstractions.
//!
//! This crate defines the collaborator traits (clock, randomness, data
//! fetching, key-value persistence, display) and the error and configuration
//! types that the question, statistics, and presenter crates depend on. It
//! contains no game logic.

pub mod clock;
pub mod config;
pub mod display;
pub mod error;
pub mod fetcher;
pub mod rng;
pub mod storage;
pub mod telemetry;

/// Number of questions in one round.
pub const QUESTIONS_PER_GAME: u32 = 10;
