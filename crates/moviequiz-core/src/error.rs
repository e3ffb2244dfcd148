//! Error types shared across the quiz crates.

use thiserror::Error;

use crate::fetcher::TransportError;

/// Message shown for failures that carry no more specific wording.
pub const DEFAULT_FAILURE_MESSAGE: &str = "Could not load data. Please try again later.";

/// Top-level error type for loading questions and persisting statistics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// The data fetcher failed (transport error or non-2xx status).
    #[error("network failure: {0}")]
    Network(#[from] TransportError),

    /// The poster image of a chosen movie could not be fetched.
    #[error("failed to load picture from {url}")]
    PictureLoad {
        /// The image URL that failed.
        url: String,
    },

    /// The question pool has nothing to draw from.
    #[error("question pool is empty")]
    EmptyPool,

    /// The movie list payload could not be decoded.
    #[error("malformed movie list: {0}")]
    Decode(String),

    /// The movie list service reported an error of its own.
    #[error("movie list service error: {0}")]
    Api(String),

    /// The key-value store rejected a read or write.
    #[error("storage error: {0}")]
    Storage(String),

    /// A configuration value is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),
}

impl QuizError {
    /// Returns the message to show the player for this failure.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Network(_) => "Unable to load data",
            Self::PictureLoad { .. } => "Failed to load the picture",
            _ => DEFAULT_FAILURE_MESSAGE,
        }
    }
}
