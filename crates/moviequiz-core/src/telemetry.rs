//! Tracing subscriber setup for applications embedding the quiz.

use tracing_subscriber::EnvFilter;

use crate::error::QuizError;

/// Install a global `fmt` subscriber filtered by `RUST_LOG` (default `info`).
///
/// # Errors
///
/// Returns `QuizError::Config` if a global subscriber is already installed.
pub fn init_tracing(json: bool) -> Result<(), QuizError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| QuizError::Config(format!("tracing subscriber already set: {e}")))
}
