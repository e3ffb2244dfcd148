//! Runtime configuration.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::QuizError;

/// Delay between answering and advancing when nothing overrides it.
pub const DEFAULT_FEEDBACK_DELAY: Duration = Duration::from_millis(1000);

/// Statistics file used when `MOVIEQUIZ_STATS_PATH` is unset.
pub const DEFAULT_STATS_PATH: &str = "moviequiz-stats.json";

/// Settings for an embedded quiz session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizConfig {
    /// Endpoint returning the most-popular movie list.
    pub movies_url: String,
    /// How long the answer highlight stays visible before advancing.
    pub feedback_delay: Duration,
    /// Where `JsonFileStore` keeps the statistics document.
    pub stats_path: PathBuf,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            movies_url: String::new(),
            feedback_delay: DEFAULT_FEEDBACK_DELAY,
            stats_path: PathBuf::from(DEFAULT_STATS_PATH),
        }
    }
}

impl QuizConfig {
    /// Read configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Config` if `MOVIEQUIZ_MOVIES_URL` is unset or
    /// `MOVIEQUIZ_FEEDBACK_DELAY_MS` is not a valid integer.
    pub fn from_env() -> Result<Self, QuizError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Same as [`QuizConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, QuizError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let movies_url = lookup("MOVIEQUIZ_MOVIES_URL").ok_or_else(|| {
            QuizError::Config("MOVIEQUIZ_MOVIES_URL environment variable must be set".to_owned())
        })?;

        let feedback_delay = match lookup("MOVIEQUIZ_FEEDBACK_DELAY_MS") {
            Some(raw) => {
                let millis: u64 = raw.parse().map_err(|e| {
                    QuizError::Config(format!("MOVIEQUIZ_FEEDBACK_DELAY_MS must be a valid u64: {e}"))
                })?;
                Duration::from_millis(millis)
            }
            None => DEFAULT_FEEDBACK_DELAY,
        };

        let stats_path = lookup("MOVIEQUIZ_STATS_PATH")
            .map_or_else(|| PathBuf::from(DEFAULT_STATS_PATH), PathBuf::from);

        Ok(Self {
            movies_url,
            feedback_delay,
            stats_path,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_from_lookup_applies_defaults() {
        let config =
            QuizConfig::from_lookup(lookup_from(&[("MOVIEQUIZ_MOVIES_URL", "https://movies")]))
                .unwrap();

        assert_eq!(config.movies_url, "https://movies");
        assert_eq!(config.feedback_delay, DEFAULT_FEEDBACK_DELAY);
        assert_eq!(config.stats_path, PathBuf::from(DEFAULT_STATS_PATH));
    }

    #[test]
    fn test_from_lookup_reads_overrides() {
        let config = QuizConfig::from_lookup(lookup_from(&[
            ("MOVIEQUIZ_MOVIES_URL", "https://movies"),
            ("MOVIEQUIZ_FEEDBACK_DELAY_MS", "250"),
            ("MOVIEQUIZ_STATS_PATH", "/tmp/stats.json"),
        ]))
        .unwrap();

        assert_eq!(config.feedback_delay, Duration::from_millis(250));
        assert_eq!(config.stats_path, PathBuf::from("/tmp/stats.json"));
    }

    #[test]
    fn test_from_lookup_requires_movies_url() {
        let result = QuizConfig::from_lookup(lookup_from(&[]));
        assert!(matches!(result, Err(QuizError::Config(_))));
    }

    #[test]
    fn test_from_lookup_rejects_bad_delay() {
        let result = QuizConfig::from_lookup(lookup_from(&[
            ("MOVIEQUIZ_MOVIES_URL", "https://movies"),
            ("MOVIEQUIZ_FEEDBACK_DELAY_MS", "soon"),
        ]));
        assert!(matches!(result, Err(QuizError::Config(_))));
    }
}
