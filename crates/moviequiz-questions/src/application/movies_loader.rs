//! Loads the most-popular-movies list through a `DataFetcher`.

use std::sync::Arc;

use moviequiz_core::error::QuizError;
use moviequiz_core::fetcher::DataFetcher;
use tracing::info;

use crate::domain::movie::{Movie, decode_movie_list};

/// Fetches and decodes the movie list from a fixed endpoint.
#[derive(Clone)]
pub struct MoviesLoader {
    fetcher: Arc<dyn DataFetcher>,
    url: String,
}

impl MoviesLoader {
    /// Creates a loader for `url`.
    #[must_use]
    pub fn new(fetcher: Arc<dyn DataFetcher>, url: impl Into<String>) -> Self {
        Self {
            fetcher,
            url: url.into(),
        }
    }

    /// Returns the endpoint this loader reads.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch and decode the movie list.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Network` if the fetch fails, and `Decode` or `Api`
    /// if the payload is unusable.
    pub async fn load_movies(&self) -> Result<Vec<Movie>, QuizError> {
        let bytes = self.fetcher.fetch(&self.url).await?;
        let movies = decode_movie_list(&bytes)?;
        info!(movie_count = movies.len(), "movie list loaded");
        Ok(movies)
    }
}

impl std::fmt::Debug for MoviesLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MoviesLoader").field("url", &self.url).finish_non_exhaustive()
    }
}
