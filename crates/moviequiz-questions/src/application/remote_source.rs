//! Question source backed by the remote movie list.

use std::sync::Arc;

use async_trait::async_trait;
use moviequiz_core::display::QuestionImage;
use moviequiz_core::error::QuizError;
use moviequiz_core::fetcher::DataFetcher;
use moviequiz_core::rng::DeterministicRng;
use tracing::{debug, instrument, warn};

use super::QuestionSource;
use super::movies_loader::MoviesLoader;
use crate::domain::movie::Movie;
use crate::domain::question::QuizQuestion;

/// Lower bound of the comparison threshold.
pub const THRESHOLD_MIN: f64 = 7.5;
/// Upper bound of the comparison threshold.
pub const THRESHOLD_MAX: f64 = 9.0;

/// Asks whether a randomly chosen movie's rating beats a random threshold.
pub struct RemoteSource {
    loader: MoviesLoader,
    fetcher: Arc<dyn DataFetcher>,
    rng: Box<dyn DeterministicRng>,
    movies: Vec<Movie>,
}

impl RemoteSource {
    /// Creates a source that loads its movie list from `movies_url`.
    #[must_use]
    pub fn new(
        fetcher: Arc<dyn DataFetcher>,
        movies_url: impl Into<String>,
        rng: Box<dyn DeterministicRng>,
    ) -> Self {
        Self {
            loader: MoviesLoader::new(Arc::clone(&fetcher), movies_url),
            fetcher,
            rng,
            movies: Vec::new(),
        }
    }

    /// Returns the movies loaded so far.
    #[must_use]
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// Draws a threshold in `[7.5, 9.0]`, rounded to one decimal place.
    fn draw_threshold(&mut self) -> f64 {
        let raw = THRESHOLD_MIN + self.rng.next_f64() * (THRESHOLD_MAX - THRESHOLD_MIN);
        ((raw * 10.0).round() / 10.0).clamp(THRESHOLD_MIN, THRESHOLD_MAX)
    }
}

impl std::fmt::Debug for RemoteSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteSource")
            .field("loader", &self.loader)
            .field("movies", &self.movies.len())
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl QuestionSource for RemoteSource {
    #[instrument(skip_all, name = "remote_source.load")]
    async fn load(&mut self) -> Result<(), QuizError> {
        self.movies = self.loader.load_movies().await?;
        Ok(())
    }

    #[instrument(skip_all, name = "remote_source.next_question")]
    async fn next_question(&mut self) -> Result<QuizQuestion, QuizError> {
        if self.movies.is_empty() {
            return Err(QuizError::EmptyPool);
        }

        let last = u32::try_from(self.movies.len() - 1).unwrap_or(u32::MAX);
        let index = (self.rng.next_u32_range(0, last) as usize).min(self.movies.len() - 1);
        let movie = self.movies[index].clone();

        let url = movie.resized_image_url();
        let image = self.fetcher.fetch(&url).await.map_err(|e| {
            warn!(title = %movie.title, error = %e, "poster fetch failed");
            QuizError::PictureLoad { url: url.clone() }
        })?;

        let threshold = self.draw_threshold();
        debug!(title = %movie.title, rating = movie.rating, threshold, "question assembled");

        Ok(QuizQuestion::new(
            QuestionImage::Bytes(image),
            format!("Is this movie rated higher than {threshold:.1}?"),
            movie.rating > threshold,
        ))
    }
}
