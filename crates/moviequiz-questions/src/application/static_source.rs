//! Question source backed by a fixed pool.

use async_trait::async_trait;
use moviequiz_core::display::QuestionImage;
use moviequiz_core::error::QuizError;
use moviequiz_core::rng::DeterministicRng;
use tracing::debug;

use super::QuestionSource;
use crate::domain::question::QuizQuestion;

/// Prompt used by every bundled question.
const BUNDLED_PROMPT: &str = "Is this movie rated higher than 6?";

/// Bundled posters and whether their rating beats 6.
const BUNDLED_MOVIES: [(&str, bool); 10] = [
    ("The Godfather", true),
    ("The Dark Knight", true),
    ("Kill Bill", true),
    ("The Avengers", true),
    ("Deadpool", true),
    ("The Green Knight", true),
    ("Old", false),
    ("The Ice Age Adventures of Buck Wild", false),
    ("Tesla", false),
    ("Vivarium", false),
];

/// Draws questions from a fixed pool without repeats until the pool is
/// exhausted, then starts over from the full pool.
pub struct StaticSource {
    pool: Vec<QuizQuestion>,
    remaining: Vec<QuizQuestion>,
    rng: Box<dyn DeterministicRng>,
}

impl StaticSource {
    /// Creates a source over `pool`.
    #[must_use]
    pub fn new(pool: Vec<QuizQuestion>, rng: Box<dyn DeterministicRng>) -> Self {
        Self {
            remaining: pool.clone(),
            pool,
            rng,
        }
    }

    /// Creates a source over the ten bundled movie posters.
    #[must_use]
    pub fn bundled(rng: Box<dyn DeterministicRng>) -> Self {
        let pool = BUNDLED_MOVIES
            .iter()
            .map(|(asset, correct)| {
                QuizQuestion::new(
                    QuestionImage::Asset((*asset).to_owned()),
                    BUNDLED_PROMPT,
                    *correct,
                )
            })
            .collect();
        Self::new(pool, rng)
    }

    /// Returns how many questions are left before the next refill.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.remaining.len()
    }

    /// Draws one question synchronously.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::EmptyPool` if the full pool is empty.
    pub fn draw(&mut self) -> Result<QuizQuestion, QuizError> {
        if self.pool.is_empty() {
            return Err(QuizError::EmptyPool);
        }
        if self.remaining.is_empty() {
            debug!(pool_size = self.pool.len(), "question pool exhausted, refilling");
            self.remaining.clone_from(&self.pool);
        }

        let last = u32::try_from(self.remaining.len() - 1).unwrap_or(u32::MAX);
        let index = self.rng.next_u32_range(0, last) as usize;
        Ok(self.remaining.swap_remove(index.min(self.remaining.len() - 1)))
    }
}

impl std::fmt::Debug for StaticSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticSource")
            .field("pool", &self.pool.len())
            .field("remaining", &self.remaining.len())
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl QuestionSource for StaticSource {
    async fn load(&mut self) -> Result<(), QuizError> {
        Ok(())
    }

    async fn next_question(&mut self) -> Result<QuizQuestion, QuizError> {
        self.draw()
    }
}

#[cfg(test)]
mod tests {
    use moviequiz_core::display::QuestionImage;
    use moviequiz_core::error::QuizError;
    use moviequiz_test_support::{MockRng, SequenceRng};

    use super::StaticSource;
    use crate::application::QuestionSource;
    use crate::domain::question::QuizQuestion;

    fn numbered_pool(size: usize) -> Vec<QuizQuestion> {
        (0..size)
            .map(|i| {
                QuizQuestion::new(
                    QuestionImage::Asset(format!("poster-{i}")),
                    format!("Q{i}"),
                    i % 2 == 0,
                )
            })
            .collect()
    }

    #[test]
    fn test_draw_does_not_repeat_within_pool() {
        // Arrange
        let rng = SequenceRng::new(vec![7, 3, 0, 5, 1, 4, 2, 0, 1, 0]);
        let mut source = StaticSource::new(numbered_pool(10), Box::new(rng));

        // Act
        let mut seen: Vec<String> = (0..10).map(|_| source.draw().unwrap().text).collect();

        // Assert
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), 10);
        assert_eq!(source.remaining(), 0);
    }

    #[test]
    fn test_eleventh_draw_refills_pool() {
        // Arrange
        let mut source = StaticSource::new(numbered_pool(10), Box::new(MockRng));
        for _ in 0..10 {
            source.draw().unwrap();
        }

        // Act
        let eleventh = source.draw();

        // Assert
        assert!(eleventh.is_ok());
        assert_eq!(source.remaining(), 9);
    }

    #[test]
    fn test_empty_pool_fails() {
        let mut source = StaticSource::new(Vec::new(), Box::new(MockRng));
        assert_eq!(source.draw(), Err(QuizError::EmptyPool));
    }

    #[test]
    fn test_bundled_pool_has_ten_questions() {
        let mut source = StaticSource::bundled(Box::new(MockRng));

        let yes_count = (0..10)
            .map(|_| source.draw().unwrap())
            .filter(|q| q.correct_answer)
            .count();

        assert_eq!(yes_count, 6);
    }

    #[tokio::test]
    async fn test_load_is_a_no_op() {
        // Arrange
        let mut source = StaticSource::new(numbered_pool(2), Box::new(MockRng));

        // Act
        let loaded = source.load().await;
        let question = source.next_question().await;

        // Assert
        assert!(loaded.is_ok());
        assert!(question.is_ok());
    }
}
