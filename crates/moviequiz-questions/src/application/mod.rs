//! Question source implementations.

pub mod movies_loader;
pub mod remote_source;
pub mod static_source;

use async_trait::async_trait;
use moviequiz_core::error::QuizError;

use crate::domain::question::QuizQuestion;

/// Produces quiz questions for the presenter.
#[async_trait]
pub trait QuestionSource: Send {
    /// Prepare the source. Must complete successfully before the first
    /// [`QuestionSource::next_question`] call on sources that need data.
    ///
    /// # Errors
    ///
    /// Returns `QuizError` if the backing data could not be retrieved.
    async fn load(&mut self) -> Result<(), QuizError>;

    /// Produce the next question.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::EmptyPool` if there is nothing to ask about, or a
    /// network or picture failure for remote sources.
    async fn next_question(&mut self) -> Result<QuizQuestion, QuizError>;
}
