//! The quiz question value type.

use moviequiz_core::display::QuestionImage;

/// A single yes/no question. Consumed once by the presenter, then dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizQuestion {
    /// Poster shown with the question.
    pub image: QuestionImage,
    /// The prompt, e.g. "Is this movie rated higher than 8.3?".
    pub text: String,
    /// Whether "yes" is the right answer.
    pub correct_answer: bool,
}

impl QuizQuestion {
    /// Creates a question.
    #[must_use]
    pub fn new(image: QuestionImage, text: impl Into<String>, correct_answer: bool) -> Self {
        Self {
            image,
            text: text.into(),
            correct_answer,
        }
    }

    /// Returns whether `is_yes` is the right answer to this question.
    #[must_use]
    pub fn is_correct(&self, is_yes: bool) -> bool {
        is_yes == self.correct_answer
    }
}
