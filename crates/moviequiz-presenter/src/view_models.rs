//! View-model builders.

use moviequiz_core::QUESTIONS_PER_GAME;
use moviequiz_core::display::{AlertViewModel, QuizResultsViewModel, QuizStepViewModel};
use moviequiz_core::error::QuizError;
use moviequiz_questions::QuizQuestion;
use moviequiz_statistics::AggregateStats;

/// Builds the step shown for `question` at `counter` (e.g. `"3/10"`).
#[must_use]
pub fn step(question: &QuizQuestion, counter: String) -> QuizStepViewModel {
    QuizStepViewModel {
        image: question.image.clone(),
        question: question.text.clone(),
        question_number: counter,
    }
}

/// Builds the end-of-round summary.
#[must_use]
pub fn results(correct: u32, stats: &AggregateStats) -> QuizResultsViewModel {
    let best = &stats.best_game;
    let text = format!(
        "Your result: {correct}/{QUESTIONS_PER_GAME}\n\
         Quizzes played: {}\n\
         Record: {}/{} ({})\n\
         Average accuracy: {:.2}%",
        stats.games_count,
        best.correct,
        best.total,
        best.date_display(),
        stats.total_accuracy(),
    );

    QuizResultsViewModel {
        title: "This round is over!".to_owned(),
        text,
        button_text: "Play again".to_owned(),
    }
}

/// Builds the failure alert for `error`.
#[must_use]
pub fn failure(error: &QuizError) -> AlertViewModel {
    AlertViewModel {
        title: "Something went wrong(".to_owned(),
        message: error.user_message().to_owned(),
        button_text: "Try again".to_owned(),
    }
}
