//! Events drained by the interactive context.

use moviequiz_core::display::UserIntent;
use moviequiz_core::error::QuizError;
use moviequiz_questions::QuizQuestion;
use uuid::Uuid;

/// Identifies which round and question a piece of asynchronous work belongs
/// to. Completions whose ticket no longer matches the presenter's are stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundTicket {
    /// The round the work was started for.
    pub round_id: Uuid,
    /// The question index the work was started for.
    pub question_index: u32,
}

/// Everything the presenter reacts to, in arrival order.
#[derive(Debug)]
pub enum PresenterEvent {
    /// The player did something.
    Intent(UserIntent),
    /// The question source finished loading.
    DataLoaded(Result<(), QuizError>),
    /// A requested question (or its failure) arrived.
    QuestionDelivered {
        /// Ticket captured when the request was made.
        ticket: RoundTicket,
        /// The question or the reason there is none.
        result: Result<QuizQuestion, QuizError>,
    },
    /// The answer highlight has been visible long enough.
    FeedbackElapsed(RoundTicket),
    /// Stop the event loop.
    Shutdown,
}
