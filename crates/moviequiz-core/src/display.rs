//! The display boundary.
//!
//! Rendering lives outside this workspace. The presenter pushes the
//! view-models defined here through [`Display`] and receives
//! [`UserIntent`]s back.

/// Image payload attached to a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionImage {
    /// Raw bytes fetched from the network.
    Bytes(Vec<u8>),
    /// Name of an image asset bundled with the display.
    Asset(String),
}

/// One quiz step ready to be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizStepViewModel {
    /// The poster to show.
    pub image: QuestionImage,
    /// The yes/no question text.
    pub question: String,
    /// Progress counter, e.g. `"3/10"`.
    pub question_number: String,
}

/// End-of-round summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizResultsViewModel {
    /// Alert title.
    pub title: String,
    /// Multi-line summary of the round and lifetime statistics.
    pub text: String,
    /// Label of the button that starts a new round.
    pub button_text: String,
}

/// A failure alert. Acknowledging it should send [`UserIntent::Restart`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertViewModel {
    /// Alert title.
    pub title: String,
    /// User-facing description of the failure.
    pub message: String,
    /// Label of the retry button.
    pub button_text: String,
}

/// Actions the player can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserIntent {
    /// The "yes" button was pressed.
    AnswerYes,
    /// The "no" button was pressed.
    AnswerNo,
    /// A results or error alert was acknowledged.
    Restart,
}

/// Receives view-models from the presenter.
///
/// Every call is made from the presenter's interactive context, in the order
/// the presenter produced them.
pub trait Display: Send + Sync {
    /// Render a question step.
    fn show_step(&self, step: QuizStepViewModel);

    /// Render the end-of-round results.
    fn show_results(&self, results: QuizResultsViewModel);

    /// Show the activity indicator.
    fn show_loading(&self);

    /// Hide the activity indicator.
    fn hide_loading(&self);

    /// Flash the answer feedback.
    fn highlight(&self, is_correct: bool);

    /// Show a failure alert.
    fn show_error(&self, alert: AlertViewModel);
}
