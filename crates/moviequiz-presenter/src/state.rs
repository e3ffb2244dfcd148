//! Round state owned by the presenter.

use moviequiz_core::QUESTIONS_PER_GAME;
use moviequiz_questions::QuizQuestion;
use uuid::Uuid;

use crate::events::RoundTicket;

/// Presenter state machine phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresenterPhase {
    /// Waiting for the source to load or deliver a question.
    Loading,
    /// A question is on screen.
    AwaitingAnswer,
    /// The answer highlight is showing.
    Scoring,
    /// Results are on screen.
    RoundComplete,
}

/// Progress through the current round.
#[derive(Debug, Clone)]
pub struct RoundState {
    /// Fresh for every round; used to reject stale completions.
    pub round_id: Uuid,
    /// Index of the question being asked, in `[0, QUESTIONS_PER_GAME)`.
    pub question_index: u32,
    /// Correct answers so far in this round.
    pub correct_so_far: u32,
    /// The question on screen, until it is answered.
    pub current_question: Option<QuizQuestion>,
}

impl RoundState {
    /// Starts a new round.
    #[must_use]
    pub fn new() -> Self {
        Self {
            round_id: Uuid::new_v4(),
            question_index: 0,
            correct_so_far: 0,
            current_question: None,
        }
    }

    /// Ticket for work started now.
    #[must_use]
    pub fn ticket(&self) -> RoundTicket {
        RoundTicket {
            round_id: self.round_id,
            question_index: self.question_index,
        }
    }

    /// Whether the current question is the round's last.
    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.question_index == QUESTIONS_PER_GAME - 1
    }

    /// Progress counter such as `"3/10"`.
    #[must_use]
    pub fn counter(&self) -> String {
        format!("{}/{QUESTIONS_PER_GAME}", self.question_index + 1)
    }
}

impl Default for RoundState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::RoundState;

    #[test]
    fn test_new_round_starts_at_first_question() {
        let round = RoundState::new();

        assert_eq!(round.question_index, 0);
        assert_eq!(round.correct_so_far, 0);
        assert!(round.current_question.is_none());
        assert_eq!(round.counter(), "1/10");
        assert!(!round.is_last_question());
    }

    #[test]
    fn test_last_question_is_index_nine() {
        let mut round = RoundState::new();
        round.question_index = 9;

        assert!(round.is_last_question());
        assert_eq!(round.counter(), "10/10");
    }

    #[test]
    fn test_each_round_gets_a_new_ticket() {
        let first = RoundState::new();
        let second = RoundState::new();

        assert_ne!(first.ticket(), second.ticket());
    }
}
