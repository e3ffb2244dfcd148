//! The quiz presenter state machine.
//!
//! `Loading → AwaitingAnswer → Scoring → (AwaitingAnswer | RoundComplete)`,
//! with `restart_round` starting over from any phase.

use std::ops::ControlFlow;
use std::sync::{Arc, Weak};
use std::time::Duration;

use moviequiz_core::config::QuizConfig;
use moviequiz_core::display::{Display, UserIntent};
use moviequiz_core::error::QuizError;
use moviequiz_core::QUESTIONS_PER_GAME;
use moviequiz_questions::{QuestionSource, QuizQuestion};
use moviequiz_statistics::StatisticStore;
use tokio::sync::Mutex;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, info, instrument, warn};

use crate::context::InteractiveContext;
use crate::events::{PresenterEvent, RoundTicket};
use crate::handle::PresenterHandle;
use crate::state::{PresenterPhase, RoundState};
use crate::view_models;

/// Whether the question source has its data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SourceStatus {
    NotLoaded,
    Loading,
    Loaded,
}

/// Drives one player's rounds.
pub struct QuizPresenter {
    source: Arc<Mutex<Box<dyn QuestionSource>>>,
    statistics: StatisticStore,
    display: Weak<dyn Display>,
    feedback_delay: Duration,
    context: InteractiveContext,
    phase: PresenterPhase,
    source_status: SourceStatus,
    round: RoundState,
}

impl QuizPresenter {
    /// Starts a presenter on its own interactive context and begins loading
    /// the first question.
    ///
    /// The presenter only keeps a weak reference to `display`; whoever owns
    /// the display owns the returned handle.
    #[must_use]
    pub fn spawn(
        source: Box<dyn QuestionSource>,
        statistics: StatisticStore,
        display: &Arc<dyn Display>,
        config: &QuizConfig,
    ) -> PresenterHandle {
        let (context, sender, receiver) = InteractiveContext::channel();
        let presenter = Self::new(
            source,
            statistics,
            Arc::downgrade(display),
            config.feedback_delay,
            context,
        );
        let task = tokio::spawn(presenter.run(receiver));
        PresenterHandle::new(sender, task)
    }

    pub(crate) fn new(
        source: Box<dyn QuestionSource>,
        statistics: StatisticStore,
        display: Weak<dyn Display>,
        feedback_delay: Duration,
        context: InteractiveContext,
    ) -> Self {
        Self {
            source: Arc::new(Mutex::new(source)),
            statistics,
            display,
            feedback_delay,
            context,
            phase: PresenterPhase::Loading,
            source_status: SourceStatus::NotLoaded,
            round: RoundState::new(),
        }
    }

    /// Current state machine phase.
    #[must_use]
    pub fn phase(&self) -> PresenterPhase {
        self.phase
    }

    /// Current round progress.
    #[must_use]
    pub fn round(&self) -> &RoundState {
        &self.round
    }

    async fn run(mut self, mut events: UnboundedReceiver<PresenterEvent>) {
        info!(round_id = %self.round.round_id, "presenter started");
        self.start();
        while let Some(event) = events.recv().await {
            if self.handle(event).is_break() {
                break;
            }
        }
        info!("presenter stopped");
    }

    pub(crate) fn start(&mut self) {
        self.load_source();
    }

    /// Applies one event. Returns `Break` on shutdown.
    pub fn handle(&mut self, event: PresenterEvent) -> ControlFlow<()> {
        match event {
            PresenterEvent::Intent(UserIntent::AnswerYes) => self.on_answer(true),
            PresenterEvent::Intent(UserIntent::AnswerNo) => self.on_answer(false),
            PresenterEvent::Intent(UserIntent::Restart) => self.restart_round(),
            PresenterEvent::DataLoaded(Ok(())) => self.on_data_loaded(),
            PresenterEvent::DataLoaded(Err(error)) => {
                self.source_status = SourceStatus::NotLoaded;
                self.on_load_failure(&error);
            }
            PresenterEvent::QuestionDelivered { ticket, result } => match result {
                Ok(question) => self.on_question_ready(ticket, Some(question)),
                Err(error) if self.is_current(ticket) => self.on_load_failure(&error),
                Err(error) => debug!(%error, "dropping stale question failure"),
            },
            PresenterEvent::FeedbackElapsed(ticket) => self.on_feedback_elapsed(ticket),
            PresenterEvent::Shutdown => return ControlFlow::Break(()),
        }
        ControlFlow::Continue(())
    }

    fn with_display(&self, f: impl FnOnce(&dyn Display)) {
        if let Some(display) = self.display.upgrade() {
            f(display.as_ref());
        }
    }

    fn is_current(&self, ticket: RoundTicket) -> bool {
        ticket == self.round.ticket()
    }

    fn load_source(&mut self) {
        self.phase = PresenterPhase::Loading;
        self.source_status = SourceStatus::Loading;
        self.with_display(|d| d.show_loading());

        let source = Arc::clone(&self.source);
        self.context.spawn(async move {
            let result = source.lock().await.load().await;
            PresenterEvent::DataLoaded(result)
        });
    }

    /// The source has its data: fetch the first question.
    pub fn on_data_loaded(&mut self) {
        self.source_status = SourceStatus::Loaded;
        self.with_display(|d| d.hide_loading());
        self.request_next_question();
    }

    /// A question is about to be assembled in the background.
    pub fn on_begin_assembling(&self) {
        self.with_display(|d| d.show_loading());
    }

    fn request_next_question(&mut self) {
        self.phase = PresenterPhase::Loading;
        self.on_begin_assembling();

        let ticket = self.round.ticket();
        let source = Arc::clone(&self.source);
        self.context.spawn(async move {
            let result = source.lock().await.next_question().await;
            PresenterEvent::QuestionDelivered { ticket, result }
        });
    }

    /// Shows a delivered question. Stale or absent questions are ignored.
    pub fn on_question_ready(&mut self, ticket: RoundTicket, question: Option<QuizQuestion>) {
        if !self.is_current(ticket) || self.phase != PresenterPhase::Loading {
            debug!(
                round_id = %ticket.round_id,
                question_index = ticket.question_index,
                "dropping stale question"
            );
            return;
        }
        let Some(question) = question else {
            return;
        };

        let step = view_models::step(&question, self.round.counter());
        self.round.current_question = Some(question);
        self.phase = PresenterPhase::AwaitingAnswer;

        self.with_display(|d| {
            d.hide_loading();
            d.show_step(step);
        });
    }

    /// Surfaces a load or question failure. The round does not advance.
    pub fn on_load_failure(&mut self, error: &QuizError) {
        warn!(%error, round_id = %self.round.round_id, "failed to load question data");
        let alert = view_models::failure(error);
        self.with_display(|d| {
            d.hide_loading();
            d.show_error(alert);
        });
    }

    /// Scores the player's answer to the question on screen.
    #[instrument(skip(self), fields(round_id = %self.round.round_id, question_index = self.round.question_index))]
    pub fn on_answer(&mut self, is_yes: bool) {
        if self.phase != PresenterPhase::AwaitingAnswer {
            return;
        }
        let Some(question) = self.round.current_question.take() else {
            return;
        };

        let is_correct = question.is_correct(is_yes);
        if is_correct {
            self.round.correct_so_far += 1;
        }
        debug!(is_correct, correct_so_far = self.round.correct_so_far, "answer scored");

        self.phase = PresenterPhase::Scoring;
        self.with_display(|d| d.highlight(is_correct));
        self.context.post_after(
            self.feedback_delay,
            PresenterEvent::FeedbackElapsed(self.round.ticket()),
        );
    }

    fn on_feedback_elapsed(&mut self, ticket: RoundTicket) {
        if !self.is_current(ticket) || self.phase != PresenterPhase::Scoring {
            debug!(round_id = %ticket.round_id, "dropping stale feedback timer");
            return;
        }

        if self.round.is_last_question() {
            self.finish_round();
        } else {
            self.round.question_index += 1;
            self.request_next_question();
        }
    }

    fn finish_round(&mut self) {
        self.phase = PresenterPhase::RoundComplete;
        let correct = self.round.correct_so_far;

        match self.statistics.record_game(correct, QUESTIONS_PER_GAME) {
            Ok(stats) => {
                info!(
                    round_id = %self.round.round_id,
                    correct,
                    games_count = stats.games_count,
                    "round complete"
                );
                let results = view_models::results(correct, &stats);
                self.with_display(|d| d.show_results(results));
            }
            Err(error) => {
                warn!(%error, "failed to record game");
                let alert = view_models::failure(&error);
                self.with_display(|d| d.show_error(alert));
            }
        }
    }

    /// Starts a new round. Reloads the source first if it never loaded.
    #[instrument(skip(self), fields(previous_round_id = %self.round.round_id))]
    pub fn restart_round(&mut self) {
        self.round = RoundState::new();
        info!(round_id = %self.round.round_id, "round restarted");

        match self.source_status {
            SourceStatus::NotLoaded => self.load_source(),
            SourceStatus::Loading => self.phase = PresenterPhase::Loading,
            SourceStatus::Loaded => self.request_next_question(),
        }
    }
}

impl std::fmt::Debug for QuizPresenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuizPresenter")
            .field("phase", &self.phase)
            .field("source_status", &self.source_status)
            .field("round", &self.round)
            .finish_non_exhaustive()
    }
}
