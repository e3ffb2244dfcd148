//! Test display — records every call the presenter makes.

use std::sync::Mutex;

use moviequiz_core::display::{
    AlertViewModel, Display, QuizResultsViewModel, QuizStepViewModel,
};

/// One recorded `Display` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayCall {
    /// `show_step`.
    Step(QuizStepViewModel),
    /// `show_results`.
    Results(QuizResultsViewModel),
    /// `show_loading`.
    ShowLoading,
    /// `hide_loading`.
    HideLoading,
    /// `highlight`.
    Highlight(bool),
    /// `show_error`.
    Error(AlertViewModel),
}

/// A display that appends every call to a log.
#[derive(Debug, Default)]
pub struct RecordingDisplay {
    calls: Mutex<Vec<DisplayCall>>,
}

impl RecordingDisplay {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all calls so far.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn calls(&self) -> Vec<DisplayCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Returns only the step view-models shown so far.
    pub fn steps(&self) -> Vec<QuizStepViewModel> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                DisplayCall::Step(step) => Some(step),
                _ => None,
            })
            .collect()
    }

    /// Returns only the results view-models shown so far.
    pub fn results(&self) -> Vec<QuizResultsViewModel> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                DisplayCall::Results(results) => Some(results),
                _ => None,
            })
            .collect()
    }

    /// Returns only the error alerts shown so far.
    pub fn errors(&self) -> Vec<AlertViewModel> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                DisplayCall::Error(alert) => Some(alert),
                _ => None,
            })
            .collect()
    }

    /// Forget everything recorded so far.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }

    fn record(&self, call: DisplayCall) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
    }
}

impl Display for RecordingDisplay {
    fn show_step(&self, step: QuizStepViewModel) {
        self.record(DisplayCall::Step(step));
    }

    fn show_results(&self, results: QuizResultsViewModel) {
        self.record(DisplayCall::Results(results));
    }

    fn show_loading(&self) {
        self.record(DisplayCall::ShowLoading);
    }

    fn hide_loading(&self) {
        self.record(DisplayCall::HideLoading);
    }

    fn highlight(&self, is_correct: bool) {
        self.record(DisplayCall::Highlight(is_correct));
    }

    fn show_error(&self, alert: AlertViewModel) {
        self.record(DisplayCall::Error(alert));
    }
}
