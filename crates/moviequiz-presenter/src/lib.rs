//! MovieQuiz — presenter.
//!
//! Coordinates a round: asks the question source for questions, pushes
//! view-models to the display, scores answers, and records finished rounds
//! in the statistics store. All presenter work happens on one task (the
//! interactive context) that drains an ordered event channel.

mod context;
pub mod events;
mod handle;
pub mod presenter;
pub mod state;
pub mod view_models;

pub use events::{PresenterEvent, RoundTicket};
pub use handle::PresenterHandle;
pub use presenter::QuizPresenter;
pub use state::{PresenterPhase, RoundState};
