//! MovieQuiz — question sources.
//!
//! Produces yes/no rating questions either from a bundled pool or from a
//! remote most-popular-movies list.

pub mod application;
pub mod domain;

pub use application::QuestionSource;
pub use application::remote_source::RemoteSource;
pub use application::static_source::StaticSource;
pub use domain::question::QuizQuestion;
