//! Shared test doubles for the MovieQuiz game core.

mod clock;
mod display;
mod fetcher;
mod rng;
mod store;

pub use clock::FixedClock;
pub use display::{DisplayCall, RecordingDisplay};
pub use fetcher::StubFetcher;
pub use rng::{MockRng, SequenceRng};
pub use store::{FailingStore, InMemoryStore};
