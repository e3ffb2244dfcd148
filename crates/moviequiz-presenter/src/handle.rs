//! Owning handle to a running presenter.

use moviequiz_core::display::UserIntent;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::{JoinError, JoinHandle};

use crate::events::PresenterEvent;

/// Owned by the display side. Forwards user intents to the presenter; the
/// presenter stops once this handle is dropped and its pending work drains.
#[derive(Debug)]
pub struct PresenterHandle {
    sender: UnboundedSender<PresenterEvent>,
    task: JoinHandle<()>,
}

impl PresenterHandle {
    pub(crate) fn new(sender: UnboundedSender<PresenterEvent>, task: JoinHandle<()>) -> Self {
        Self { sender, task }
    }

    /// Forwards `intent`. Returns `false` if the presenter has stopped.
    pub fn send(&self, intent: UserIntent) -> bool {
        self.sender.send(PresenterEvent::Intent(intent)).is_ok()
    }

    /// The player pressed "yes".
    pub fn answer_yes(&self) -> bool {
        self.send(UserIntent::AnswerYes)
    }

    /// The player pressed "no".
    pub fn answer_no(&self) -> bool {
        self.send(UserIntent::AnswerNo)
    }

    /// The player acknowledged a results or error alert.
    pub fn restart(&self) -> bool {
        self.send(UserIntent::Restart)
    }

    /// Stops the presenter and waits for its event loop to finish.
    ///
    /// # Errors
    ///
    /// Returns the `JoinError` if the event loop panicked.
    pub async fn shutdown(self) -> Result<(), JoinError> {
        let _ = self.sender.send(PresenterEvent::Shutdown);
        self.task.await
    }
}
