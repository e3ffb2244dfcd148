//! The interactive context.
//!
//! A single task drains `PresenterEvent`s in order and is the only place the
//! presenter (and therefore the display) is touched. Background work runs on
//! other tasks and reports back by posting exactly one event.

use std::future::Future;
use std::time::Duration;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender, WeakUnboundedSender};
use tracing::debug;

use crate::events::PresenterEvent;

/// Non-owning handle the presenter uses to schedule work onto its own
/// context. Holding it does not keep the event loop alive.
#[derive(Debug, Clone)]
pub(crate) struct InteractiveContext {
    sender: WeakUnboundedSender<PresenterEvent>,
}

impl InteractiveContext {
    /// Creates the event channel. The returned sender is the only strong one;
    /// the loop ends once it and every in-flight task are gone.
    pub(crate) fn channel() -> (
        Self,
        UnboundedSender<PresenterEvent>,
        UnboundedReceiver<PresenterEvent>,
    ) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let context = Self {
            sender: sender.downgrade(),
        };
        (context, sender, receiver)
    }

    /// Runs `work` on a background task and posts its result back here.
    pub(crate) fn spawn<F>(&self, work: F)
    where
        F: Future<Output = PresenterEvent> + Send + 'static,
    {
        let Some(sender) = self.sender.upgrade() else {
            debug!("interactive context closed, dropping background work");
            return;
        };
        tokio::spawn(async move {
            let event = work.await;
            if sender.send(event).is_err() {
                debug!("interactive context closed before delivery");
            }
        });
    }

    /// Posts `event` back here once `delay` has passed.
    pub(crate) fn post_after(&self, delay: Duration, event: PresenterEvent) {
        self.spawn(async move {
            tokio::time::sleep(delay).await;
            event
        });
    }
}
