//! Debounced dispatch of actions.
//!
//! Each `schedule` aborts the pending timer task (if any) and spawns a new
//! one; only the last call in a burst ever reaches the action channel.

use log::{debug, warn};
use std::sync::mpsc;
use std::time::Duration;
use tokio::task::AbortHandle;

use crate::core::action::Action;

pub struct Debouncer {
    delay: Duration,
    pending: Option<AbortHandle>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Sends `action` after the delay unless another call supersedes it.
    pub fn schedule(&mut self, action: Action, tx: mpsc::Sender<Action>) {
        self.cancel();
        let delay = self.delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if tx.send(action).is_err() {
                warn!("Debounced action dropped: receiver gone");
            }
        });
        self.pending = Some(handle.abort_handle());
    }

    /// Drops the pending action, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            debug!("Cancelling pending debounced action");
            handle.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
