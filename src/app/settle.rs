//! Drop guard that guarantees every spawned request reports back.
//!
//! A request task holds a [`SettleGuard`] for its whole life. Calling
//! [`SettleGuard::settle`] sends the real outcome; if the task is dropped or
//! panics first, the guard sends [`ApiError::Interrupted`] instead. Either
//! way exactly one message reaches the event loop, so state such as the
//! users `loading` flag is always cleared.

use tokio::sync::mpsc;

use super::AppMessage;
use crate::error::ApiError;

pub struct SettleGuard<T> {
    tx: mpsc::UnboundedSender<AppMessage>,
    wrap: fn(Result<T, ApiError>) -> AppMessage,
    outcome: Option<Result<T, ApiError>>,
}

impl<T> SettleGuard<T> {
    pub fn new(
        tx: mpsc::UnboundedSender<AppMessage>,
        wrap: fn(Result<T, ApiError>) -> AppMessage,
    ) -> Self {
        Self {
            tx,
            wrap,
            outcome: None,
        }
    }

    /// Report `outcome` and consume the guard.
    pub fn settle(mut self, outcome: Result<T, ApiError>) {
        self.outcome = Some(outcome);
    }
}

impl<T> Drop for SettleGuard<T> {
    fn drop(&mut self) {
        let outcome = self.outcome.take().unwrap_or(Err(ApiError::Interrupted));
        // The receiver is gone only during shutdown.
        let _ = self.tx.send((self.wrap)(outcome));
    }
}
