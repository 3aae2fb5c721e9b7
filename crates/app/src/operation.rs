//! Cancellation and deadlines for cart operations.
//!
//! Every storage call made on behalf of a caller runs through
//! [`OperationContext::run`]. Once the caller cancels or the deadline passes,
//! the in-flight call is dropped and no further calls are started.

use std::{future::Future, sync::Arc, time::Duration};

use thiserror::Error;
use tokio::{
    sync::watch,
    time::{Instant, sleep_until},
};

/// Why an operation stopped early.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Interrupted {
    #[error("operation cancelled")]
    Cancelled,

    #[error("operation deadline exceeded")]
    DeadlineExceeded,
}

/// Caller-supplied cancellation signal and optional deadline.
#[derive(Debug, Clone, Default)]
pub struct OperationContext {
    cancelled: Option<watch::Receiver<bool>>,
    deadline: Option<Instant>,
}

/// Fires the [`OperationContext`] it was created with.
#[derive(Debug, Clone)]
pub struct CancelHandle {
    sender: Arc<watch::Sender<bool>>,
}

impl CancelHandle {
    pub fn cancel(&self) {
        self.sender.send_replace(true);
    }
}

impl OperationContext {
    /// A context that is never cancelled and has no deadline.
    #[must_use]
    pub fn background() -> Self {
        Self::default()
    }

    /// A cancellable context and the handle that cancels it.
    #[must_use]
    pub fn with_cancel() -> (Self, CancelHandle) {
        let (sender, receiver) = watch::channel(false);

        let ctx = Self {
            cancelled: Some(receiver),
            deadline: None,
        };

        (
            ctx,
            CancelHandle {
                sender: Arc::new(sender),
            },
        )
    }

    /// A context that expires `timeout` from now.
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::background().deadline(Instant::now() + timeout)
    }

    /// Attach a deadline. An earlier existing deadline is kept.
    #[must_use]
    pub fn deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(self.deadline.map_or(deadline, |current| current.min(deadline)));
        self
    }

    /// Shorthand for [`OperationContext::deadline`] relative to now.
    #[must_use]
    pub fn timeout(self, timeout: Duration) -> Self {
        self.deadline(Instant::now() + timeout)
    }

    fn is_cancelled(&self) -> bool {
        self.cancelled
            .as_ref()
            .is_some_and(|receiver| *receiver.borrow())
    }

    /// Fail if the context is already done. Cancellation wins over the deadline.
    ///
    /// # Errors
    ///
    /// Returns the reason the context is done.
    pub fn check(&self) -> Result<(), Interrupted> {
        if self.is_cancelled() {
            return Err(Interrupted::Cancelled);
        }

        if self.deadline.is_some_and(|deadline| Instant::now() >= deadline) {
            return Err(Interrupted::DeadlineExceeded);
        }

        Ok(())
    }

    /// Drive `future` until it completes or the context is done.
    ///
    /// # Errors
    ///
    /// Returns the reason the context finished first. `future` is dropped
    /// without being polled again.
    pub async fn run<F>(&self, future: F) -> Result<F::Output, Interrupted>
    where
        F: Future,
    {
        self.check()?;

        let mut cancelled = self.cancelled.clone();

        let cancel = async move {
            if let Some(receiver) = cancelled.as_mut() {
                let closed = receiver.wait_for(|cancelled| *cancelled).await.is_err();

                if !closed {
                    return;
                }
            }

            std::future::pending::<()>().await;
        };

        let deadline = async {
            match self.deadline {
                Some(deadline) => sleep_until(deadline).await,
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            biased;

            () = cancel => Err(Interrupted::Cancelled),
            () = deadline => Err(Interrupted::DeadlineExceeded),
            output = future => Ok(output),
        }
    }
}
