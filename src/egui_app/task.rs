//! Screen-scoped background tasks
//!
//! A [`ScreenTask`] runs a future on the shared tokio runtime and hands its
//! output back to the UI thread, which polls it once per frame. Dropping the
//! task aborts the future, so a screen that is navigated away from never
//! receives a late result.

use std::future::Future;

use tokio::runtime::Handle;
use tokio::sync::oneshot::{self, error::TryRecvError};
use tokio::task::JoinHandle;

/// Outcome of polling a [`ScreenTask`]
#[derive(Debug)]
pub enum TaskPoll<T> {
    Pending,
    Ready(T),
    /// The future was aborted or panicked before producing a value
    Cancelled,
}

pub struct ScreenTask<T> {
    rx: oneshot::Receiver<T>,
    handle: JoinHandle<()>,
}

impl<T: Send + 'static> ScreenTask<T> {
    pub fn spawn<F>(runtime: &Handle, future: F) -> Self
    where
        F: Future<Output = T> + Send + 'static,
    {
        let (tx, rx) = oneshot::channel();
        let handle = runtime.spawn(async move {
            let _ = tx.send(future.await);
        });
        Self { rx, handle }
    }
}

impl<T> ScreenTask<T> {
    /// Non-blocking check for the task's output
    pub fn poll(&mut self) -> TaskPoll<T> {
        match self.rx.try_recv() {
            Ok(value) => TaskPoll::Ready(value),
            Err(TryRecvError::Empty) => TaskPoll::Pending,
            Err(TryRecvError::Closed) => TaskPoll::Cancelled,
        }
    }

    pub fn abort(&self) {
        self.handle.abort();
    }
}

impl<T> Drop for ScreenTask<T> {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Poll the task in `slot`, clearing the slot once it has settled.
///
/// Returns the output when ready; a cancelled task is cleared and yields
/// `None` like a pending one.
pub fn take_ready<T>(slot: &mut Option<ScreenTask<T>>) -> Option<T> {
    let task = slot.as_mut()?;
    match task.poll() {
        TaskPoll::Pending => None,
        TaskPoll::Ready(value) => {
            *slot = None;
            Some(value)
        }
        TaskPoll::Cancelled => {
            tracing::debug!("[TASK] Background task ended without a result");
            *slot = None;
            None
        }
    }
}
