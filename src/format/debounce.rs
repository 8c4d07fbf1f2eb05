//! Debounce helper for rate-limiting repeated invocations

use std::{
    future::Future,
    pin::Pin,
    sync::{Arc, Mutex},
    time::Duration,
};

use tokio::task::JoinHandle;

type Action<T> = Arc<dyn Fn(T) -> Pin<Box<dyn Future<Output = ()> + Send>> + Send + Sync>;

/// Delays an action until `quiet` has elapsed since the last call
///
/// Each call restarts the timer; only the last call's argument reaches the
/// action. Every `Debouncer` owns its own timer. Must be used inside a tokio
/// runtime.
pub struct Debouncer<T> {
    quiet: Duration,
    action: Action<T>,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new<F, Fut>(quiet: Duration, action: F) -> Self
    where
        F: Fn(T) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        Self {
            quiet,
            action: Arc::new(move |arg| -> Pin<Box<dyn Future<Output = ()> + Send>> {
                Box::pin(action(arg))
            }),
            pending: Mutex::new(None),
        }
    }

    pub fn call(&self, arg: T) {
        let mut pending = self.pending.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(timer) = pending.take() {
            timer.abort();
        }

        let action = self.action.clone();
        let quiet = self.quiet;
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(quiet).await;
            // Detached so that a later call cannot abort an action already running
            tokio::spawn(action(arg));
        }));
    }

    /// Drop the pending invocation, if any
    pub fn cancel(&self) {
        let mut pending = self.pending.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(timer) = pending.take() {
            timer.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .as_ref()
            .is_some_and(|timer| !timer.is_finished())
    }

    pub fn quiet_period(&self) -> Duration {
        self.quiet
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Ok(mut pending) = self.pending.lock() {
            if let Some(timer) = pending.take() {
                timer.abort();
            }
        }
    }
}
