use parking_lot::Mutex;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Type-erased async callback invoked with the surviving arguments.
pub type DebouncedFn<T> = Arc<dyn Fn(T) -> Pin<Box<dyn Future<Output = ()> + Send>> + Send + Sync>;

/// Runs `callback` with the arguments of the last `call` after `delay` of quiet.
///
/// Every `call` restarts the timer. Once the timer fires the callback is spawned on its
/// own task, so a later `call` starts a new timer without interrupting it.
/// Must be used from within a Tokio runtime.
pub struct Debouncer<T> {
    delay: Duration,
    callback: DebouncedFn<T>,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new<F, Fut>(delay: Duration, callback: F) -> Self
    where
        F: Fn(T) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let callback: DebouncedFn<T> = Arc::new(move |args: T| {
            Box::pin(callback(args)) as Pin<Box<dyn Future<Output = ()> + Send>>
        });

        Self {
            delay,
            callback,
            pending: Mutex::new(None),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedules the callback with `args`, superseding any pending invocation.
    pub fn call(&self, args: T) {
        let callback = self.callback.clone();
        let delay = self.delay;

        let mut pending = self.pending.lock();
        if let Some(previous) = pending.take() {
            previous.abort();
        }

        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            tokio::spawn(callback(args));
        }));
    }

    /// Drops the pending invocation, if any. A callback that already started keeps running.
    pub fn cancel(&self) {
        if let Some(previous) = self.pending.lock().take() {
            previous.abort();
        }
    }

    /// Whether a timer is armed and has not fired yet.
    pub fn is_pending(&self) -> bool {
        self.pending
            .lock()
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(previous) = self.pending.get_mut().take() {
            previous.abort();
        }
    }
}
