//! Single-Slot Request Canceller
//!
//! Holds the one signal that may currently be live. Swapping in a new signal and
//! cancelling the old one happen under the same lock, so no caller can ever observe
//! two live signals.

use super::signal::CancellationSignal;

use parking_lot::Mutex;

#[derive(Debug, Default)]
pub struct RequestCanceller {
    current: Mutex<Option<CancellationSignal>>,
}

impl RequestCanceller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancels the previously issued signal (if any) and returns a fresh one.
    pub fn begin_operation(&self) -> CancellationSignal {
        let signal = CancellationSignal::new();
        let mut current = self.current.lock();

        if let Some(previous) = current.replace(signal.clone()) {
            if !previous.is_cancelled() {
                tracing::debug!("Cancelling superseded operation {}", previous.id());
                previous.cancel();
            }
        }

        signal
    }

    /// Cancels the current signal. Idempotent.
    pub fn cancel_current(&self) {
        if let Some(signal) = self.current.lock().as_ref() {
            if !signal.is_cancelled() {
                tracing::debug!("Cancelling operation {}", signal.id());
                signal.cancel();
            }
        }
    }

    /// Returns the most recently issued signal, cancelled or not.
    pub fn current(&self) -> Option<CancellationSignal> {
        self.current.lock().clone()
    }
}
