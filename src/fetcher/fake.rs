//! Deterministic in-memory `DataFetcher` for tests.

use super::types::{DataFetcher, FetchError, NetworkError, Product};
use crate::cancel::signal::CancellationSignal;

use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

pub(crate) struct FakeFetcher {
    dataset: Mutex<Vec<Product>>,
    failure: Mutex<Option<NetworkError>>,
    delay: Duration,
    honour_signal: bool,
    calls: AtomicUsize,
}

impl FakeFetcher {
    pub(crate) fn new(dataset: Vec<Product>) -> Self {
        Self {
            dataset: Mutex::new(dataset),
            failure: Mutex::new(None),
            delay: Duration::ZERO,
            honour_signal: true,
            calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Simulates a misbehaving source that resolves even after cancellation.
    pub(crate) fn ignoring_signal(mut self) -> Self {
        self.honour_signal = false;
        self
    }

    pub(crate) fn set_failure(&self, failure: Option<NetworkError>) {
        *self.failure.lock() = failure;
    }

    pub(crate) fn set_dataset(&self, dataset: Vec<Product>) {
        *self.dataset.lock() = dataset;
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DataFetcher for FakeFetcher {
    async fn fetch(&self, signal: &CancellationSignal) -> Result<Vec<Product>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.honour_signal {
            if signal.is_cancelled() {
                return Err(FetchError::Cancelled);
            }
            if !self.delay.is_zero() {
                tokio::select! {
                    _ = signal.cancelled() => return Err(FetchError::Cancelled),
                    _ = tokio::time::sleep(self.delay) => {}
                }
            }
        } else if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        if let Some(failure) = self.failure.lock().clone() {
            return Err(failure.into());
        }

        Ok(self.dataset.lock().clone())
    }
}
