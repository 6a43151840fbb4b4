//! Cancellation Module Tests
//!
//! ## Test Scopes
//! - **Signal**: Shared state between clones, idempotent cancel, awaitable cancellation.
//! - **Canceller**: At-most-one live signal, idempotent `cancel_current`.

#[cfg(test)]
mod tests {
    use crate::cancel::canceller::RequestCanceller;
    use crate::cancel::signal::{CancellationSignal, OperationId};
    use std::time::Duration;

    // ============================================================
    // SIGNAL TESTS
    // ============================================================

    #[test]
    fn test_operation_id_is_unique() {
        let id1 = OperationId::new();
        let id2 = OperationId::new();

        assert_ne!(id1, id2, "Each OperationId should be unique");
    }

    #[test]
    fn test_new_signal_is_not_cancelled() {
        let signal = CancellationSignal::new();
        assert!(!signal.is_cancelled());
    }

    #[test]
    fn test_signal_clones_share_state() {
        let signal = CancellationSignal::new();
        let observer = signal.clone();

        signal.cancel();

        assert!(observer.is_cancelled());
        assert_eq!(signal.id(), observer.id());
    }

    #[test]
    fn test_signal_cancel_is_idempotent() {
        let signal = CancellationSignal::new();

        signal.cancel();
        signal.cancel();

        assert!(signal.is_cancelled());
    }

    #[tokio::test]
    async fn test_cancelled_future_completes_after_cancel() {
        let signal = CancellationSignal::new();
        let observer = signal.clone();

        let waiter = tokio::spawn(async move {
            observer.cancelled().await;
        });

        signal.cancel();

        tokio::time::timeout(Duration::from_secs(1), waiter)
            .await
            .expect("cancelled() should resolve")
            .unwrap();
    }

    // ============================================================
    // CANCELLER TESTS
    // ============================================================

    #[test]
    fn test_begin_operation_returns_live_signal() {
        let canceller = RequestCanceller::new();

        let signal = canceller.begin_operation();

        assert!(!signal.is_cancelled());
        assert_eq!(canceller.current().unwrap().id(), signal.id());
    }

    #[test]
    fn test_begin_operation_cancels_previous_signal() {
        let canceller = RequestCanceller::new();

        let first = canceller.begin_operation();
        let second = canceller.begin_operation();

        assert!(first.is_cancelled(), "Superseded signal must be cancelled");
        assert!(!second.is_cancelled());
        assert_ne!(first.id(), second.id());
    }

    #[test]
    fn test_only_latest_of_many_signals_is_live() {
        let canceller = RequestCanceller::new();

        let signals: Vec<_> = (0..5).map(|_| canceller.begin_operation()).collect();

        let live = signals.iter().filter(|s| !s.is_cancelled()).count();
        assert_eq!(live, 1);
        assert!(!signals[4].is_cancelled());
    }

    #[test]
    fn test_cancel_current_without_operation_is_noop() {
        let canceller = RequestCanceller::new();

        canceller.cancel_current();

        assert!(canceller.current().is_none());
    }

    #[test]
    fn test_cancel_current_is_idempotent() {
        let canceller = RequestCanceller::new();
        let signal = canceller.begin_operation();

        canceller.cancel_current();
        canceller.cancel_current();

        assert!(signal.is_cancelled());
        // The cancelled signal stays recorded; a new operation replaces it.
        let next = canceller.begin_operation();
        assert!(!next.is_cancelled());
    }
}
