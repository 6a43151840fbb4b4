//! Debounce Module Tests
//!
//! All tests run on a paused clock, so timing is deterministic.

#[cfg(test)]
mod tests {
    use crate::debounce::debouncer::Debouncer;
    use std::time::Duration;
    use tokio::sync::mpsc;

    const DELAY: Duration = Duration::from_millis(500);

    fn recording_debouncer() -> (Debouncer<String>, mpsc::UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let debouncer = Debouncer::new(DELAY, move |value: String| {
            let tx = tx.clone();
            async move {
                let _ = tx.send(value);
            }
        });
        (debouncer, rx)
    }

    #[tokio::test(start_paused = true)]
    async fn test_burst_runs_callback_once_with_last_arguments() {
        let (debouncer, mut rx) = recording_debouncer();

        for value in ["a", "ap", "app", "appl", "apple"] {
            debouncer.call(value.to_string());
            tokio::time::sleep(Duration::from_millis(100)).await;
        }

        let fired = rx.recv().await.unwrap();
        assert_eq!(fired, "apple");

        tokio::time::sleep(DELAY * 4).await;
        assert!(rx.try_recv().is_err(), "Superseded calls must not run");
    }

    #[tokio::test(start_paused = true)]
    async fn test_callback_waits_for_quiet_period() {
        let (debouncer, mut rx) = recording_debouncer();

        debouncer.call("x".to_string());
        tokio::time::sleep(DELAY - Duration::from_millis(1)).await;
        assert!(rx.try_recv().is_err());
        assert!(debouncer.is_pending());

        tokio::time::sleep(Duration::from_millis(2)).await;
        tokio::task::yield_now().await;
        assert_eq!(rx.recv().await.unwrap(), "x");
        assert!(!debouncer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_call_resets_timer() {
        let (debouncer, mut rx) = recording_debouncer();
        let start = tokio::time::Instant::now();

        debouncer.call("first".to_string());
        tokio::time::sleep(Duration::from_millis(400)).await;
        debouncer.call("second".to_string());

        assert_eq!(rx.recv().await.unwrap(), "second");
        assert!(start.elapsed() >= Duration::from_millis(900));
    }

    #[tokio::test(start_paused = true)]
    async fn test_separate_bursts_each_fire() {
        let (debouncer, mut rx) = recording_debouncer();

        debouncer.call("one".to_string());
        assert_eq!(rx.recv().await.unwrap(), "one");

        debouncer.call("two".to_string());
        assert_eq!(rx.recv().await.unwrap(), "two");
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_drops_pending_call() {
        let (debouncer, mut rx) = recording_debouncer();

        debouncer.call("dropped".to_string());
        debouncer.cancel();

        tokio::time::sleep(DELAY * 2).await;
        assert!(rx.try_recv().is_err());
        assert!(!debouncer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_pending_call() {
        let (debouncer, mut rx) = recording_debouncer();

        debouncer.call("dropped".to_string());
        drop(debouncer);

        tokio::time::sleep(DELAY * 2).await;
        // The channel closes once the callback (and its sender) is gone.
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_running_callback_is_not_interrupted_by_new_call() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let debouncer = Debouncer::new(DELAY, move |value: &'static str| {
            let tx = tx.clone();
            async move {
                tokio::time::sleep(Duration::from_secs(2)).await;
                let _ = tx.send(value);
            }
        });

        debouncer.call("slow");
        tokio::time::sleep(DELAY + Duration::from_millis(10)).await;
        debouncer.call("next");

        assert_eq!(rx.recv().await.unwrap(), "slow");
        assert_eq!(rx.recv().await.unwrap(), "next");
    }
}
