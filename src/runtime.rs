//! Runtime wiring for the poller

use crate::consts::cli_consts::UPDATE_QUEUE_SIZE;
use crate::scheduler::{CancelHandle, PollingScheduler};
use crate::wallet::{PriceFeed, WalletBackend};
use crate::workers::core::PollUpdate;
use crate::workers::fetcher::DataFetcher;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{broadcast, mpsc};

/// Starts polling price, balance and payments every `interval`, beginning
/// immediately. Polling stops when the returned handle is cancelled or
/// dropped, or when `shutdown` fires.
pub fn start_poller(
    price_feed: Arc<dyn PriceFeed>,
    wallet: Arc<dyn WalletBackend>,
    interval: Duration,
    mut shutdown: broadcast::Receiver<()>,
) -> (mpsc::Receiver<PollUpdate>, CancelHandle) {
    let (update_sender, update_receiver) = mpsc::channel::<PollUpdate>(UPDATE_QUEUE_SIZE);
    let fetcher = DataFetcher::new(price_feed, wallet, update_sender);

    let handle = PollingScheduler::new(interval).start(move |liveness| {
        let fetcher = fetcher.clone();
        async move { fetcher.tick(liveness).await }
    });

    // Forward the application-wide shutdown signal to the scheduler.
    let token = handle.token();
    tokio::spawn(async move {
        tokio::select! {
            _ = shutdown.recv() => token.cancel(),
            _ = token.cancelled() => {}
        }
    });

    (update_receiver, handle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::DashboardState;
    use crate::wallet::error::ClientError;
    use crate::wallet::transaction::Transaction;
    use crate::wallet::{MockPriceFeed, MockWalletBackend};
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::Notify;
    use tokio::time::sleep;

    const INTERVAL: Duration = Duration::from_millis(5_000);

    fn healthy_wallet() -> MockWalletBackend {
        let mut wallet = MockWalletBackend::new();
        wallet.expect_fetch_balance().returning(|| Ok(2_500.0));
        wallet.expect_fetch_transactions().returning(|| {
            Ok(vec![
                serde_json::from_value::<Transaction>(json!({ "amount": -1000, "memo": "tea" }))
                    .unwrap(),
            ])
        });
        wallet
    }

    /// Price feed that blocks until released, counting calls.
    struct GatedPriceFeed {
        gate: Arc<Notify>,
        calls: Arc<AtomicUsize>,
    }

    #[async_trait::async_trait]
    impl PriceFeed for GatedPriceFeed {
        async fn fetch_price(&self) -> Result<f64, ClientError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.gate.notified().await;
            Ok(64_000.0)
        }
    }

    #[tokio::test(start_paused = true)]
    // A failing price fetch must not stop balance and payments from landing.
    async fn test_price_failure_is_isolated() {
        let mut price_feed = MockPriceFeed::new();
        price_feed.expect_fetch_price().returning(|| {
            Err(ClientError::Http {
                status: 500,
                message: "boom".to_string(),
            })
        });
        let (_shutdown_sender, shutdown) = broadcast::channel(1);
        let (mut updates, handle) = start_poller(
            Arc::new(price_feed),
            Arc::new(healthy_wallet()),
            INTERVAL,
            shutdown,
        );

        let mut state = DashboardState::new();
        for _ in 0..3 {
            let update = updates.recv().await.expect("update");
            state.apply(update);
        }
        handle.cancel();

        assert_eq!(state.price(), None);
        assert!(state.series().is_none());
        assert_eq!(state.balance(), Some(2_500.0));
        assert_eq!(state.transactions().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_results_after_cancel_are_discarded() {
        let gate = Arc::new(Notify::new());
        let calls = Arc::new(AtomicUsize::new(0));
        let price_feed = GatedPriceFeed {
            gate: gate.clone(),
            calls: calls.clone(),
        };
        let (_shutdown_sender, shutdown) = broadcast::channel(1);
        let (mut updates, handle) =
            start_poller(Arc::new(price_feed), Arc::new(healthy_wallet()), INTERVAL, shutdown);

        // Balance and payments resolve right away; the price is held back.
        let mut state = DashboardState::new();
        for _ in 0..2 {
            state.apply(updates.recv().await.expect("update"));
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        handle.cancel();
        gate.notify_waiters();
        sleep(Duration::from_millis(100)).await;

        while let Ok(update) = updates.try_recv() {
            state.apply(update);
        }
        assert_eq!(state.price(), None);
        assert!(state.series().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_signal_stops_polling() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let mut price_feed = MockPriceFeed::new();
        price_feed.expect_fetch_price().returning(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(1.0)
        });
        let (shutdown_sender, shutdown) = broadcast::channel(1);
        let (_updates, handle) =
            start_poller(Arc::new(price_feed), Arc::new(healthy_wallet()), INTERVAL, shutdown);

        sleep(Duration::from_millis(12_000)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 3);

        let _ = shutdown_sender.send(());
        sleep(Duration::from_millis(1)).await;
        assert!(handle.token().is_cancelled());

        sleep(Duration::from_millis(20_000)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }
}
