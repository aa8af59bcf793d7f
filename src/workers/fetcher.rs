//! Per-tick fetching of price, balance and payments

use super::core::{PollUpdate, UpdateSender};
use crate::wallet::{PriceFeed, WalletBackend};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

fn wall_clock_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Issues the three independent requests that make up one tick.
#[derive(Clone)]
pub struct DataFetcher {
    price_feed: Arc<dyn PriceFeed>,
    wallet: Arc<dyn WalletBackend>,
    sender: mpsc::Sender<PollUpdate>,
    clock: fn() -> i64,
}

impl DataFetcher {
    pub fn new(
        price_feed: Arc<dyn PriceFeed>,
        wallet: Arc<dyn WalletBackend>,
        sender: mpsc::Sender<PollUpdate>,
    ) -> Self {
        Self {
            price_feed,
            wallet,
            sender,
            clock: wall_clock_millis,
        }
    }

    /// Replaces the wall clock used to stamp price points.
    pub fn with_clock(mut self, clock: fn() -> i64) -> Self {
        self.clock = clock;
        self
    }

    /// Runs one tick. The three requests run concurrently and each result is
    /// delivered on its own, so one failing or stalling never holds back the
    /// others. Results resolving after `liveness` is cancelled are dropped.
    pub async fn tick(&self, liveness: CancellationToken) {
        let updates = UpdateSender::new(self.sender.clone(), liveness);
        futures::join!(
            self.fetch_price(&updates),
            self.fetch_balance(&updates),
            self.fetch_transactions(&updates),
        );
    }

    async fn fetch_price(&self, updates: &UpdateSender) {
        let result = self.price_feed.fetch_price().await;
        let timestamp = (self.clock)();
        updates
            .send_update(PollUpdate::Price { result, timestamp })
            .await;
    }

    async fn fetch_balance(&self, updates: &UpdateSender) {
        let result = self.wallet.fetch_balance().await;
        updates.send_update(PollUpdate::Balance(result)).await;
    }

    async fn fetch_transactions(&self, updates: &UpdateSender) {
        let result = self.wallet.fetch_transactions().await;
        updates.send_update(PollUpdate::Transactions(result)).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wallet::error::ClientError;
    use crate::wallet::transaction::Transaction;
    use crate::wallet::{MockPriceFeed, MockWalletBackend};
    use serde_json::json;

    fn fixed_clock() -> i64 {
        1_000
    }

    fn failing_price_feed() -> MockPriceFeed {
        let mut feed = MockPriceFeed::new();
        feed.expect_fetch_price().returning(|| {
            Err(ClientError::Http {
                status: 503,
                message: "unavailable".to_string(),
            })
        });
        feed
    }

    fn healthy_wallet() -> MockWalletBackend {
        let mut wallet = MockWalletBackend::new();
        wallet.expect_fetch_balance().returning(|| Ok(42.0));
        wallet.expect_fetch_transactions().returning(|| {
            Ok(vec![
                serde_json::from_value::<Transaction>(json!({ "amount": 1000 })).unwrap(),
            ])
        });
        wallet
    }

    #[tokio::test]
    // One tick yields exactly one update per field, failures included.
    async fn test_tick_sends_one_update_per_field() {
        let (tx, mut rx) = mpsc::channel(8);
        let fetcher =
            DataFetcher::new(Arc::new(failing_price_feed()), Arc::new(healthy_wallet()), tx)
                .with_clock(fixed_clock);

        fetcher.tick(CancellationToken::new()).await;
        drop(fetcher);

        let mut updates = Vec::new();
        while let Some(update) = rx.recv().await {
            updates.push(update);
        }
        assert_eq!(updates.len(), 3);
        assert!(updates.iter().any(|u| matches!(
            u,
            PollUpdate::Price { result: Err(_), timestamp: 1_000 }
        )));
        assert!(updates.iter().any(|u| matches!(u, PollUpdate::Balance(Ok(b)) if *b == 42.0)));
        assert!(updates.iter().any(|u| matches!(u, PollUpdate::Transactions(Ok(t)) if t.len() == 1)));
    }

    #[tokio::test]
    async fn test_tick_after_cancel_sends_nothing() {
        let (tx, mut rx) = mpsc::channel(8);
        let fetcher = DataFetcher::new(Arc::new(failing_price_feed()), Arc::new(healthy_wallet()), tx);

        let token = CancellationToken::new();
        token.cancel();
        fetcher.tick(token).await;
        drop(fetcher);

        assert!(rx.recv().await.is_none());
    }
}
