use crate::wallet::error::ClientError;
use crate::wallet::transaction::Transaction;

pub(crate) mod client;
pub use client::{LnbitsClient, SpotPriceClient};
pub mod error;
pub mod transaction;
pub mod wire;

#[cfg(test)]
use mockall::automock;

/// Spot price source.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait PriceFeed: Send + Sync {
    /// Current spot price of the configured pair.
    async fn fetch_price(&self) -> Result<f64, ClientError>;
}

/// Lightning wallet backend. Implementations carry their own API key.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait WalletBackend: Send + Sync {
    /// Wallet balance in sats.
    async fn fetch_balance(&self) -> Result<f64, ClientError>;

    /// Full payment history, newest first as the backend orders it.
    async fn fetch_transactions(&self) -> Result<Vec<Transaction>, ClientError>;
}
