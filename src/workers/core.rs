//! Core worker utilities

use crate::wallet::error::ClientError;
use crate::wallet::transaction::Transaction;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// Result of one fetch, addressed to the field it updates.
#[derive(Debug)]
pub enum PollUpdate {
    Price {
        result: Result<f64, ClientError>,
        /// Wall-clock milliseconds at which the response resolved.
        timestamp: i64,
    },
    Balance(Result<f64, ClientError>),
    Transactions(Result<Vec<Transaction>, ClientError>),
}

impl PollUpdate {
    pub fn is_ok(&self) -> bool {
        match self {
            PollUpdate::Price { result, .. } => result.is_ok(),
            PollUpdate::Balance(result) => result.is_ok(),
            PollUpdate::Transactions(result) => result.is_ok(),
        }
    }
}

/// Delivers fetch results to the state owner while the poller is alive.
#[derive(Clone)]
pub struct UpdateSender {
    sender: mpsc::Sender<PollUpdate>,
    liveness: CancellationToken,
}

impl UpdateSender {
    pub fn new(sender: mpsc::Sender<PollUpdate>, liveness: CancellationToken) -> Self {
        Self { sender, liveness }
    }

    /// Sends `update` unless the poller was cancelled while the fetch was in
    /// flight. Returns whether the update was delivered.
    pub async fn send_update(&self, update: PollUpdate) -> bool {
        if self.liveness.is_cancelled() {
            return false;
        }
        self.sender.send(update).await.is_ok()
    }
}
