//! Session setup and initialization

use crate::config::Config;
use crate::runtime::start_poller;
use crate::scheduler::CancelHandle;
use crate::wallet::{LnbitsClient, PriceFeed, SpotPriceClient, WalletBackend};
use crate::workers::core::PollUpdate;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::{broadcast, mpsc};

/// Session data for both TUI and headless modes
#[derive(Debug)]
pub struct SessionData {
    /// Poll results from the scheduler
    pub update_receiver: mpsc::Receiver<PollUpdate>,
    /// Stops the scheduler; dropping it has the same effect
    pub cancel_handle: CancelHandle,
    /// Shutdown sender to stop polling
    pub shutdown_sender: broadcast::Sender<()>,
    /// When polling started
    pub start_time: Instant,
    pub config: Config,
}

/// Builds the HTTP clients for `config` and starts polling.
///
/// The first tick fires immediately, so by the time the caller has set up
/// its display the first requests are already in flight.
pub fn setup_session(config: Config) -> SessionData {
    let price_feed: Arc<dyn PriceFeed> = Arc::new(SpotPriceClient::from_config(&config));
    let wallet: Arc<dyn WalletBackend> = Arc::new(LnbitsClient::from_config(&config));

    log::debug!("Starting session with {:?}", config);

    let (shutdown_sender, _) = broadcast::channel(1);
    let start_time = Instant::now();
    let (update_receiver, cancel_handle) = start_poller(
        price_feed,
        wallet,
        config.poll_interval,
        shutdown_sender.subscribe(),
    );

    SessionData {
        update_receiver,
        cancel_handle,
        shutdown_sender,
        start_time,
        config,
    }
}
