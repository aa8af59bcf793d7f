//! One-shot fetch of every value

use super::headless_mode::summary_line;
use crate::config::Config;
use crate::state::DashboardState;
use crate::wallet::{LnbitsClient, SpotPriceClient};
use crate::workers::fetcher::DataFetcher;
use std::error::Error;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// Fetches price, balance and payments once, prints the results and returns.
///
/// Fails only when every request failed.
pub async fn run_once(config: Config) -> Result<(), Box<dyn Error>> {
    let (sender, mut receiver) = mpsc::channel(3);
    let fetcher = DataFetcher::new(
        Arc::new(SpotPriceClient::from_config(&config)),
        Arc::new(LnbitsClient::from_config(&config)),
        sender,
    );
    fetcher.tick(CancellationToken::new()).await;
    drop(fetcher);

    let mut state = DashboardState::new();
    let mut any_ok = false;
    while let Some(update) = receiver.recv().await {
        any_ok |= update.is_ok();
        println!("{}", state.apply(update));
    }
    println!("{}", summary_line(&state));

    if any_ok {
        Ok(())
    } else {
        Err(Box::from(format!(
            "every request failed against {} ({})",
            config.environment,
            config.environment.wallet_url()
        )))
    }
}
