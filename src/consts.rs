pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! Constants for polling, HTTP access and UI buffers, grouped by area.

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Buffer size for the poller -> composition root update channel.
    /// Each tick produces at most three updates.
    pub const UPDATE_QUEUE_SIZE: usize = 100;

    // =============================================================================
    // POLLING CONFIGURATION
    // =============================================================================

    pub mod polling {
        use std::time::Duration;

        /// Interval between ticks (milliseconds). The first tick fires immediately.
        pub const POLL_INTERVAL_MS: u64 = 5_000;

        pub const fn poll_interval() -> Duration {
            Duration::from_millis(POLL_INTERVAL_MS)
        }
    }

    // =============================================================================
    // WALLET CONFIGURATION
    // =============================================================================

    pub mod wallet {
        /// Header carrying the wallet API key.
        pub const API_KEY_HEADER: &str = "X-Api-Key";

        /// Balances arrive in millisats; the dashboard displays sats.
        pub const MSATS_PER_SAT: f64 = 1000.0;

        /// Currency pair for the spot price feed.
        pub const PRICE_PAIR: &str = "BTC-USD";

        /// Environment variable holding the wallet API key.
        pub const API_KEY_ENV: &str = "LNBITS_API_KEY";

        /// Environment variable selecting the deployment environment.
        pub const ENVIRONMENT_ENV: &str = "WALLET_ENVIRONMENT";
    }

    // =============================================================================
    // NETWORK CONFIGURATION
    // =============================================================================

    pub mod http {
        use std::time::Duration;

        pub const CONNECT_TIMEOUT_SECS: u64 = 5;

        /// Kept below the poll interval so a hung request never spans two ticks.
        pub const REQUEST_TIMEOUT_SECS: u64 = 4;

        pub const fn connect_timeout() -> Duration {
            Duration::from_secs(CONNECT_TIMEOUT_SECS)
        }

        pub const fn request_timeout() -> Duration {
            Duration::from_secs(REQUEST_TIMEOUT_SECS)
        }
    }
}
