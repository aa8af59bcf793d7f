//! Application configuration.
//!
//! Everything is resolved from the process environment at startup; nothing is
//! read from or written to disk.

use crate::consts::cli_consts::{polling, wallet};
use crate::environment::Environment;
use std::fmt::{Debug, Formatter};
use std::time::Duration;

#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub environment: Environment,
    /// Wallet API key. Absent keys are not rejected here; the wallet backend
    /// answers unauthenticated requests with an error.
    pub api_key: Option<String>,
    pub price_pair: String,
    pub poll_interval: Duration,
}

impl Config {
    pub fn new(environment: Environment, api_key: Option<String>) -> Self {
        Config {
            environment,
            api_key,
            price_pair: wallet::PRICE_PAIR.to_string(),
            poll_interval: polling::poll_interval(),
        }
    }

    /// Resolves the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves the configuration through `lookup`, which maps a variable name
    /// to its value.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = lookup(wallet::ENVIRONMENT_ENV)
            .and_then(|s| s.parse::<Environment>().ok())
            .unwrap_or_default();
        let api_key = lookup(wallet::API_KEY_ENV)
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());
        Self::new(environment, api_key)
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("environment", &self.environment)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("price_pair", &self.price_pair)
            .field("poll_interval", &self.poll_interval)
            .finish()
    }
}
