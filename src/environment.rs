use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// Represents the backends the dashboard can talk to.
#[derive(Clone, Default, Copy, PartialEq, Eq)]
pub enum Environment {
    /// LNbits instance running on this machine.
    Local,
    /// Public testnet LNbits instance.
    #[default]
    Testnet,
}

impl Environment {
    /// Returns the LNbits API base URL associated with the environment.
    pub fn wallet_url(&self) -> String {
        match self {
            Environment::Local => "http://localhost:5000/api/v1".to_string(),
            Environment::Testnet => "https://testnet.plebnet.dev/api/v1".to_string(),
        }
    }

    /// Returns the spot price API base URL. The price feed is public and
    /// shared by every environment.
    pub fn price_url(&self) -> String {
        "https://api.coinbase.com/v2".to_string()
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Environment::Local),
            "testnet" => Ok(Environment::Testnet),
            _ => Err(()),
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Local => write!(f, "Local"),
            Environment::Testnet => write!(f, "Testnet"),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment::{}, URL: {}", self, self.wallet_url())
    }
}
