use crate::logging::LogLevel;
use crate::wallet::error::ClientError;

/// Maps a client failure to the level it is logged at.
#[derive(Debug, Clone)]
pub struct ErrorClassifier;

impl ErrorClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify_fetch_error(&self, error: &ClientError) -> LogLevel {
        match error {
            // Non-critical: rate limiting, the next tick tries again anyway
            ClientError::Http { status, .. } if *status == 429 => LogLevel::Debug,
            ClientError::Http { status, .. } if (500..=599).contains(status) => LogLevel::Warn,

            // Critical: missing or wrong API key
            ClientError::Http { status, .. } if *status == 401 => LogLevel::Error,
            ClientError::Http { status, .. } if *status == 403 => LogLevel::Error,

            // The endpoint answered with something we cannot read
            ClientError::Json(_) | ClientError::InvalidAmount(_) => LogLevel::Error,

            // Network issues - usually temporary
            _ => LogLevel::Warn,
        }
    }
}

impl Default for ErrorClassifier {
    fn default() -> Self {
        Self::new()
    }
}
