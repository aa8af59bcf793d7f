//! Error handling for the remote data clients

use thiserror::Error;

/// Broad failure category. Both are handled the same way (log, keep the
/// last good value) but are reported differently.
#[derive(Debug, Copy, Clone, PartialEq, Eq, strum::Display)]
pub enum ErrorKind {
    /// The request did not complete or the server refused it.
    Transport,
    /// The server answered, but not in the expected shape.
    Parse,
}

#[derive(Debug, Error)]
pub enum ClientError {
    /// Reqwest error, typically related to network issues or request failures.
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("HTTP error with status {status}: {message}")]
    Http { status: u16, message: String },

    /// The body was not the JSON shape we expected.
    #[error("Unexpected response body: {0}")]
    Json(#[from] serde_json::Error),

    /// A stringified amount could not be parsed as a number.
    #[error("Invalid amount {0:?}")]
    InvalidAmount(String),
}

impl ClientError {
    pub async fn from_response(response: reqwest::Response) -> ClientError {
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response text".to_string());

        ClientError::Http { status, message }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ClientError::Reqwest(_) | ClientError::Http { .. } => ErrorKind::Transport,
            ClientError::Json(_) | ClientError::InvalidAmount(_) => ErrorKind::Parse,
        }
    }
}
