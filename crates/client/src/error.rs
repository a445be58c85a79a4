//! Client error model.

use thiserror::Error;

use inventix_core::DomainError;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a response (connect failure, timeout).
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered with a non-success status.
    #[error("api error ({status}): {body}")]
    Api { status: u16, body: String },

    /// The response body did not have the expected shape.
    #[error("failed to parse response: {0}")]
    Parse(String),

    /// A configuration value was missing or malformed.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The request was rejected locally before being sent.
    #[error(transparent)]
    Validation(#[from] DomainError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ClientError::Parse(e.to_string())
        } else {
            ClientError::Network(e.to_string())
        }
    }
}
