//! Error handling module for the Docker Hub client

use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, HubError>;

/// Errors surfaced by registry operations.
///
/// Nothing is retried or recovered internally; every failure is handed
/// straight back to the caller.
#[derive(Debug, Error)]
pub enum HubError {
    /// Invalid client configuration (base URL, header values, token encoding)
    #[error("Configuration error: {0}")]
    Config(String),

    /// DNS, connection or other request-level transport failures
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx response from the registry, with the response body as sent
    #[error("Registry returned HTTP {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// Response body was not valid JSON
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl HubError {
    /// HTTP status code of a [`HubError::Status`] failure.
    ///
    /// The client does not distinguish a 401 from other non-2xx
    /// responses; callers that care inspect the code here.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            HubError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<url::ParseError> for HubError {
    fn from(err: url::ParseError) -> Self {
        HubError::Config(err.to_string())
    }
}
