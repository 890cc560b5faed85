//! Client error handling

use core_kernel::CoreError;
use thiserror::Error;

/// Errors surfaced by service calls
#[derive(Debug, Error)]
pub enum ClientError {
    /// Non-2xx transport status on an operation that checks it; the message
    /// is the operation's fixed failure text or the backend's own message
    #[error("{message}")]
    RequestFailed { message: String, status: u16 },

    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl ClientError {
    pub fn request_failed(message: impl Into<String>, status: u16) -> Self {
        ClientError::RequestFailed {
            message: message.into(),
            status,
        }
    }

    /// HTTP or envelope status associated with the failure, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::RequestFailed { status, .. } => Some(*status),
            ClientError::Transport(err) => err.status().map(|s| s.as_u16()),
            ClientError::Core(err) => err.envelope_status(),
            _ => None,
        }
    }

    pub fn is_request_failed(&self) -> bool {
        matches!(self, ClientError::RequestFailed { .. })
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
