//! Core error types used across the client crates

use thiserror::Error;

/// Core error type for the kernel
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The backend answered with an envelope whose status is not a success
    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("Response envelope carried no data (status {status})")]
    MissingData { status: u16 },

    #[error("Unknown {kind} token: {value}")]
    UnknownToken { kind: &'static str, value: String },

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),
}

impl CoreError {
    pub fn rejected(status: u16, message: impl Into<String>) -> Self {
        CoreError::Rejected {
            status,
            message: message.into(),
        }
    }

    pub fn unknown_token(kind: &'static str, value: impl Into<String>) -> Self {
        CoreError::UnknownToken {
            kind,
            value: value.into(),
        }
    }

    /// Returns the status carried by envelope-level errors
    pub fn envelope_status(&self) -> Option<u16> {
        match self {
            CoreError::Rejected { status, .. } | CoreError::MissingData { status } => Some(*status),
            _ => None,
        }
    }
}
