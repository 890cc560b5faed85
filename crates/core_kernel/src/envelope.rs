//! Uniform response envelope
//!
//! Every backend endpoint wraps its payload as
//! `{status, message, timestamp, data}`. Error envelopes routinely come back
//! with `data: null` and occasionally without a timestamp, so both are
//! optional here and callers decide how strict to be. Error envelopes may
//! also carry a payload of a different shape (validation maps, `{}`); it is
//! kept in `details` instead of failing the decode.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::CoreError;

/// Response envelope wrapping a payload of type `T`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseResponse<T> {
    /// Application-level status code set by the backend
    pub status: u16,
    #[serde(default)]
    pub message: String,
    /// Parsed when the backend's format is recognised, `None` otherwise
    #[serde(default, with = "crate::temporal::lenient_option")]
    pub timestamp: Option<DateTime<Utc>>,
    pub data: Option<T>,
    /// Payload that did not decode as `T`, kept verbatim
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl<T> BaseResponse<T> {
    pub fn new(status: u16, message: impl Into<String>, data: Option<T>) -> Self {
        Self {
            status,
            message: message.into(),
            timestamp: Some(Utc::now()),
            data,
            details: None,
        }
    }

    /// True when the envelope status is in the 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Converts the envelope into its payload, failing on a non-success
    /// status or a missing payload
    pub fn into_result(self) -> Result<T, CoreError> {
        if !self.is_success() {
            return Err(CoreError::rejected(self.status, self.message));
        }
        self.data.ok_or(CoreError::MissingData { status: self.status })
    }

    /// Maps the payload while keeping status, message and timestamp
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> BaseResponse<U> {
        BaseResponse {
            status: self.status,
            message: self.message,
            timestamp: self.timestamp,
            data: self.data.map(f),
            details: self.details,
        }
    }
}

impl BaseResponse<Value> {
    /// Decodes the payload as `T`, moving it to `details` when it does not fit
    ///
    /// Status, message and timestamp are always preserved.
    pub fn decode_data<T: DeserializeOwned>(self) -> BaseResponse<T> {
        let (data, details) = match self.data {
            None | Some(Value::Null) => (None, None),
            Some(raw) => match serde_json::from_value::<T>(raw.clone()) {
                Ok(data) => (Some(data), None),
                Err(_) => (None, Some(raw)),
            },
        };

        BaseResponse {
            status: self.status,
            message: self.message,
            timestamp: self.timestamp,
            data,
            details: details.or(self.details),
        }
    }
}
