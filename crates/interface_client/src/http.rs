//! Request description and HTTP transport
//!
//! Services describe each call as an [`ApiRequest`] and hand it to the
//! [`HttpTransport`], which knows the three ways the backend contract reads
//! a response:
//!
//! - `fetch_data`: fail with a fixed message on a non-2xx status, otherwise
//!   return the envelope's payload
//! - `fetch_data_or_message`: like `fetch_data`, but prefer the backend's own
//!   message when the error body carries one
//! - `fetch_envelope`: return the parsed envelope whatever the status
//!
//! There is no retry, caching or request sharing; every call is one round trip.

use reqwest::{Method, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use core_kernel::{BaseResponse, CoreError};

use crate::config::ClientConfig;
use crate::error::ClientError;

/// One backend call: method, path, query and optional JSON body
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    method: Method,
    segments: Vec<String>,
    query: Vec<(String, String)>,
    body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub fn new(method: Method, base: &[&str]) -> Self {
        Self {
            method,
            segments: base.iter().map(|s| s.to_string()).collect(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get(base: &[&str]) -> Self {
        Self::new(Method::GET, base)
    }

    pub fn post(base: &[&str]) -> Self {
        Self::new(Method::POST, base)
    }

    pub fn put(base: &[&str]) -> Self {
        Self::new(Method::PUT, base)
    }

    pub fn delete(base: &[&str]) -> Self {
        Self::new(Method::DELETE, base)
    }

    /// Appends a path segment; it is percent-encoded when the URL is built
    pub fn segment(mut self, segment: impl AsRef<str>) -> Self {
        self.segments.push(segment.as_ref().to_string());
        self
    }

    pub fn query(mut self, key: &str, value: impl Into<String>) -> Self {
        self.query.push((key.to_string(), value.into()));
        self
    }

    /// Adds the parameter only when a non-empty value is present
    pub fn query_opt(self, key: &str, value: Option<&str>) -> Self {
        match value {
            Some(value) if !value.is_empty() => self.query(key, value),
            _ => self,
        }
    }

    pub fn json<T: Serialize>(mut self, body: &T) -> Result<Self, ClientError> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Unencoded path, e.g. `/api/claim/all`
    pub fn path(&self) -> String {
        format!("/{}", self.segments.join("/"))
    }

    /// Encoded query string without the leading `?`, `None` when empty
    pub fn query_string(&self) -> Option<String> {
        if self.query.is_empty() {
            return None;
        }
        Some(
            url::form_urlencoded::Serializer::new(String::new())
                .extend_pairs(self.query.iter())
                .finish(),
        )
    }

    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }

    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn body(&self) -> Option<&serde_json::Value> {
        self.body.as_ref()
    }

    /// Decodes the JSON body back into a typed value
    pub fn body_as<T: DeserializeOwned>(&self) -> Result<Option<T>, ClientError> {
        self.body
            .clone()
            .map(serde_json::from_value::<T>)
            .transpose()
            .map_err(ClientError::from)
    }

    /// Builds the absolute URL against `base`, keeping any path prefix it has
    pub fn url(&self, base: &Url) -> Result<Url, ClientError> {
        let mut url = base.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(format!("{base} cannot be a base URL")))?
            .pop_if_empty()
            .extend(&self.segments);

        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(self.query.iter());
        }
        Ok(url)
    }
}

/// Shared HTTP plumbing for all service modules
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
    base_url: Url,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", config.base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(format!(
                "{} cannot be a base URL",
                config.base_url
            )));
        }

        let mut builder = reqwest::Client::builder().default_headers(config.header_map()?);
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn send(&self, request: &ApiRequest) -> Result<reqwest::Response, ClientError> {
        let url = request.url(&self.base_url)?;
        debug!(method = %request.method(), url = %url, "Sending backend request");

        let mut builder = self.http.request(request.method().clone(), url);
        if let Some(body) = request.body() {
            builder = builder.json(body);
        }
        Ok(builder.send().await?)
    }

    async fn read_envelope<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<BaseResponse<T>, ClientError> {
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Unwrap-and-return-data: non-2xx becomes `failure`, regardless of body
    pub async fn fetch_data<T: DeserializeOwned>(
        &self,
        request: &ApiRequest,
        failure: &'static str,
    ) -> Result<T, ClientError> {
        let response = self.send(request).await?;
        let status = response.status();
        if !status.is_success() {
            warn!(path = %request.path(), status = status.as_u16(), "{failure}");
            return Err(ClientError::request_failed(failure, status.as_u16()));
        }

        let envelope = Self::read_envelope::<T>(response).await?;
        envelope
            .data
            .ok_or_else(|| CoreError::MissingData { status: envelope.status }.into())
    }

    /// Unwrap-and-return-data, reporting the backend's message on failure
    pub async fn fetch_data_or_message<T: DeserializeOwned>(
        &self,
        request: &ApiRequest,
        fallback: &'static str,
    ) -> Result<T, ClientError> {
        let response = self.send(request).await?;
        let status = response.status();
        if !status.is_success() {
            let message = match Self::read_envelope::<serde_json::Value>(response).await {
                Ok(envelope) if !envelope.message.is_empty() => envelope.message,
                _ => fallback.to_string(),
            };
            warn!(path = %request.path(), status = status.as_u16(), "{message}");
            return Err(ClientError::request_failed(message, status.as_u16()));
        }

        let envelope = Self::read_envelope::<T>(response).await?;
        envelope
            .data
            .ok_or_else(|| CoreError::MissingData { status: envelope.status }.into())
    }

    /// Return-full-envelope: the transport status is not inspected
    ///
    /// Non-2xx payloads that do not fit `T` are kept in `details`.
    pub async fn fetch_envelope<T: DeserializeOwned>(
        &self,
        request: &ApiRequest,
    ) -> Result<BaseResponse<T>, ClientError> {
        let response = self.send(request).await?;
        let status = response.status();
        if status.is_success() {
            return Self::read_envelope(response).await;
        }

        debug!(path = %request.path(), status = status.as_u16(), "Returning envelope from non-2xx response");
        let envelope = Self::read_envelope::<serde_json::Value>(response).await?.decode_data::<T>();
        if envelope.details.is_some() {
            debug!(path = %request.path(), "Error payload kept as details");
        }
        Ok(envelope)
    }

    /// Executes a call whose body is ignored; non-2xx becomes `failure`
    pub async fn execute(&self, request: &ApiRequest, failure: &'static str) -> Result<(), ClientError> {
        let response = self.send(request).await?;
        let status = response.status();
        if !status.is_success() {
            warn!(path = %request.path(), status = status.as_u16(), "{failure}");
            return Err(ClientError::request_failed(failure, status.as_u16()));
        }
        Ok(())
    }
}
