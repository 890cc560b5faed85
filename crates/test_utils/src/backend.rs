//! Stub backend
//!
//! Wraps a wiremock [`MockServer`] and hands out clients pointed at it.

use serde_json::Value;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

use interface_client::{ClientConfig, InsuranceClient};

/// A local HTTP server standing in for the insurance backend
pub struct StubBackend {
    server: MockServer,
}

impl StubBackend {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// The underlying server, for mounting mocks with custom matchers
    pub fn server(&self) -> &MockServer {
        &self.server
    }

    pub fn config(&self) -> ClientConfig {
        ClientConfig {
            timeout_secs: 5,
            ..ClientConfig::default()
        }
        .with_base_url(self.uri())
    }

    pub fn client(&self) -> InsuranceClient {
        InsuranceClient::new(self.config()).expect("stub backend client")
    }

    /// Answers `method path` with `status` and a JSON body
    pub async fn respond(&self, http_method: &str, request_path: &str, status: u16, body: Value) {
        Mock::given(method(http_method))
            .and(path(request_path))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Answers `method path` with `status` and a non-JSON body
    pub async fn respond_raw(&self, http_method: &str, request_path: &str, status: u16, body: &str) {
        Mock::given(method(http_method))
            .and(path(request_path))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&self.server)
            .await;
    }

    /// Every request received so far, in arrival order
    pub async fn requests(&self) -> Vec<Request> {
        self.server.received_requests().await.unwrap_or_default()
    }

    /// The only request received; panics if there were none or several
    pub async fn single_request(&self) -> Request {
        let mut requests = self.requests().await;
        assert_eq!(
            requests.len(),
            1,
            "Expected exactly one request, got {}",
            requests.len()
        );
        requests.remove(0)
    }
}
