//! Custom Test Assertions
//!
//! Assertions over requests captured by the stub backend, with messages
//! that show what was actually sent.

use serde::de::DeserializeOwned;
use serde_json::Value;
use wiremock::Request;

use interface_client::ClientError;

/// Asserts the request method and path (path without query)
pub fn assert_request(request: &Request, expected_method: &str, expected_path: &str) {
    assert_eq!(
        request.method.as_str(),
        expected_method,
        "Method mismatch for {}",
        request.url
    );
    assert_eq!(
        request.url.path(),
        expected_path,
        "Path mismatch for {} {}",
        request.method,
        request.url
    );
}

/// Asserts the raw query string; `None` means no `?` at all
pub fn assert_query(request: &Request, expected: Option<&str>) {
    assert_eq!(
        request.url.query(),
        expected,
        "Query mismatch for {}",
        request.url
    );
}

/// Asserts the request carried no query parameter named `key`
pub fn assert_query_param_absent(request: &Request, key: &str) {
    assert!(
        !request.url.query_pairs().any(|(k, _)| k == key),
        "Expected no {key} parameter in {}",
        request.url
    );
}

/// Asserts a JSON body equal to `expected` sent as `application/json`
pub fn assert_json_body(request: &Request, expected: &Value) {
    let content_type = request
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(
        content_type.starts_with("application/json"),
        "Expected a JSON content type, got {content_type:?}"
    );

    let body: Value = request
        .body_json()
        .unwrap_or_else(|e| panic!("Request body is not JSON: {e}"));
    assert_eq!(&body, expected, "Body mismatch for {}", request.url);
}

/// Decodes the request body into a typed value
pub fn decode_body<T: DeserializeOwned>(request: &Request) -> T {
    request
        .body_json()
        .unwrap_or_else(|e| panic!("Request body does not decode: {e}"))
}

pub fn assert_no_body(request: &Request) {
    assert!(
        request.body.is_empty(),
        "Expected an empty body, got {:?}",
        String::from_utf8_lossy(&request.body)
    );
}

/// Asserts a request failure carrying `message` and `status`
pub fn assert_request_failed(error: &ClientError, message: &str, status: u16) {
    match error {
        ClientError::RequestFailed {
            message: actual,
            status: actual_status,
        } => {
            assert_eq!(actual, message);
            assert_eq!(*actual_status, status);
        }
        other => panic!("Expected RequestFailed({message:?}, {status}), got {other:?}"),
    }
}
