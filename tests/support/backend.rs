//! Mock secret backends built on wiremock.

use super::{FLAT_ENDPOINT, TOKEN, WRAPPED_ENDPOINT};
use serde_json::{json, Map, Value};
use wiremock::matchers::{any, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Wrapped-schema body carrying `secrets`.
pub fn wrapped_body(secrets: &[(&str, &str)]) -> Value {
    json!({
        "request_id": "3c1c9f2e",
        "data": {
            "data": flat_body(secrets),
            "metadata": {"version": 1}
        }
    })
}

/// Flat-schema body carrying `secrets`.
pub fn flat_body(secrets: &[(&str, &str)]) -> Value {
    let map: Map<String, Value> = secrets
        .iter()
        .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
        .collect();
    Value::Object(map)
}

/// Start a backend answering `endpoint` with `status` and `body`, expecting
/// exactly `calls` authenticated requests.
pub async fn backend(endpoint: &str, status: u16, body: Value, calls: u64) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(endpoint))
        .and(header("X-Vault-Token", TOKEN))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .expect(calls)
        .mount(&server)
        .await;
    server
}

/// Start a wrapped-schema backend serving `secrets` exactly once.
pub async fn wrapped_backend(secrets: &[(&str, &str)]) -> MockServer {
    backend(WRAPPED_ENDPOINT, 200, wrapped_body(secrets), 1).await
}

/// Start a flat-schema backend serving `secrets` exactly once.
pub async fn flat_backend(secrets: &[(&str, &str)]) -> MockServer {
    backend(FLAT_ENDPOINT, 200, flat_body(secrets), 1).await
}

/// Start a backend that fails the test if it receives any request.
pub async fn untouched_backend() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;
    server
}
