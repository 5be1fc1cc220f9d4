//! Shared helpers for the integration tests

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use eventa_client::session::Navigator;
use eventa_client::{ApiClient, ClientConfig};
use wiremock::MockServer;

/// Navigator test double counting `redirect_to_sign_in` invocations.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    calls: AtomicUsize,
}

impl RecordingNavigator {
    #[allow(dead_code)]
    pub fn redirects(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Navigator for RecordingNavigator {
    fn redirect_to_sign_in(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

/// Configuration pointing at the given wiremock server.
#[allow(dead_code)]
pub fn test_config(server: &MockServer) -> ClientConfig {
    ClientConfig {
        base_url: server.uri(),
        api_key: Some("integration-test-key".to_string()),
        timeout_seconds: 5,
        ..Default::default()
    }
}

/// Client over the real HTTP transport plus the recording navigator.
#[allow(dead_code)]
pub fn make_client(server: &MockServer) -> (ApiClient, Arc<RecordingNavigator>) {
    init_tracing();
    let navigator = Arc::new(RecordingNavigator::default());
    let client = ApiClient::with_navigator(test_config(server), navigator.clone())
        .expect("client construction");
    (client, navigator)
}

/// Installs a test subscriber so `RUST_LOG=eventa_client=debug` shows the
/// coordinator's transitions when a test fails. Safe to call repeatedly.
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Success envelope carrying the renewed identity, as the refresh endpoint
/// returns it.
#[allow(dead_code)]
pub fn identity_body() -> String {
    serde_json::json!({
        "success": true,
        "message": "session refreshed",
        "data": {
            "id": "7b9c6f74-1df2-4f9f-a1ad-3f2c9a2f61a0",
            "email": "ana@example.com",
            "fullname": "Ana Widodo",
            "avatar": null,
            "role": "user",
            "joinedAt": "2025-11-02T08:15:00Z"
        }
    })
    .to_string()
}

/// Error envelope for an expired access credential.
#[allow(dead_code)]
pub fn unauthorized_body() -> &'static str {
    r#"{"success":false,"message":"access token expired","code":"UNAUTHORIZED"}"#
}

/// Success envelope with a trivial payload.
#[allow(dead_code)]
pub fn ok_body(message: &str) -> String {
    serde_json::json!({
        "success": true,
        "message": message,
        "data": { "ok": true }
    })
    .to_string()
}
