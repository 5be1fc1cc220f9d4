//! The request façade
//!
//! [`ApiClient`] is the public surface feature code talks to. Every call is
//! routed through the session coordinator -- the façade never touches the
//! transport directly -- and every outcome is normalized: success bodies
//! deserialize into the typed [`Envelope`], and every failure, wherever it
//! originated (network, server envelope, or a coordinator-synthesized
//! expiry), comes back as an [`ApiError`].

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ClientConfig;
use crate::envelope::Envelope;
use crate::error::{ApiError, Result};
use crate::session::{CredentialStore, Navigator, NullNavigator, SessionCoordinator};
use crate::transport::http::HttpTransport;
use crate::transport::{RequestDescriptor, Transport};

/// Session-authenticated client for the Eventa API.
///
/// Cloning is cheap; all clones share the same coordinator, credential
/// store, and cookie jar.
///
/// # Examples
///
/// ```no_run
/// use eventa_client::client::ApiClient;
/// use eventa_client::config::ClientConfig;
/// use eventa_client::models::EventSummary;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ApiClient::new(ClientConfig::default())?;
/// let events = client.get::<Vec<EventSummary>>("/events").await?;
/// println!("{} events ({})", events.data.unwrap_or_default().len(), events.message);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient {
    coordinator: Arc<SessionCoordinator>,
}

impl ApiClient {
    /// Creates a client over the real HTTP transport with no navigator.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when `config` is invalid or the HTTP
    /// client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self> {
        Self::with_navigator(config, Arc::new(NullNavigator))
    }

    /// Creates a client over the real HTTP transport with the given
    /// navigation collaborator.
    pub fn with_navigator(config: ClientConfig, navigator: Arc<dyn Navigator>) -> Result<Self> {
        config.validate()?;
        let transport: Arc<dyn Transport> = Arc::new(HttpTransport::new(&config)?);
        Ok(Self::with_transport(config, transport, navigator))
    }

    /// Creates a client over an injected transport.
    ///
    /// This is the seam tests (and exotic hosts) use; `config` still
    /// supplies the refresh/logout paths the coordinator excludes from
    /// interception.
    pub fn with_transport(
        config: ClientConfig,
        transport: Arc<dyn Transport>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        let store = CredentialStore::new();
        let coordinator = SessionCoordinator::new(transport, store, navigator, &config);
        Self {
            coordinator: Arc::new(coordinator),
        }
    }

    /// The credential store backing this client.
    ///
    /// Subscribe to it to react to identity changes (sign-in, renewal,
    /// forced sign-out).
    pub fn credentials(&self) -> &CredentialStore {
        self.coordinator.store()
    }

    /// GET `path`.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> std::result::Result<Envelope<T>, ApiError> {
        self.execute(RequestDescriptor::get(path)).await
    }

    /// POST `path` with a JSON body.
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> std::result::Result<Envelope<T>, ApiError> {
        let body = encode_body(body)?;
        self.execute(RequestDescriptor::post(path).with_body(body))
            .await
    }

    /// POST `path` with no body.
    pub async fn post_empty<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> std::result::Result<Envelope<T>, ApiError> {
        self.execute(RequestDescriptor::post(path)).await
    }

    /// PUT `path` with a JSON body.
    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> std::result::Result<Envelope<T>, ApiError> {
        let body = encode_body(body)?;
        self.execute(RequestDescriptor::put(path).with_body(body))
            .await
    }

    /// DELETE `path`.
    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> std::result::Result<Envelope<T>, ApiError> {
        self.execute(RequestDescriptor::delete(path)).await
    }

    /// Sends an arbitrary request through the coordinator and normalizes
    /// the outcome.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport failures (`status: 0`), expired
    /// sessions (`status: 401`, synthesized by the coordinator), and every
    /// response whose status or envelope indicates failure.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestDescriptor,
    ) -> std::result::Result<Envelope<T>, ApiError> {
        let response = self.coordinator.execute(request).await?;
        let status = response.status;

        let envelope: Envelope<T> = match serde_json::from_str(&response.body) {
            Ok(envelope) => envelope,
            Err(e) => {
                // Bodies that fail to parse still resolve to the uniform
                // error shape, keeping the caller's handling single-path.
                tracing::debug!(status, error = %e, "response body did not match envelope");
                return Err(ApiError::from_status(
                    status,
                    if response.is_success() {
                        format!("malformed response body: {}", e)
                    } else {
                        format!("request failed with status {}", status)
                    },
                ));
            }
        };

        if !response.is_success() || !envelope.success {
            return Err(envelope.into_api_error(status));
        }

        Ok(envelope)
    }
}

/// Serializes a request body to JSON, normalizing encoder failures into the
/// uniform error shape.
fn encode_body<B: Serialize>(body: &B) -> std::result::Result<serde_json::Value, ApiError> {
    serde_json::to_value(body)
        .map_err(|e| ApiError::from_status(0, format!("failed to encode request body: {}", e)))
}
