//! reqwest-backed HTTP transport
//!
//! [`HttpTransport`] performs single HTTP exchanges against the configured
//! base URL. The underlying `reqwest::Client` keeps a cookie store: the
//! service issues its access and refresh credentials as cookies, and this
//! crate treats them as opaque -- it never reads or writes them, it only
//! observes whether requests made with them succeed.
//!
//! The static API key from [`ClientConfig`](crate::config::ClientConfig) is
//! attached to every request as `X-API-Key`, matching the service contract.

use std::collections::HashMap;
use std::sync::Arc;

use crate::config::ClientConfig;
use crate::error::{ClientError, Result, TransportError};
use crate::transport::{Method, RequestDescriptor, Transport, WireResponse};

/// Header carrying the static API key.
const API_KEY_HEADER: &str = "X-API-Key";

/// HTTP transport over `reqwest` with cookie-borne session credentials.
///
/// # Examples
///
/// ```no_run
/// use eventa_client::config::ClientConfig;
/// use eventa_client::transport::http::HttpTransport;
///
/// # fn example() -> eventa_client::error::Result<()> {
/// let transport = HttpTransport::new(&ClientConfig::default())?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct HttpTransport {
    /// Underlying reqwest client; owns the cookie store.
    client: Arc<reqwest::Client>,
    /// Base URL that request paths are joined onto.
    base_url: url::Url,
    /// Static API key attached to every request, when configured.
    api_key: Option<String>,
}

impl HttpTransport {
    /// Builds a transport from the given configuration.
    ///
    /// No network I/O is performed at construction time.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] when the base URL does not parse or
    /// the reqwest client cannot be constructed (TLS initialisation).
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let base_url = url::Url::parse(&config.base_url)
            .map_err(|e| ClientError::Config(format!("invalid base_url: {}", e)))?;

        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .cookie_store(true)
            .build()
            .map_err(|e| ClientError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client: Arc::new(client),
            base_url,
            api_key: config.api_key.clone(),
        })
    }

    /// Joins a request path onto the base URL.
    ///
    /// The base URL's own path (e.g. `/api/v1`) is preserved; the request
    /// path is appended to it.
    fn request_url(&self, path: &str) -> std::result::Result<url::Url, TransportError> {
        let joined = format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        url::Url::parse(&joined).map_err(|e| TransportError::InvalidUrl(format!("{}: {}", path, e)))
    }
}

#[async_trait::async_trait]
impl Transport for HttpTransport {
    /// Performs one HTTP exchange.
    ///
    /// Headers sent on every request:
    ///
    /// - `Content-Type: application/json` -- when a body is present
    /// - `X-API-Key: <key>` -- when an API key is configured
    /// - any per-request headers from the descriptor
    ///
    /// Cookies are attached and captured automatically by the client's
    /// cookie store.
    async fn send(
        &self,
        request: &RequestDescriptor,
    ) -> std::result::Result<WireResponse, TransportError> {
        let url = self.request_url(&request.path)?;

        let mut req = match request.method {
            Method::Get => self.client.get(url),
            Method::Post => self.client.post(url),
            Method::Put => self.client.put(url),
            Method::Delete => self.client.delete(url),
        };

        if let Some(ref key) = self.api_key {
            req = req.header(API_KEY_HEADER, key.as_str());
        }
        for (name, value) in &request.headers {
            req = req.header(name.as_str(), value.as_str());
        }
        if let Some(ref body) = request.body {
            req = req.json(body);
        }

        tracing::debug!(
            method = %request.method,
            path = %request.path,
            attempt = request.attempt,
            "dispatching request"
        );

        let response = req.send().await?;
        let status = response.status().as_u16();

        let mut headers = HashMap::new();
        for (name, value) in response.headers() {
            if let Ok(text) = value.to_str() {
                headers.insert(name.as_str().to_string(), text.to_string());
            }
        }

        let body = response.text().await?;

        tracing::debug!(path = %request.path, status, "received response");

        Ok(WireResponse {
            status,
            headers,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_transport(base_url: &str) -> HttpTransport {
        HttpTransport::new(&ClientConfig {
            base_url: base_url.to_string(),
            ..Default::default()
        })
        .expect("transport")
    }

    #[test]
    fn test_new_rejects_invalid_base_url() {
        let result = HttpTransport::new(&ClientConfig {
            base_url: "not a url".to_string(),
            ..Default::default()
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_request_url_preserves_base_path() {
        let transport = make_transport("http://localhost:5004/api/v1");
        let url = transport.request_url("/orders").expect("url");
        assert_eq!(url.as_str(), "http://localhost:5004/api/v1/orders");
    }

    #[test]
    fn test_request_url_handles_missing_leading_slash() {
        let transport = make_transport("http://localhost:5004/api/v1/");
        let url = transport.request_url("orders").expect("url");
        assert_eq!(url.as_str(), "http://localhost:5004/api/v1/orders");
    }

    #[test]
    fn test_request_url_nested_path() {
        let transport = make_transport("http://localhost:5004/api/v1");
        let url = transport.request_url("/auth/refresh-token").expect("url");
        assert_eq!(
            url.as_str(),
            "http://localhost:5004/api/v1/auth/refresh-token"
        );
    }
}
