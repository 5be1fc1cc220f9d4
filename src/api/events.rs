//! Event endpoints

use uuid::Uuid;

use crate::client::ApiClient;
use crate::envelope::Envelope;
use crate::error::ApiError;
use crate::models::{EventDetail, EventQuery, EventSummary};

/// Typed wrapper over the public event catalogue.
#[derive(Debug, Clone)]
pub struct EventsApi {
    client: ApiClient,
}

impl EventsApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Lists events matching `query`. The envelope carries the pagination
    /// block.
    pub async fn list(&self, query: &EventQuery) -> Result<Envelope<Vec<EventSummary>>, ApiError> {
        self.client.get(&with_query("/events", query)?).await
    }

    /// Fetches one event with its ticket classes.
    pub async fn detail(&self, id: Uuid) -> Result<Envelope<EventDetail>, ApiError> {
        self.client.get(&format!("/events/{}", id)).await
    }
}

/// Appends serializable query parameters to a path.
fn with_query<Q: serde::Serialize>(path: &str, query: &Q) -> Result<String, ApiError> {
    let value = serde_json::to_value(query)
        .map_err(|e| ApiError::from_status(0, format!("failed to encode query: {}", e)))?;

    let pairs: Vec<String> = match value {
        serde_json::Value::Object(map) => map
            .into_iter()
            .map(|(key, value)| {
                let value = match value {
                    serde_json::Value::String(s) => s,
                    other => other.to_string(),
                };
                format!("{}={}", key, urlencode(&value))
            })
            .collect(),
        _ => Vec::new(),
    };

    if pairs.is_empty() {
        Ok(path.to_string())
    } else {
        Ok(format!("{}?{}", path, pairs.join("&")))
    }
}

/// Minimal percent-encoding for query values.
fn urlencode(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char)
            }
            _ => encoded.push_str(&format!("%{:02X}", byte)),
        }
    }
    encoded
}
