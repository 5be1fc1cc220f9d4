//! The session renewal operation
//!
//! One idempotent POST to the configured refresh path, exchanging the
//! refresh credential (a cookie, attached by the transport) for a new access
//! credential (set by the server, captured by the transport's cookie store)
//! and the renewed identity in the response body.
//!
//! The coordinator guarantees this is invoked at most once per renewal
//! cycle. Any failure here is permanent: the coordinator never retries a
//! renewal, it settles the cycle as expired.

use std::sync::Arc;

use crate::envelope::Envelope;
use crate::error::RenewalError;
use crate::models::UserProfile;
use crate::transport::{RequestDescriptor, Transport};

/// Performs the refresh-credential exchange.
#[derive(Debug)]
pub struct RenewalOperation {
    transport: Arc<dyn Transport>,
    refresh_path: String,
}

impl RenewalOperation {
    /// Creates a renewal operation targeting `refresh_path`.
    pub fn new(transport: Arc<dyn Transport>, refresh_path: impl Into<String>) -> Self {
        Self {
            transport,
            refresh_path: refresh_path.into(),
        }
    }

    /// The path this operation posts to. The coordinator excludes it from
    /// interception.
    pub fn refresh_path(&self) -> &str {
        &self.refresh_path
    }

    /// Runs the exchange once.
    ///
    /// On success the renewed identity from the response envelope is
    /// returned; committing it to the credential store is the caller's
    /// (coordinator's) responsibility, so that the commit happens exactly
    /// once and before any replay.
    ///
    /// # Errors
    ///
    /// - [`RenewalError::Transport`] when the POST itself fails;
    /// - [`RenewalError::Rejected`] on a non-2xx status or an envelope with
    ///   `success: false`;
    /// - [`RenewalError::Malformed`] when a 2xx body is not a success
    ///   envelope carrying an identity.
    pub async fn renew(&self) -> Result<UserProfile, RenewalError> {
        let request = RequestDescriptor::post(&self.refresh_path);
        let response = self.transport.send(&request).await?;

        if !response.is_success() {
            let message = serde_json::from_str::<Envelope<serde_json::Value>>(&response.body)
                .map(|envelope| envelope.message)
                .unwrap_or_default();
            tracing::warn!(status = response.status, "session renewal rejected");
            return Err(RenewalError::Rejected {
                status: response.status,
                message,
            });
        }

        let envelope: Envelope<UserProfile> = serde_json::from_str(&response.body)
            .map_err(|e| RenewalError::Malformed(e.to_string()))?;

        if !envelope.success {
            return Err(RenewalError::Rejected {
                status: response.status,
                message: envelope.message,
            });
        }

        envelope
            .data
            .ok_or_else(|| RenewalError::Malformed("success envelope without identity".to_string()))
    }
}
