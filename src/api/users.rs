//! User profile endpoints

use crate::client::ApiClient;
use crate::envelope::Envelope;
use crate::error::ApiError;
use crate::models::{UpdateProfileRequest, UserProfile};

/// Typed wrapper over the user profile endpoints.
#[derive(Debug, Clone)]
pub struct UsersApi {
    client: ApiClient,
}

impl UsersApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Fetches the current user's profile.
    pub async fn profile(&self) -> Result<Envelope<UserProfile>, ApiError> {
        self.client.get("/user/me").await
    }

    /// Updates the current user's profile and keeps the credential store in
    /// step with the new identity.
    pub async fn update_profile(
        &self,
        request: &UpdateProfileRequest,
    ) -> Result<Envelope<UserProfile>, ApiError> {
        let envelope = self
            .client
            .put::<UserProfile, _>("/user/me", request)
            .await?;
        if let Some(ref profile) = envelope.data {
            self.client.credentials().set(profile.clone());
        }
        Ok(envelope)
    }
}
