//! Authentication endpoints
//!
//! Login and logout also keep the client's credential store in step with
//! the server-side session, so subscribers see sign-in and sign-out without
//! polling. The logout path is on the coordinator's exclusion list: a 401
//! from it never triggers a renewal cycle.

use crate::client::ApiClient;
use crate::envelope::Envelope;
use crate::error::ApiError;
use crate::models::{ChangePasswordRequest, LoginRequest, RegisterRequest, UserProfile};

/// Path of the login endpoint.
const LOGIN_PATH: &str = "/auth/login";
/// Path of the registration endpoint.
const REGISTER_PATH: &str = "/auth/register";
/// Path of the current-user endpoint.
const ME_PATH: &str = "/auth/me";
/// Path of the password change endpoint.
const CHANGE_PASSWORD_PATH: &str = "/auth/change-password";

/// Typed wrapper over the authentication endpoints.
#[derive(Debug, Clone)]
pub struct AuthApi {
    client: ApiClient,
    logout_path: String,
}

impl AuthApi {
    /// Wraps `client`. `logout_path` must match the coordinator's
    /// configured logout path.
    pub fn new(client: ApiClient, logout_path: impl Into<String>) -> Self {
        Self {
            client,
            logout_path: logout_path.into(),
        }
    }

    /// Signs in and commits the returned identity to the credential store.
    pub async fn login(&self, request: &LoginRequest) -> Result<Envelope<UserProfile>, ApiError> {
        let envelope = self
            .client
            .post::<UserProfile, _>(LOGIN_PATH, request)
            .await?;
        if let Some(ref profile) = envelope.data {
            self.client.credentials().set(profile.clone());
        }
        Ok(envelope)
    }

    /// Creates an account. Does not sign in.
    pub async fn register(
        &self,
        request: &RegisterRequest,
    ) -> Result<Envelope<UserProfile>, ApiError> {
        self.client.post(REGISTER_PATH, request).await
    }

    /// Signs out server-side and clears the credential store.
    ///
    /// The store is cleared even when the server call fails: the caller
    /// asked to end the session, and a dead session that 401s here must not
    /// leave a stale identity behind.
    pub async fn logout(&self) -> Result<Envelope<serde_json::Value>, ApiError> {
        let result = self
            .client
            .post_empty::<serde_json::Value>(&self.logout_path)
            .await;
        self.client.credentials().clear();
        result
    }

    /// Fetches the identity of the current session.
    pub async fn me(&self) -> Result<Envelope<UserProfile>, ApiError> {
        self.client.get(ME_PATH).await
    }

    /// Changes the password of the current user.
    pub async fn change_password(
        &self,
        request: &ChangePasswordRequest,
    ) -> Result<Envelope<serde_json::Value>, ApiError> {
        self.client.put(CHANGE_PASSWORD_PATH, request).await
    }
}
