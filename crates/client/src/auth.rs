//! Authentication resource client.

use std::sync::Arc;

use reqwest::Method;

use finpanel_core::domain::{Credentials, LoginResponse, RegisterRequest};
use finpanel_shared::session::UserProfile;
use finpanel_shared::ApiResult;

use crate::http::ApiClient;

/// Client for `/api/v1/auth`.
///
/// Login installs the token and profile into the session context;
/// logout and any 401 response tear it down.
#[derive(Debug, Clone)]
pub struct AuthClient {
    api: Arc<ApiClient>,
}

impl AuthClient {
    /// Creates the client over a shared transport.
    #[must_use]
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Registers a new user.
    pub async fn register(&self, request: &RegisterRequest) -> ApiResult<LoginResponse> {
        self.api
            .fetch(
                self.api
                    .request(Method::POST, "/api/v1/auth/registrarUsuario")
                    .json(request),
            )
            .await
    }

    /// Signs in and authenticates the session.
    pub async fn login(&self, credentials: &Credentials) -> ApiResult<LoginResponse> {
        let response: LoginResponse = self
            .api
            .fetch(
                self.api
                    .request(Method::POST, "/api/v1/auth/login")
                    .json(credentials),
            )
            .await?;
        self.api
            .session()
            .authenticate(response.token.clone(), response.user.clone());
        tracing::info!(user = %response.user.email, "session authenticated");
        Ok(response)
    }

    /// Updates the signed-in user's profile and refreshes the session copy.
    pub async fn update_user(&self, profile: &UserProfile) -> ApiResult<UserProfile> {
        let updated: UserProfile = self
            .api
            .fetch(
                self.api
                    .request(Method::PUT, "/api/v1/auth/atualizarUsuario")
                    .json(profile),
            )
            .await?;
        self.api.session().update_user(updated.clone());
        Ok(updated)
    }

    /// Signs out, invalidating the session.
    pub fn logout(&self) {
        self.api.session().invalidate();
    }
}
