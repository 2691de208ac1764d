//! Authentication request and response records.

use finpanel_shared::session::{Role, UserProfile};
use serde::{Deserialize, Serialize};

/// Registration request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// Display name.
    #[serde(rename = "nome")]
    pub name: String,
    /// Email address.
    pub email: String,
    /// Password, sent in clear over TLS.
    #[serde(rename = "senha")]
    pub password: String,
    /// Requested role; the backend defaults to USER.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

/// Login request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Email address.
    pub email: String,
    /// Password.
    #[serde(rename = "senha")]
    pub password: String,
}

/// Successful login or registration response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Bearer token to attach to every subsequent call.
    pub token: String,
    /// Token type, always "Bearer" in practice.
    #[serde(rename = "tipo")]
    pub token_type: String,
    /// Authenticated profile.
    #[serde(rename = "usuario")]
    pub user: UserProfile,
}
