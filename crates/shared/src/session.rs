//! Explicit session context.
//!
//! The session is an object injected into every resource client, never an
//! ambient global. Invalidation is an explicit transition: it happens on
//! logout and on any 401 response from the server.

use serde::{Deserialize, Serialize};
use std::sync::RwLock;

use crate::types::UserId;

/// User roles recognized by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// Regular user.
    #[serde(rename = "USER")]
    User,
    /// Administrator.
    #[serde(rename = "ADMIN")]
    Admin,
}

/// Authenticated user profile, as returned by the auth endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// User identifier.
    pub id: UserId,
    /// Display name.
    #[serde(rename = "nome")]
    pub name: String,
    /// Email address.
    pub email: String,
    /// Role.
    pub role: Role,
}

#[derive(Debug, Clone)]
struct SessionState {
    token: String,
    user: UserProfile,
}

/// Holds the bearer token and user profile for the current session.
///
/// Interior mutability lets the HTTP layer invalidate the session from a
/// shared reference when the server answers 401.
#[derive(Debug, Default)]
pub struct Session {
    state: RwLock<Option<SessionState>>,
}

impl Session {
    /// Creates an unauthenticated session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs a token and profile after a successful login or registration.
    pub fn authenticate(&self, token: String, user: UserProfile) {
        let mut state = self.state.write().unwrap_or_else(std::sync::PoisonError::into_inner);
        *state = Some(SessionState { token, user });
    }

    /// Replaces the stored profile, keeping the token.
    ///
    /// No-op when the session is not authenticated.
    pub fn update_user(&self, user: UserProfile) {
        let mut state = self.state.write().unwrap_or_else(std::sync::PoisonError::into_inner);
        if let Some(current) = state.as_mut() {
            current.user = user;
        }
    }

    /// Tears the session down.
    pub fn invalidate(&self) {
        let mut state = self.state.write().unwrap_or_else(std::sync::PoisonError::into_inner);
        if state.take().is_some() {
            tracing::debug!("session invalidated");
        }
    }

    /// Returns the bearer token, if authenticated.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        let state = self.state.read().unwrap_or_else(std::sync::PoisonError::into_inner);
        state.as_ref().map(|s| s.token.clone())
    }

    /// Returns the stored user profile, if authenticated.
    #[must_use]
    pub fn user(&self) -> Option<UserProfile> {
        let state = self.state.read().unwrap_or_else(std::sync::PoisonError::into_inner);
        state.as_ref().map(|s| s.user.clone())
    }

    /// Returns true if a token is present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        let state = self.state.read().unwrap_or_else(std::sync::PoisonError::into_inner);
        state.is_some()
    }
}
