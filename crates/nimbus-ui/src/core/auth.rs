//! Authentication primitives shared across the UI.
//!
//! # Design
//! - Keep session state as plain data so the store can hold and clear it.
//! - The auth provider is an injected [`AuthService`]; forms never talk HTTP.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Organization the signed-in user belongs to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    /// Organization identifier.
    pub id: String,
    /// Display name.
    pub name: String,
}

/// Active user session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSession {
    /// Email address used to sign in.
    pub email: String,
    /// Organization; absent when the user is offline.
    pub organization: Option<Organization>,
}

impl UserSession {
    /// Whether the session is online with an organization attached.
    #[must_use]
    pub const fn has_organization(&self) -> bool {
        self.organization.is_some()
    }
}

/// Failure surfaced by the auth provider.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The provider rejected the credentials.
    #[error("{0}")]
    Rejected(String),
    /// Transport or server failure.
    #[error("could not reach the authentication service: {0}")]
    Request(String),
}

/// Account operations delegated to the authentication provider.
#[async_trait(?Send)]
pub trait AuthService {
    /// Send a password-reset link to `email`.
    async fn forgot_password(&self, email: &str) -> Result<(), AuthError>;

    /// Replace the signed-in user's password.
    async fn change_password(&self, old_password: &str, new_password: &str)
    -> Result<(), AuthError>;
}

#[cfg(test)]
mod tests {
    use super::{AuthError, Organization, UserSession};

    #[test]
    fn offline_session_has_no_organization() {
        let offline = UserSession {
            email: "ada@example.com".to_string(),
            organization: None,
        };
        assert!(!offline.has_organization());
        let online = UserSession {
            organization: Some(Organization {
                id: "org-1".to_string(),
                name: "Analytical Engines".to_string(),
            }),
            ..offline
        };
        assert!(online.has_organization());
    }

    #[test]
    fn rejected_error_shows_provider_message() {
        let err = AuthError::Rejected("Incorrect old password.".to_string());
        assert_eq!(err.to_string(), "Incorrect old password.");
    }
}
