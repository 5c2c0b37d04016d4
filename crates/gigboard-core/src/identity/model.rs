//! User identity value objects.
//!
//! The identity provider owns these records; the rest of the client treats
//! them as read-only.

use serde::{Deserialize, Serialize};

/// The signed-in user as reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    /// Email address, also the ownership key for posted jobs.
    pub email: String,
    /// Human-readable display name.
    pub display_name: String,
    /// URL of the profile photo.
    pub photo_url: String,
}

impl UserIdentity {
    /// Creates a new user identity.
    pub fn new(
        email: impl Into<String>,
        display_name: impl Into<String>,
        photo_url: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            display_name: display_name.into(),
            photo_url: photo_url.into(),
        }
    }
}

/// Registration payload for a new account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAccount {
    pub email: String,
    pub password: String,
    pub display_name: String,
    pub photo_url: Option<String>,
}

/// A signed-in user together with the opaque session token the provider
/// issued for it.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub token: String,
    pub user: UserIdentity,
}

/// The session token cached on disk so a restart can resume the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredCredentials {
    /// Opaque provider token.
    pub token: String,
    /// Email the token was issued for, kept for log readability only.
    pub email: String,
}
