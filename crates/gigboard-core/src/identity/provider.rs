//! Identity provider and credential cache traits.

use super::model::{AuthenticatedUser, NewAccount, StoredCredentials, UserIdentity};
use crate::error::Result;
use async_trait::async_trait;

/// An abstract client for the external identity service.
///
/// This trait defines the contract for sign-in, sign-up, session resumption
/// and sign-out, decoupling the session adapter from the concrete HTTP
/// client. No retry or token-refresh logic belongs here; the provider is
/// the authority on session validity.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Signs in with an email and password.
    ///
    /// # Returns
    ///
    /// - `Ok(AuthenticatedUser)`: the identity plus a fresh session token
    /// - `Err(_)`: rejected credentials or a transport failure
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthenticatedUser>;

    /// Registers a new account and signs it in.
    async fn sign_up(&self, account: &NewAccount) -> Result<AuthenticatedUser>;

    /// Resumes a cached session token.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(UserIdentity))`: the token is still valid
    /// - `Ok(None)`: the provider rejected the token (dead session)
    /// - `Err(_)`: transport failure; the caller treats this as "no user"
    async fn resume(&self, token: &str) -> Result<Option<UserIdentity>>;

    /// Invalidates a session token at the provider.
    async fn sign_out(&self, token: &str) -> Result<()>;
}

/// An abstract store for the locally cached session token.
///
/// Implementations persist at most one credential set at a time.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Loads the cached credentials, if any.
    async fn load(&self) -> Result<Option<StoredCredentials>>;

    /// Replaces the cached credentials.
    async fn store(&self, credentials: &StoredCredentials) -> Result<()>;

    /// Removes the cached credentials (sign-out or dead token).
    async fn clear(&self) -> Result<()>;
}
