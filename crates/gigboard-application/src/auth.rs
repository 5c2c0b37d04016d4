//! AuthSession - the Identity Provider Adapter.
//!
//! Owns the single process-wide session: it talks to the identity provider,
//! caches the session token through the credential store, and publishes
//! `Session` snapshots over a watch channel so every navigation sees the
//! current state. The session starts in the loading state and resolves once
//! startup restoration has run.

use gigboard_core::Result;
use gigboard_core::identity::{
    AuthenticatedUser, CredentialStore, IdentityProvider, NewAccount, StoredCredentials,
    UserIdentity,
};
use gigboard_core::session::Session;
use std::sync::Arc;
use tokio::sync::{RwLock, watch};
use tracing::{debug, warn};

/// The Identity Provider Adapter.
///
/// A single instance is created at startup and injected into everything
/// that needs session state; there is no ambient lookup.
pub struct AuthSession {
    provider: Arc<dyn IdentityProvider>,
    store: Arc<dyn CredentialStore>,
    tx: watch::Sender<Session>,
    token: RwLock<Option<String>>,
}

impl AuthSession {
    /// Creates the adapter in the loading state.
    ///
    /// Call [`AuthSession::restore`] (typically from a spawned task) to
    /// resolve the session; until then `is_session_loading()` is true.
    pub fn new(provider: Arc<dyn IdentityProvider>, store: Arc<dyn CredentialStore>) -> Self {
        let (tx, _rx) = watch::channel(Session::loading());
        Self {
            provider,
            store,
            tx,
            token: RwLock::new(None),
        }
    }

    /// Subscribes to session snapshots.
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.tx.subscribe()
    }

    /// Returns the current session snapshot.
    pub fn snapshot(&self) -> Session {
        self.tx.borrow().clone()
    }

    /// Returns the signed-in user, or `None`.
    pub fn current_user(&self) -> Option<UserIdentity> {
        self.tx.borrow().user.clone()
    }

    /// True until the provider has confirmed session state at least once.
    pub fn is_session_loading(&self) -> bool {
        self.tx.borrow().is_loading()
    }

    /// Resolves the startup session from the cached token, if any.
    ///
    /// Every failure along the way (unreadable cache, transport failure,
    /// rejected token) resolves to "no user"; nothing here is surfaced as
    /// an error to the UI.
    pub async fn restore(&self) {
        match self.try_restore().await {
            Some((token, user)) => {
                debug!(email = %user.email, "session restored");
                *self.token.write().await = Some(token);
                let _ = self.tx.send(Session::signed_in(user));
            }
            None => {
                let _ = self.tx.send(Session::signed_out());
            }
        }
    }

    async fn try_restore(&self) -> Option<(String, UserIdentity)> {
        let credentials = match self.store.load().await {
            Ok(Some(credentials)) => credentials,
            Ok(None) => return None,
            Err(e) => {
                warn!(error = %e, "failed to read cached session, treating as signed out");
                return None;
            }
        };

        match self.provider.resume(&credentials.token).await {
            Ok(Some(user)) => Some((credentials.token, user)),
            Ok(None) => {
                // Dead token: drop the cache so the next start skips it
                if let Err(e) = self.store.clear().await {
                    warn!(error = %e, "failed to clear dead session token");
                }
                None
            }
            Err(e) => {
                warn!(error = %e, "session resumption failed, treating as signed out");
                None
            }
        }
    }

    /// Signs in and publishes the new session.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<UserIdentity> {
        let authenticated = self.provider.sign_in(email, password).await?;
        self.adopt(authenticated).await
    }

    /// Registers a new account, signs it in, and publishes the new session.
    pub async fn sign_up(&self, account: &NewAccount) -> Result<UserIdentity> {
        let authenticated = self.provider.sign_up(account).await?;
        self.adopt(authenticated).await
    }

    async fn adopt(&self, authenticated: AuthenticatedUser) -> Result<UserIdentity> {
        let AuthenticatedUser { token, user } = authenticated;

        // A failed cache write does not fail the sign-in; the session just
        // will not survive a restart.
        let credentials = StoredCredentials {
            token: token.clone(),
            email: user.email.clone(),
        };
        if let Err(e) = self.store.store(&credentials).await {
            warn!(error = %e, "failed to cache session token");
        }

        *self.token.write().await = Some(token);
        let _ = self.tx.send(Session::signed_in(user.clone()));
        Ok(user)
    }

    /// Signs out at the provider and clears the session.
    ///
    /// On provider failure the session state is left unchanged and the
    /// error is returned to the caller (logged, not retried).
    pub async fn sign_out(&self) -> Result<()> {
        let token = self.token.read().await.clone();

        if let Some(token) = token {
            if let Err(e) = self.provider.sign_out(&token).await {
                warn!(error = %e, "sign-out failed, session unchanged");
                return Err(e);
            }
        }

        if let Err(e) = self.store.clear().await {
            warn!(error = %e, "failed to clear cached session token");
        }
        *self.token.write().await = None;
        let _ = self.tx.send(Session::signed_out());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use gigboard_core::GigboardError;
    use std::sync::Mutex;

    struct MockProvider {
        resume_result: Mutex<Result<Option<UserIdentity>>>,
        sign_out_fails: bool,
    }

    impl MockProvider {
        fn resuming(user: Option<UserIdentity>) -> Self {
            Self {
                resume_result: Mutex::new(Ok(user)),
                sign_out_fails: false,
            }
        }

        fn failing_resume() -> Self {
            Self {
                resume_result: Mutex::new(Err(GigboardError::http("connection refused"))),
                sign_out_fails: false,
            }
        }
    }

    #[async_trait]
    impl IdentityProvider for MockProvider {
        async fn sign_in(&self, email: &str, _password: &str) -> Result<AuthenticatedUser> {
            Ok(AuthenticatedUser {
                token: "fresh-token".to_string(),
                user: UserIdentity::new(email, "Tester", ""),
            })
        }

        async fn sign_up(&self, account: &NewAccount) -> Result<AuthenticatedUser> {
            Ok(AuthenticatedUser {
                token: "fresh-token".to_string(),
                user: UserIdentity::new(&account.email, &account.display_name, ""),
            })
        }

        async fn resume(&self, _token: &str) -> Result<Option<UserIdentity>> {
            self.resume_result.lock().unwrap().clone()
        }

        async fn sign_out(&self, _token: &str) -> Result<()> {
            if self.sign_out_fails {
                Err(GigboardError::auth("provider unavailable"))
            } else {
                Ok(())
            }
        }
    }

    #[derive(Default)]
    struct MockStore {
        credentials: Mutex<Option<StoredCredentials>>,
    }

    impl MockStore {
        fn holding(token: &str, email: &str) -> Self {
            Self {
                credentials: Mutex::new(Some(StoredCredentials {
                    token: token.to_string(),
                    email: email.to_string(),
                })),
            }
        }
    }

    #[async_trait]
    impl CredentialStore for MockStore {
        async fn load(&self) -> Result<Option<StoredCredentials>> {
            Ok(self.credentials.lock().unwrap().clone())
        }

        async fn store(&self, credentials: &StoredCredentials) -> Result<()> {
            *self.credentials.lock().unwrap() = Some(credentials.clone());
            Ok(())
        }

        async fn clear(&self) -> Result<()> {
            *self.credentials.lock().unwrap() = None;
            Ok(())
        }
    }

    fn user() -> UserIdentity {
        UserIdentity::new("a@example.com", "Alice", "")
    }

    #[tokio::test]
    async fn test_starts_loading() {
        let auth = AuthSession::new(
            Arc::new(MockProvider::resuming(None)),
            Arc::new(MockStore::default()),
        );
        assert!(auth.is_session_loading());
        assert!(auth.current_user().is_none());
    }

    #[tokio::test]
    async fn test_restore_with_valid_token() {
        let auth = AuthSession::new(
            Arc::new(MockProvider::resuming(Some(user()))),
            Arc::new(MockStore::holding("tok", "a@example.com")),
        );
        auth.restore().await;
        assert!(!auth.is_session_loading());
        assert_eq!(auth.current_user(), Some(user()));
    }

    #[tokio::test]
    async fn test_restore_with_dead_token_clears_cache() {
        let store = Arc::new(MockStore::holding("dead", "a@example.com"));
        let auth = AuthSession::new(Arc::new(MockProvider::resuming(None)), store.clone());
        auth.restore().await;
        assert!(!auth.is_session_loading());
        assert!(auth.current_user().is_none());
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_restore_failure_is_signed_out_not_error() {
        let auth = AuthSession::new(
            Arc::new(MockProvider::failing_resume()),
            Arc::new(MockStore::holding("tok", "a@example.com")),
        );
        auth.restore().await;
        assert!(!auth.is_session_loading());
        assert!(auth.current_user().is_none());
    }

    #[tokio::test]
    async fn test_restore_without_cached_token() {
        let auth = AuthSession::new(
            Arc::new(MockProvider::resuming(Some(user()))),
            Arc::new(MockStore::default()),
        );
        auth.restore().await;
        assert!(auth.current_user().is_none());
    }

    #[tokio::test]
    async fn test_sign_in_publishes_and_caches() {
        let store = Arc::new(MockStore::default());
        let auth = AuthSession::new(Arc::new(MockProvider::resuming(None)), store.clone());
        let mut rx = auth.subscribe();

        let user = auth.sign_in("a@example.com", "pw").await.unwrap();
        assert_eq!(user.email, "a@example.com");
        assert_eq!(auth.current_user(), Some(user));

        let cached = store.load().await.unwrap().unwrap();
        assert_eq!(cached.token, "fresh-token");

        rx.changed().await.unwrap();
        assert!(rx.borrow().user().is_some());
    }

    #[tokio::test]
    async fn test_sign_out_clears_session() {
        let store = Arc::new(MockStore::default());
        let auth = AuthSession::new(Arc::new(MockProvider::resuming(None)), store.clone());
        auth.sign_in("a@example.com", "pw").await.unwrap();

        auth.sign_out().await.unwrap();
        assert!(auth.current_user().is_none());
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_sign_out_failure_leaves_session_unchanged() {
        let provider = MockProvider {
            resume_result: Mutex::new(Ok(None)),
            sign_out_fails: true,
        };
        let store = Arc::new(MockStore::default());
        let auth = AuthSession::new(Arc::new(provider), store.clone());
        auth.sign_in("a@example.com", "pw").await.unwrap();

        assert!(auth.sign_out().await.is_err());
        // Still signed in, token still cached
        assert!(auth.current_user().is_some());
        assert!(store.load().await.unwrap().is_some());
    }
}
