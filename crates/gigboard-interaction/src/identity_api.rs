//! HttpIdentityProvider - reqwest implementation of the identity service
//! client.
//!
//! Sign-in and sign-up yield an opaque bearer token; session resumption
//! presents that token and maps a 401 to "no user" rather than an error,
//! so a dead cached token resolves to signed-out at startup.

use crate::dto::{AckDto, AuthResponseDto, LoginRequestDto, RegisterRequestDto, UserDto};
use async_trait::async_trait;
use gigboard_core::identity::{AuthenticatedUser, IdentityProvider, NewAccount, UserIdentity};
use gigboard_core::{GigboardError, Result};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::debug;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Reqwest-backed implementation of [`IdentityProvider`].
#[derive(Clone)]
pub struct HttpIdentityProvider {
    client: Client,
    base_url: String,
}

impl HttpIdentityProvider {
    /// Creates a provider client for the given identity service base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn auth_error(response: reqwest::Response) -> GigboardError {
        let status = response.status();
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        GigboardError::auth(format!("Identity service error ({}): {}", status, error_text))
    }
}

#[async_trait]
impl IdentityProvider for HttpIdentityProvider {
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthenticatedUser> {
        debug!(email, "signing in");
        let body = LoginRequestDto {
            email: email.to_string(),
            password: password.to_string(),
        };

        let response = self
            .client
            .post(self.url("/auth/login"))
            .json(&body)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::auth_error(response).await);
        }

        let auth: AuthResponseDto = response.json().await?;
        Ok(AuthenticatedUser {
            token: auth.token,
            user: auth.user.into(),
        })
    }

    async fn sign_up(&self, account: &NewAccount) -> Result<AuthenticatedUser> {
        debug!(email = %account.email, "registering account");
        let body = RegisterRequestDto::from(account);

        let response = self
            .client
            .post(self.url("/auth/register"))
            .json(&body)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::auth_error(response).await);
        }

        let auth: AuthResponseDto = response.json().await?;
        Ok(AuthenticatedUser {
            token: auth.token,
            user: auth.user.into(),
        })
    }

    async fn resume(&self, token: &str) -> Result<Option<UserIdentity>> {
        let response = self
            .client
            .get(self.url("/auth/session"))
            .bearer_auth(token)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            // Dead token: signed out, not an error
            debug!("cached session token rejected");
            return Ok(None);
        }
        if !status.is_success() {
            return Err(Self::auth_error(response).await);
        }

        let user: UserDto = response.json().await?;
        Ok(Some(user.into()))
    }

    async fn sign_out(&self, token: &str) -> Result<()> {
        let response = self
            .client
            .post(self.url("/auth/logout"))
            .bearer_auth(token)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::auth_error(response).await);
        }

        let ack: AckDto = response.json().await?;
        if !ack.success {
            return Err(GigboardError::auth("Identity service rejected sign-out"));
        }
        Ok(())
    }
}
