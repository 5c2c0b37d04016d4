//! Client configuration model.

use serde::{Deserialize, Serialize};

const DEFAULT_API_URL: &str = "https://gigboard-server.example.com";
const DEFAULT_IDENTITY_URL: &str = "https://gigboard-identity.example.com";

/// Root configuration for the client, stored as `config.toml` under the
/// platform config directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the remote job-board API.
    pub api_url: String,
    /// Base URL of the identity service.
    pub identity_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            identity_url: DEFAULT_IDENTITY_URL.to_string(),
        }
    }
}

impl ClientConfig {
    /// Applies `GIGBOARD_API_URL` / `GIGBOARD_IDENTITY_URL` environment
    /// overrides on top of the file-backed values.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var("GIGBOARD_API_URL") {
            if !url.is_empty() {
                self.api_url = url;
            }
        }
        if let Ok(url) = std::env::var("GIGBOARD_IDENTITY_URL") {
            if !url.is_empty() {
                self.identity_url = url;
            }
        }
        self
    }
}
