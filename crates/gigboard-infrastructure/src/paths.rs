//! Unified path management for gigboard's on-disk files.
//!
//! All configuration and the cached session live under the platform config
//! directory, resolved via the `dirs` crate:
//!
//! ```text
//! ~/.config/gigboard/          # Linux (platform-appropriate elsewhere)
//! ├── config.toml              # Client configuration
//! └── session.toml             # Cached identity-provider session token
//! ```

use gigboard_core::{GigboardError, Result};
use std::path::PathBuf;

/// Unified path management for gigboard.
pub struct GigboardPaths;

impl GigboardPaths {
    /// Returns the gigboard configuration directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: e.g. `~/.config/gigboard/`
    /// - `Err(_)`: the platform config directory could not be determined
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("gigboard"))
            .ok_or_else(|| GigboardError::config("Cannot find platform config directory"))
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the path to the cached session file.
    ///
    /// # Security Note
    ///
    /// The file holds an identity-provider token; the credential store
    /// restricts it to 0600 after every write.
    pub fn session_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("session.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_dir() {
        let config_dir = GigboardPaths::config_dir().unwrap();
        assert!(config_dir.ends_with("gigboard"));
    }

    #[test]
    fn test_config_file() {
        let config_file = GigboardPaths::config_file().unwrap();
        assert!(config_file.ends_with("config.toml"));
        let config_dir = GigboardPaths::config_dir().unwrap();
        assert!(config_file.starts_with(&config_dir));
    }

    #[test]
    fn test_session_file() {
        let session_file = GigboardPaths::session_file().unwrap();
        assert!(session_file.ends_with("session.toml"));
        let config_dir = GigboardPaths::config_dir().unwrap();
        assert!(session_file.starts_with(&config_dir));
    }
}
