//! Configuration service implementation.
//!
//! Loads the client configuration from `config.toml` under the gigboard
//! config directory, creating it with defaults on first run.

use crate::paths::GigboardPaths;
use crate::storage::atomic_toml::AtomicTomlFile;
use gigboard_core::config::ClientConfig;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};
use tracing::warn;

/// Configuration service that loads and caches the client configuration.
///
/// The configuration is read once and cached to avoid repeated file I/O;
/// environment overrides are applied after every load.
#[derive(Clone)]
pub struct ConfigService {
    /// Cached configuration loaded from file.
    /// Uses RwLock for thread-safe lazy loading.
    config: Arc<RwLock<Option<ClientConfig>>>,
    path: Option<PathBuf>,
}

impl ConfigService {
    /// Creates a new ConfigService over the default config file.
    ///
    /// The configuration is loaded lazily on first access.
    pub fn new() -> Self {
        Self {
            config: Arc::new(RwLock::new(None)),
            path: None,
        }
    }

    /// Creates a service over an explicit config path (used by tests).
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            config: Arc::new(RwLock::new(None)),
            path: Some(path),
        }
    }

    /// Gets the client configuration, loading from file if not cached.
    pub fn get_config(&self) -> ClientConfig {
        {
            let read_lock = self.config.read().unwrap();
            if let Some(ref cached) = *read_lock {
                return cached.clone();
            }
        }

        let loaded = self
            .load_config()
            .unwrap_or_else(|e| {
                warn!(error = %e, "failed to load config.toml, using defaults");
                ClientConfig::default()
            })
            .with_env_overrides();

        {
            let mut write_lock = self.config.write().unwrap();
            *write_lock = Some(loaded.clone());
        }

        loaded
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        let mut write_lock = self.config.write().unwrap();
        *write_lock = None;
    }

    /// Loads the configuration file, creating it with defaults if missing.
    fn load_config(&self) -> gigboard_core::Result<ClientConfig> {
        let path = match &self.path {
            Some(path) => path.clone(),
            None => GigboardPaths::config_file()?,
        };

        let file = AtomicTomlFile::<ClientConfig>::new(path);
        match file.load()? {
            Some(config) => Ok(config),
            None => {
                let default_config = ClientConfig::default();
                file.save(&default_config)?;
                Ok(default_config)
            }
        }
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}
