//! On-disk cache for the identity-provider session token.

use crate::paths::GigboardPaths;
use crate::storage::atomic_toml::AtomicTomlFile;
use async_trait::async_trait;
use gigboard_core::Result;
use gigboard_core::identity::{CredentialStore, StoredCredentials};
use std::path::PathBuf;
use tracing::debug;

/// File-backed [`CredentialStore`] over `session.toml`.
///
/// Stores at most one credential set; writing replaces, clearing removes
/// the file. The file is restricted to 0600 after every write.
pub struct FileCredentialStore {
    file: AtomicTomlFile<StoredCredentials>,
}

impl FileCredentialStore {
    /// Creates a store over the default platform session file.
    pub fn new_default() -> Result<Self> {
        Ok(Self::new(GigboardPaths::session_file()?))
    }

    /// Creates a store over an explicit path (used by tests).
    pub fn new(path: PathBuf) -> Self {
        Self {
            file: AtomicTomlFile::new(path),
        }
    }

    fn restrict_permissions(&self) -> Result<()> {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if self.file.path().exists() {
                let permissions = std::fs::Permissions::from_mode(0o600);
                std::fs::set_permissions(self.file.path(), permissions)?;
            }
        }
        Ok(())
    }
}

#[async_trait]
impl CredentialStore for FileCredentialStore {
    async fn load(&self) -> Result<Option<StoredCredentials>> {
        self.file.load()
    }

    async fn store(&self, credentials: &StoredCredentials) -> Result<()> {
        self.file.save(credentials)?;
        self.restrict_permissions()?;
        debug!(email = %credentials.email, "cached session token");
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        self.file.remove()?;
        debug!("cleared cached session token");
        Ok(())
    }
}
