pub mod config_service;
pub mod paths;
pub mod session_store;
pub mod storage;

pub use config_service::ConfigService;
pub use paths::GigboardPaths;
pub use session_store::FileCredentialStore;
pub use storage::atomic_toml::AtomicTomlFile;
