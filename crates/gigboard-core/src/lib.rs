pub mod config;
pub mod error;
pub mod identity;
pub mod job;
pub mod ownership;
pub mod route;
pub mod session;
pub mod task;
pub mod view;

// Re-export common error type
pub use error::GigboardError;
pub use error::Result;
