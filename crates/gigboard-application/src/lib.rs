pub mod auth;
pub mod router;
pub mod views;

pub use auth::AuthSession;
pub use router::{NavOutcome, Router};
