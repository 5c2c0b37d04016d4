//! Identity domain: the user model and the seams to the external
//! identity provider and the local credential cache.

pub mod model;
pub mod provider;

pub use model::{AuthenticatedUser, NewAccount, StoredCredentials, UserIdentity};
pub use provider::{CredentialStore, IdentityProvider};
