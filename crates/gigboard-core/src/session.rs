//! Session snapshot: the authentication state of the running client.

use crate::identity::UserIdentity;

/// The current authentication state.
///
/// A single process-wide session exists; consumers receive snapshots of it
/// rather than looking state up ambiently. `loading` is true from startup
/// until the identity provider has confirmed session state at least once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user: Option<UserIdentity>,
    pub loading: bool,
}

impl Session {
    /// The startup state: session restoration still in flight.
    pub fn loading() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }

    /// A resolved session with a signed-in user.
    pub fn signed_in(user: UserIdentity) -> Self {
        Self {
            user: Some(user),
            loading: false,
        }
    }

    /// A resolved session with no user.
    pub fn signed_out() -> Self {
        Self {
            user: None,
            loading: false,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn user(&self) -> Option<&UserIdentity> {
        self.user.as_ref()
    }
}
