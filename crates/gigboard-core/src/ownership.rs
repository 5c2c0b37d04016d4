//! Ownership policy.
//!
//! The one rule the whole mutation surface hangs off: a user owns a record
//! iff they are present and their email equals the record's owner email.

use crate::identity::UserIdentity;
use crate::job::Job;

/// A record with an owning email.
pub trait OwnedRecord {
    fn owner_email(&self) -> &str;
}

impl OwnedRecord for Job {
    fn owner_email(&self) -> &str {
        &self.owner_email
    }
}

/// Returns true iff `user` is present and its email equals the record's
/// owner email.
///
/// An absent user (session not yet resolved, or signed out) never owns
/// anything; this keeps mutating actions disabled until the session is
/// confirmed.
pub fn is_owner(record: &impl OwnedRecord, user: Option<&UserIdentity>) -> bool {
    match user {
        Some(user) => user.email == record.owner_email(),
        None => false,
    }
}
