//! Accepted-task domain model.

use crate::identity::UserIdentity;
use crate::job::Job;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A job a non-owner has committed to perform.
///
/// References the Job by id only (lookup-only back-reference); the client
/// never lists a job together with its acceptances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcceptedTask {
    /// Server-assigned identifier of the acceptance record.
    pub id: String,
    /// Id of the accepted job.
    pub job_id: String,
    pub job_title: String,
    pub job_category: String,
    /// Display name of the job's poster.
    pub posted_by: String,
    pub accepted_by_email: String,
    pub accepted_by_name: String,
    pub accepted_date: DateTime<Utc>,
}

/// The payload posted when a non-owner accepts a job.
///
/// The accepted date is assigned server-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobAcceptance {
    pub job_id: String,
    pub job_title: String,
    pub job_category: String,
    pub posted_by: String,
    pub accepted_by_email: String,
    pub accepted_by_name: String,
}

impl JobAcceptance {
    /// Builds the acceptance payload for a job and the accepting user.
    pub fn new(job: &Job, acceptor: &UserIdentity) -> Self {
        Self {
            job_id: job.id.clone(),
            job_title: job.title.clone(),
            job_category: job.category.clone(),
            posted_by: job.posted_by.clone(),
            accepted_by_email: acceptor.email.clone(),
            accepted_by_name: acceptor.display_name.clone(),
        }
    }
}
