//! Job gateway trait.
//!
//! Defines the interface to the remote job-board API.

use super::model::{Job, JobUpdate, NewJob, SortOrder};
use crate::error::Result;
use crate::task::{AcceptedTask, JobAcceptance};
use async_trait::async_trait;

/// An abstract client for the remote job-board API.
///
/// This trait defines the contract for reading and mutating the job and
/// accepted-task collections, decoupling the views from the concrete HTTP
/// client. Requests carry no credentials; ownership checks in the client
/// are an affordance and the server is the enforcement point.
///
/// # Implementation Notes
///
/// Implementations should:
/// - Treat a `{"success": false}` acknowledgement as an error
/// - Map a 404 on a single-job fetch to `Ok(None)` rather than an error
/// - Never retry; every failure is surfaced to the caller once
#[async_trait]
pub trait JobGateway: Send + Sync {
    /// Fetches the small fixed page of most recently posted jobs.
    async fn latest_jobs(&self) -> Result<Vec<Job>>;

    /// Lists all jobs in the given server-side sort order.
    async fn list_jobs(&self, sort: SortOrder) -> Result<Vec<Job>>;

    /// Fetches a single job by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Job))`: job found
    /// - `Ok(None)`: no job with this id
    /// - `Err(_)`: transport or API failure
    async fn job_by_id(&self, id: &str) -> Result<Option<Job>>;

    /// Creates a new job posting.
    async fn create_job(&self, job: &NewJob) -> Result<()>;

    /// Updates the mutable fields of an existing job.
    async fn update_job(&self, id: &str, update: &JobUpdate) -> Result<()>;

    /// Deletes a job posting.
    async fn delete_job(&self, id: &str) -> Result<()>;

    /// Lists the jobs posted by the given owner email.
    async fn jobs_by_owner(&self, email: &str) -> Result<Vec<Job>>;

    /// Records a job acceptance.
    async fn accept_job(&self, acceptance: &JobAcceptance) -> Result<()>;

    /// Lists the tasks accepted by the given email.
    async fn accepted_tasks(&self, email: &str) -> Result<Vec<AcceptedTask>>;

    /// Removes an accepted task.
    ///
    /// Both "done" and "cancel" resolve to this one call; the remote API
    /// exposes no way to distinguish completion from abandonment.
    async fn remove_accepted_task(&self, id: &str) -> Result<()>;
}
