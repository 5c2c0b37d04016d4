//! Resource views: one controller per screen.
//!
//! Every view follows the same request/mutation contract: one primary read
//! per mount or dependency change, wholesale state replacement on success,
//! prior state retained plus a transient notice on failure, a confirmation
//! step before delete-class actions, and no automatic retry anywhere.

pub mod accepted_tasks;
pub mod add_job;
pub mod home;
pub mod job_details;
pub mod jobs;
pub mod my_jobs;
pub mod update_job;

#[cfg(test)]
pub(crate) mod test_support;

pub use accepted_tasks::AcceptedTasksView;
pub use add_job::{AddJobView, JobDraft};
pub use home::HomeView;
pub use job_details::JobDetailsView;
pub use jobs::JobsView;
pub use my_jobs::MyPostedJobsView;
pub use update_job::UpdateJobView;
