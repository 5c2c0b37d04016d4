//! My-posted-jobs view: listing, per-job delete with confirmation.
//!
//! The remote API already filters this list to the current user, which is
//! what implicitly gates edit/delete to the owner here.

use gigboard_core::job::{Job, JobGateway};
use gigboard_core::view::{ConfirmPrompt, Notice, Notifier, ResourceState};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::error;

pub struct MyPostedJobsView {
    gateway: Arc<dyn JobGateway>,
    notifier: Arc<dyn Notifier>,
    confirm: Arc<dyn ConfirmPrompt>,
    state: ResourceState<Vec<Job>>,
    /// Job ids with a delete in flight; deletes for different jobs may be
    /// issued back-to-back, each with its own indicator.
    deleting: HashSet<String>,
}

impl MyPostedJobsView {
    pub fn new(
        gateway: Arc<dyn JobGateway>,
        notifier: Arc<dyn Notifier>,
        confirm: Arc<dyn ConfirmPrompt>,
    ) -> Self {
        Self {
            gateway,
            notifier,
            confirm,
            state: ResourceState::new(),
            deleting: HashSet::new(),
        }
    }

    /// Loads the jobs posted by `email`.
    pub async fn refresh(&mut self, email: &str) {
        self.state.begin();
        match self.gateway.jobs_by_owner(email).await {
            Ok(jobs) => self.state.loaded(jobs),
            Err(e) => {
                error!(error = %e, "failed to load posted jobs");
                self.state.failed();
                self.notifier
                    .notify(Notice::error("Failed to load your posted jobs"));
            }
        }
    }

    pub fn jobs(&self) -> &[Job] {
        self.state.get().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn is_deleting(&self, id: &str) -> bool {
        self.deleting.contains(id)
    }

    /// Deletes one posted job after explicit confirmation.
    ///
    /// On success exactly the confirmed record is removed from the local
    /// list; on failure the list is unchanged.
    pub async fn delete(&mut self, id: &str) {
        let Some(job) = self
            .state
            .get()
            .and_then(|jobs| jobs.iter().find(|job| job.id == id))
            .cloned()
        else {
            self.notifier
                .notify(Notice::error("No such job in your posted list"));
            return;
        };

        let prompt = format!("Are you sure you want to delete \"{}\"?", job.title);
        if !self.confirm.confirm(&prompt) {
            return;
        }

        self.deleting.insert(id.to_string());
        let result = self.gateway.delete_job(id).await;
        self.deleting.remove(id);

        match result {
            Ok(()) => {
                if let Some(jobs) = self.state.get_mut() {
                    jobs.retain(|job| job.id != id);
                }
                self.notifier
                    .notify(Notice::success("Job deleted successfully!"));
            }
            Err(e) => {
                error!(error = %e, id, "failed to delete job");
                self.notifier.notify(Notice::error("Failed to delete job"));
            }
        }
    }
}
