//! Update-job form view: prefetch, edit the four mutable fields, submit.

use super::add_job::JobDraft;
use gigboard_core::job::{Job, JobGateway, JobUpdate};
use gigboard_core::view::{Notice, Notifier, ResourceState};
use std::sync::Arc;
use tracing::error;

pub struct UpdateJobView {
    gateway: Arc<dyn JobGateway>,
    notifier: Arc<dyn Notifier>,
    state: ResourceState<Job>,
}

impl UpdateJobView {
    pub fn new(gateway: Arc<dyn JobGateway>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            gateway,
            notifier,
            state: ResourceState::new(),
        }
    }

    /// Prefetches the job so the form can present current values.
    pub async fn load(&mut self, id: &str) {
        self.state.begin();
        match self.gateway.job_by_id(id).await {
            Ok(Some(job)) => self.state.loaded(job),
            Ok(None) => self.state.not_found(),
            Err(e) => {
                error!(error = %e, id, "failed to load job for update");
                self.state.failed();
                self.notifier.notify(Notice::error("Failed to load job"));
            }
        }
    }

    pub fn job(&self) -> Option<&Job> {
        self.state.get()
    }

    pub fn is_missing(&self) -> bool {
        self.state.is_missing()
    }

    /// A draft prefilled with the loaded job's current values.
    pub fn draft(&self) -> Option<JobDraft> {
        self.state.get().map(|job| JobDraft {
            title: job.title.clone(),
            category: job.category.clone(),
            summary: job.summary.clone(),
            cover_image: job.cover_image.clone(),
        })
    }

    /// Validates and submits the edited fields.
    ///
    /// Returns true on success; the caller then navigates back to the
    /// my-posted-jobs view.
    pub async fn submit(&mut self, draft: &JobDraft) -> bool {
        let Some(job_id) = self.state.get().map(|job| job.id.clone()) else {
            self.notifier.notify(Notice::info("No job loaded"));
            return false;
        };

        if let Some(message) = draft.first_missing_field() {
            self.notifier.notify(Notice::error(message));
            return false;
        }

        let update = JobUpdate {
            title: draft.title.clone(),
            category: draft.category.clone(),
            summary: draft.summary.clone(),
            cover_image: draft.cover_image.clone(),
        };

        match self.gateway.update_job(&job_id, &update).await {
            Ok(()) => {
                if let Some(job) = self.state.get_mut() {
                    job.apply_update(&update);
                }
                self.notifier
                    .notify(Notice::success("Job updated successfully!"));
                true
            }
            Err(e) => {
                error!(error = %e, job_id, "failed to update job");
                self.notifier.notify(Notice::error("Failed to update job"));
                false
            }
        }
    }
}
