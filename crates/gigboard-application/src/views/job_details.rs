//! Job details view: single-job fetch plus the accept action.

use gigboard_core::identity::UserIdentity;
use gigboard_core::job::{Job, JobGateway};
use gigboard_core::ownership::is_owner;
use gigboard_core::task::JobAcceptance;
use gigboard_core::view::{Notice, Notifier, ResourceState};
use std::sync::Arc;
use tracing::error;

pub struct JobDetailsView {
    gateway: Arc<dyn JobGateway>,
    notifier: Arc<dyn Notifier>,
    state: ResourceState<Job>,
}

impl JobDetailsView {
    pub fn new(gateway: Arc<dyn JobGateway>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            gateway,
            notifier,
            state: ResourceState::new(),
        }
    }

    /// Fetches the job. A missing record yields the dedicated not-found
    /// state; the caller offers a manual back action from there.
    pub async fn load(&mut self, id: &str) {
        self.state.begin();
        match self.gateway.job_by_id(id).await {
            Ok(Some(job)) => self.state.loaded(job),
            Ok(None) => self.state.not_found(),
            Err(e) => {
                error!(error = %e, id, "failed to load job");
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

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// Whether the viewer owns the loaded job. Used to substitute the
    /// accept action with an explanatory notice in the rendering.
    pub fn viewer_owns(&self, user: Option<&UserIdentity>) -> bool {
        self.state
            .get()
            .map(|job| is_owner(job, user))
            .unwrap_or(false)
    }

    /// Accepts the loaded job as the given user.
    ///
    /// Owner acceptance is rejected before any request is sent.
    pub async fn accept(&mut self, user: Option<&UserIdentity>) {
        let Some(job) = self.state.get().cloned() else {
            self.notifier.notify(Notice::info("No job loaded"));
            return;
        };

        if is_owner(&job, user) {
            self.notifier
                .notify(Notice::error("You cannot accept your own job!"));
            return;
        }

        let Some(user) = user else {
            self.notifier
                .notify(Notice::error("Sign in to accept jobs"));
            return;
        };

        let acceptance = JobAcceptance::new(&job, user);
        match self.gateway.accept_job(&acceptance).await {
            Ok(()) => {
                self.notifier
                    .notify(Notice::success("Job accepted successfully!"));
            }
            Err(e) => {
                error!(error = %e, job_id = %job.id, "failed to accept job");
                self.notifier.notify(Notice::error("Failed to accept job"));
            }
        }
    }
}
