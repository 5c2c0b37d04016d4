//! Home view: the small fixed page of latest jobs.

use gigboard_core::job::{Job, JobGateway};
use gigboard_core::view::{Notice, Notifier, ResourceState};
use std::sync::Arc;
use tracing::error;

pub struct HomeView {
    gateway: Arc<dyn JobGateway>,
    notifier: Arc<dyn Notifier>,
    state: ResourceState<Vec<Job>>,
}

impl HomeView {
    pub fn new(gateway: Arc<dyn JobGateway>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            gateway,
            notifier,
            state: ResourceState::new(),
        }
    }

    /// Issues the primary read. On failure the prior list (if any) stays.
    pub async fn refresh(&mut self) {
        self.state.begin();
        match self.gateway.latest_jobs().await {
            Ok(jobs) => self.state.loaded(jobs),
            Err(e) => {
                error!(error = %e, "failed to load latest jobs");
                self.state.failed();
                self.notifier
                    .notify(Notice::error("Failed to load latest jobs"));
            }
        }
    }

    pub fn jobs(&self) -> &[Job] {
        self.state.get().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }
}
