//! Accepted-tasks view: listing plus the Done and Cancel actions.
//!
//! Done and Cancel both resolve to the same delete call; the remote API
//! exposes no payload that could distinguish completion from abandonment.
//! Only the success wording differs.

use gigboard_core::job::JobGateway;
use gigboard_core::task::AcceptedTask;
use gigboard_core::view::{Notice, Notifier, ResourceState};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::error;

pub struct AcceptedTasksView {
    gateway: Arc<dyn JobGateway>,
    notifier: Arc<dyn Notifier>,
    state: ResourceState<Vec<AcceptedTask>>,
    /// Task ids with a removal in flight, one indicator per record.
    in_flight: HashSet<String>,
}

impl AcceptedTasksView {
    pub fn new(gateway: Arc<dyn JobGateway>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            gateway,
            notifier,
            state: ResourceState::new(),
            in_flight: HashSet::new(),
        }
    }

    /// Loads the tasks accepted by `email`.
    pub async fn refresh(&mut self, email: &str) {
        self.state.begin();
        match self.gateway.accepted_tasks(email).await {
            Ok(tasks) => self.state.loaded(tasks),
            Err(e) => {
                error!(error = %e, "failed to load accepted tasks");
                self.state.failed();
                self.notifier
                    .notify(Notice::error("Failed to load accepted tasks"));
            }
        }
    }

    pub fn tasks(&self) -> &[AcceptedTask] {
        self.state.get().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn is_busy(&self, id: &str) -> bool {
        self.in_flight.contains(id)
    }

    /// Marks a task as done.
    pub async fn mark_done(&mut self, id: &str) {
        self.remove_task(id, "Task marked as Done!").await;
    }

    /// Cancels a task.
    pub async fn cancel(&mut self, id: &str) {
        self.remove_task(id, "Task cancelled successfully").await;
    }

    async fn remove_task(&mut self, id: &str, success_message: &str) {
        let known = self
            .state
            .get()
            .is_some_and(|tasks| tasks.iter().any(|task| task.id == id));
        if !known {
            self.notifier
                .notify(Notice::error("No such accepted task"));
            return;
        }

        self.in_flight.insert(id.to_string());
        let result = self.gateway.remove_accepted_task(id).await;
        self.in_flight.remove(id);

        match result {
            Ok(()) => {
                if let Some(tasks) = self.state.get_mut() {
                    tasks.retain(|task| task.id != id);
                }
                self.notifier.notify(Notice::success(success_message));
            }
            Err(e) => {
                error!(error = %e, id, "failed to remove accepted task");
                self.notifier
                    .notify(Notice::error("Failed to update task"));
            }
        }
    }
}
