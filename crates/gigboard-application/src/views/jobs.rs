//! Jobs list view with server-delegated sorting.

use gigboard_core::job::{Job, JobGateway, SortOrder};
use gigboard_core::view::{Notice, Notifier, ResourceState};
use std::sync::Arc;
use tracing::error;

pub struct JobsView {
    gateway: Arc<dyn JobGateway>,
    notifier: Arc<dyn Notifier>,
    sort: SortOrder,
    state: ResourceState<Vec<Job>>,
}

impl JobsView {
    pub fn new(gateway: Arc<dyn JobGateway>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            gateway,
            notifier,
            sort: SortOrder::default(),
            state: ResourceState::new(),
        }
    }

    /// Issues the primary read with the current sort parameter.
    pub async fn refresh(&mut self) {
        self.state.begin();
        match self.gateway.list_jobs(self.sort).await {
            Ok(jobs) => self.state.loaded(jobs),
            Err(e) => {
                error!(error = %e, "failed to load jobs");
                self.state.failed();
                self.notifier.notify(Notice::error("Failed to load jobs"));
            }
        }
    }

    /// Flips the sort order and refetches. Sorting is server-delegated, so
    /// this never re-orders local state.
    pub async fn toggle_sort(&mut self) {
        self.sort = self.sort.toggled();
        self.refresh().await;
    }

    pub fn sort(&self) -> SortOrder {
        self.sort
    }

    pub fn jobs(&self) -> &[Job] {
        self.state.get().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::test_support::{MockGateway, RecordingNotifier, job};

    #[tokio::test]
    async fn test_initial_sort_is_newest() {
        let gateway = MockGateway::with_jobs(vec![job("j1", "Landing page", "a@example.com")]);
        let notifier = RecordingNotifier::new();
        let mut view = JobsView::new(gateway.clone(), notifier);

        view.refresh().await;
        assert_eq!(view.sort(), SortOrder::Newest);
        assert_eq!(gateway.calls(), vec!["list_jobs sort=newest"]);
    }

    #[tokio::test]
    async fn test_double_toggle_returns_to_newest() {
        let gateway = MockGateway::with_jobs(vec![]);
        let notifier = RecordingNotifier::new();
        let mut view = JobsView::new(gateway.clone(), notifier);

        view.refresh().await;
        view.toggle_sort().await;
        view.toggle_sort().await;

        assert_eq!(view.sort(), SortOrder::Newest);
        // Two additional reads with differing sort parameters
        assert_eq!(
            gateway.calls(),
            vec![
                "list_jobs sort=newest",
                "list_jobs sort=oldest",
                "list_jobs sort=newest",
            ]
        );
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_prior_list() {
        let gateway = MockGateway::with_jobs(vec![job("j1", "Landing page", "a@example.com")]);
        let notifier = RecordingNotifier::new();
        let mut view = JobsView::new(gateway.clone(), notifier);

        view.refresh().await;
        gateway.set_failing(true);
        view.toggle_sort().await;

        assert_eq!(view.jobs().len(), 1);
        // The sort parameter still flipped; only the data is stale
        assert_eq!(view.sort(), SortOrder::Oldest);
    }
}
