//! Add-job form view.

use chrono::Utc;
use gigboard_core::identity::UserIdentity;
use gigboard_core::job::{JobGateway, NewJob};
use gigboard_core::view::{Notice, Notifier};
use std::sync::Arc;
use tracing::error;

/// The four user-entered fields of the add/update forms.
///
/// Poster name and owner email are filled from the signed-in user and are
/// never editable.
#[derive(Debug, Clone, Default)]
pub struct JobDraft {
    pub title: String,
    pub category: String,
    pub summary: String,
    pub cover_image: String,
}

impl JobDraft {
    /// Runs the required-field checks in form order and returns the error
    /// message for the first missing field, if any.
    pub fn first_missing_field(&self) -> Option<&'static str> {
        if self.title.trim().is_empty() {
            return Some("Title is required!");
        }
        if self.category.trim().is_empty() {
            return Some("Category is required!");
        }
        if self.summary.trim().is_empty() {
            return Some("Summary is required!");
        }
        if self.cover_image.trim().is_empty() {
            return Some("Cover image is required!");
        }
        None
    }
}

pub struct AddJobView {
    gateway: Arc<dyn JobGateway>,
    notifier: Arc<dyn Notifier>,
}

impl AddJobView {
    pub fn new(gateway: Arc<dyn JobGateway>, notifier: Arc<dyn Notifier>) -> Self {
        Self { gateway, notifier }
    }

    /// Validates the draft and posts the job.
    ///
    /// Returns true on success so the caller can reset the form.
    pub async fn submit(&self, draft: &JobDraft, user: &UserIdentity) -> bool {
        if let Some(message) = draft.first_missing_field() {
            self.notifier.notify(Notice::error(message));
            return false;
        }

        let job = NewJob {
            title: draft.title.clone(),
            category: draft.category.clone(),
            summary: draft.summary.clone(),
            cover_image: draft.cover_image.clone(),
            posted_by: user.display_name.clone(),
            owner_email: user.email.clone(),
            posted_date: Utc::now(),
        };

        match self.gateway.create_job(&job).await {
            Ok(()) => {
                self.notifier
                    .notify(Notice::success("Job posted successfully!"));
                true
            }
            Err(e) => {
                error!(error = %e, "failed to post job");
                self.notifier.notify(Notice::error("Failed to post job"));
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::test_support::{MockGateway, RecordingNotifier, user};

    fn complete_draft() -> JobDraft {
        JobDraft {
            title: "Landing page".to_string(),
            category: "Web Development".to_string(),
            summary: "Build a landing page".to_string(),
            cover_image: "https://img.example/cover.png".to_string(),
        }
    }

    #[test]
    fn test_required_field_checks_run_in_form_order() {
        let empty = JobDraft::default();
        assert_eq!(empty.first_missing_field(), Some("Title is required!"));

        let mut draft = empty;
        draft.title = "Landing page".to_string();
        assert_eq!(draft.first_missing_field(), Some("Category is required!"));

        draft.category = "Web Development".to_string();
        assert_eq!(draft.first_missing_field(), Some("Summary is required!"));

        draft.summary = "Build it".to_string();
        assert_eq!(draft.first_missing_field(), Some("Cover image is required!"));

        draft.cover_image = "https://img.example/c.png".to_string();
        assert_eq!(draft.first_missing_field(), None);
    }

    #[tokio::test]
    async fn test_missing_field_stops_submission() {
        let gateway = MockGateway::new();
        let notifier = RecordingNotifier::new();
        let view = AddJobView::new(gateway.clone(), notifier.clone());

        let mut draft = complete_draft();
        draft.summary = "  ".to_string();

        assert!(!view.submit(&draft, &user("a@example.com", "Alice")).await);
        // Validation fails before any request
        assert!(gateway.calls().is_empty());
        assert_eq!(notifier.last().unwrap().message, "Summary is required!");
    }

    #[tokio::test]
    async fn test_submit_fills_identity_from_user() {
        let gateway = MockGateway::new();
        let notifier = RecordingNotifier::new();
        let view = AddJobView::new(gateway.clone(), notifier);

        let poster = user("a@example.com", "Alice");
        assert!(view.submit(&complete_draft(), &poster).await);

        let jobs = gateway.jobs.lock().unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].posted_by, "Alice");
        assert_eq!(jobs[0].owner_email, "a@example.com");
    }

    #[tokio::test]
    async fn test_failed_submit_reports_error() {
        let gateway = MockGateway::new();
        gateway.set_failing(true);
        let notifier = RecordingNotifier::new();
        let view = AddJobView::new(gateway, notifier.clone());

        assert!(
            !view
                .submit(&complete_draft(), &user("a@example.com", "Alice"))
                .await
        );
        assert_eq!(notifier.last().unwrap().message, "Failed to post job");
    }
}
