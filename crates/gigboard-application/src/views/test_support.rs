//! Shared test doubles for the view tests: a call-recording job gateway,
//! a notice-recording notifier, and a scripted confirmation prompt.

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use gigboard_core::identity::UserIdentity;
use gigboard_core::job::{Job, JobGateway, JobUpdate, NewJob, SortOrder};
use gigboard_core::task::{AcceptedTask, JobAcceptance};
use gigboard_core::view::{ConfirmPrompt, Notice, NoticeKind, Notifier};
use gigboard_core::{GigboardError, Result};
use std::sync::{Arc, Mutex};

/// In-memory gateway that records every call it receives.
///
/// While `failing` is set every operation records its call and then fails,
/// which is how the tests exercise the state-retained-on-failure paths.
#[derive(Default)]
pub struct MockGateway {
    pub jobs: Mutex<Vec<Job>>,
    pub tasks: Mutex<Vec<AcceptedTask>>,
    calls: Mutex<Vec<String>>,
    failing: Mutex<bool>,
}

impl MockGateway {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_jobs(jobs: Vec<Job>) -> Arc<Self> {
        let gateway = Self::default();
        *gateway.jobs.lock().unwrap() = jobs;
        Arc::new(gateway)
    }

    pub fn with_tasks(tasks: Vec<AcceptedTask>) -> Arc<Self> {
        let gateway = Self::default();
        *gateway.tasks.lock().unwrap() = tasks;
        Arc::new(gateway)
    }

    pub fn set_failing(&self, failing: bool) {
        *self.failing.lock().unwrap() = failing;
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: impl Into<String>) -> Result<()> {
        self.calls.lock().unwrap().push(call.into());
        if *self.failing.lock().unwrap() {
            Err(GigboardError::api("mock failure"))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl JobGateway for MockGateway {
    async fn latest_jobs(&self) -> Result<Vec<Job>> {
        self.record("latest_jobs")?;
        Ok(self.jobs.lock().unwrap().clone())
    }

    async fn list_jobs(&self, sort: SortOrder) -> Result<Vec<Job>> {
        self.record(format!("list_jobs sort={}", sort))?;
        Ok(self.jobs.lock().unwrap().clone())
    }

    async fn job_by_id(&self, id: &str) -> Result<Option<Job>> {
        self.record(format!("job_by_id {}", id))?;
        Ok(self
            .jobs
            .lock()
            .unwrap()
            .iter()
            .find(|job| job.id == id)
            .cloned())
    }

    async fn create_job(&self, job: &NewJob) -> Result<()> {
        self.record(format!("create_job {}", job.title))?;
        let mut jobs = self.jobs.lock().unwrap();
        let id = format!("job-{}", jobs.len() + 1);
        jobs.push(Job {
            id,
            title: job.title.clone(),
            category: job.category.clone(),
            summary: job.summary.clone(),
            cover_image: job.cover_image.clone(),
            posted_by: job.posted_by.clone(),
            owner_email: job.owner_email.clone(),
            posted_date: job.posted_date,
        });
        Ok(())
    }

    async fn update_job(&self, id: &str, update: &JobUpdate) -> Result<()> {
        self.record(format!("update_job {}", id))?;
        let mut jobs = self.jobs.lock().unwrap();
        match jobs.iter_mut().find(|job| job.id == id) {
            Some(job) => {
                job.apply_update(update);
                Ok(())
            }
            None => Err(GigboardError::not_found("job", id)),
        }
    }

    async fn delete_job(&self, id: &str) -> Result<()> {
        self.record(format!("delete_job {}", id))?;
        self.jobs.lock().unwrap().retain(|job| job.id != id);
        Ok(())
    }

    async fn jobs_by_owner(&self, email: &str) -> Result<Vec<Job>> {
        self.record(format!("jobs_by_owner {}", email))?;
        Ok(self
            .jobs
            .lock()
            .unwrap()
            .iter()
            .filter(|job| job.owner_email == email)
            .cloned()
            .collect())
    }

    async fn accept_job(&self, acceptance: &JobAcceptance) -> Result<()> {
        self.record(format!("accept_job {}", acceptance.job_id))?;
        Ok(())
    }

    async fn accepted_tasks(&self, email: &str) -> Result<Vec<AcceptedTask>> {
        self.record(format!("accepted_tasks {}", email))?;
        Ok(self
            .tasks
            .lock()
            .unwrap()
            .iter()
            .filter(|task| task.accepted_by_email == email)
            .cloned()
            .collect())
    }

    async fn remove_accepted_task(&self, id: &str) -> Result<()> {
        self.record(format!("remove_accepted_task {}", id))?;
        self.tasks.lock().unwrap().retain(|task| task.id != id);
        Ok(())
    }
}

/// Notifier that records notices for assertions.
#[derive(Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn messages(&self) -> Vec<String> {
        self.notices
            .lock()
            .unwrap()
            .iter()
            .map(|notice| notice.message.clone())
            .collect()
    }

    pub fn last(&self) -> Option<Notice> {
        self.notices.lock().unwrap().last().cloned()
    }

    pub fn last_kind(&self) -> Option<NoticeKind> {
        self.last().map(|notice| notice.kind)
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }
}

/// Confirmation prompt with a scripted answer.
pub struct StubConfirm {
    answer: bool,
    prompts: Mutex<Vec<String>>,
}

impl StubConfirm {
    pub fn answering(answer: bool) -> Arc<Self> {
        Arc::new(Self {
            answer,
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl ConfirmPrompt for StubConfirm {
    fn confirm(&self, message: &str) -> bool {
        self.prompts.lock().unwrap().push(message.to_string());
        self.answer
    }
}

// ============================================================================
// Sample data builders
// ============================================================================

pub fn user(email: &str, name: &str) -> UserIdentity {
    UserIdentity::new(email, name, "https://img.example/avatar.png")
}

pub fn job(id: &str, title: &str, owner_email: &str) -> Job {
    Job {
        id: id.to_string(),
        title: title.to_string(),
        category: "Web Development".to_string(),
        summary: "A sample job".to_string(),
        cover_image: "https://img.example/cover.png".to_string(),
        posted_by: "Poster".to_string(),
        owner_email: owner_email.to_string(),
        posted_date: Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap(),
    }
}

pub fn task(id: &str, job_id: &str, title: &str, acceptor_email: &str) -> AcceptedTask {
    AcceptedTask {
        id: id.to_string(),
        job_id: job_id.to_string(),
        job_title: title.to_string(),
        job_category: "Web Development".to_string(),
        posted_by: "Poster".to_string(),
        accepted_by_email: acceptor_email.to_string(),
        accepted_by_name: "Acceptor".to_string(),
        accepted_date: Utc.with_ymd_and_hms(2024, 3, 11, 9, 30, 0).unwrap(),
    }
}
