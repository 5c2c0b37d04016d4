//! HttpJobGateway - reqwest implementation of the job-board API client.
//!
//! Requests carry no credentials; the remote API is the enforcement point
//! for ownership. Mutation endpoints answer 200 with a `{success}` flag,
//! which is folded into the error taxonomy when false. Nothing here
//! retries; every failure is surfaced to the caller once.

use crate::dto::{AcceptJobDto, AcceptedTaskDto, AckDto, JobDto, JobUpdateDto, NewJobDto};
use async_trait::async_trait;
use gigboard_core::job::{Job, JobGateway, JobUpdate, NewJob, SortOrder};
use gigboard_core::task::{AcceptedTask, JobAcceptance};
use gigboard_core::{GigboardError, Result};
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Reqwest-backed implementation of [`JobGateway`].
#[derive(Clone)]
pub struct HttpJobGateway {
    client: Client,
    base_url: String,
}

impl HttpJobGateway {
    /// Creates a gateway for the given API base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client
            .request(method, url)
            .timeout(REQUEST_TIMEOUT)
    }

    /// Sends a request and deserializes a successful JSON response.
    async fn fetch_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        debug!(path, "job API read");
        let response = self.request(Method::GET, path).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(api_error(status, response).await);
        }

        Ok(response.json::<T>().await?)
    }

    /// Sends a mutation and folds the `{success}` acknowledgement into the
    /// result.
    async fn send_mutation<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<()> {
        debug!(path, method = %method, "job API mutation");
        let mut request = self.request(method, path);
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(api_error(status, response).await);
        }

        let ack: AckDto = response.json().await?;
        if !ack.success {
            return Err(GigboardError::api(format!(
                "Job API reported failure for {}",
                path
            )));
        }
        Ok(())
    }
}

/// Recovers the error body best-effort and wraps it in an Api error.
async fn api_error(status: StatusCode, response: reqwest::Response) -> GigboardError {
    let error_text = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    GigboardError::api(format!("Job API error ({}): {}", status, error_text))
}

#[async_trait]
impl JobGateway for HttpJobGateway {
    async fn latest_jobs(&self) -> Result<Vec<Job>> {
        let dtos: Vec<JobDto> = self.fetch_json("/latestJobs").await?;
        Ok(dtos.into_iter().map(Job::from).collect())
    }

    async fn list_jobs(&self, sort: SortOrder) -> Result<Vec<Job>> {
        let path = format!("/jobs?sort={}", sort);
        let dtos: Vec<JobDto> = self.fetch_json(&path).await?;
        Ok(dtos.into_iter().map(Job::from).collect())
    }

    async fn job_by_id(&self, id: &str) -> Result<Option<Job>> {
        let path = format!("/jobs/{}", id);
        let response = self.request(Method::GET, &path).send().await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(api_error(status, response).await);
        }

        let dto: JobDto = response.json().await?;
        Ok(Some(dto.into()))
    }

    async fn create_job(&self, job: &NewJob) -> Result<()> {
        self.send_mutation(Method::POST, "/addJob", Some(&NewJobDto::from(job)))
            .await
    }

    async fn update_job(&self, id: &str, update: &JobUpdate) -> Result<()> {
        let path = format!("/updateJob/{}", id);
        self.send_mutation(Method::PUT, &path, Some(&JobUpdateDto::from(update)))
            .await
    }

    async fn delete_job(&self, id: &str) -> Result<()> {
        let path = format!("/deleteJob/{}", id);
        self.send_mutation::<()>(Method::DELETE, &path, None).await
    }

    async fn jobs_by_owner(&self, email: &str) -> Result<Vec<Job>> {
        let path = format!("/myPostedJobs/{}", email);
        let dtos: Vec<JobDto> = self.fetch_json(&path).await?;
        Ok(dtos.into_iter().map(Job::from).collect())
    }

    async fn accept_job(&self, acceptance: &JobAcceptance) -> Result<()> {
        self.send_mutation(
            Method::POST,
            "/acceptJob",
            Some(&AcceptJobDto::from(acceptance)),
        )
        .await
    }

    async fn accepted_tasks(&self, email: &str) -> Result<Vec<AcceptedTask>> {
        let path = format!("/my-accepted-tasks/{}", email);
        let dtos: Vec<AcceptedTaskDto> = self.fetch_json(&path).await?;
        Ok(dtos.into_iter().map(AcceptedTask::from).collect())
    }

    async fn remove_accepted_task(&self, id: &str) -> Result<()> {
        let path = format!("/acceptedTask/{}", id);
        self.send_mutation::<()>(Method::DELETE, &path, None).await
    }
}
