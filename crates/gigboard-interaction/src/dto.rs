//! Wire DTOs for the two remote services.
//!
//! The job-board API serves camelCase fields with Mongo-style `_id`
//! identifiers; the identity service uses camelCase throughout. Conversions
//! to and from the domain models live here so nothing outside this crate
//! sees wire naming.

use chrono::{DateTime, Utc};
use gigboard_core::identity::{NewAccount, UserIdentity};
use gigboard_core::job::{Job, JobUpdate, NewJob};
use gigboard_core::task::{AcceptedTask, JobAcceptance};
use serde::{Deserialize, Serialize};

// ============================================================================
// Job-board API
// ============================================================================

/// A job record as served by the job-board API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub category: String,
    pub summary: String,
    pub cover_image: String,
    pub posted_by: String,
    pub user_email: String,
    pub posted_date: DateTime<Utc>,
}

impl From<JobDto> for Job {
    fn from(dto: JobDto) -> Self {
        Job {
            id: dto.id,
            title: dto.title,
            category: dto.category,
            summary: dto.summary,
            cover_image: dto.cover_image,
            posted_by: dto.posted_by,
            owner_email: dto.user_email,
            posted_date: dto.posted_date,
        }
    }
}

/// Body of `POST /addJob`: all job fields minus the server-assigned id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewJobDto {
    pub title: String,
    pub category: String,
    pub summary: String,
    pub cover_image: String,
    pub posted_by: String,
    pub user_email: String,
    pub posted_date: DateTime<Utc>,
}

impl From<&NewJob> for NewJobDto {
    fn from(job: &NewJob) -> Self {
        Self {
            title: job.title.clone(),
            category: job.category.clone(),
            summary: job.summary.clone(),
            cover_image: job.cover_image.clone(),
            posted_by: job.posted_by.clone(),
            user_email: job.owner_email.clone(),
            posted_date: job.posted_date,
        }
    }
}

/// Body of `PUT /updateJob/{id}`: the mutable fields only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobUpdateDto {
    pub title: String,
    pub category: String,
    pub summary: String,
    pub cover_image: String,
}

impl From<&JobUpdate> for JobUpdateDto {
    fn from(update: &JobUpdate) -> Self {
        Self {
            title: update.title.clone(),
            category: update.category.clone(),
            summary: update.summary.clone(),
            cover_image: update.cover_image.clone(),
        }
    }
}

/// An accepted-task record as served by the job-board API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcceptedTaskDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub job_id: String,
    pub job_title: String,
    pub job_category: String,
    pub posted_by: String,
    pub accepted_by: String,
    pub accepted_by_name: String,
    pub accepted_date: DateTime<Utc>,
}

impl From<AcceptedTaskDto> for AcceptedTask {
    fn from(dto: AcceptedTaskDto) -> Self {
        AcceptedTask {
            id: dto.id,
            job_id: dto.job_id,
            job_title: dto.job_title,
            job_category: dto.job_category,
            posted_by: dto.posted_by,
            accepted_by_email: dto.accepted_by,
            accepted_by_name: dto.accepted_by_name,
            accepted_date: dto.accepted_date,
        }
    }
}

/// Body of `POST /acceptJob`. The accepted date is assigned server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcceptJobDto {
    pub job_id: String,
    pub job_title: String,
    pub job_category: String,
    pub posted_by: String,
    pub accepted_by: String,
    pub accepted_by_name: String,
}

impl From<&JobAcceptance> for AcceptJobDto {
    fn from(acceptance: &JobAcceptance) -> Self {
        Self {
            job_id: acceptance.job_id.clone(),
            job_title: acceptance.job_title.clone(),
            job_category: acceptance.job_category.clone(),
            posted_by: acceptance.posted_by.clone(),
            accepted_by: acceptance.accepted_by_email.clone(),
            accepted_by_name: acceptance.accepted_by_name.clone(),
        }
    }
}

/// Mutation acknowledgement: the API returns 200 with a success flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AckDto {
    pub success: bool,
}

// ============================================================================
// Identity service
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequestDto {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequestDto {
    pub email: String,
    pub password: String,
    pub display_name: String,
    #[serde(rename = "photoURL", skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

impl From<&NewAccount> for RegisterRequestDto {
    fn from(account: &NewAccount) -> Self {
        Self {
            email: account.email.clone(),
            password: account.password.clone(),
            display_name: account.display_name.clone(),
            photo_url: account.photo_url.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub email: String,
    pub display_name: String,
    #[serde(rename = "photoURL", default)]
    pub photo_url: String,
}

impl From<UserDto> for UserIdentity {
    fn from(dto: UserDto) -> Self {
        UserIdentity {
            email: dto.email,
            display_name: dto.display_name,
            photo_url: dto.photo_url,
        }
    }
}

/// Response to sign-in and sign-up.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponseDto {
    pub token: String,
    pub user: UserDto,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_dto_wire_names() {
        let json = serde_json::json!({
            "_id": "65f1",
            "title": "Landing page",
            "category": "Web Development",
            "summary": "Build it",
            "coverImage": "https://img.example/c.png",
            "postedBy": "Alice",
            "userEmail": "alice@example.com",
            "postedDate": "2024-03-10T12:00:00Z"
        });

        let dto: JobDto = serde_json::from_value(json).unwrap();
        let job: Job = dto.into();
        assert_eq!(job.id, "65f1");
        assert_eq!(job.owner_email, "alice@example.com");
        assert_eq!(job.cover_image, "https://img.example/c.png");
    }

    #[test]
    fn test_accepted_task_dto_wire_names() {
        let json = serde_json::json!({
            "_id": "a1",
            "jobId": "65f1",
            "jobTitle": "Landing page",
            "jobCategory": "Web Development",
            "postedBy": "Alice",
            "acceptedBy": "bob@example.com",
            "acceptedByName": "Bob",
            "acceptedDate": "2024-03-11T09:30:00Z"
        });

        let dto: AcceptedTaskDto = serde_json::from_value(json).unwrap();
        let task: AcceptedTask = dto.into();
        assert_eq!(task.job_id, "65f1");
        assert_eq!(task.accepted_by_email, "bob@example.com");
    }

    #[test]
    fn test_accept_job_dto_serializes_camel_case() {
        let dto = AcceptJobDto {
            job_id: "65f1".to_string(),
            job_title: "Landing page".to_string(),
            job_category: "Web Development".to_string(),
            posted_by: "Alice".to_string(),
            accepted_by: "bob@example.com".to_string(),
            accepted_by_name: "Bob".to_string(),
        };

        let value = serde_json::to_value(&dto).unwrap();
        assert_eq!(value["jobId"], "65f1");
        assert_eq!(value["acceptedByName"], "Bob");
        // No date field: the server assigns it
        assert!(value.get("acceptedDate").is_none());
    }

    #[test]
    fn test_user_dto_photo_url_rename() {
        let json = serde_json::json!({
            "email": "a@example.com",
            "displayName": "Alice",
            "photoURL": "https://img.example/a.png"
        });

        let user: UserIdentity = serde_json::from_value::<UserDto>(json).unwrap().into();
        assert_eq!(user.photo_url, "https://img.example/a.png");
    }
}
