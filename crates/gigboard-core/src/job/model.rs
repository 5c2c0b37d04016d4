//! Job domain model.
//!
//! A Job is a posted work opportunity. Only the user whose email equals
//! `owner_email` may mutate or delete it; the client enforces this as a UI
//! affordance while the remote API remains the real enforcement point.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// The categories offered by the add/update forms. Everywhere else the
/// category is an opaque string, so jobs with unlisted categories still
/// render normally.
pub const JOB_CATEGORIES: [&str; 10] = [
    "Web Development",
    "Mobile App Development",
    "Graphics Design",
    "Digital Marketing",
    "Content Writing",
    "Video Editing",
    "Data Analysis",
    "SEO Services",
    "UI/UX Design",
    "Virtual Assistant",
];

/// Server-delegated sort order for the jobs listing.
///
/// The wire values ("newest"/"oldest") are what the remote API expects in
/// its `sort` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Newest,
    Oldest,
}

impl SortOrder {
    /// Returns the opposite order. Two toggles return to the original.
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Newest => SortOrder::Oldest,
            SortOrder::Oldest => SortOrder::Newest,
        }
    }
}

impl Default for SortOrder {
    fn default() -> Self {
        SortOrder::Newest
    }
}

/// A posted work opportunity record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    /// Server-assigned identifier.
    pub id: String,
    pub title: String,
    pub category: String,
    pub summary: String,
    /// URL of the cover image.
    pub cover_image: String,
    /// Display name of the poster.
    pub posted_by: String,
    /// Email of the poster; the ownership key.
    pub owner_email: String,
    pub posted_date: DateTime<Utc>,
}

/// A job as submitted by the add-job form: all Job fields minus the
/// server-assigned id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewJob {
    pub title: String,
    pub category: String,
    pub summary: String,
    pub cover_image: String,
    pub posted_by: String,
    pub owner_email: String,
    pub posted_date: DateTime<Utc>,
}

/// The mutable fields of a job, as submitted by the update form.
///
/// Poster identity and posted date are never editable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobUpdate {
    pub title: String,
    pub category: String,
    pub summary: String,
    pub cover_image: String,
}

impl Job {
    /// Applies an accepted update to the local record.
    pub fn apply_update(&mut self, update: &JobUpdate) {
        self.title = update.title.clone();
        self.category = update.category.clone();
        self.summary = update.summary.clone();
        self.cover_image = update.cover_image.clone();
    }
}
