//! Job model and request types.

use serde::{Deserialize, Serialize};

use super::form::{JobConfig, RequirementStates};

/// Publication status of a job posting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Active,
    Inactive,
    Draft,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Active => "active",
            JobStatus::Inactive => "inactive",
            JobStatus::Draft => "draft",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "active" => Some(JobStatus::Active),
            "inactive" => Some(JobStatus::Inactive),
            "draft" => Some(JobStatus::Draft),
            _ => None,
        }
    }
}

/// Salary range in minor-unit-free whole amounts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SalaryRange {
    pub min: i64,
    pub max: i64,
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_text: Option<String>,
}

/// A job posting with its public lookup slug.
///
/// Jobs are never hard-deleted; retiring one means setting its status to
/// `inactive`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub department: String,
    pub company: String,
    pub status: JobStatus,
    pub salary_range: SalaryRange,
    pub description: String,
    pub created_at: String,
}

/// Request body for creating a job together with its application form.
///
/// The form configuration is derived from the per-field requirement states,
/// not submitted as explicit sections.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateJobRequest {
    pub title: String,
    pub department: String,
    pub company: String,
    pub status: JobStatus,
    pub salary_range: SalaryRange,
    pub description: String,
    pub field_states: RequirementStates,
}

/// Request body for partially updating a job. Absent fields keep their
/// current value; the slug is fixed at creation and never recomputed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateJobRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub status: Option<JobStatus>,
    #[serde(default)]
    pub salary_range: Option<SalaryRange>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Sort orders for job listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JobSort {
    #[default]
    Newest,
    Oldest,
    Title,
}

impl JobSort {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "newest" => Some(JobSort::Newest),
            "oldest" => Some(JobSort::Oldest),
            "title" => Some(JobSort::Title),
            _ => None,
        }
    }
}

/// Filters applied when listing jobs.
#[derive(Debug, Clone, Default)]
pub struct JobFilter {
    /// Case-insensitive match over title, department and company.
    pub keyword: Option<String>,
    /// `None` lists every status.
    pub status: Option<JobStatus>,
    pub sort: JobSort,
}

/// Request body for replacing a job's form configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SaveJobConfigRequest {
    pub application_form: super::form::ApplicationFormConfig,
}

impl From<SaveJobConfigRequest> for JobConfig {
    fn from(req: SaveJobConfigRequest) -> Self {
        JobConfig {
            application_form: req.application_form,
        }
    }
}
