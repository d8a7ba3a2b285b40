//! Repository over the key-value store.
//!
//! Jobs (with their form configurations) and candidates live in two
//! namespaced JSON documents, mirrored into typed state structs on every
//! operation. Access is read-modify-write without concurrency control: the
//! target deployment is one admin or applicant at a time per store.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::form;
use crate::ids::{new_candidate_id, new_job_id, slugify};
use crate::models::{
    Candidate, CandidateAttribute, CreateJobRequest, Job, JobConfig, JobFilter, JobSort,
    UpdateJobRequest,
};

const JOBS_NS: &str = "jobs";
const CANDIDATES_NS: &str = "candidates";
const SEEDED_NS: &str = "seeded";

#[derive(Debug, Default, Serialize, Deserialize)]
struct JobsState {
    jobs: Vec<Job>,
    configs: HashMap<String, JobConfig>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct CandidatesState {
    by_job: HashMap<String, Vec<Candidate>>,
}

/// Repository for all job and candidate operations.
#[derive(Clone)]
pub struct Repository {
    store: Arc<dyn super::Store>,
}

impl Repository {
    pub fn new(store: Arc<dyn super::Store>) -> Self {
        Self { store }
    }

    async fn read_jobs(&self) -> Result<JobsState, AppError> {
        match self.store.read(JOBS_NS).await? {
            Some(value) => Ok(serde_json::from_value(value)?),
            None => Ok(JobsState::default()),
        }
    }

    async fn write_jobs(&self, state: &JobsState) -> Result<(), AppError> {
        self.store
            .write(JOBS_NS, serde_json::to_value(state)?)
            .await
    }

    async fn read_candidates(&self) -> Result<CandidatesState, AppError> {
        match self.store.read(CANDIDATES_NS).await? {
            Some(value) => Ok(serde_json::from_value(value)?),
            None => Ok(CandidatesState::default()),
        }
    }

    async fn write_candidates(&self, state: &CandidatesState) -> Result<(), AppError> {
        self.store
            .write(CANDIDATES_NS, serde_json::to_value(state)?)
            .await
    }

    // ==================== JOB OPERATIONS ====================

    /// List jobs with optional keyword/status filters and a sort order.
    pub async fn list_jobs(&self, filter: &JobFilter) -> Result<Vec<Job>, AppError> {
        let state = self.read_jobs().await?;
        let mut jobs = state.jobs;

        if let Some(status) = filter.status {
            jobs.retain(|j| j.status == status);
        }
        if let Some(keyword) = &filter.keyword {
            let q = keyword.to_lowercase();
            jobs.retain(|j| {
                [&j.title, &j.department, &j.company]
                    .iter()
                    .any(|s| s.to_lowercase().contains(&q))
            });
        }

        match filter.sort {
            JobSort::Title => jobs.sort_by(|a, b| a.title.cmp(&b.title)),
            // RFC 3339 timestamps sort correctly as strings.
            JobSort::Oldest => jobs.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
            JobSort::Newest => jobs.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        }

        Ok(jobs)
    }

    /// Get a job by ID.
    pub async fn get_job(&self, id: &str) -> Result<Option<Job>, AppError> {
        let state = self.read_jobs().await?;
        Ok(state.jobs.into_iter().find(|j| j.id == id))
    }

    /// Get a job by its public slug.
    pub async fn get_job_by_slug(&self, slug: &str) -> Result<Option<Job>, AppError> {
        let state = self.read_jobs().await?;
        Ok(state.jobs.into_iter().find(|j| j.slug == slug))
    }

    /// Get a job's form configuration.
    pub async fn get_job_config(&self, job_id: &str) -> Result<Option<JobConfig>, AppError> {
        let state = self.read_jobs().await?;
        Ok(state.configs.get(job_id).cloned())
    }

    /// Create a job together with the form configuration derived from its
    /// requirement states.
    pub async fn create_job(&self, request: &CreateJobRequest) -> Result<Job, AppError> {
        let mut state = self.read_jobs().await?;

        let config = JobConfig {
            application_form: form::config_from_states(&request.field_states),
        };

        let id = new_job_id();
        let slug = unique_slug(&state.jobs, &request.title);
        let now = chrono::Utc::now().to_rfc3339();

        let mut salary_range = request.salary_range.clone();
        if salary_range
            .display_text
            .as_deref()
            .unwrap_or("")
            .is_empty()
        {
            salary_range.display_text = Some(crate::format::salary_text(&salary_range));
        }

        let job = Job {
            id: id.clone(),
            slug,
            title: request.title.clone(),
            department: request.department.clone(),
            company: request.company.clone(),
            status: request.status,
            salary_range,
            description: request.description.clone(),
            created_at: now,
        };

        state.jobs.push(job.clone());
        state.configs.insert(id, config);
        self.write_jobs(&state).await?;

        tracing::info!(job_id = %job.id, slug = %job.slug, status = job.status.as_str(), "created job");
        Ok(job)
    }

    /// Partially update a job. The slug is never recomputed.
    pub async fn update_job(&self, id: &str, request: &UpdateJobRequest) -> Result<Job, AppError> {
        let mut state = self.read_jobs().await?;
        let job = state
            .jobs
            .iter_mut()
            .find(|j| j.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Job {} not found", id)))?;

        if let Some(title) = &request.title {
            job.title = title.clone();
        }
        if let Some(department) = &request.department {
            job.department = department.clone();
        }
        if let Some(company) = &request.company {
            job.company = company.clone();
        }
        if let Some(status) = request.status {
            job.status = status;
        }
        if let Some(salary_range) = &request.salary_range {
            job.salary_range = salary_range.clone();
        }
        if let Some(description) = &request.description {
            job.description = description.clone();
        }

        let updated = job.clone();
        self.write_jobs(&state).await?;
        Ok(updated)
    }

    /// Replace a job's form configuration. The at-most-once-per-key
    /// invariant is enforced before anything is written.
    pub async fn save_job_config(&self, job_id: &str, config: JobConfig) -> Result<(), AppError> {
        let mut state = self.read_jobs().await?;
        if !state.jobs.iter().any(|j| j.id == job_id) {
            return Err(AppError::NotFound(format!("Job {} not found", job_id)));
        }

        form::check_unique_keys(&config.application_form)?;

        state.configs.insert(job_id.to_string(), config);
        self.write_jobs(&state).await?;
        Ok(())
    }

    // ==================== CANDIDATE OPERATIONS ====================

    /// List candidates for a job, most recent first.
    pub async fn list_candidates(&self, job_id: &str) -> Result<Vec<Candidate>, AppError> {
        let state = self.read_candidates().await?;
        Ok(state.by_job.get(job_id).cloned().unwrap_or_default())
    }

    /// Append a validated submission to a job's candidate collection.
    ///
    /// The attributes are persisted exactly as the validator produced them.
    pub async fn add_candidate(
        &self,
        job_id: &str,
        attributes: Vec<CandidateAttribute>,
    ) -> Result<Candidate, AppError> {
        let mut state = self.read_candidates().await?;

        let candidate = Candidate {
            id: new_candidate_id(),
            job_id: job_id.to_string(),
            attributes,
            applied_at: chrono::Utc::now().to_rfc3339(),
        };

        state
            .by_job
            .entry(job_id.to_string())
            .or_default()
            .insert(0, candidate.clone());
        self.write_candidates(&state).await?;

        tracing::info!(candidate_id = %candidate.id, job_id = %job_id, "stored application");
        Ok(candidate)
    }

    // ==================== SEED FLAG ====================

    pub async fn is_seeded(&self) -> Result<bool, AppError> {
        Ok(matches!(
            self.store.read(SEEDED_NS).await?,
            Some(serde_json::Value::Bool(true))
        ))
    }

    pub async fn mark_seeded(&self) -> Result<(), AppError> {
        self.store
            .write(SEEDED_NS, serde_json::Value::Bool(true))
            .await
    }
}

/// Slug derived from the title, suffixed with `-2`, `-3`, ... when another
/// job already claimed it.
fn unique_slug(jobs: &[Job], title: &str) -> String {
    let mut base = slugify(title);
    if base.is_empty() {
        base = "job".to_string();
    }

    if !jobs.iter().any(|j| j.slug == base) {
        return base;
    }
    let mut n = 2;
    loop {
        let candidate = format!("{}-{}", base, n);
        if !jobs.iter().any(|j| j.slug == candidate) {
            return candidate;
        }
        n += 1;
    }
}
