//! Job API endpoints.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use super::{success, ApiResult};
use crate::errors::AppError;
use crate::models::{
    CreateJobRequest, Job, JobConfig, JobFilter, JobSort, JobStatus, SaveJobConfigRequest,
    UpdateJobRequest,
};
use crate::AppState;

/// Query parameters accepted by the job listing.
#[derive(Debug, Default, Deserialize)]
pub struct ListJobsQuery {
    pub keyword: Option<String>,
    pub status: Option<String>,
    pub sort: Option<String>,
}

impl ListJobsQuery {
    fn into_filter(self) -> Result<JobFilter, AppError> {
        let status = match self.status.as_deref() {
            None | Some("all") => None,
            Some(s) => Some(
                JobStatus::from_str(s)
                    .ok_or_else(|| AppError::BadRequest(format!("Unknown status: {}", s)))?,
            ),
        };
        let sort = match self.sort.as_deref() {
            None => JobSort::default(),
            Some(s) => JobSort::from_str(s)
                .ok_or_else(|| AppError::BadRequest(format!("Unknown sort: {}", s)))?,
        };
        Ok(JobFilter {
            keyword: self.keyword.filter(|k| !k.trim().is_empty()),
            status,
            sort,
        })
    }
}

/// GET /api/jobs - List jobs with optional filters.
pub async fn list_jobs(
    State(state): State<AppState>,
    Query(query): Query<ListJobsQuery>,
) -> ApiResult<Vec<Job>> {
    let filter = query.into_filter()?;
    success(state.repo.list_jobs(&filter).await?)
}

/// POST /api/jobs - Create a job with its application form.
pub async fn create_job(
    State(state): State<AppState>,
    Json(request): Json<CreateJobRequest>,
) -> ApiResult<Job> {
    // Validate required fields
    if request.title.trim().is_empty() {
        return Err(AppError::BadRequest("Title is required".to_string()));
    }
    if request.department.trim().is_empty() {
        return Err(AppError::BadRequest("Department is required".to_string()));
    }
    if request.company.trim().is_empty() {
        return Err(AppError::BadRequest("Company is required".to_string()));
    }
    if request.salary_range.min > request.salary_range.max {
        return Err(AppError::BadRequest(
            "Salary minimum exceeds maximum".to_string(),
        ));
    }

    success(state.repo.create_job(&request).await?)
}

/// GET /api/jobs/:id - Get a single job.
pub async fn get_job(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Job> {
    match state.repo.get_job(&id).await? {
        Some(job) => success(job),
        None => Err(AppError::NotFound(format!("Job {} not found", id))),
    }
}

/// PUT /api/jobs/:id - Partially update a job.
pub async fn update_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateJobRequest>,
) -> ApiResult<Job> {
    success(state.repo.update_job(&id, &request).await?)
}

/// GET /api/jobs/slug/:slug - Public lookup by slug.
pub async fn get_job_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<Job> {
    match state.repo.get_job_by_slug(&slug).await? {
        Some(job) => success(job),
        None => Err(AppError::NotFound(format!("Job {} not found", slug))),
    }
}

/// GET /api/jobs/:id/config - Fetch the stored form configuration.
pub async fn get_job_config(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<JobConfig> {
    match state.repo.get_job_config(&id).await? {
        Some(config) => success(config),
        None => Err(AppError::NotFound(format!(
            "Configuration for job {} not found",
            id
        ))),
    }
}

/// PUT /api/jobs/:id/config - Replace the form configuration.
pub async fn save_job_config(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<SaveJobConfigRequest>,
) -> ApiResult<JobConfig> {
    let config: JobConfig = request.into();
    state.repo.save_job_config(&id, config.clone()).await?;
    success(config)
}
