//! Application form and candidate endpoints.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use super::{success, ApiResult};
use crate::errors::AppError;
use crate::form::{self, RenderField};
use crate::format::format_date;
use crate::models::{ApplyRequest, Candidate, CandidateAttribute};
use crate::AppState;

/// Candidate plus a display-ready submission time for the admin table.
#[derive(Debug, Serialize)]
pub struct CandidateView {
    pub id: String,
    pub job_id: String,
    pub attributes: Vec<CandidateAttribute>,
    pub applied_at: String,
    pub applied_at_text: String,
}

impl From<Candidate> for CandidateView {
    fn from(c: Candidate) -> Self {
        let applied_at_text = format_date(&c.applied_at);
        Self {
            id: c.id,
            job_id: c.job_id,
            attributes: c.attributes,
            applied_at: c.applied_at,
            applied_at_text,
        }
    }
}

/// GET /api/jobs/:id/form - The ordered render contract for a job's form.
pub async fn get_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Vec<RenderField>> {
    let config = state
        .repo
        .get_job_config(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Configuration for job {} not found", id)))?;

    success(form::fields_to_render(&config.application_form))
}

/// POST /api/jobs/:id/apply - Validate a submission and store the candidate.
///
/// Nothing is persisted unless the whole submission validates.
pub async fn apply(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<ApplyRequest>,
) -> ApiResult<Candidate> {
    let job = state
        .repo
        .get_job(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {} not found", id)))?;
    let config = state
        .repo
        .get_job_config(&job.id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Configuration for job {} not found", id)))?;

    let attributes = form::validate_submission(&config.application_form, &request.values)?;

    success(state.repo.add_candidate(&job.id, attributes).await?)
}

/// GET /api/jobs/:id/candidates - List submissions, most recent first.
pub async fn list_candidates(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Vec<CandidateView>> {
    if state.repo.get_job(&id).await?.is_none() {
        return Err(AppError::NotFound(format!("Job {} not found", id)));
    }

    let candidates = state.repo.list_candidates(&id).await?;
    success(candidates.into_iter().map(CandidateView::from).collect())
}
