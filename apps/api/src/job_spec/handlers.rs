//! Axum route handlers for the Job Spec API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::job_spec::prompts::{build_job_spec_prompt, job_spec_system};
use crate::job_spec::templates::{find_template, JobTemplate, TEMPLATES};
use crate::state::AppState;
use crate::uploads::read_upload;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct JobSpecRequest {
    pub template_id: String,
    pub position: String,
    pub requirements: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct JobSpecResponse {
    pub id: Uuid,
    pub job_spec: String,
    pub created_at: DateTime<Utc>,
}

impl JobSpecResponse {
    /// Wraps a job spec body with a fresh id and the current time.
    pub fn new(job_spec: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            job_spec,
            created_at: Utc::now(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /templates
pub async fn handle_list_templates() -> Json<&'static [JobTemplate]> {
    Json(&TEMPLATES)
}

/// POST /job-spec/generate
///
/// One chat-completion call; the first completion becomes the job spec body.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<JobSpecRequest>,
) -> Result<Json<JobSpecResponse>, AppError> {
    if find_template(&request.template_id).is_none() {
        warn!("Unknown template_id '{}'", request.template_id);
    }

    let prompt = build_job_spec_prompt(&request.position, &request.requirements);
    let job_spec = state
        .llm
        .complete(&prompt, &job_spec_system())
        .await
        .map_err(|e| AppError::from_llm(e, "Failed to generate job specification"))?;

    let response = JobSpecResponse::new(job_spec);
    info!("Generated job spec {} for '{}'", response.id, request.position);
    Ok(Json(response))
}

/// POST /job-spec/upload
///
/// The file is read and discarded; only its name is echoed back.
pub async fn handle_upload(multipart: Multipart) -> Result<Json<JobSpecResponse>, AppError> {
    let upload = read_upload(multipart, "Failed to upload job specification").await?;
    Ok(Json(JobSpecResponse::new(format!(
        "Uploaded job spec: {}",
        upload.filename
    ))))
}
