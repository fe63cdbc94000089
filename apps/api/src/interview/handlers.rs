//! Axum route handlers for the Interview Questions API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::interview::prompts::{build_questions_prompt, questions_system};
use crate::interview::questions::{parse_questions, QuestionResponse};
use crate::state::AppState;
use crate::uploads::read_upload;

#[derive(Debug, Deserialize)]
pub struct QuestionRequest {
    pub job_spec: String,
    #[serde(default)]
    pub cv_text: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UploadCvResponse {
    pub message: String,
}

/// POST /interview-questions/generate
///
/// The completion must be a JSON array of questions; anything else is a parse error.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<QuestionRequest>,
) -> Result<Json<QuestionResponse>, AppError> {
    let prompt = build_questions_prompt(&request.job_spec, request.cv_text.as_deref());
    let completion = state
        .llm
        .complete(&prompt, &questions_system())
        .await
        .map_err(|e| AppError::from_llm(e, "Failed to generate interview questions"))?;

    let questions = parse_questions(&completion)?;
    info!("Generated {} interview questions", questions.len());
    Ok(Json(QuestionResponse { questions }))
}

/// POST /interview-questions/upload-cv
///
/// The CV is read and discarded; only its name is echoed back.
pub async fn handle_upload_cv(multipart: Multipart) -> Result<Json<UploadCvResponse>, AppError> {
    let upload = read_upload(multipart, "Failed to upload CV").await?;
    Ok(Json(UploadCvResponse {
        message: format!("CV uploaded: {}", upload.filename),
    }))
}
