use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    /// The upstream provider answered with a non-success status.
    #[error("Upstream provider returned HTTP {status}: {body}")]
    Upstream { status: u16, body: String },

    /// The completion text did not match the expected JSON shape.
    #[error("Failed to parse questions: {cause}")]
    Parse { cause: String, raw: String },

    #[error("Unprocessable entity: {0}")]
    UnprocessableEntity(String),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Internal server error: {0:#}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Maps an upstream client failure, keeping the provider's status when it sent one.
    /// Everything else is wrapped with `context` as an internal error.
    pub fn from_llm(err: LlmError, context: &'static str) -> Self {
        match err {
            LlmError::Api { status, message } => AppError::Upstream {
                status,
                body: message,
            },
            other => AppError::Internal(anyhow::Error::new(other).context(context)),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            AppError::Parse { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (code, detail) = match &self {
            AppError::Upstream { status, body } => {
                tracing::error!(status, body = ?body, "Upstream error");
                ("UPSTREAM_ERROR", self.to_string())
            }
            AppError::Parse { cause, raw } => {
                tracing::error!(raw = ?raw, "JSON decode error: {cause}");
                ("PARSE_ERROR", self.to_string())
            }
            AppError::UnprocessableEntity(msg) => {
                tracing::error!("Rejected request: {msg}");
                ("UNPROCESSABLE_ENTITY", msg.clone())
            }
            AppError::PayloadTooLarge(msg) => {
                tracing::error!("Rejected upload: {msg}");
                ("PAYLOAD_TOO_LARGE", msg.clone())
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:#}");
                ("INTERNAL_ERROR", format!("{e:#}"))
            }
        };

        let body = Json(json!({
            "detail": detail,
            "code": code
        }));

        (status, body).into_response()
    }
}
