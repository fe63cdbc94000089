//! Multipart upload reading shared by the job spec and CV upload endpoints.
//!
//! Uploaded content is read fully into memory and then dropped. Only the
//! filename and size survive.

use axum::extract::multipart::MultipartError;
use axum::extract::Multipart;
use axum::http::StatusCode;
use bytes::Bytes;
use tracing::debug;

use crate::errors::AppError;

/// Name of the form part carrying the file.
pub const FILE_FIELD: &str = "file";

#[derive(Debug, Clone, PartialEq)]
pub struct UploadedFile {
    pub filename: String,
    pub size: usize,
}

impl UploadedFile {
    fn from_parts(filename: String, content: Bytes) -> Self {
        Self {
            filename,
            size: content.len(),
        }
    }
}

/// Reads the `file` part of a multipart body. Other parts are skipped.
/// Read failures are internal errors carrying `context`, except an exceeded
/// body limit which stays a 413. A missing part is a 422.
pub async fn read_upload(
    mut multipart: Multipart,
    context: &'static str,
) -> Result<UploadedFile, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| read_error(e, context))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let filename = field
            .file_name()
            .map(str::to_string)
            .ok_or_else(|| AppError::UnprocessableEntity("file part has no filename".to_string()))?;
        let content = field.bytes().await.map_err(|e| read_error(e, context))?;

        let upload = UploadedFile::from_parts(filename, content);
        debug!("Read upload {} ({} bytes)", upload.filename, upload.size);
        return Ok(upload);
    }

    Err(AppError::UnprocessableEntity(format!(
        "multipart body has no '{FILE_FIELD}' part"
    )))
}

fn read_error(err: MultipartError, context: &'static str) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(err.body_text())
    } else {
        AppError::Internal(anyhow::Error::new(err).context(context))
    }
}
