pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::interview::handlers as interview;
use crate::job_spec::handlers as job_spec;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        // Job specs
        .route("/templates", get(job_spec::handle_list_templates))
        .route("/job-spec/generate", post(job_spec::handle_generate))
        .route(
            "/job-spec/upload",
            post(job_spec::handle_upload).layer(DefaultBodyLimit::max(upload_limit)),
        )
        // Interview questions
        .route(
            "/interview-questions/generate",
            post(interview::handle_generate),
        )
        .route(
            "/interview-questions/upload-cv",
            post(interview::handle_upload_cv).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .with_state(state)
}
