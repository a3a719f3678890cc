pub mod health;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::form::handlers as form;
use crate::preview::handlers as preview;
use crate::state::AppState;
use crate::submission::handlers as submission;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Form events
        .route("/api/v1/resume", get(form::handle_get_resume))
        .route("/api/v1/resume/form", get(form::handle_get_form))
        .route(
            "/api/v1/resume/fields/:field",
            put(form::handle_update_field),
        )
        .route(
            "/api/v1/resume/sections/:section",
            post(form::handle_add_item),
        )
        .route(
            "/api/v1/resume/sections/:section/:index",
            delete(form::handle_remove_item),
        )
        .route(
            "/api/v1/resume/sections/:section/:index/:field",
            put(form::handle_update_item),
        )
        // Preview
        .route("/api/v1/preview", get(preview::handle_preview))
        .route("/api/v1/preview/text", get(preview::handle_preview_text))
        // Submission
        .route("/api/v1/submissions", post(submission::handle_submit))
        .route(
            "/api/v1/submissions/status",
            get(submission::handle_submission_status),
        )
        .with_state(state)
}
