//! Axum route handlers for the submission gateway.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::state::AppState;
use crate::submission::SubmissionStatus;

#[derive(Debug, Deserialize)]
pub struct SubmitQuery {
    /// Wait for the webhook outcome before responding. Defaults to true.
    #[serde(default = "default_wait")]
    pub wait: bool,
}

fn default_wait() -> bool {
    true
}

#[derive(Debug, Serialize)]
pub struct SubmissionResponse {
    pub status: SubmissionStatus,
    pub notification: Option<String>,
}

impl From<SubmissionStatus> for SubmissionResponse {
    fn from(status: SubmissionStatus) -> Self {
        Self {
            notification: status.notification(),
            status,
        }
    }
}

/// POST /api/v1/submissions
///
/// Submits the current document snapshot to the PDF webhook. A failed
/// generation is still a 200: the failure is part of the returned status.
pub async fn handle_submit(
    State(state): State<AppState>,
    Query(query): Query<SubmitQuery>,
) -> Result<(StatusCode, Json<SubmissionResponse>), AppError> {
    let pending = state.session.submit().await?;

    if !query.wait {
        return Ok((StatusCode::ACCEPTED, Json(pending.accepted.into())));
    }

    let status = pending.finished().await?;
    Ok((StatusCode::OK, Json(status.into())))
}

/// GET /api/v1/submissions/status
pub async fn handle_submission_status(
    State(state): State<AppState>,
) -> Result<Json<SubmissionResponse>, AppError> {
    Ok(Json(state.session.submission_status().await?.into()))
}
