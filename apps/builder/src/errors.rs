use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::form::FormError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Form(#[from] FormError),

    #[error("Editor session unavailable")]
    SessionClosed,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Form(e @ FormError::UnknownField { .. }) => {
                (StatusCode::NOT_FOUND, "UNKNOWN_FIELD", e.to_string())
            }
            AppError::Form(e @ FormError::UnknownSection { .. }) => {
                (StatusCode::NOT_FOUND, "UNKNOWN_SECTION", e.to_string())
            }
            AppError::Form(e @ FormError::InvalidIndex { .. }) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "INVALID_INDEX",
                e.to_string(),
            ),
            AppError::SessionClosed => {
                tracing::error!("Editor session task is no longer running");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "SESSION_CLOSED",
                    "The editor session has shut down".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::Section;

    #[test]
    fn test_form_errors_map_to_client_statuses() {
        let resp = AppError::from(FormError::unknown_field("hobby")).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let resp = AppError::from(FormError::InvalidIndex {
            section: Section::Education,
            index: 4,
            len: 1,
        })
        .into_response();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_closed_session_is_service_unavailable() {
        let resp = AppError::SessionClosed.into_response();
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
