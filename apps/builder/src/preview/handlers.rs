use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::preview::{render, PreviewLayout};
use crate::state::AppState;

/// GET /api/v1/preview
pub async fn handle_preview(State(state): State<AppState>) -> Result<Json<PreviewLayout>, AppError> {
    let snapshot = state.session.snapshot().await?;
    Ok(Json(render(&snapshot.document)))
}

/// GET /api/v1/preview/text
pub async fn handle_preview_text(State(state): State<AppState>) -> Result<String, AppError> {
    let snapshot = state.session.snapshot().await?;
    Ok(render(&snapshot.document).to_string())
}
