//! Axum route handlers for form events.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::form::{DocumentSnapshot, FormAction, FormView};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct FieldValue {
    pub value: String,
}

/// GET /api/v1/resume
pub async fn handle_get_resume(
    State(state): State<AppState>,
) -> Result<Json<DocumentSnapshot>, AppError> {
    Ok(Json(state.session.snapshot().await?))
}

/// GET /api/v1/resume/form
pub async fn handle_get_form(
    State(state): State<AppState>,
) -> Result<Json<FormView>, AppError> {
    Ok(Json(state.session.form_view().await?))
}

/// PUT /api/v1/resume/fields/:field
pub async fn handle_update_field(
    State(state): State<AppState>,
    Path(field): Path<String>,
    Json(body): Json<FieldValue>,
) -> Result<Json<DocumentSnapshot>, AppError> {
    let action = FormAction::update_field(&field, body.value)?;
    Ok(Json(state.session.apply(action).await?))
}

/// PUT /api/v1/resume/sections/:section/:index/:field
pub async fn handle_update_item(
    State(state): State<AppState>,
    Path((section, index, field)): Path<(String, usize, String)>,
    Json(body): Json<FieldValue>,
) -> Result<Json<DocumentSnapshot>, AppError> {
    let action = FormAction::update_item(&section, index, &field, body.value)?;
    Ok(Json(state.session.apply(action).await?))
}

/// POST /api/v1/resume/sections/:section
pub async fn handle_add_item(
    State(state): State<AppState>,
    Path(section): Path<String>,
) -> Result<(StatusCode, Json<DocumentSnapshot>), AppError> {
    let action = FormAction::add_item(&section)?;
    Ok((StatusCode::CREATED, Json(state.session.apply(action).await?)))
}

/// DELETE /api/v1/resume/sections/:section/:index
///
/// Removing the only item of a section is accepted and leaves it unchanged.
pub async fn handle_remove_item(
    State(state): State<AppState>,
    Path((section, index)): Path<(String, usize)>,
) -> Result<Json<DocumentSnapshot>, AppError> {
    let action = FormAction::remove_item(&section, index)?;
    Ok(Json(state.session.apply(action).await?))
}
