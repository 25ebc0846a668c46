use axum::{Json, extract::State, response::IntoResponse};

use crate::modules::students::adapters::inbound::student_id_path::StudentIdPath;
use crate::shared::http::api_error::ApiError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    StudentIdPath(id): StudentIdPath,
) -> Result<impl IntoResponse, ApiError> {
    let student = state
        .students
        .get_by_id(id)
        .await
        .ok_or(ApiError::StudentNotFound)?;
    tracing::debug!(id, "student found");
    Ok(Json(student))
}
