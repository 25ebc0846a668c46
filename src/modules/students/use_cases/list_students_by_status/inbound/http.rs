use axum::{Json, extract::State, response::IntoResponse};

use crate::modules::students::core::filters::{has_status, requested_status};
use crate::shared::http::api_error::ApiError;
use crate::shared::http::json_body::JsonBody;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody,
) -> Result<impl IntoResponse, ApiError> {
    let status = requested_status(&payload).ok_or(ApiError::MissingStatus)?;
    let students: Vec<_> = state
        .students
        .get_all()
        .await
        .into_iter()
        .filter(|s| has_status(s, &status))
        .collect();
    tracing::debug!(%status, count = students.len(), "students listed by status");
    Ok(Json(students))
}
