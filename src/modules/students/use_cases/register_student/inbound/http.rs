use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::modules::students::use_cases::register_student::handler::register_student;
use crate::shared::http::api_error::ApiError;
use crate::shared::http::json_body::JsonBody;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody,
) -> Result<impl IntoResponse, ApiError> {
    match register_student(state.students.as_ref(), payload).await {
        Ok(student) => {
            tracing::info!(id = student.id, "student registered");
            Ok((StatusCode::CREATED, Json(student)))
        }
        Err(err) => {
            tracing::warn!(%err, "student registration rejected");
            Err(err.into())
        }
    }
}
