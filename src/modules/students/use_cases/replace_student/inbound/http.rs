use axum::{Json, extract::State, response::IntoResponse};

use crate::modules::students::adapters::inbound::student_id_path::StudentIdPath;
use crate::modules::students::use_cases::replace_student::handler::replace_student;
use crate::shared::http::api_error::ApiError;
use crate::shared::http::json_body::JsonBody;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    StudentIdPath(id): StudentIdPath,
    JsonBody(payload): JsonBody,
) -> Result<impl IntoResponse, ApiError> {
    match replace_student(state.students.as_ref(), id, payload).await {
        Ok(student) => {
            tracing::info!(id, "student replaced");
            Ok(Json(student))
        }
        Err(err) => {
            tracing::warn!(id, %err, "student replacement rejected");
            Err(err.into())
        }
    }
}
