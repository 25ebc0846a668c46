use axum::{Json, extract::State, response::IntoResponse};

use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    let students = state.students.get_all().await;
    tracing::debug!(count = students.len(), "listing students");
    Json(students)
}
