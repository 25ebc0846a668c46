use axum::{Json, extract::State, response::IntoResponse};

use crate::modules::students::core::filters::GradeFilter;
use crate::shared::http::json_body::JsonBody;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody,
) -> impl IntoResponse {
    let filter = GradeFilter::from_payload(&payload);
    let students: Vec<_> = state
        .students
        .get_all()
        .await
        .into_iter()
        .filter(|s| filter.matches(s))
        .collect();
    tracing::debug!(?filter, count = students.len(), "students listed by grade");
    Json(students)
}
