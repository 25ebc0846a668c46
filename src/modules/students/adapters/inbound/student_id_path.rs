use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::modules::students::core::student::{StudentId, parse_student_id};
use crate::shared::http::api_error::ApiError;

/// The `{id}` path segment as a student id. A segment that is not valid UTF-8
/// or not an integer is rejected as `invalid id` before any handler runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StudentIdPath(pub StudentId);

impl<S> FromRequestParts<S> for StudentIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::InvalidId)?;
        parse_student_id(&raw)
            .map(StudentIdPath)
            .ok_or(ApiError::InvalidId)
    }
}
