use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("empty body, send JSON")]
    EmptyBody,

    #[error("could not read request body")]
    UnreadableBody,

    #[error("invalid JSON")]
    InvalidJson,

    #[error("validation failed")]
    Validation(Vec<String>),

    #[error("invalid id")]
    InvalidId,

    #[error("missing 'status'")]
    MissingStatus,

    #[error("student not found")]
    StudentNotFound,

    #[error("route not found")]
    RouteNotFound,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::StudentNotFound | ApiError::RouteNotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = self.to_string();
        let details = match self {
            ApiError::Validation(details) => Some(details),
            _ => None,
        };
        (status, Json(ErrorBody { error, details })).into_response()
    }
}

pub async fn route_not_found() -> ApiError {
    ApiError::RouteNotFound
}
