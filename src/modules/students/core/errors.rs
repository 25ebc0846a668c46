use thiserror::Error;

use crate::modules::students::core::student::StudentId;
use crate::shared::http::api_error::ApiError;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StudentError {
    #[error("validation failed: {}", .0.join("; "))]
    Invalid(Vec<String>),

    #[error("student {0} not found")]
    NotFound(StudentId),
}

impl From<StudentError> for ApiError {
    fn from(error: StudentError) -> Self {
        match error {
            StudentError::Invalid(details) => ApiError::Validation(details),
            StudentError::NotFound(_) => ApiError::StudentNotFound,
        }
    }
}
