use serde_json::Value;

use crate::modules::students::adapters::outbound::student_repository::StudentRepository;
use crate::modules::students::core::errors::StudentError;
use crate::modules::students::core::student::{Student, StudentId};
use crate::modules::students::core::validation::parse_student_fields;

/// Validates the payload with the registration rules and merges it over the
/// stored student. The path id always wins over an `id` in the payload.
pub async fn replace_student(
    repository: &dyn StudentRepository,
    id: StudentId,
    payload: Value,
) -> Result<Student, StudentError> {
    let fields = parse_student_fields(payload)?;
    repository
        .update(id, fields)
        .await
        .ok_or(StudentError::NotFound(id))
}
