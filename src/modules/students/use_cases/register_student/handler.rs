use serde_json::Value;

use crate::modules::students::adapters::outbound::student_repository::StudentRepository;
use crate::modules::students::core::errors::StudentError;
use crate::modules::students::core::student::Student;
use crate::modules::students::core::validation::parse_student_fields;

/// Validates the payload and stores it as a new student.
pub async fn register_student(
    repository: &dyn StudentRepository,
    payload: Value,
) -> Result<Student, StudentError> {
    let fields = parse_student_fields(payload)?;
    Ok(repository.create(fields).await)
}
