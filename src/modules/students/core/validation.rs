// Field rules shared by registering and replacing a student.
//
// Every rule is evaluated on its own and every violation is reported, so a
// client gets the full list in one round trip.

use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

use crate::modules::students::core::errors::StudentError;
use crate::modules::students::core::student::StudentFields;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Optional `+`, one ASCII digit, then at least seven ASCII digits, spaces or hyphens.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9][0-9\s-]{7,}$").unwrap());

pub const INVALID_PAYLOAD: &str = "payload must be a JSON object";

struct Rule {
    field: &'static str,
    violation: &'static str,
    check: fn(&str) -> bool,
}

const RULES: [Rule; 4] = [
    Rule {
        field: "name",
        violation: "name is required (non-empty string)",
        check: is_non_blank,
    },
    Rule {
        field: "email",
        violation: "email is required and must look like local@domain.tld",
        check: is_email,
    },
    Rule {
        field: "course",
        violation: "course is required (non-empty string)",
        check: is_non_blank,
    },
    Rule {
        field: "phone",
        violation: "phone is required and must look like +51 987654321",
        check: is_phone,
    },
];

fn is_non_blank(value: &str) -> bool {
    !value.trim().is_empty()
}

fn is_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

fn is_phone(value: &str) -> bool {
    PHONE_RE.is_match(value)
}

/// Returns the description of every violated rule, empty when the payload is valid.
pub fn validate_student_payload(payload: &Value) -> Vec<String> {
    let object = payload.as_object();
    let mut violations = Vec::new();
    if object.is_none() {
        violations.push(INVALID_PAYLOAD.to_string());
    }

    for rule in &RULES {
        let passes = object
            .and_then(|o| o.get(rule.field))
            .and_then(Value::as_str)
            .is_some_and(rule.check);
        if !passes {
            violations.push(rule.violation.to_string());
        }
    }
    violations
}

/// Validates `payload` and turns it into typed fields. A client supplied `id`
/// is dropped; ids belong to the repository.
pub fn parse_student_fields(payload: Value) -> Result<StudentFields, StudentError> {
    let violations = validate_student_payload(&payload);
    if !violations.is_empty() {
        return Err(StudentError::Invalid(violations));
    }

    let mut fields: StudentFields = serde_json::from_value(payload)
        .map_err(|err| StudentError::Invalid(vec![err.to_string()]))?;
    fields.extra.shift_remove("id");
    Ok(fields)
}
