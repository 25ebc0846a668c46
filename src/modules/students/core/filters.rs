// Ad-hoc filters over the student collection: by status and by grade.

use serde_json::Value;

use crate::modules::students::core::student::Student;

/// Extracts the requested status from a `/ListByStatus` body. Numbers are
/// accepted in their textual form; blank or missing yields `None`.
pub fn requested_status(payload: &Value) -> Option<String> {
    let status = match payload.get("status")? {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    (!status.is_empty()).then_some(status)
}

pub fn has_status(student: &Student, status: &str) -> bool {
    student
        .extra("status")
        .and_then(Value::as_str)
        .is_some_and(|own| own.to_lowercase() == status.to_lowercase())
}

/// A grade is numeric when stored as a JSON number or as a string holding a
/// finite one.
pub fn numeric_grade(student: &Student) -> Option<f64> {
    match student.extra("grade")? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok().filter(|g: &f64| g.is_finite()),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GradeFilter {
    Exact(f64),
    Range { min: f64, max: f64 },
}

impl GradeFilter {
    /// `eq` wins when it is a number; otherwise missing bounds are unbounded.
    pub fn from_payload(payload: &Value) -> Self {
        let number = |key: &str| payload.get(key).and_then(Value::as_f64);
        match number("eq") {
            Some(eq) => GradeFilter::Exact(eq),
            None => GradeFilter::Range {
                min: number("min").unwrap_or(f64::NEG_INFINITY),
                max: number("max").unwrap_or(f64::INFINITY),
            },
        }
    }

    pub fn matches(&self, student: &Student) -> bool {
        let Some(grade) = numeric_grade(student) else {
            return false;
        };
        match *self {
            GradeFilter::Exact(eq) => grade == eq,
            GradeFilter::Range { min, max } => min <= grade && grade <= max,
        }
    }
}
