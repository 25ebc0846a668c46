use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub type StudentId = i64;

/// Client supplied fields of a student. The four named fields are required and
/// validated, everything else lands in `extra` and is stored verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentFields {
    pub name: String,
    pub email: String,
    pub course: String,
    pub phone: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    #[serde(flatten)]
    pub fields: StudentFields,
}

impl Student {
    pub fn new(id: StudentId, fields: StudentFields) -> Self {
        Self { id, fields }
    }

    /// Shallow merge: named fields are replaced, extension keys in `fields`
    /// override existing ones and every other existing key is kept.
    pub fn merge(&mut self, fields: StudentFields) {
        let StudentFields {
            name,
            email,
            course,
            phone,
            extra,
        } = fields;
        self.fields.name = name;
        self.fields.email = email;
        self.fields.course = course;
        self.fields.phone = phone;
        self.fields.extra.extend(extra);
    }

    pub fn extra(&self, key: &str) -> Option<&Value> {
        self.fields.extra.get(key)
    }
}

pub fn parse_student_id(raw: &str) -> Option<StudentId> {
    raw.parse().ok()
}
