use serde_json::{Map, Value, json};

use crate::modules::students::core::student::{Student, StudentFields};

fn extension<const N: usize>(pairs: [(&str, Value); N]) -> Map<String, Value> {
    pairs
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}

/// Records every fresh process starts with.
pub fn seed_students() -> Vec<Student> {
    vec![
        Student::new(
            1,
            StudentFields {
                name: "Juan Pérez".into(),
                email: "juan.perez@ejemplo.com".into(),
                course: "Diseño y Desarrollo de Software C24".into(),
                phone: "+51 987654321".into(),
                extra: extension([
                    ("grade", json!(20)),
                    ("age", json!(23)),
                    ("enrollmentNumber", json!("2025001")),
                    ("year", json!(3)),
                    ("subjects", json!(["Algoritmos", "Bases de Datos", "Redes"])),
                    ("gpa", json!(3.8)),
                    ("status", json!("Activo")),
                    ("admissionDate", json!("2022-03-01")),
                ]),
            },
        ),
        Student::new(
            2,
            StudentFields {
                name: "Ana Díaz".into(),
                email: "ana.diaz@ejemplo.com".into(),
                course: "Diseño y Desarrollo de Software C24".into(),
                phone: "+51 912345678".into(),
                extra: extension([
                    ("grade", json!(16)),
                    ("age", json!(20)),
                    ("enrollmentNumber", json!("2025002")),
                    ("year", json!(2)),
                    ("subjects", json!(["Algoritmos", "Frontend"])),
                    ("gpa", json!(3.4)),
                    ("status", json!("Inactivo")),
                    ("admissionDate", json!("2023-03-01")),
                ]),
            },
        ),
        Student::new(
            3,
            StudentFields {
                name: "Luis Ramírez".into(),
                email: "luis.ramirez@ejemplo.com".into(),
                course: "Diseño y Desarrollo de Software C24".into(),
                phone: "+51 976543210".into(),
                extra: extension([
                    ("grade", json!(14)),
                    ("age", json!(21)),
                    ("enrollmentNumber", json!("2025003")),
                    ("year", json!(1)),
                    ("subjects", json!(["Intro a la Programación"])),
                    ("gpa", json!(2.9)),
                    ("status", json!("Suspendido")),
                    ("admissionDate", json!("2024-03-01")),
                ]),
            },
        ),
    ]
}
