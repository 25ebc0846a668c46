use axum::http::StatusCode;
use serde_json::json;

use crate::shell::http::JSON_UTF8;
use crate::tests::fixtures::app::TestApp;
use crate::tests::fixtures::students::StudentPayloadBuilder;

fn max_id(students: &serde_json::Value) -> i64 {
    students
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|s| s["id"].as_i64())
        .max()
        .unwrap_or(0)
}

#[tokio::test]
async fn creates_students_under_max_id_plus_one() {
    let app = TestApp::seeded();

    for payload in [
        StudentPayloadBuilder::new().to_body(),
        StudentPayloadBuilder::new().name("Rosa Quispe").to_body(),
    ] {
        let before = app.get("/students").await.json;
        let created = app.post("/students", payload).await;
        let after = app.get("/students").await.json;

        assert_eq!(created.status, StatusCode::CREATED);
        assert_eq!(created.content_type.as_deref(), Some(JSON_UTF8));
        assert_eq!(created.json["id"], json!(max_id(&before) + 1));
        assert_eq!(
            after.as_array().unwrap().len(),
            before.as_array().unwrap().len() + 1
        );
    }
}

#[tokio::test]
async fn starts_ids_at_one_on_an_empty_collection() {
    let app = TestApp::empty();
    let created = app
        .post("/students", StudentPayloadBuilder::new().to_body())
        .await;
    assert_eq!(created.json["id"], json!(1));
}

#[tokio::test]
async fn keeps_the_path_id_on_update() {
    let app = TestApp::seeded();
    let body = StudentPayloadBuilder::new().with("id", json!(3)).to_body();

    let updated = app.put("/students/2", body).await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.json["id"], json!(2));

    let stored = app.get("/students/2").await;
    assert_eq!(stored.json["id"], json!(2));
    assert_eq!(stored.json["name"], json!("Carla Gómez"));
    assert_eq!(app.get("/students/3").await.json["name"], json!("Luis Ramírez"));
}

#[tokio::test]
async fn forgets_a_deleted_student() {
    let app = TestApp::seeded();

    let removed = app.delete("/students/1").await;
    assert_eq!(removed.status, StatusCode::OK);
    assert_eq!(removed.json["name"], json!("Juan Pérez"));

    let lookup = app.get("/students/1").await;
    assert_eq!(lookup.status, StatusCode::NOT_FOUND);
    assert_eq!(lookup.json, json!({ "error": "student not found" }));
}

#[tokio::test]
async fn rejects_an_invalid_student_with_the_violation_list() {
    let app = TestApp::seeded();
    let response = app
        .post(
            "/students",
            r#"{"name":"","email":"x","course":"c","phone":"1"}"#,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.content_type.as_deref(), Some(JSON_UTF8));
    assert!(response.json["details"].as_array().unwrap().len() >= 2);
    assert_eq!(app.get("/students").await.json.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn answers_404_for_an_unknown_student() {
    let response = TestApp::seeded().get("/students/999").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.json["error"], json!("student not found"));
}

#[tokio::test]
async fn answers_400_for_an_empty_create_body() {
    let response = TestApp::seeded().post("/students", "").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json, json!({ "error": "empty body, send JSON" }));
}

#[tokio::test]
async fn keeps_stores_isolated_between_apps() {
    let first = TestApp::seeded();
    let second = TestApp::seeded();

    first.delete("/students/2").await;

    assert_eq!(first.get("/students").await.json.as_array().unwrap().len(), 2);
    assert_eq!(second.get("/students").await.json.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn returns_extension_fields_in_the_order_they_were_sent() {
    let app = TestApp::seeded();
    let body = r#"{"name":"Rosa Quispe","email":"rosa@ejemplo.com","course":"Redes","phone":"+51 955000111","year":2,"status":"Activo","admissionDate":"2025-03-01","grade":17}"#;

    let created = app.post("/students", body).await;
    let keys: Vec<_> = created.json.as_object().unwrap().keys().cloned().collect();
    assert_eq!(
        keys,
        vec![
            "id",
            "name",
            "email",
            "course",
            "phone",
            "year",
            "status",
            "admissionDate",
            "grade"
        ]
    );

    let updated = app
        .put(
            "/students/4",
            r#"{"name":"Rosa Q.","email":"rosa@ejemplo.com","course":"Redes","phone":"+51 955000111","status":"Inactivo","gpa":3.1}"#,
        )
        .await;
    let keys: Vec<_> = updated.json.as_object().unwrap().keys().cloned().collect();
    assert_eq!(
        keys,
        vec![
            "id",
            "name",
            "email",
            "course",
            "phone",
            "year",
            "status",
            "admissionDate",
            "grade",
            "gpa"
        ]
    );
    assert_eq!(updated.json["status"], json!("Inactivo"));
}
