// Drives the fully layered service the way the binary serves it.

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header::CONTENT_TYPE},
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;
use tower_http::normalize_path::NormalizePath;

use crate::shell::http::app;
use crate::shell::state::AppState;

pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub json: Value,
}

#[derive(Clone)]
pub struct TestApp {
    service: NormalizePath<Router>,
}

#[allow(dead_code)]
impl TestApp {
    pub fn seeded() -> Self {
        Self {
            service: app(AppState::in_memory(true)),
        }
    }

    pub fn empty() -> Self {
        Self {
            service: app(AppState::in_memory(false)),
        }
    }

    pub async fn send(&self, method: Method, uri: &str, body: Option<String>) -> TestResponse {
        let body = body.map(Body::from).unwrap_or_else(Body::empty);
        let response = self
            .service
            .clone()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(body)
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .map(|v| v.to_str().unwrap().to_string());
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        TestResponse {
            status,
            content_type,
            json: serde_json::from_slice(&bytes).unwrap(),
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: impl Into<String>) -> TestResponse {
        self.send(Method::POST, uri, Some(body.into())).await
    }

    pub async fn put(&self, uri: &str, body: impl Into<String>) -> TestResponse {
        self.send(Method::PUT, uri, Some(body.into())).await
    }

    pub async fn delete(&self, uri: &str) -> TestResponse {
        self.send(Method::DELETE, uri, None).await
    }
}
