use axum::{
    Router,
    http::{HeaderValue, header::CONTENT_TYPE},
    routing::{get, post},
};
use tower_http::{
    cors::CorsLayer, normalize_path::NormalizePath, set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

use crate::modules::students::use_cases::get_student::inbound::http as get_http;
use crate::modules::students::use_cases::list_students::inbound::http as list_http;
use crate::modules::students::use_cases::list_students_by_grade::inbound::http as by_grade_http;
use crate::modules::students::use_cases::list_students_by_status::inbound::http as by_status_http;
use crate::modules::students::use_cases::register_student::inbound::http as register_http;
use crate::modules::students::use_cases::remove_student::inbound::http as remove_http;
use crate::modules::students::use_cases::replace_student::inbound::http as replace_http;
use crate::shared::http::api_error::route_not_found;
use crate::shell::state::AppState;

pub const JSON_UTF8: &str = "application/json; charset=utf-8";

/// Unmatched paths and unsupported methods on known paths both answer with a
/// JSON 404, never a 405.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/students",
            get(list_http::handle)
                .post(register_http::handle)
                .fallback(route_not_found),
        )
        .route(
            "/students/{id}",
            get(get_http::handle)
                .put(replace_http::handle)
                .delete(remove_http::handle)
                .fallback(route_not_found),
        )
        .route(
            "/ListByStatus",
            post(by_status_http::handle).fallback(route_not_found),
        )
        .route(
            "/ListByGrade",
            post(by_grade_http::handle).fallback(route_not_found),
        )
        .fallback(route_not_found)
        .layer(SetResponseHeaderLayer::overriding(
            CONTENT_TYPE,
            HeaderValue::from_static(JSON_UTF8),
        ))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// The router with a trailing slash trimmed before routing.
pub fn app(state: AppState) -> NormalizePath<Router> {
    NormalizePath::trim_trailing_slash(router(state))
}
