//! Route table and middleware stack

use std::sync::Arc;

use axum::extract::{DefaultBodyLimit, Request};
use axum::http::{header, HeaderValue};
use axum::routing::{get, post};
use axum::Router;
use qrdrop_core::Config;
use qrdrop_infra::{request_id_middleware, RequestId};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::constants::{
    CORS_ALLOW_HEADERS, CORS_ALLOW_METHODS, CORS_ALLOW_ORIGIN, GENERATE_PATH, HEALTH_PATH,
};
use crate::handlers::generate::{generate_qr, method_not_allowed, preflight};
use crate::handlers::health::liveness_check;
use crate::state::AppState;

/// Build the application router.
///
/// The fixed CORS headers and a JSON content type are set on every response,
/// errors and preflight included.
pub fn setup_routes(config: &Config, state: Arc<AppState>) -> Router {
    let generate = post(generate_qr)
        .options(preflight)
        .fallback(method_not_allowed);

    Router::new()
        .route(GENERATE_PATH, generate)
        .route(HEALTH_PATH, get(liveness_check))
        .layer(DefaultBodyLimit::max(config.max_request_body_bytes()))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static(CORS_ALLOW_ORIGIN),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(CORS_ALLOW_HEADERS),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(CORS_ALLOW_METHODS),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        ))
        .layer(TraceLayer::new_for_http().make_span_with(request_span))
        .layer(axum::middleware::from_fn(request_id_middleware))
        .with_state(state)
}

/// Span for one request, tagged with the id assigned by `request_id_middleware`.
fn request_span(request: &Request) -> tracing::Span {
    let request_id = request
        .extensions()
        .get::<RequestId>()
        .map(RequestId::as_str)
        .unwrap_or("-");
    tracing::info_span!(
        "http_request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = %request_id,
    )
}
