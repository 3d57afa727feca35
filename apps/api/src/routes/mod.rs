pub mod health;
pub mod index;

use std::any::Any;

use axum::{
    extract::DefaultBodyLimit,
    http::StatusCode,
    response::Response,
    routing::{get, post},
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;

use crate::errors::error_response;
use crate::evaluation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let max_upload_bytes = state.config.max_upload_bytes;

    Router::new()
        .route("/", get(index::index_handler))
        .route("/health", get(health::health_handler))
        .route(
            "/parse",
            post(handlers::handle_parse).layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        .with_state(state)
        .layer(CatchPanicLayer::custom(panic_response))
}

/// Turns a handler panic into the same generic 500 body as any other
/// unexpected failure.
fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");
    tracing::error!("Server Error: handler panicked: {detail}");
    error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
}
