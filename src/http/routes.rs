//! HTTP routing configuration.

use std::time::Duration;

use axum::{http::Request, response::Response, routing::get, Router};
use tower_http::trace::TraceLayer;
use tracing::{info_span, Span};

use crate::http::handlers::*;
use crate::http::state::AppState;

/// Build the Axum router with all page routes.
///
/// The fixed page routes always win; everything else goes through the
/// fallback, which serves compiled bundles and static assets for GET/HEAD
/// and otherwise renders the 404 error page. Method mismatches on the
/// fixed routes take the same path, so every unmatched request gets the
/// error template. One access-log line is emitted per request.
///
/// # Parameters
///
/// - `state` - Application state containing configuration and dependencies
///
/// # Returns
///
/// Returns configured Axum `Router`.
pub fn build_router(state: AppState) -> Router {
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<_>| {
            info_span!(
                "request",
                method = %request.method(),
                path = %request.uri().path(),
                status = tracing::field::Empty,
                latency_ms = tracing::field::Empty,
            )
        })
        .on_response(|response: &Response, latency: Duration, span: &Span| {
            span.record("status", response.status().as_u16());
            span.record("latency_ms", latency.as_secs_f64() * 1000.0);
            tracing::info!("request completed");
        });

    Router::new()
        .route("/", get(index))
        // One showcase page per graphics backend
        .route("/opengl", get(opengl))
        .route("/webgl", get(webgl))
        .route("/vulkan", get(vulkan))
        .route("/webgpu", get(webgpu))
        .route("/healthz", get(healthz))
        // Bundles, static assets, 404 (any method)
        .fallback(fallback)
        .method_not_allowed_fallback(fallback)
        .layer(trace_layer)
        .with_state(state)
}
