//! Handlers for the fixed showcase pages.
//!
//! Each page renders a named view with no per-request data; the pages only
//! differ in which client bundle they load.

use axum::extract::State;
use axum::response::{Html, IntoResponse, Response};

use crate::http::error::{error_response, PageError};
use crate::http::state::AppState;
use crate::views::RenderContext;

/// Render a static page view, funneling failures to the error page.
async fn render_page(state: &AppState, view: &str) -> Response {
    match state.views.render(view, &RenderContext::default()) {
        Ok(html) => Html(html).into_response(),
        Err(err) => error_response(state, PageError::from(err)),
    }
}

/// Landing page listing the available backends.
pub async fn index(State(state): State<AppState>) -> Response {
    render_page(&state, "index").await
}

/// OpenGL showcase page.
pub async fn opengl(State(state): State<AppState>) -> Response {
    render_page(&state, "opengl").await
}

/// WebGL showcase page.
pub async fn webgl(State(state): State<AppState>) -> Response {
    render_page(&state, "webgl").await
}

/// Vulkan showcase page.
pub async fn vulkan(State(state): State<AppState>) -> Response {
    render_page(&state, "vulkan").await
}

/// WebGPU showcase page.
pub async fn webgpu(State(state): State<AppState>) -> Response {
    render_page(&state, "webgpu").await
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use axum::extract::State;
    use axum::http::StatusCode;

    use crate::bundler::DevBundler;
    use crate::views::ViewBook;

    use super::*;

    fn create_test_state() -> AppState {
        let mut views = ViewBook::default();
        views.insert("index", "<h1>Graphics Gallery</h1>");
        views.insert("opengl", "<h1>OpenGL</h1><canvas id=\"scene\"></canvas>");
        views.insert("error", "<h1>{{ message }}</h1><pre>{{ detail }}</pre>");

        AppState::builder()
            .with_views(views)
            .with_bundler(DevBundler::from_entries(BTreeMap::new()))
            .with_assets_dir("asset")
            .build()
            .expect("valid configuration")
    }

    /// Test a page handler renders its view.
    #[tokio::test]
    async fn test_index_renders_view() {
        let state = create_test_state();

        let response = index(State(state)).await;
        assert_eq!(response.status(), StatusCode::OK);

        let (parts, body) = response.into_parts();
        let content_type = parts.headers.get("content-type").expect("content type");
        assert!(content_type.to_str().expect("ascii").starts_with("text/html"));

        let body_bytes = axum::body::to_bytes(body, usize::MAX).await.expect("read body");
        let html = String::from_utf8(body_bytes.to_vec()).expect("utf-8");
        assert!(html.contains("Graphics Gallery"));
    }

    /// Test a backend page handler renders its own view.
    #[tokio::test]
    async fn test_opengl_renders_view() {
        let state = create_test_state();

        let response = opengl(State(state)).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body_bytes =
            axum::body::to_bytes(response.into_body(), usize::MAX).await.expect("read body");
        let html = String::from_utf8(body_bytes.to_vec()).expect("utf-8");
        assert!(html.contains("OpenGL"));
    }

    /// Test a missing page view renders the error page with 500.
    #[tokio::test]
    async fn test_missing_view_renders_error_page() {
        let state = create_test_state();

        // `webgl` is not in the test book
        let response = webgl(State(state)).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body_bytes =
            axum::body::to_bytes(response.into_body(), usize::MAX).await.expect("read body");
        let html = String::from_utf8(body_bytes.to_vec()).expect("utf-8");
        assert!(html.contains("unknown view: webgl"));
    }
}
