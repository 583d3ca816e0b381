//! Static asset serving and the router fallback.
//!
//! Anything the fixed routes do not claim lands here: compiled bundle paths
//! first, then the asset directory, then the 404 error page.

use std::io;
use std::path::{Component, Path, PathBuf};

use axum::extract::State;
use axum::http::{header, Method, Uri};
use axum::response::{IntoResponse, Response};

use crate::http::error::{error_response, PageError};
use crate::http::handlers::bundles::serve_bundle;
use crate::http::state::AppState;

/// Fallback handler for every request without a matching fixed route.
///
/// Bundles and assets are read-only, so only GET and HEAD reach them; any
/// other method renders the 404 error page, as does a method mismatch on
/// the fixed routes (this handler doubles as the method-not-allowed
/// fallback).
pub async fn fallback(State(state): State<AppState>, method: Method, uri: Uri) -> Response {
    if method != Method::GET && method != Method::HEAD {
        return error_response(&state, PageError::NotFound);
    }

    let path = uri.path().trim_start_matches('/');

    let result = if let Some(name) = state.bundler.bundle_name(path) {
        serve_bundle(&state, name).await
    } else {
        serve_asset(&state, path).await
    };

    result.unwrap_or_else(|err| error_response(&state, err))
}

/// Serve a file from the asset directory by relative URL path.
///
/// # Errors
///
/// Returns [`PageError::NotFound`] for traversal attempts, missing files,
/// and non-file paths.
pub async fn serve_asset(state: &AppState, request_path: &str) -> Result<Response, PageError> {
    let relative = sanitize(request_path).ok_or(PageError::NotFound)?;
    let path = state.assets_dir.join(relative);

    let metadata = match tokio::fs::metadata(&path).await {
        Ok(m) => m,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Err(PageError::NotFound),
        Err(e) => return Err(PageError::Io(e)),
    };
    if !metadata.is_file() {
        return Err(PageError::NotFound);
    }

    let bytes = tokio::fs::read(&path).await?;
    Ok(([(header::CONTENT_TYPE, content_type_for(&path))], bytes).into_response())
}

/// Normalize a request path into a safe relative path.
///
/// Rejects empty paths and any path escaping the asset root (`..`, root, or
/// prefix components).
fn sanitize(request_path: &str) -> Option<PathBuf> {
    let mut clean = PathBuf::new();
    for component in Path::new(request_path).components() {
        match component {
            Component::Normal(part) => clean.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    (!clean.as_os_str().is_empty()).then_some(clean)
}

/// Content type for a served file, from its extension.
fn content_type_for(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("js" | "mjs") => "application/javascript",
        Some("css") => "text/css",
        Some("json") => "application/json",
        Some("wasm") => "application/wasm",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("txt") => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}
