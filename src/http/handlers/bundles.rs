//! Handler for compiled client script bundles.

use std::io;

use axum::http::header;
use axum::response::{IntoResponse, Response};

use crate::bundler::BundleError;
use crate::http::error::PageError;
use crate::http::state::AppState;

/// Serve the compiled bundle for a configured entry name.
///
/// # Errors
///
/// Returns [`PageError::NotFound`] when the entry or its source file is
/// missing, and a handler error for other compilation failures.
pub async fn serve_bundle(state: &AppState, name: &str) -> Result<Response, PageError> {
    let bytes = state.bundler.compile(name).await.map_err(|err| match err {
        BundleError::UnknownEntry(_) => PageError::NotFound,
        BundleError::Io(e) if e.kind() == io::ErrorKind::NotFound => PageError::NotFound,
        other => PageError::Handler { status: None, message: other.to_string() },
    })?;

    Ok(([(header::CONTENT_TYPE, "application/javascript")], bytes).into_response())
}
