//! Request error taxonomy and the single error-rendering stage.
//!
//! Every handler failure funnels through [`error_response`]: the `error`
//! view is rendered with the message unconditionally, and with the full
//! error detail object only in development mode. The response status comes
//! from the error when it carries one, otherwise 500.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;

use crate::http::state::AppState;
use crate::views::{RenderContext, ViewError};

/// Errors surfaced by page, asset, and bundle handlers.
#[derive(Debug, Error)]
pub enum PageError {
    /// No route, asset, or bundle matches the request.
    #[error("Not Found")]
    NotFound,
    /// Failure during request handling, optionally carrying an HTTP status.
    #[error("{message}")]
    Handler {
        /// Status to respond with; 500 when absent.
        status: Option<u16>,
        /// Human-readable failure description.
        message: String,
    },
    /// View template rendering failed.
    #[error("render: {0}")]
    Render(#[from] ViewError),
    /// Underlying I/O failure while producing the response.
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

impl PageError {
    /// HTTP status for this error; defaults to 500 for errors that do not
    /// carry one.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Handler { status: Some(code), .. } => {
                StatusCode::from_u16(*code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            Self::Handler { status: None, .. } | Self::Render(_) | Self::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// Build the render context for the error page.
///
/// The message is always populated; the detail object carries the status
/// and debug representation only in development mode and is the empty
/// object otherwise.
pub fn error_context(err: &PageError, dev_mode: bool) -> RenderContext {
    let detail = if dev_mode {
        serde_json::json!({
            "status": err.status_code().as_u16(),
            "error": format!("{err:?}"),
        })
    } else {
        serde_json::json!({})
    };
    RenderContext { message: err.to_string(), detail }
}

/// Render an error as the HTML error page.
///
/// # Parameters
///
/// - `state` - Application state carrying views and the dev-mode flag
/// - `err` - Error to render
///
/// # Returns
///
/// Returns the error page response with the error's status code.
pub fn error_response(state: &AppState, err: PageError) -> Response {
    let status = err.status_code();
    let ctx = error_context(&err, state.dev_mode);

    match state.views.render("error", &ctx) {
        Ok(html) => (status, Html(html)).into_response(),
        Err(render_err) => {
            // State validation guarantees the template exists, so this only
            // fires on template I/O-level breakage.
            tracing::error!(error = %render_err, "failed to render error page");
            (StatusCode::INTERNAL_SERVER_ERROR, "error page unavailable").into_response()
        }
    }
}
