//! HTTP server: page routes, asset serving, bundle endpoint, and the shared
//! error-rendering stage.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::PageError;
pub use routes::build_router;
pub use state::AppState;
