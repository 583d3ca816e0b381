//! # Graphics Gallery Server
//!
//! A small demonstration web server that serves one showcase page per
//! graphics backend (OpenGL, WebGL, Vulkan, WebGPU). Each page bootstraps a
//! compiled graphics module from client-side script; the server itself only
//! provides:
//!
//! - **Static Page Router**: five fixed routes rendered from view templates
//! - **Asset Store**: verbatim file serving from a configured directory
//! - **Dev Bundler**: on-demand compilation of client script entry points
//!   into `*.bundle.js` files, with an in-memory cache
//!
//! # Examples
//!
//! ```no_run
//! use std::sync::Arc;
//! use gfx_gallery::{bundler::DevBundler, views::ViewBook, http::build_router};
//!
//! # fn example() -> std::io::Result<()> {
//! // Load views and bundle entries from the site directory
//! let views = ViewBook::load_from_dir("www/views")
//!     .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
//! let bundler = DevBundler::load_from_path("www/bundles.yaml")
//!     .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
//!
//! // Build HTTP router with state
//! let state = gfx_gallery::http::AppState::builder()
//!     .with_views(views)
//!     .with_bundler(bundler)
//!     .with_assets_dir("www/asset")
//!     .build()?;
//! let app = build_router(state);
//! # Ok(())
//! # }
//! ```

pub mod bundler;
pub mod http;
pub mod views;

// Re-export commonly used types for convenience
pub use bundler::{BundleError, DevBundler};
pub use views::{RenderContext, ViewBook, ViewError};
