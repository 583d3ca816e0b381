//! Application state and configuration for the HTTP server.

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use crate::bundler::DevBundler;
use crate::views::ViewBook;

/// Application state shared across all HTTP handlers.
///
/// Built once at startup and injected into the router; nothing in it is
/// mutated after construction apart from the bundler's internal cache.
#[derive(Clone)]
pub struct AppState {
    /// Loaded view templates.
    pub views: Arc<ViewBook>,
    /// Development bundler for client script entries.
    pub bundler: Arc<DevBundler>,
    /// Directory served verbatim for static asset requests.
    pub assets_dir: Arc<PathBuf>,
    /// Whether error pages include full error detail.
    pub dev_mode: bool,
}

impl AppState {
    /// Get a builder for configuring application state step by step.
    pub fn builder() -> AppStateBuilder {
        AppStateBuilder::new()
    }
}

/// Builder for constructing [`AppState`] with validation.
#[derive(Default)]
pub struct AppStateBuilder {
    views: Option<ViewBook>,
    bundler: Option<DevBundler>,
    assets_dir: Option<PathBuf>,
    dev_mode: bool,
}

impl AppStateBuilder {
    /// Create a new builder with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the view templates.
    ///
    /// # Parameters
    ///
    /// - `views` - Loaded view book; must contain an `error` template
    ///
    /// # Returns
    ///
    /// Returns the builder for method chaining.
    pub fn with_views(mut self, views: ViewBook) -> Self {
        self.views = Some(views);
        self
    }

    /// Set the development bundler.
    ///
    /// # Parameters
    ///
    /// - `bundler` - Bundler configured with the site's entry scripts
    ///
    /// # Returns
    ///
    /// Returns the builder for method chaining.
    pub fn with_bundler(mut self, bundler: DevBundler) -> Self {
        self.bundler = Some(bundler);
        self
    }

    /// Set the static asset directory.
    ///
    /// # Parameters
    ///
    /// - `dir` - Directory tree served verbatim by relative path
    ///
    /// # Returns
    ///
    /// Returns the builder for method chaining.
    pub fn with_assets_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.assets_dir = Some(dir.into());
        self
    }

    /// Enable or disable development mode.
    ///
    /// In development mode error pages include the full error detail
    /// object; outside it the detail is empty.
    pub fn with_dev_mode(mut self, dev_mode: bool) -> Self {
        self.dev_mode = dev_mode;
        self
    }

    /// Build the final [`AppState`] with validation.
    ///
    /// # Errors
    ///
    /// Returns an error if views, bundler, or the asset directory are
    /// missing, or if the view book has no `error` template.
    pub fn build(self) -> io::Result<AppState> {
        let views = self.views.ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidInput, "Views are required for AppState")
        })?;
        let bundler = self.bundler.ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidInput, "Bundler is required for AppState")
        })?;
        let assets_dir = self.assets_dir.ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidInput, "Asset directory is required for AppState")
        })?;

        // The error-rendering stage depends on this template existing.
        if !views.contains("error") {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "View book must contain an `error` template",
            ));
        }

        Ok(AppState {
            views: Arc::new(views),
            bundler: Arc::new(bundler),
            assets_dir: Arc::new(assets_dir),
            dev_mode: self.dev_mode,
        })
    }
}
