//! # Graphics Gallery Server CLI
//!
//! Binary entry point for the demo server: loads views and the bundle
//! manifest, builds the application state, and serves HTTP.

use std::io;
use std::net::SocketAddr;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use gfx_gallery::bundler::DevBundler;
use gfx_gallery::http::{build_router, AppState};
use gfx_gallery::views::ViewBook;

mod cli;

use cli::Cli;

#[tokio::main]
async fn main() -> io::Result<()> {
    // Initialize logging
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(env_filter).init();

    // Parse CLI arguments
    let cli = Cli::parse();

    let views = ViewBook::load_from_dir(&cli.views)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    let bundler = DevBundler::load_from_path(&cli.bundles)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    let state = AppState::builder()
        .with_views(views)
        .with_bundler(bundler)
        .with_assets_dir(cli.assets)
        .with_dev_mode(cli.dev)
        .build()?;

    let app = build_router(state);

    let addr: SocketAddr = cli.listen.parse().map_err(io::Error::other)?;
    tracing::info!("starting gfx-gallery on http://{addr}");
    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await?;
    Ok(())
}
