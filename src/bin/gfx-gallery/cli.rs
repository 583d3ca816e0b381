//! Command-line interface definitions for the gallery server.

use std::path::PathBuf;

use clap::Parser;

/// Command-line arguments for the gallery server.
#[derive(Debug, Parser)]
#[command(name = "gfx-gallery")]
#[command(
    author,
    version,
    about = "Demo server for graphics-backend showcase pages with a dev bundler"
)]
pub struct Cli {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:3000")]
    pub listen: String,

    /// Directory containing the view templates
    #[arg(long, default_value = "www/views")]
    pub views: PathBuf,

    /// Directory served for static asset requests
    #[arg(long, default_value = "www/asset")]
    pub assets: PathBuf,

    /// Path to the YAML bundle manifest
    #[arg(long, default_value = "www/bundles.yaml")]
    pub bundles: PathBuf,

    /// Include full error detail on rendered error pages
    #[arg(long)]
    pub dev: bool,
}
