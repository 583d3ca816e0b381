//! Development bundler for client-side script entry points.
//!
//! Mirrors what a real bundler's dev middleware provides at the HTTP edge:
//! each named entry script is served as `/{name}.bundle.js`, compiled on
//! demand and cached in memory until the entry source changes on disk.
//! "Compilation" here is the minimal development transform of wrapping the
//! entry source in a module closure with a provenance banner.

use std::{
    collections::{BTreeMap, HashMap},
    fs,
    path::{Path, PathBuf},
    sync::RwLock,
    time::SystemTime,
};

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Suffix under which compiled entries are exposed over HTTP.
pub const BUNDLE_SUFFIX: &str = ".bundle.js";

/// Errors that can occur when loading the manifest or compiling a bundle.
#[derive(Debug, Error)]
pub enum BundleError {
    /// I/O error while reading the manifest or an entry source.
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    /// YAML parsing error in the manifest.
    #[error("yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// No entry is configured under the requested name.
    #[error("unknown bundle entry: {0}")]
    UnknownEntry(String),
}

/// On-disk manifest describing the bundle entry points.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct BundleManifest {
    /// Schema version of the manifest file.
    pub version: Option<u8>,
    /// Map from bundle name to entry script path.
    pub entries: BTreeMap<String, PathBuf>,
}

/// A compiled bundle held in the in-memory cache.
#[derive(Debug, Clone)]
struct CachedBundle {
    /// Modification time of the entry source at compile time.
    modified: SystemTime,
    /// Compiled bundle payload.
    bytes: Bytes,
}

/// On-demand compiler for the configured bundle entries.
pub struct DevBundler {
    entries: BTreeMap<String, PathBuf>,
    cache: RwLock<HashMap<String, CachedBundle>>,
}

impl DevBundler {
    /// Create a bundler from an in-memory entry map.
    pub fn from_entries(entries: BTreeMap<String, PathBuf>) -> Self {
        Self { entries, cache: RwLock::new(HashMap::new()) }
    }

    /// Load a bundler from a YAML manifest file.
    ///
    /// Relative entry paths are resolved against the manifest's directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest cannot be read or parsed.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, BundleError> {
        let path = path.as_ref();
        let manifest: BundleManifest = serde_yaml::from_str(&fs::read_to_string(path)?)?;
        let base = path.parent().unwrap_or_else(|| Path::new("."));
        let entries = manifest
            .entries
            .into_iter()
            .map(|(name, entry)| {
                let entry = if entry.is_absolute() { entry } else { base.join(entry) };
                (name, entry)
            })
            .collect();
        Ok(Self::from_entries(entries))
    }

    /// Names of all configured entries.
    pub fn entry_names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Match a request path (without leading slash) against the configured
    /// bundle outputs.
    ///
    /// Returns the entry name for paths like `opengl.bundle.js`, or `None`
    /// if the path does not name a configured bundle.
    pub fn bundle_name<'a>(&self, request_path: &'a str) -> Option<&'a str> {
        let name = request_path.strip_suffix(BUNDLE_SUFFIX)?;
        self.entries.contains_key(name).then_some(name)
    }

    /// Compile the named entry, reusing the cached output while the entry
    /// source is unchanged on disk.
    ///
    /// # Errors
    ///
    /// Returns [`BundleError::UnknownEntry`] for unconfigured names, or an
    /// I/O error if the entry source cannot be read.
    pub async fn compile(&self, name: &str) -> Result<Bytes, BundleError> {
        let entry = self
            .entries
            .get(name)
            .ok_or_else(|| BundleError::UnknownEntry(name.to_string()))?;

        let modified = tokio::fs::metadata(entry).await?.modified()?;
        if let Some(bytes) = self.cached(name, modified) {
            return Ok(bytes);
        }

        let source = tokio::fs::read_to_string(entry).await?;
        let bytes = Bytes::from(wrap_entry(name, entry, &source));
        self.cache
            .write()
            .unwrap()
            .insert(name.to_string(), CachedBundle { modified, bytes: bytes.clone() });
        Ok(bytes)
    }

    /// Look up a cached bundle that is still current for the given mtime.
    fn cached(&self, name: &str, modified: SystemTime) -> Option<Bytes> {
        let cache = self.cache.read().unwrap();
        cache.get(name).filter(|c| c.modified == modified).map(|c| c.bytes.clone())
    }
}

/// Wrap an entry source in the development bundle closure.
fn wrap_entry(name: &str, entry: &Path, source: &str) -> String {
    format!(
        "// development bundle: {name}\n// entry: {entry}\n(() => {{\n{source}\n}})();\n",
        entry = entry.display(),
    )
}
