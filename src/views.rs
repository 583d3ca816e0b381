//! View template definitions for server-rendered pages.
//!
//! Templates are plain HTML files loaded once at startup. The only dynamic
//! rendering any page needs is the error page, which substitutes a message
//! and an error-detail object into `{{ message }}` and `{{ detail }}`
//! placeholders. Substituted values are HTML-escaped.

use std::{collections::HashMap, fs, path::Path};

use thiserror::Error;

/// Errors that can occur when loading or rendering view templates.
#[derive(Debug, Error)]
pub enum ViewError {
    /// I/O error while reading a template file.
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    /// Requested template name is not in the book.
    #[error("unknown view: {0}")]
    UnknownView(String),
}

/// Context passed to a template render.
///
/// Page views carry no per-request data and render with the default
/// (empty) context; the `error` view uses both fields.
#[derive(Debug, Clone)]
pub struct RenderContext {
    /// Human-readable message shown unconditionally.
    pub message: String,
    /// Error detail object; empty outside development mode.
    pub detail: serde_json::Value,
}

impl Default for RenderContext {
    fn default() -> Self {
        Self { message: String::new(), detail: serde_json::Value::Object(Default::default()) }
    }
}

/// A collection of named view templates.
#[derive(Debug, Default, Clone)]
pub struct ViewBook {
    templates: HashMap<String, String>,
}

impl ViewBook {
    /// Load all `*.html` templates from a directory.
    ///
    /// The file stem becomes the view name (`index.html` -> `index`).
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or any template file cannot be read.
    pub fn load_from_dir(dir: impl AsRef<Path>) -> Result<Self, ViewError> {
        let mut templates = HashMap::new();
        for entry in fs::read_dir(dir.as_ref())? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("html") {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            templates.insert(name.to_string(), fs::read_to_string(&path)?);
        }
        Ok(Self { templates })
    }

    /// Add or replace a template under the given view name.
    pub fn insert(&mut self, name: impl Into<String>, template: impl Into<String>) {
        self.templates.insert(name.into(), template.into());
    }

    /// Whether a template with the given name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    /// Render the named template with the given context.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::UnknownView`] if no template has that name.
    pub fn render(&self, name: &str, ctx: &RenderContext) -> Result<String, ViewError> {
        let template = self
            .templates
            .get(name)
            .ok_or_else(|| ViewError::UnknownView(name.to_string()))?;
        let detail = serde_json::to_string_pretty(&ctx.detail).unwrap_or_default();
        Ok(template
            .replace("{{ message }}", &escape_html(&ctx.message))
            .replace("{{ detail }}", &escape_html(&detail)))
    }
}

/// Minimal HTML escaping for substituted values.
fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    /// Test loading templates from a directory.
    #[test]
    fn test_load_from_dir() {
        let dir = tempfile::tempdir().expect("create temp dir");
        fs::write(dir.path().join("index.html"), "<h1>Gallery</h1>").expect("write template");
        fs::write(dir.path().join("error.html"), "<p>{{ message }}</p>").expect("write template");
        fs::write(dir.path().join("notes.txt"), "ignored").expect("write file");

        let book = ViewBook::load_from_dir(dir.path()).expect("load views");
        assert!(book.contains("index"));
        assert!(book.contains("error"));
        assert!(!book.contains("notes"));
    }

    /// Test loading from a missing directory fails.
    #[test]
    fn test_load_from_missing_dir() {
        let result = ViewBook::load_from_dir("/nonexistent/views");
        assert!(matches!(result, Err(ViewError::Io(_))));
    }

    /// Test rendering substitutes message and detail placeholders.
    #[test]
    fn test_render_substitution() {
        let mut book = ViewBook::default();
        book.insert("error", "<h1>{{ message }}</h1><pre>{{ detail }}</pre>");

        let ctx = RenderContext {
            message: "not found".to_string(),
            detail: serde_json::json!({"status": 404}),
        };
        let html = book.render("error", &ctx).expect("render");
        assert!(html.contains("<h1>not found</h1>"));
        assert!(html.contains("404"));
    }

    /// Test rendering escapes HTML in the message.
    #[test]
    fn test_render_escapes_message() {
        let mut book = ViewBook::default();
        book.insert("error", "{{ message }}");

        let ctx = RenderContext {
            message: "<script>alert(1)</script>".to_string(),
            ..Default::default()
        };
        let html = book.render("error", &ctx).expect("render");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    /// Test the default context renders an empty detail object.
    #[test]
    fn test_default_context_has_empty_detail() {
        let mut book = ViewBook::default();
        book.insert("error", "{{ detail }}");

        let html = book.render("error", &RenderContext::default()).expect("render");
        assert_eq!(html, "{}");
    }

    /// Test rendering an unknown view fails.
    #[test]
    fn test_render_unknown_view() {
        let book = ViewBook::default();
        let result = book.render("missing", &RenderContext::default());
        assert!(matches!(result, Err(ViewError::UnknownView(name)) if name == "missing"));
    }
}
