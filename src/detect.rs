//! Input format detection.
//!
//! Callers at the boundary (file upload, CLI) may hold text of unknown
//! provenance: dialect Markdown, the structured JSON form, or
//! something else entirely. Detection classifies the input or reports
//! [`Error::UnknownFormat`] -- the only place in the crate where "not
//! a CV" is an explicit error rather than a degraded parse.

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// The recognized source forms of a CV document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// The Markdown dialect (heading/bullet grammar, optional frontmatter).
    Markdown,
    /// The structured JSON transport form.
    Json,
}

impl std::fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceFormat::Markdown => write!(f, "CV Markdown"),
            SourceFormat::Json => write!(f, "structured JSON"),
        }
    }
}

/// Detect the format of input text.
///
/// JSON is recognized by its opening brace; the dialect by a
/// frontmatter delimiter or any heading line. Anything else is
/// [`Error::UnknownFormat`].
///
/// # Example
///
/// ```
/// use cvmark::detect::{detect_format, SourceFormat};
///
/// let format = detect_format("# Jane Doe\n## Skills\n- Rust").unwrap();
/// assert_eq!(format, SourceFormat::Markdown);
/// ```
pub fn detect_format(text: &str) -> Result<SourceFormat> {
    let trimmed = text.trim_start_matches('\u{feff}').trim();
    if trimmed.is_empty() {
        return Err(Error::UnknownFormat);
    }
    if trimmed.starts_with('{') {
        return Ok(SourceFormat::Json);
    }
    if looks_like_dialect(trimmed) {
        return Ok(SourceFormat::Markdown);
    }
    Err(Error::UnknownFormat)
}

/// Detect the format of a file, by extension where conclusive and by
/// content otherwise.
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<SourceFormat> {
    let path = path.as_ref();
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("md" | "markdown") => Ok(SourceFormat::Markdown),
        Some("json") => Ok(SourceFormat::Json),
        _ => detect_format(&fs::read_to_string(path)?),
    }
}

/// Check if text is in the Markdown dialect.
pub fn is_cv_markdown(text: &str) -> bool {
    matches!(detect_format(text), Ok(SourceFormat::Markdown))
}

/// Check if text is the structured JSON form.
pub fn is_structured_json(text: &str) -> bool {
    matches!(detect_format(text), Ok(SourceFormat::Json))
}

/// A text is dialect-shaped if it opens a frontmatter block or
/// contains at least one heading line.
fn looks_like_dialect(text: &str) -> bool {
    let mut lines = text.lines().map(str::trim);
    if lines.clone().next() == Some("---") {
        return true;
    }
    lines.any(is_heading_line)
}

fn is_heading_line(line: &str) -> bool {
    ["# ", "## ", "### ", "#### "]
        .iter()
        .any(|marker| line.starts_with(marker))
}
