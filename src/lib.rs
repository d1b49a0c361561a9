//! # cvmark
//!
//! Bidirectional converter between a constrained Markdown dialect and
//! a structured CV document representation.
//!
//! The dialect is a small fixed grammar, not general Markdown: a
//! `# name` contact heading with `- key: value` fields, `## ` section
//! headings, `### `/`#### ` item headings with ` | `-separated
//! right-aligned companions, `- ` detail bullets, and an optional
//! `---`-delimited frontmatter preamble. Parsing is forgiving and
//! total -- unrecognized lines are skipped, structural problems are
//! reported separately by the validator -- and serialization is
//! canonical, so parsed documents round-trip.
//!
//! ## Quick Start
//!
//! ```
//! use cvmark::{parse, to_markdown, validate};
//!
//! let markdown = "# Jane Doe\n- title: Engineer\n- Email: jane@example.com\n\n## Skills\n- Rust";
//! let doc = parse(markdown);
//! assert_eq!(doc.contact.name, "Jane Doe");
//! assert_eq!(doc.sections[0].title, "Skills");
//!
//! // Serialization is the exact inverse over parsed documents.
//! let canonical = to_markdown(&doc);
//! assert_eq!(parse(&canonical), doc);
//!
//! assert!(validate(markdown).is_valid());
//! ```
//!
//! ## Features
//!
//! - **Total parsing**: every input yields a document; defects are
//!   diagnostics, not errors
//! - **Round-trip law**: `parse(to_markdown(&d)) == d` for any parsed `d`
//! - **Frontmatter**: ordered key/value and key/list properties,
//!   fail-soft on malformed preambles
//! - **JSON transport**: serde-based structured form with legacy-shape
//!   normalization on load
//! - **Format detection**: classify boundary input as dialect text or
//!   structured JSON

pub mod convert;
pub mod detect;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;
pub mod validate;

// Re-export commonly used types
pub use convert::{convert_file, convert_str, ConvertOptions, ConvertResult, OutputFormat};
pub use detect::{detect_format, detect_format_from_path, SourceFormat};
pub use error::{Error, Result};
pub use model::{
    ContactInfo, ContactLink, CvDocument, CvItem, CvSection, Properties, PropertyValue,
};
pub use parser::{extract_frontmatter, CvParser, LinkPolicy, ParseOptions};
pub use render::{from_json, to_json, to_markdown, JsonFormat};
pub use validate::{validate, validate_document, ValidationReport};

use std::path::Path;

/// Parse dialect text into a structured document.
///
/// Parsing is total: it never fails, and unrecognized lines are
/// skipped. Use [`validate`] to check the result for structural
/// defects.
///
/// # Example
///
/// ```
/// use cvmark::parse;
///
/// let doc = parse("# Jane Doe\n## Skills\n- Rust");
/// assert_eq!(doc.sections[0].items[0].details, vec!["Rust"]);
/// ```
pub fn parse(markdown: &str) -> CvDocument {
    CvParser::new().parse(markdown)
}

/// Parse dialect text with custom options.
///
/// # Example
///
/// ```
/// use cvmark::{parse_with_options, ParseOptions};
///
/// let options = ParseOptions::new().known_links_only();
/// let doc = parse_with_options("# Jane Doe\n- Mastodon: x", options);
/// assert!(doc.contact.links.is_empty());
/// ```
pub fn parse_with_options(markdown: &str, options: ParseOptions) -> CvDocument {
    CvParser::with_options(options).parse(markdown)
}

/// Read a dialect file and parse it.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<CvDocument> {
    let text = std::fs::read_to_string(path)?;
    Ok(parse(&text))
}
