//! One-call conversion between the two transport forms.
//!
//! The core exposes parse/serialize as separate total functions; this
//! module ties them together with format detection for callers that
//! hold a file or a string of unknown provenance and just want it in a
//! particular output form.
//!
//! # Example
//!
//! ```
//! use cvmark::convert::{convert_str, ConvertOptions, OutputFormat};
//!
//! let options = ConvertOptions::new().with_output(OutputFormat::Json);
//! let result = convert_str("# Jane Doe\n## Skills\n- Rust", &options)?;
//! assert_eq!(result.mime_type, "application/json");
//! # Ok::<(), cvmark::Error>(())
//! ```

use std::fs;
use std::path::Path;

use crate::detect::{detect_format, SourceFormat};
use crate::error::Result;
use crate::model::CvDocument;
use crate::parser::{CvParser, ParseOptions};
use crate::render::{from_json, to_json, to_markdown, JsonFormat};

/// Options for document conversion.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Output form to produce.
    pub output: OutputFormat,

    /// Parsing options applied when the input is dialect text.
    pub parse: ParseOptions,

    /// JSON layout applied when the output is JSON.
    pub json_format: JsonFormat,
}

impl ConvertOptions {
    /// Create new conversion options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output format.
    pub fn with_output(mut self, output: OutputFormat) -> Self {
        self.output = output;
        self
    }

    /// Set parsing options.
    pub fn with_parse_options(mut self, parse: ParseOptions) -> Self {
        self.parse = parse;
        self
    }

    /// Set the JSON layout.
    pub fn with_json_format(mut self, format: JsonFormat) -> Self {
        self.json_format = format;
        self
    }
}

/// Output format for conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Canonical dialect Markdown
    #[default]
    Markdown,
    /// Structured JSON
    Json,
}

/// Result of a conversion.
#[derive(Debug, Clone)]
pub struct ConvertResult {
    /// Converted content.
    pub content: String,

    /// MIME type of the output.
    pub mime_type: &'static str,

    /// The structured document the content was rendered from, for
    /// callers that also want to validate or inspect it.
    pub document: CvDocument,
}

/// Convert input text of either form to the requested output form.
///
/// Fails with [`crate::Error::UnknownFormat`] if the input is neither
/// dialect Markdown nor structured JSON; the failure is scoped to this
/// one conversion attempt.
pub fn convert_str(input: &str, options: &ConvertOptions) -> Result<ConvertResult> {
    let document = match detect_format(input)? {
        SourceFormat::Markdown => {
            CvParser::with_options(options.parse.clone()).parse(input)
        }
        SourceFormat::Json => from_json(input)?,
    };

    let (content, mime_type) = match options.output {
        OutputFormat::Markdown => (to_markdown(&document), "text/markdown"),
        OutputFormat::Json => (
            to_json(&document, options.json_format)?,
            "application/json",
        ),
    };

    Ok(ConvertResult {
        content,
        mime_type,
        document,
    })
}

/// Convert a file to the requested output form.
pub fn convert_file<P: AsRef<Path>>(path: P, options: &ConvertOptions) -> Result<ConvertResult> {
    let text = fs::read_to_string(path)?;
    convert_str(&text, options)
}
