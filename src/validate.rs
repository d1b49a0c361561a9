//! Structural validation of CV documents.
//!
//! Validation is advisory, not a gate: parsing always succeeds
//! structurally, and this second pass reports every defect it finds as
//! a human-readable list. An invalid document is a normal, reportable
//! outcome -- nothing here returns an `Err` or panics.

use serde::{Deserialize, Serialize};

use crate::model::CvDocument;
use crate::parser::{extract_frontmatter, CvParser};

/// Outcome of validating a document: the ordered list of defects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Defect descriptions, in check order. Empty means valid.
    pub errors: Vec<String>,
}

impl ValidationReport {
    /// Create an empty (passing) report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no defects were found.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn defect(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }
}

/// Validate dialect text.
///
/// Checks that the body (after frontmatter) opens with a level-1
/// heading, then parses the text and applies the structural checks of
/// [`validate_document`]. All defects are collected, not just the
/// first.
pub fn validate(markdown: &str) -> ValidationReport {
    let mut report = ValidationReport::new();

    let (_, body) = extract_frontmatter(markdown);
    let first_line = body.lines().map(str::trim).find(|line| !line.is_empty());
    if !first_line.is_some_and(|line| line.starts_with("# ")) {
        report.defect("CV must start with a level-1 heading naming the candidate");
    }

    let doc = CvParser::new().parse(markdown);
    report.errors.extend(validate_document(&doc).errors);
    report
}

/// Validate an already-structured document.
///
/// Field checks: `name`, `title`, and `email` must be non-empty, each
/// missing one its own defect. Shape checks: at least one section,
/// every section titled and non-empty.
pub fn validate_document(doc: &CvDocument) -> ValidationReport {
    let mut report = ValidationReport::new();

    if doc.contact.name.is_empty() {
        report.defect("Contact name is missing");
    }
    if doc.contact.title.is_empty() {
        report.defect("Contact title is missing");
    }
    if doc.contact.email.is_empty() {
        report.defect("Contact email is missing");
    }

    if doc.sections.is_empty() {
        report.defect("CV must contain at least one section");
    }
    for (index, section) in doc.sections.iter().enumerate() {
        if section.title.is_empty() {
            report.defect(format!("Section {} has no title", index + 1));
        }
        if section.items.is_empty() {
            let name = if section.title.is_empty() {
                format!("Section {}", index + 1)
            } else {
                format!("Section '{}'", section.title)
            };
            report.defect(format!("{name} has no items"));
        }
    }

    report
}
