//! Canonical Markdown serialization.

use crate::model::{CvDocument, CvItem, CvSection, PropertyValue};
use crate::parser::BREAK_MARKER;

/// Serialize a document to canonical dialect text.
///
/// The output re-parses to an equivalent document: for any `d`
/// produced by the parser, `parse(to_markdown(&d)) == d`. The contact
/// block always emits the four modeled fields in a fixed order (title,
/// location, phone, email), even when empty, followed by the links in
/// insertion order.
pub fn to_markdown(doc: &CvDocument) -> String {
    MarkdownRenderer::new().render(doc)
}

/// Markdown renderer for structured CV documents.
pub struct MarkdownRenderer {
    out: String,
}

impl MarkdownRenderer {
    /// Create a new renderer.
    pub fn new() -> Self {
        Self { out: String::new() }
    }

    /// Render a document.
    pub fn render(mut self, doc: &CvDocument) -> String {
        self.render_frontmatter(doc);
        self.render_contact(doc);
        for section in &doc.sections {
            self.render_section(section);
        }
        self.out.trim().to_string()
    }

    fn render_frontmatter(&mut self, doc: &CvDocument) {
        if doc.properties.is_empty() {
            return;
        }
        self.out.push_str("---\n");
        for (key, value) in &doc.properties {
            match value {
                PropertyValue::Scalar(scalar) => {
                    self.out.push_str(&format!("{key}: {scalar}\n"));
                }
                PropertyValue::List(items) => {
                    self.out.push_str(&format!("{key}:\n"));
                    for item in items {
                        self.out.push_str(&format!("  - {item}\n"));
                    }
                }
            }
        }
        self.out.push_str("---\n\n");
    }

    fn render_contact(&mut self, doc: &CvDocument) {
        let contact = &doc.contact;
        self.out.push_str(&format!("# {}\n", contact.name));
        self.out.push_str(&format!("- title: {}\n", contact.title));
        self.out.push_str(&format!("- Location: {}\n", contact.location));
        self.out.push_str(&format!("- Phone: {}\n", contact.phone));
        self.out.push_str(&format!("- Email: {}\n", contact.email));
        for link in &contact.links {
            self.out.push_str(&format!("- {}: {}\n", link.text, link.url));
        }
        self.out.push('\n');
    }

    fn render_section(&mut self, section: &CvSection) {
        self.out.push_str(&format!(
            "## {}{}\n",
            section.title,
            break_suffix(section.break_before)
        ));
        for item in &section.items {
            self.render_item(item);
        }
    }

    fn render_item(&mut self, item: &CvItem) {
        if let Some(ref primary) = item.primary {
            self.out.push_str(&format!(
                "### {}{}{}\n",
                primary,
                pair_suffix(&item.primary_right),
                break_suffix(item.break_before)
            ));
        }
        if let Some(ref secondary) = item.secondary {
            self.out.push_str(&format!(
                "#### {}{}\n",
                secondary,
                pair_suffix(&item.secondary_right)
            ));
        }
        for detail in &item.details {
            self.out.push_str(&format!("- {detail}\n"));
        }
        self.out.push('\n');
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn pair_suffix(right: &Option<String>) -> String {
    match right {
        Some(right) => format!(" | {right}"),
        None => String::new(),
    }
}

fn break_suffix(break_before: bool) -> String {
    if break_before {
        format!(" {BREAK_MARKER}")
    } else {
        String::new()
    }
}
