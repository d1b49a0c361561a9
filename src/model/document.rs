//! Document-level types.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{ContactInfo, CvSection};

/// Frontmatter metadata not otherwise modeled: an insertion-ordered
/// map from key to scalar or list value, reproduced verbatim on
/// serialization.
pub type Properties = IndexMap<String, PropertyValue>;

/// A frontmatter value: either a scalar or an ordered list of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    /// `key: value` on one line.
    Scalar(String),
    /// `key:` followed by `- item` lines.
    List(Vec<String>),
}

impl PropertyValue {
    /// The scalar value, if this is one.
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            PropertyValue::Scalar(s) => Some(s),
            PropertyValue::List(_) => None,
        }
    }

    /// The list items, if this is a list.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            PropertyValue::Scalar(_) => None,
            PropertyValue::List(items) => Some(items),
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::Scalar(value.to_string())
    }
}

impl From<Vec<String>> for PropertyValue {
    fn from(items: Vec<String>) -> Self {
        PropertyValue::List(items)
    }
}

/// A structured CV document.
///
/// Produced by the parser from dialect text, or loaded from the JSON
/// transport form. The document is a value type: it is regenerated,
/// not mutated in place, whenever the source text changes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CvDocument {
    /// Frontmatter properties. Absent from the JSON form when empty.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub properties: Properties,

    /// The contact block.
    #[serde(default)]
    pub contact: ContactInfo,

    /// Sections in source order.
    #[serde(default)]
    pub sections: Vec<CvSection>,
}

impl CvDocument {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of sections.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Append a section.
    pub fn add_section(&mut self, section: CvSection) {
        self.sections.push(section);
    }

    /// Find a section by title, case-insensitively.
    pub fn find_section(&self, title: &str) -> Option<&CvSection> {
        self.sections
            .iter()
            .find(|s| s.title.eq_ignore_ascii_case(title))
    }

    /// Whether the document carries no content at all.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
            && self.contact == ContactInfo::default()
            && self.sections.is_empty()
    }
}
