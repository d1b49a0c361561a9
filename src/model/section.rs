//! Section types.

use serde::{Deserialize, Serialize};

use super::item::{is_false, CvItem};

/// A titled group of items.
///
/// The title comes from a `## ` heading with any trailing break marker
/// stripped and recorded in `break_before`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CvSection {
    /// Section title.
    pub title: String,

    /// Items in source order. May be empty structurally; the validator
    /// reports empty sections as defects.
    #[serde(default)]
    pub items: Vec<CvItem>,

    /// Force a layout break before this section.
    #[serde(rename = "break", default, skip_serializing_if = "is_false")]
    pub break_before: bool,
}

impl CvSection {
    /// Create an empty section with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Append an item.
    pub fn add_item(&mut self, item: CvItem) {
        self.items.push(item);
    }

    /// Whether the section has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
