//! Section entry types.

use serde::{Deserialize, Serialize};

/// A single entry inside a section.
///
/// An item usually carries a `primary` label (role, project name) with
/// an optional right-aligned companion such as a date range, an
/// optional `secondary` pair (employer, location), and bullet
/// `details`. An item with neither label is a *bare* item: its only
/// content is the bullet list, used for top-level bullets directly
/// under a section heading.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CvItem {
    /// Main label line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,

    /// Right-aligned companion of `primary` (e.g. a date range).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_right: Option<String>,

    /// Sub-label line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,

    /// Right-aligned companion of `secondary`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_right: Option<String>,

    /// Bullet lines, in source order.
    #[serde(default)]
    pub details: Vec<String>,

    /// Force a layout break before this item.
    #[serde(rename = "break", default, skip_serializing_if = "is_false")]
    pub break_before: bool,
}

pub(crate) fn is_false(value: &bool) -> bool {
    !value
}

impl CvItem {
    /// Create an empty item.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a bare item seeded with one detail line.
    pub fn bare(detail: impl Into<String>) -> Self {
        Self {
            details: vec![detail.into()],
            ..Self::default()
        }
    }

    /// Whether this item has no primary and no secondary label.
    pub fn is_bare(&self) -> bool {
        self.primary.is_none() && self.secondary.is_none()
    }

    /// Append a detail bullet.
    pub fn add_detail(&mut self, detail: impl Into<String>) {
        self.details.push(detail.into());
    }
}
