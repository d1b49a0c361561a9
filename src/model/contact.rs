//! Contact block types.

use serde::{Deserialize, Serialize};

/// The contact block at the top of a CV document.
///
/// All fields default to the empty string; after a successful parse of
/// a well-formed document only `name` is guaranteed to be set. `links`
/// preserves the order the entries were first seen in, which is also
/// the order they are written back out in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    /// Candidate name, taken from the level-1 heading.
    #[serde(default)]
    pub name: String,

    /// Job title or headline.
    #[serde(default)]
    pub title: String,

    /// Phone number, as written.
    #[serde(default)]
    pub phone: String,

    /// Email address, as written.
    #[serde(default)]
    pub email: String,

    /// Location line (city, country).
    #[serde(default)]
    pub location: String,

    /// Labeled links (LinkedIn, GitHub, personal site, ...) in
    /// encounter order.
    #[serde(default)]
    pub links: Vec<ContactLink>,
}

impl ContactInfo {
    /// Create an empty contact block.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a link, preserving insertion order.
    pub fn add_link(&mut self, text: impl Into<String>, url: impl Into<String>) {
        self.links.push(ContactLink {
            text: text.into(),
            url: url.into(),
        });
    }

    /// Look up a link by its label, case-insensitively.
    pub fn link(&self, text: &str) -> Option<&ContactLink> {
        self.links
            .iter()
            .find(|l| l.text.eq_ignore_ascii_case(text))
    }
}

/// A labeled link in the contact block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactLink {
    /// Display label (usually the key it was written under).
    pub text: String,

    /// Link target.
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_link_preserves_order() {
        let mut contact = ContactInfo::new();
        contact.add_link("LinkedIn", "https://linkedin.com/in/jane");
        contact.add_link("GitHub", "https://github.com/jane");
        contact.add_link("Blog", "https://jane.dev");

        let labels: Vec<&str> = contact.links.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(labels, vec!["LinkedIn", "GitHub", "Blog"]);
    }

    #[test]
    fn test_link_lookup_case_insensitive() {
        let mut contact = ContactInfo::new();
        contact.add_link("GitHub", "https://github.com/jane");

        assert!(contact.link("github").is_some());
        assert!(contact.link("gitlab").is_none());
    }
}
