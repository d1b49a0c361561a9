//! Line classification for the dialect grammar.

/// A single trimmed, non-blank line of body text, classified by its
/// leading marker.
///
/// Classification is total: every line maps to exactly one kind, and
/// lines that fit no marker become [`Line::Other`] rather than an
/// error. What a [`Line::Bullet`] means (contact field or detail)
/// depends on the parser state, not on the line itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// `# ` -- the contact heading carrying the candidate name.
    Name(&'a str),
    /// `## ` -- a section heading.
    Section(&'a str),
    /// `### ` -- an item heading carrying the primary pair.
    Item(&'a str),
    /// `#### ` -- a sub-heading carrying the secondary pair.
    SubItem(&'a str),
    /// `- ` -- a bullet line.
    Bullet(&'a str),
    /// Anything else. Ignored by the parser.
    Other(&'a str),
}

/// Classify one trimmed line.
pub fn classify(line: &str) -> Line<'_> {
    if let Some(rest) = line.strip_prefix("#### ") {
        Line::SubItem(rest)
    } else if let Some(rest) = line.strip_prefix("### ") {
        Line::Item(rest)
    } else if let Some(rest) = line.strip_prefix("## ") {
        Line::Section(rest)
    } else if let Some(rest) = line.strip_prefix("# ") {
        Line::Name(rest)
    } else if let Some(rest) = line.strip_prefix("- ") {
        Line::Bullet(rest)
    } else {
        Line::Other(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_headings() {
        assert_eq!(classify("# Jane Doe"), Line::Name("Jane Doe"));
        assert_eq!(classify("## Experience"), Line::Section("Experience"));
        assert_eq!(classify("### Engineer | 2020"), Line::Item("Engineer | 2020"));
        assert_eq!(classify("#### TeamCo"), Line::SubItem("TeamCo"));
    }

    #[test]
    fn test_classify_bullet() {
        assert_eq!(classify("- Rust"), Line::Bullet("Rust"));
    }

    #[test]
    fn test_classify_requires_marker_space() {
        assert_eq!(classify("#Heading"), Line::Other("#Heading"));
        assert_eq!(classify("-dash"), Line::Other("-dash"));
        assert_eq!(classify("##### too deep"), Line::Other("##### too deep"));
    }

    #[test]
    fn test_classify_plain_text() {
        assert_eq!(classify("just prose"), Line::Other("just prose"));
    }
}
