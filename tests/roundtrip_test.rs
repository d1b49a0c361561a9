//! Round-trip and idempotence laws for the parser/serializer pair.

use cvmark::{parse, to_markdown};

const FULL_CV: &str = "\
---
theme: modern
keywords:
  - rust
  - systems
---

# Jane Doe
- title: Staff Engineer
- Location: Oslo, Norway
- Phone: +47 555 0100
- Email: jane@example.com
- LinkedIn: https://linkedin.com/in/janedoe
- GitHub: https://github.com/janedoe

## Summary
- Systems engineer with a decade of parser and tooling work.

## Experience
### Staff Engineer | 2020-2024
#### TeamCo | Remote
- Led the document pipeline rewrite
- Cut conversion latency by 40%

### Engineer | 2016-2020 \\break
#### ToolWorks | Oslo
- Built the CV rendering stack

## Projects \\break
### cvmark
- Markdown CV converter

## Skills
- Rust
- Go
- TypeScript
";

#[test]
fn test_round_trip_full_document() {
    let doc = parse(FULL_CV);
    let canonical = to_markdown(&doc);
    let reparsed = parse(&canonical);
    assert_eq!(reparsed, doc);
}

#[test]
fn test_serialize_parse_serialize_idempotent() {
    let doc = parse(FULL_CV);
    let once = to_markdown(&doc);
    let twice = to_markdown(&parse(&once));
    assert_eq!(once, twice);
}

#[test]
fn test_round_trip_preserves_order() {
    let doc = parse(FULL_CV);

    let section_titles: Vec<&str> = doc.sections.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(
        section_titles,
        vec!["Summary", "Experience", "Projects", "Skills"]
    );

    let experience = doc.find_section("Experience").unwrap();
    let primaries: Vec<&str> = experience
        .items
        .iter()
        .filter_map(|i| i.primary.as_deref())
        .collect();
    assert_eq!(primaries, vec!["Staff Engineer", "Engineer"]);

    let first = &experience.items[0];
    assert_eq!(
        first.details,
        vec!["Led the document pipeline rewrite", "Cut conversion latency by 40%"]
    );

    let reparsed = parse(&to_markdown(&doc));
    let titles_again: Vec<&str> = reparsed.sections.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles_again, section_titles);
}

#[test]
fn test_round_trip_preserves_link_order() {
    let doc = parse(FULL_CV);
    let labels: Vec<&str> = doc.contact.links.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(labels, vec!["LinkedIn", "GitHub"]);

    let reparsed = parse(&to_markdown(&doc));
    assert_eq!(reparsed.contact.links, doc.contact.links);
}

#[test]
fn test_round_trip_preserves_break_flags() {
    let doc = parse(FULL_CV);
    assert!(doc.find_section("Projects").unwrap().break_before);
    assert!(doc.find_section("Experience").unwrap().items[1].break_before);

    let reparsed = parse(&to_markdown(&doc));
    assert!(reparsed.find_section("Projects").unwrap().break_before);
    assert!(reparsed.find_section("Experience").unwrap().items[1].break_before);
}

#[test]
fn test_round_trip_preserves_frontmatter() {
    let doc = parse(FULL_CV);
    assert_eq!(doc.properties["theme"].as_scalar(), Some("modern"));
    assert_eq!(
        doc.properties["keywords"].as_list(),
        Some(&["rust".to_string(), "systems".to_string()][..])
    );

    let reparsed = parse(&to_markdown(&doc));
    assert_eq!(reparsed.properties, doc.properties);
}

#[test]
fn test_round_trip_secondary_only_item() {
    // A bare item followed by a sub-heading yields a secondary-only
    // item; the law must hold for it too.
    let doc = parse("# Jane Doe\n## Work\n- did things\n#### TeamCo\n");
    let item = &doc.sections[0].items[0];
    assert!(item.primary.is_none());
    assert_eq!(item.secondary.as_deref(), Some("TeamCo"));

    let reparsed = parse(&to_markdown(&doc));
    assert_eq!(reparsed, doc);
}

#[test]
fn test_round_trip_empty_contact_fields() {
    // Unset contact fields are emitted as empty and must come back empty.
    let doc = parse("# Jane Doe\n## Skills\n- Rust\n");
    assert_eq!(doc.contact.title, "");
    assert_eq!(doc.contact.location, "");

    let reparsed = parse(&to_markdown(&doc));
    assert_eq!(reparsed, doc);
}

#[test]
fn test_round_trip_minimal_document() {
    let doc = parse("# Jane Doe");
    let reparsed = parse(&to_markdown(&doc));
    assert_eq!(reparsed, doc);
}
