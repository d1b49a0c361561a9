//! Integration tests for parsing and conversion.

use cvmark::{
    convert_file, convert_str, extract_frontmatter, parse, ConvertOptions, Error, JsonFormat,
    OutputFormat,
};
use std::io::Write;

#[test]
fn test_frontmatter_fallback_when_absent() {
    let input = "not frontmatter\n## Section";
    let (properties, body) = extract_frontmatter(input);
    assert!(properties.is_empty());
    assert_eq!(body, input);
}

#[test]
fn test_bare_item_aggregation() {
    let doc = parse("# Jane Doe\n## Skills\n- Go\n- Rust\n");
    let section = &doc.sections[0];
    assert_eq!(section.title, "Skills");
    assert_eq!(section.items.len(), 1);
    let item = &section.items[0];
    assert!(item.primary.is_none());
    assert_eq!(item.details, vec!["Go", "Rust"]);
}

#[test]
fn test_primary_secondary_split() {
    let doc = parse("# Jane Doe\n## Work\n### Engineer | 2020-2023\n#### TeamCo | Remote\n");
    let item = &doc.sections[0].items[0];
    assert_eq!(item.primary.as_deref(), Some("Engineer"));
    assert_eq!(item.primary_right.as_deref(), Some("2020-2023"));
    assert_eq!(item.secondary.as_deref(), Some("TeamCo"));
    assert_eq!(item.secondary_right.as_deref(), Some("Remote"));
}

#[test]
fn test_break_marker_stripped_from_title() {
    let doc = parse("# Jane Doe\n## Projects \\break\n- one\n");
    let section = &doc.sections[0];
    assert_eq!(section.title, "Projects");
    assert!(section.break_before);
    assert!(!section.title.contains("\\break"));
}

#[test]
fn test_blank_lines_are_insignificant() {
    let spaced = "# Jane Doe\n\n\n## Skills\n\n- Rust\n\n- Go\n";
    let dense = "# Jane Doe\n## Skills\n- Rust\n- Go\n";
    assert_eq!(parse(spaced), parse(dense));
}

#[test]
fn test_convert_str_markdown_to_json_and_back() {
    let markdown = "# Jane Doe\n- title: Engineer\n\n## Skills\n- Rust\n";
    let to_json = ConvertOptions::new().with_output(OutputFormat::Json);
    let json = convert_str(markdown, &to_json).unwrap();
    assert_eq!(json.mime_type, "application/json");

    let back = convert_str(&json.content, &ConvertOptions::new()).unwrap();
    assert_eq!(back.mime_type, "text/markdown");
    assert_eq!(back.document, json.document);
}

#[test]
fn test_convert_file_detects_json() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(
        file,
        r#"{{ "contact": {{ "name": "Jane Doe" }}, "sections": [] }}"#
    )
    .unwrap();

    let result = convert_file(file.path(), &ConvertOptions::new()).unwrap();
    assert!(result.content.starts_with("# Jane Doe"));
}

#[test]
fn test_convert_file_detects_markdown() {
    let mut file = tempfile::Builder::new().suffix(".md").tempfile().unwrap();
    write!(file, "# Jane Doe\n## Skills\n- Rust\n").unwrap();

    let options = ConvertOptions::new()
        .with_output(OutputFormat::Json)
        .with_json_format(JsonFormat::Compact);
    let result = convert_file(file.path(), &options).unwrap();
    assert!(result.content.contains("\"Jane Doe\""));
}

#[test]
fn test_convert_rejects_unknown_format() {
    let result = convert_str("nothing recognizable here", &ConvertOptions::new());
    assert!(matches!(result, Err(Error::UnknownFormat)));
}

#[test]
fn test_malformed_frontmatter_treated_as_body() {
    // Opened but never closed: the delimiters become body text and the
    // document still parses from the heading inside.
    let doc = parse("---\ntheme: modern\n# Jane Doe\n## Skills\n- Rust\n");
    assert!(doc.properties.is_empty());
    assert_eq!(doc.contact.name, "Jane Doe");
}
