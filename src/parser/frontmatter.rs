//! Frontmatter extraction.

use crate::model::{Properties, PropertyValue};

/// Split an optional `---`-delimited key/value preamble from the body.
///
/// If the text does not begin with a `---` line the whole input is the
/// body and the properties are empty; frontmatter is optional, so this
/// is not an error. A preamble that opens but never closes is treated
/// the same way -- the original text, delimiters included, becomes the
/// body. The grammar inside the block is forgiving: blank lines and
/// lines that are neither `key: value`, `key:`, nor `- item` are
/// skipped.
///
/// # Example
///
/// ```
/// use cvmark::extract_frontmatter;
///
/// let (properties, body) = extract_frontmatter("---\ntheme: modern\n---\n# Jane Doe");
/// assert_eq!(properties["theme"].as_scalar(), Some("modern"));
/// assert_eq!(body.trim(), "# Jane Doe");
/// ```
pub fn extract_frontmatter(text: &str) -> (Properties, &str) {
    let Some(block_start) = opening_delimiter_end(text) else {
        return (Properties::new(), text);
    };

    let Some((block_end, body_start)) = closing_delimiter(text, block_start) else {
        log::warn!("frontmatter opened but never closed; treating whole input as body");
        return (Properties::new(), text);
    };

    let properties = parse_block(&text[block_start..block_end]);
    (properties, &text[body_start..])
}

/// Byte offset just past the opening `---` line, if the text starts
/// with one.
fn opening_delimiter_end(text: &str) -> Option<usize> {
    let line_end = text.find('\n')?;
    if is_delimiter(&text[..line_end]) {
        Some(line_end + 1)
    } else {
        None
    }
}

/// Byte offsets of the closing `---` line: (end of the block, start of
/// the body).
fn closing_delimiter(text: &str, from: usize) -> Option<(usize, usize)> {
    let mut offset = from;
    for line in text[from..].split_inclusive('\n') {
        if is_delimiter(line) {
            return Some((offset, offset + line.len()));
        }
        offset += line.len();
    }
    None
}

fn is_delimiter(line: &str) -> bool {
    line.trim_end_matches(['\r', '\n']) == "---"
}

fn parse_block(block: &str) -> Properties {
    let mut properties = Properties::new();
    let mut open_list: Option<String> = None;

    for raw in block.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(item) = line.strip_prefix("- ") {
            match open_list
                .as_ref()
                .and_then(|key| properties.get_mut(key))
            {
                Some(PropertyValue::List(items)) => items.push(item.trim().to_string()),
                _ => log::debug!("frontmatter list item outside a list: {line:?}"),
            }
            continue;
        }

        match line.split_once(':') {
            Some((key, value)) if !key.trim().is_empty() => {
                let key = key.trim().to_string();
                let value = value.trim();
                if value.is_empty() {
                    properties.insert(key.clone(), PropertyValue::List(Vec::new()));
                    open_list = Some(key);
                } else {
                    properties.insert(key, PropertyValue::Scalar(value.to_string()));
                    open_list = None;
                }
            }
            _ => log::debug!("ignoring unrecognized frontmatter line: {line:?}"),
        }
    }

    properties
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_frontmatter() {
        let input = "not frontmatter\n## Section";
        let (properties, body) = extract_frontmatter(input);
        assert!(properties.is_empty());
        assert_eq!(body, input);
    }

    #[test]
    fn test_scalar_and_list_values() {
        let input = "---\ntheme: modern\ntags:\n- rust\n- parsing\nauthor: jane\n---\nbody";
        let (properties, body) = extract_frontmatter(input);

        assert_eq!(properties["theme"].as_scalar(), Some("modern"));
        assert_eq!(
            properties["tags"].as_list(),
            Some(&["rust".to_string(), "parsing".to_string()][..])
        );
        assert_eq!(properties["author"].as_scalar(), Some("jane"));
        assert_eq!(body, "body");

        let keys: Vec<&String> = properties.keys().collect();
        assert_eq!(keys, vec!["theme", "tags", "author"]);
    }

    #[test]
    fn test_unclosed_frontmatter_falls_back() {
        let input = "---\ntheme: modern\n# Jane Doe";
        let (properties, body) = extract_frontmatter(input);
        assert!(properties.is_empty());
        assert_eq!(body, input);
    }

    #[test]
    fn test_garbage_lines_are_skipped() {
        let input = "---\n\ntheme: modern\nnot a mapping at all\n- stray item\n---\nbody";
        let (properties, body) = extract_frontmatter(input);
        assert_eq!(properties.len(), 1);
        assert_eq!(properties["theme"].as_scalar(), Some("modern"));
        assert_eq!(body, "body");
    }

    #[test]
    fn test_indented_list_items() {
        let input = "---\ntags:\n  - rust\n  - go\n---\nbody";
        let (properties, _) = extract_frontmatter(input);
        assert_eq!(
            properties["tags"].as_list(),
            Some(&["rust".to_string(), "go".to_string()][..])
        );
    }

    #[test]
    fn test_crlf_delimiters() {
        let input = "---\r\ntheme: modern\r\n---\r\nbody";
        let (properties, body) = extract_frontmatter(input);
        assert_eq!(properties["theme"].as_scalar(), Some("modern"));
        assert_eq!(body, "body");
    }

    #[test]
    fn test_value_with_colon() {
        let input = "---\nsite: https://jane.dev\n---\nbody";
        let (properties, _) = extract_frontmatter(input);
        assert_eq!(properties["site"].as_scalar(), Some("https://jane.dev"));
    }

    #[test]
    fn test_delimiter_only_at_start() {
        let input = "# Jane Doe\n---\ntheme: modern\n---";
        let (properties, body) = extract_frontmatter(input);
        assert!(properties.is_empty());
        assert_eq!(body, input);
    }
}
