//! Single-pass parser for the CV Markdown dialect.

use crate::model::{ContactInfo, CvDocument, CvItem, CvSection};

use super::frontmatter::extract_frontmatter;
use super::line::{classify, Line};
use super::options::{LinkPolicy, ParseOptions};

/// The break marker token: a trailing `\break` on a `## ` or `### `
/// heading forces a layout break before that section or item.
pub(crate) const BREAK_MARKER: &str = "\\break";

/// Parser for the dialect.
///
/// The parser is total: any text yields a document, possibly with
/// empty fields. Lines that fit no grammar rule are skipped with a
/// debug log, never an error; whether the result is a *valid* CV is
/// the validator's business.
pub struct CvParser {
    options: ParseOptions,
}

/// What the parser is currently inside, between two lines.
///
/// The open section travels inside the state value; the open item,
/// when `item_open` is set, is the last item of that section.
#[derive(Debug)]
enum State {
    /// Nothing recognized yet (or a stray line ended the contact block).
    AtStart,
    /// Inside the contact sub-block: bullets are `key: value` fields.
    InContact,
    /// Inside a section: bullets are details.
    InSection { section: CvSection, item_open: bool },
}

impl CvParser {
    /// Create a parser with default options.
    pub fn new() -> Self {
        Self::with_options(ParseOptions::default())
    }

    /// Create a parser with the given options.
    pub fn with_options(options: ParseOptions) -> Self {
        Self { options }
    }

    /// Parse dialect text into a document.
    ///
    /// Frontmatter is split off first; the body is then consumed as a
    /// sequence of trimmed, non-blank lines in one left-to-right pass.
    pub fn parse(&self, markdown: &str) -> CvDocument {
        let (properties, body) = extract_frontmatter(markdown);
        let mut doc = CvDocument {
            properties,
            ..CvDocument::default()
        };

        let mut state = State::AtStart;
        for raw in body.lines() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }
            state = self.step(&mut doc, state, classify(line));
        }

        if let State::InSection { section, .. } = state {
            doc.sections.push(section);
        }
        doc
    }

    /// Apply one classified line to the state machine.
    fn step<'a>(&self, doc: &mut CvDocument, state: State, line: Line<'a>) -> State {
        match line {
            Line::Name(rest) => {
                // Only the first `# ` heading starts the contact block.
                if !doc.contact.name.is_empty() {
                    log::debug!("ignoring extra level-1 heading: {rest:?}");
                    return state;
                }
                if let State::InSection { section, .. } = state {
                    doc.sections.push(section);
                }
                doc.contact.name = rest.trim().to_string();
                State::InContact
            }

            Line::Section(rest) => {
                if let State::InSection { section, .. } = state {
                    doc.sections.push(section);
                }
                let (title, break_before) = strip_break_marker(rest);
                State::InSection {
                    section: CvSection {
                        title: title.to_string(),
                        items: Vec::new(),
                        break_before,
                    },
                    item_open: false,
                }
            }

            Line::Item(rest) => match state {
                State::InSection { mut section, .. } => {
                    let (text, break_before) = strip_break_marker(rest);
                    let (primary, primary_right) = split_pair(text);
                    section.items.push(CvItem {
                        primary: Some(primary),
                        primary_right,
                        break_before,
                        ..CvItem::default()
                    });
                    State::InSection {
                        section,
                        item_open: true,
                    }
                }
                State::AtStart | State::InContact => {
                    log::debug!("ignoring item heading outside a section: {rest:?}");
                    State::AtStart
                }
            },

            Line::SubItem(rest) => match state {
                State::InSection {
                    mut section,
                    item_open,
                } => {
                    let (secondary, secondary_right) = split_pair(rest);
                    match section.items.last_mut().filter(|_| item_open) {
                        Some(item) => {
                            item.secondary = Some(secondary);
                            item.secondary_right = secondary_right;
                        }
                        // A sub-heading with no open item still starts
                        // one, so that secondary-only items survive a
                        // serialize/parse round trip.
                        None => section.items.push(CvItem {
                            secondary: Some(secondary),
                            secondary_right,
                            ..CvItem::default()
                        }),
                    }
                    State::InSection {
                        section,
                        item_open: true,
                    }
                }
                State::AtStart | State::InContact => {
                    log::debug!("ignoring sub-heading outside a section: {rest:?}");
                    State::AtStart
                }
            },

            Line::Bullet(rest) => match state {
                State::InContact => {
                    self.contact_field(&mut doc.contact, rest);
                    State::InContact
                }
                State::InSection {
                    mut section,
                    item_open: false,
                } => {
                    section.items.push(CvItem::bare(rest));
                    State::InSection {
                        section,
                        item_open: true,
                    }
                }
                State::InSection {
                    mut section,
                    item_open: true,
                } => {
                    if let Some(item) = section.items.last_mut() {
                        item.add_detail(rest);
                    }
                    State::InSection {
                        section,
                        item_open: true,
                    }
                }
                State::AtStart => {
                    log::debug!("ignoring bullet outside any block: {rest:?}");
                    State::AtStart
                }
            },

            Line::Other(text) => match state {
                // A non-bullet line ends the contact sub-block.
                State::InContact => State::AtStart,
                state => {
                    log::debug!("ignoring unrecognized line: {text:?}");
                    state
                }
            },
        }
    }

    /// Consume one `- key: value` line of the contact sub-block.
    fn contact_field(&self, contact: &mut ContactInfo, rest: &str) {
        let Some((key, value)) = rest.split_once(": ") else {
            log::debug!("ignoring contact bullet without key: {rest:?}");
            return;
        };
        let key = key.trim();
        let value = value.trim().to_string();

        match key.to_ascii_lowercase().as_str() {
            "title" => contact.title = value,
            "phone" => contact.phone = value,
            "location" => contact.location = value,
            "email" => contact.email = value,
            "linkedin" | "github" => contact.add_link(key, value),
            _ => match self.options.link_policy {
                LinkPolicy::Preserve => contact.add_link(key, value),
                LinkPolicy::KnownOnly => {
                    log::debug!("dropping unrecognized contact key: {key:?}")
                }
            },
        }
    }
}

impl Default for CvParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Strip a trailing break marker from heading text.
///
/// Returns the cleaned, trimmed text and whether the marker was
/// present. The marker matches with or without whitespace before it.
fn strip_break_marker(text: &str) -> (&str, bool) {
    let trimmed = text.trim();
    match trimmed.strip_suffix(BREAK_MARKER) {
        Some(rest) => (rest.trim_end(), true),
        None => (trimmed, false),
    }
}

/// Split heading text on the first ` | ` into a left/right pair.
fn split_pair(text: &str) -> (String, Option<String>) {
    match text.split_once(" | ") {
        Some((left, right)) => (left.to_string(), Some(right.to_string())),
        None => (text.to_string(), None),
    }
}
