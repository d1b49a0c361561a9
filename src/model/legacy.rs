//! Normalization of legacy persisted document shapes.
//!
//! Earlier versions of the format persisted several divergent schemas:
//! contact links as a map keyed by provider name, contact fields as
//! `{text, url}` objects, item details as a single string, and
//! visibility flags on sections and items. Rather than branching on
//! shape throughout the core, everything is upgraded here, once, into
//! the canonical schema before typed deserialization.

use serde_json::{Map, Value};

/// Rewrite a persisted JSON value in place into the canonical
/// [`crate::CvDocument`] shape.
pub(crate) fn normalize_legacy(value: &mut Value) {
    let Some(root) = value.as_object_mut() else {
        return;
    };

    if let Some(contact) = root.get_mut("contact").and_then(Value::as_object_mut) {
        normalize_contact(contact);
    }

    if let Some(sections) = root.get_mut("sections").and_then(Value::as_array_mut) {
        for section in sections {
            let Some(section) = section.as_object_mut() else {
                continue;
            };
            normalize_section(section);
        }
    }
}

fn normalize_contact(contact: &mut Map<String, Value>) {
    for field in ["name", "title", "phone", "email", "location"] {
        if let Some(text) = contact.get(field).and_then(link_object_text) {
            log::debug!("legacy contact field {field:?} stored as link object");
            contact.insert(field.to_string(), Value::String(text));
        }
    }

    // Links keyed by provider name become an ordered array. Map
    // iteration order is whatever the persisted object had, which is
    // the best available stand-in for the original encounter order.
    if let Some(links) = contact.get("links").and_then(Value::as_object).cloned() {
        log::debug!("legacy contact links stored as map with {} entries", links.len());
        let upgraded: Vec<Value> = links
            .into_iter()
            .map(|(provider, entry)| {
                let url = match &entry {
                    Value::String(s) => s.clone(),
                    Value::Object(o) => o
                        .get("url")
                        .or_else(|| o.get("text"))
                        .and_then(Value::as_str)
                        .unwrap_or_default()
                        .to_string(),
                    _ => String::new(),
                };
                serde_json::json!({ "text": provider, "url": url })
            })
            .collect();
        contact.insert("links".to_string(), Value::Array(upgraded));
    }
}

fn normalize_section(section: &mut Map<String, Value>) {
    section.remove("isVisible");

    let Some(items) = section.get_mut("items").and_then(Value::as_array_mut) else {
        return;
    };
    for item in items {
        let Some(item) = item.as_object_mut() else {
            continue;
        };
        item.remove("isVisible");
        item.remove("type");

        if let Some(detail) = item.get("details").and_then(Value::as_str) {
            log::debug!("legacy item details stored as bare string");
            let detail = Value::String(detail.to_string());
            item.insert("details".to_string(), Value::Array(vec![detail]));
        }
    }
}

/// The `text` of a `{text, url}` object, if `value` is one.
fn link_object_text(value: &Value) -> Option<String> {
    value
        .as_object()?
        .get("text")
        .and_then(Value::as_str)
        .map(str::to_string)
}
