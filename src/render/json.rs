//! JSON transport for structured documents.
//!
//! The structured form travels as a plain JSON mapping matching the
//! document shape, e.g. for local caching by a host editor. Loading
//! accepts the legacy shapes earlier versions persisted and upgrades
//! them before typed deserialization.

use crate::error::{Error, Result};
use crate::model::{normalize_legacy, CvDocument};

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Serialize a document to JSON.
pub fn to_json(doc: &CvDocument, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(doc),
        JsonFormat::Compact => serde_json::to_string(doc),
    };
    result.map_err(|e| Error::Json(e.to_string()))
}

/// Load a document from its JSON transport form.
///
/// Legacy persisted shapes (links keyed by provider, details as a
/// single string, visibility flags) are normalized before
/// deserialization.
pub fn from_json(json: &str) -> Result<CvDocument> {
    let mut value: serde_json::Value = serde_json::from_str(json)?;
    normalize_legacy(&mut value);
    serde_json::from_value(value).map_err(Error::from)
}
