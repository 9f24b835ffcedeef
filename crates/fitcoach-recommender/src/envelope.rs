//! Unwrap the generated text from a provider envelope

use crate::error::RecommenderError;
use crate::lookup::{field, PathSegment};
use serde_json::Value;

/// The only location the generated text is read from
const TEXT_PATH: [PathSegment<'static>; 6] = [
    PathSegment::Key("candidates"),
    PathSegment::Index(0),
    PathSegment::Key("content"),
    PathSegment::Key("parts"),
    PathSegment::Index(0),
    PathSegment::Key("text"),
];

/// Extract `candidates[0].content.parts[0].text` from a raw envelope
///
/// No alternative locations are tried. A missing node anywhere along the
/// path, or a text node that is not a string, is an extraction failure.
pub fn extract_text(raw: &str) -> Result<String, RecommenderError> {
    let envelope: Value = serde_json::from_str(raw)
        .map_err(|e| RecommenderError::Extraction(format!("envelope is not JSON: {}", e)))?;

    let node = field(&envelope, &TEXT_PATH).ok_or_else(|| {
        RecommenderError::Extraction("missing candidates[0].content.parts[0].text".to_string())
    })?;

    node.as_str()
        .map(str::to_string)
        .ok_or_else(|| RecommenderError::Extraction("text node is not a string".to_string()))
}
