//! Permissive JSON parsing of sanitized model output

use crate::error::RecommenderError;
use serde_json::Value;

/// A syntactically valid JSON document produced by the model
///
/// No schema is enforced here; missing keys are resolved when sections are
/// read.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedDocument(Value);

impl ParsedDocument {
    /// Document root
    pub fn root(&self) -> &Value {
        &self.0
    }
}

/// Parse sanitized text as JSON
pub fn parse(cleaned: &str) -> Result<ParsedDocument, RecommenderError> {
    let value: Value = serde_json::from_str(cleaned)?;
    Ok(ParsedDocument(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_object() {
        let doc = parse(r#"{"analysis":{"overall":"Good"}}"#).unwrap();
        assert_eq!(doc.root()["analysis"]["overall"], "Good");
    }

    #[test]
    fn test_parse_accepts_any_shape() {
        assert_eq!(parse("[1,2]").unwrap().root(), &json!([1, 2]));
        assert_eq!(parse("\"text\"").unwrap().root(), &json!("text"));
        assert_eq!(parse("{}").unwrap().root(), &json!({}));
    }

    #[test]
    fn test_parse_invalid_json() {
        let result = parse("not json at all");
        assert!(matches!(result, Err(RecommenderError::Parse(_))));
    }

    #[test]
    fn test_parse_empty_text() {
        assert!(matches!(parse(""), Err(RecommenderError::Parse(_))));
    }

    #[test]
    fn test_parse_truncated_json() {
        let result = parse(r#"{"improvements":[{"area":"Form""#);
        assert!(matches!(result, Err(RecommenderError::Parse(_))));
    }
}
