//! Gemini `generateContent` wire types
//!
//! Only the request side is modelled as typed structs. Responses are returned
//! to callers as raw text because the recommendation pipeline owns the
//! (deliberately strict) unwrapping of `candidates[0].content.parts[0].text`.

use serde::{Deserialize, Serialize};
use serde_json::json;

/// Request body for the `generateContent` API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerateContentRequest {
    /// Conversation turns; a single user turn for one-shot prompts
    pub contents: Vec<Content>,
}

/// One conversation turn
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Content {
    /// Text parts making up the turn
    pub parts: Vec<Part>,
}

/// A text part
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Part {
    /// Part text
    pub text: String,
}

impl GenerateContentRequest {
    /// Single-turn request carrying `prompt`
    pub fn from_prompt(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part { text: prompt.into() }],
            }],
        }
    }
}

/// Wrap `text` in the response envelope shape a provider returns
///
/// Used by the mock provider and by tests that need realistic raw responses.
pub fn wrap_text(text: &str) -> String {
    json!({
        "candidates": [
            {
                "content": {
                    "parts": [ { "text": text } ],
                    "role": "model"
                },
                "finishReason": "STOP"
            }
        ]
    })
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_value(GenerateContentRequest::from_prompt("hi")).unwrap();
        assert_eq!(body, json!({ "contents": [ { "parts": [ { "text": "hi" } ] } ] }));
    }

    #[test]
    fn test_wrap_text_escapes_payload() {
        let raw = wrap_text("```json\n{\"a\":1}\n```");
        let parsed: Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(
            parsed["candidates"][0]["content"]["parts"][0]["text"],
            "```json\n{\"a\":1}\n```"
        );
    }
}
