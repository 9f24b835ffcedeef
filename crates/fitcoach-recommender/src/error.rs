//! Error types for the recommendation pipeline

use thiserror::Error;

/// Errors that can occur while producing a recommendation
///
/// `Extraction`, `Parse` and `Aggregation` never leave the pipeline; they are
/// logged and replaced by the fallback recommendation. `Generation` is raised
/// before a raw envelope exists and is returned to the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecommenderError {
    /// Envelope does not contain `candidates[0].content.parts[0].text`
    #[error("Extraction error: {0}")]
    Extraction(String),

    /// Sanitized text is not valid JSON
    #[error("JSON parse error: {0}")]
    Parse(String),

    /// Parsed document has an unexpected shape
    #[error("Aggregation error: {0}")]
    Aggregation(String),

    /// Text-generation collaborator failed
    #[error("Generation error: {0}")]
    Generation(String),
}

impl RecommenderError {
    /// Short, stable name of the error kind for logs
    pub fn kind(&self) -> &'static str {
        match self {
            RecommenderError::Extraction(_) => "extraction",
            RecommenderError::Parse(_) => "parse",
            RecommenderError::Aggregation(_) => "aggregation",
            RecommenderError::Generation(_) => "generation",
        }
    }
}

impl From<serde_json::Error> for RecommenderError {
    fn from(e: serde_json::Error) -> Self {
        RecommenderError::Parse(e.to_string())
    }
}
