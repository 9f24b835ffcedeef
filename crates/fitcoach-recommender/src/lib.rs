//! Fitcoach Recommender
//!
//! Turns a recorded activity into a coaching recommendation using an LLM.
//!
//! # Architecture
//!
//! ```text
//! Activity → PromptBuilder → TextGenerator → raw envelope
//!          → extract_text → clean → parse → aggregate → Recommendation
//! ```
//!
//! Everything after the raw envelope is total: a response that cannot be
//! unwrapped, parsed or read produces the fixed fallback recommendation
//! rather than an error.
//!
//! # Example Usage
//!
//! ```no_run
//! use fitcoach_recommender::RecommendationService;
//! use fitcoach_domain::Activity;
//! use fitcoach_llm::{GeminiConfig, GeminiProvider};
//!
//! # async fn example(activity: Activity) -> Result<(), Box<dyn std::error::Error>> {
//! let llm = GeminiProvider::new(GeminiConfig::with_api_key("key"))?;
//! let service = RecommendationService::new(llm).with_model_name("gemini-2.0-flash");
//!
//! let recommendation = service.generate_recommendation(&activity).await?;
//! println!("{}", recommendation.recommendation());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod aggregate;
mod envelope;
mod error;
mod fallback;
mod lookup;
mod parser;
mod pipeline;
mod prompt;
mod recommendation;
mod sanitize;
mod service;


pub use aggregate::{
    aggregate, read_analysis, AnalysisSections, Sections, NO_IMPROVEMENTS, NO_SAFETY,
    NO_SUGGESTIONS,
};
pub use envelope::extract_text;
pub use error::RecommenderError;
pub use fallback::{fallback, FALLBACK_NARRATIVE};
pub use lookup::{field, PathSegment};
pub use parser::{parse, ParsedDocument};
pub use pipeline::{process_response, try_process_response};
pub use prompt::PromptBuilder;
pub use recommendation::build_recommendation;
pub use sanitize::clean;
pub use service::RecommendationService;
