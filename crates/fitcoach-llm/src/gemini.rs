//! Gemini Provider Implementation
//!
//! Sends a single-turn `generateContent` request and hands the response body
//! back verbatim. The body is the provider envelope
//! (`{"candidates":[{"content":{"parts":[{"text":...}]}}]}`); unwrapping it is
//! left to the recommendation pipeline.
//!
//! # Features
//!
//! - Async HTTP communication with the Gemini API
//! - Configurable endpoint, model and timeout
//! - Exactly one attempt per call
//!
//! # Examples
//!
//! ```no_run
//! use fitcoach_llm::{GeminiConfig, GeminiProvider};
//!
//! # async fn example() -> Result<(), fitcoach_llm::LlmError> {
//! let provider = GeminiProvider::new(GeminiConfig::with_api_key("key"))?;
//! let raw_envelope = provider.generate("Say hello").await?;
//! # Ok(())
//! # }
//! ```

use crate::config::GeminiConfig;
use crate::envelope::GenerateContentRequest;
use crate::LlmError;
use fitcoach_domain::TextGenerator;
use reqwest::StatusCode;
use tracing::debug;

/// Gemini API provider
pub struct GeminiProvider {
    config: GeminiConfig,
    client: reqwest::Client,
}

impl GeminiProvider {
    /// Create a new Gemini provider
    ///
    /// # Errors
    ///
    /// Returns `LlmError::Config` if the configuration is invalid or the HTTP
    /// client cannot be built.
    pub fn new(config: GeminiConfig) -> Result<Self, LlmError> {
        config.validate().map_err(LlmError::Config)?;

        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| LlmError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Configured model name
    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Generate a completion and return the raw response envelope
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The request cannot be sent or times out
    /// - The model does not exist (404)
    /// - The quota is exhausted (429)
    /// - Any other non-success status is returned
    pub async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let url = self.config.generate_url();
        let request_body = GenerateContentRequest::from_prompt(prompt);

        debug!("Sending generateContent request to model '{}'", self.config.model);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| LlmError::Communication(format!("Request failed: {}", e)))?;

        let status = response.status();
        if status.is_success() {
            return response
                .text()
                .await
                .map_err(|e| LlmError::InvalidResponse(format!("Failed to read body: {}", e)));
        }

        match status {
            StatusCode::NOT_FOUND => Err(LlmError::ModelNotAvailable(self.config.model.clone())),
            StatusCode::TOO_MANY_REQUESTS => Err(LlmError::RateLimitExceeded),
            _ => {
                let error_text = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string());
                Err(LlmError::Communication(format!("HTTP {}: {}", status, error_text)))
            }
        }
    }
}

impl TextGenerator for GeminiProvider {
    type Error = LlmError;

    fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        // Blocking wrapper for the async call; must not run on a runtime thread
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| LlmError::Other(format!("Failed to start runtime: {}", e)))?;

        runtime.block_on(GeminiProvider::generate(self, prompt))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gemini_provider_creation() {
        let provider = GeminiProvider::new(GeminiConfig::with_api_key("key")).unwrap();
        assert_eq!(provider.model(), crate::config::DEFAULT_MODEL);
    }

    #[test]
    fn test_gemini_provider_rejects_missing_key() {
        let result = GeminiProvider::new(GeminiConfig::default());
        assert!(matches!(result, Err(LlmError::Config(_))));
    }

    #[tokio::test]
    async fn test_gemini_error_handling() {
        // Use invalid endpoint to trigger error
        let mut config = GeminiConfig::with_api_key("key");
        config.endpoint = "http://localhost:99999".to_string();
        let provider = GeminiProvider::new(config).unwrap();

        let result = provider.generate("test").await;

        match result {
            Err(LlmError::Communication(_)) => {} // Expected
            other => panic!("Expected Communication error, got {:?}", other),
        }
    }

    #[test]
    fn test_blocking_generate_reports_communication_error() {
        let mut config = GeminiConfig::with_api_key("key");
        config.endpoint = "http://localhost:99999".to_string();
        let provider = GeminiProvider::new(config).unwrap();

        let result = TextGenerator::generate(&provider, "test");
        assert!(matches!(result, Err(LlmError::Communication(_))));
    }

    #[tokio::test]
    #[ignore] // Needs GEMINI_API_KEY and network access
    async fn test_gemini_generate_integration() {
        let Ok(key) = std::env::var("GEMINI_API_KEY") else {
            return;
        };
        let provider = GeminiProvider::new(GeminiConfig::with_api_key(key)).unwrap();
        let raw = provider.generate("Say 'hello' and nothing else").await.unwrap();
        assert!(raw.contains("candidates"));
    }
}
