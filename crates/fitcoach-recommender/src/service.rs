//! Activity → prompt → generator → recommendation

use crate::error::RecommenderError;
use crate::pipeline::process_response;
use crate::prompt::PromptBuilder;
use fitcoach_domain::{Activity, Recommendation, TextGenerator};
use std::sync::Arc;
use tracing::{debug, info};

/// Produces recommendations by calling a text generator once per activity
pub struct RecommendationService<G>
where
    G: TextGenerator,
{
    generator: Arc<G>,
    model_name: String,
}

impl<G> RecommendationService<G>
where
    G: TextGenerator + Send + Sync + 'static,
    G::Error: std::fmt::Display,
{
    /// Create a new service around `generator`
    pub fn new(generator: G) -> Self {
        Self {
            generator: Arc::new(generator),
            model_name: "llm".to_string(),
        }
    }

    /// Set the model name reported in logs
    pub fn with_model_name(mut self, model_name: impl Into<String>) -> Self {
        self.model_name = model_name.into();
        self
    }

    /// Generate a recommendation for `activity`
    ///
    /// The generator is called exactly once. Its failure is returned as
    /// [`RecommenderError::Generation`]; anything wrong with the envelope it
    /// returns yields the fallback recommendation instead of an error.
    pub async fn generate_recommendation(
        &self,
        activity: &Activity,
    ) -> Result<Recommendation, RecommenderError> {
        info!(
            "Generating recommendation for activity '{}' ({}) with model '{}'",
            activity.id, activity.activity_type, self.model_name
        );

        let prompt = PromptBuilder::new(activity).build();
        debug!("Prompt length: {} chars", prompt.len());

        let raw = self.call_generator(prompt).await?;
        debug!("Raw response length: {} chars", raw.len());

        let recommendation = process_response(activity, &raw);

        info!(
            "Recommendation ready for activity '{}': {} improvements, {} suggestions",
            activity.id,
            recommendation.improvements().len(),
            recommendation.suggestions().len()
        );

        Ok(recommendation)
    }

    /// Call the generator off the async runtime
    async fn call_generator(&self, prompt: String) -> Result<String, RecommenderError> {
        let generator = Arc::clone(&self.generator);

        // TextGenerator is blocking
        tokio::task::spawn_blocking(move || {
            generator
                .generate(&prompt)
                .map_err(|e| RecommenderError::Generation(e.to_string()))
        })
        .await
        .map_err(|e| RecommenderError::Generation(format!("Task join error: {}", e)))?
    }
}
