//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

/// Trait for text-generation providers
///
/// Implemented by the infrastructure layer (fitcoach-llm). Implementations
/// return the provider's raw response envelope untouched; unwrapping the
/// generated text is the caller's job.
pub trait TextGenerator {
    /// Error type for generation
    type Error;

    /// Generate a completion for `prompt`, returning the raw envelope
    fn generate(&self, prompt: &str) -> Result<String, Self::Error>;
}
