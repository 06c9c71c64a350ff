// Trait seam between the director and the generation endpoint.
//
// TextGenerator hides GeminiClient so the round flow can be driven by
// MockGenerator in tests: no network, no API key.

use async_trait::async_trait;

use gemini_client::{GeminiClient, GenerateError};

#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Free-text generation from a single prompt.
    async fn generate(&self, prompt: &str) -> Result<String, GenerateError>;

    /// Generation with JSON output requested. Returns the raw text; decoding
    /// stays with the caller.
    async fn generate_json(&self, prompt: &str) -> Result<String, GenerateError>;
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, GenerateError> {
        GeminiClient::generate(self, prompt).await
    }

    async fn generate_json(&self, prompt: &str) -> Result<String, GenerateError> {
        GeminiClient::generate_json(self, prompt).await
    }
}
