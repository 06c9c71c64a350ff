use tracing::debug;

use crate::error::GenerateError;
use crate::types::*;

const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Client for the Gemini `generateContent` endpoint.
///
/// One request per call, at-most-once: no retries, no caching, no client-side
/// timeout beyond whatever the transport enforces.
#[derive(Clone)]
pub struct GeminiClient {
    api_key: String,
    model: String,
    http: reqwest::Client,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            http: reqwest::Client::new(),
            base_url: GEMINI_API_URL.to_string(),
        }
    }

    pub fn from_env(model: impl Into<String>) -> Result<Self, std::env::VarError> {
        let api_key = std::env::var("GEMINI_API_KEY")?;
        Ok(Self::new(api_key, model))
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Free-text generation: returns the first candidate's first text part.
    pub async fn generate(&self, prompt: &str) -> Result<String, GenerateError> {
        self.send(GenerateRequest::user_text(prompt)).await
    }

    /// Structured generation: asks for `application/json` output. The result
    /// is still returned as raw text; decoding is the caller's concern.
    pub async fn generate_json(&self, prompt: &str) -> Result<String, GenerateError> {
        self.send(GenerateRequest::user_text(prompt).json_mode())
            .await
    }

    async fn send(&self, request: GenerateRequest) -> Result<String, GenerateError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        debug!(model = %self.model, "generateContent request");

        let response = self.http.post(&url).json(&request).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(GenerateError::Api { status, body });
        }

        let parsed: GenerateResponse = response.json().await?;

        if let Some(text) = parsed.first_text() {
            return Ok(text.to_string());
        }

        if let Some(reason) = parsed
            .prompt_feedback
            .and_then(|feedback| feedback.block_reason)
        {
            return Err(GenerateError::ContentBlocked { reason });
        }

        Err(GenerateError::MalformedResponse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_new() {
        let client = GeminiClient::new("test-key", "gemini-2.0-flash");
        assert_eq!(client.model(), "gemini-2.0-flash");
        assert_eq!(client.api_key, "test-key");
        assert_eq!(client.base_url, GEMINI_API_URL);
    }

    #[test]
    fn client_with_base_url() {
        let client =
            GeminiClient::new("test-key", "gemini-2.0-flash").with_base_url("http://localhost:9");
        assert_eq!(client.base_url, "http://localhost:9");
    }
}
