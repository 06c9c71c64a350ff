// Test mock for the TextGenerator boundary.
//
// MockGenerator routes by prompt substring: first registered rule whose
// pattern appears in the prompt wins. Unmatched prompts fail with a
// NOT_IMPLEMENTED Api error so a test that forgot a rule fails loudly.
// Every prompt is also logged so tests can assert on what was actually sent.

use std::sync::Mutex;

use async_trait::async_trait;

use gemini_client::{GenerateError, StatusCode};

use crate::traits::TextGenerator;

enum Outcome {
    Respond(String),
    Fail(StatusCode, String),
}

struct Rule {
    pattern: String,
    outcome: Outcome,
}

pub struct MockGenerator {
    rules: Vec<Rule>,
    calls: Mutex<Vec<String>>,
}

impl MockGenerator {
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn on_contains(mut self, pattern: &str, response: &str) -> Self {
        self.rules.push(Rule {
            pattern: pattern.to_string(),
            outcome: Outcome::Respond(response.to_string()),
        });
        self
    }

    /// Prompts matching `pattern` fail with a 500, standing in for any
    /// transport-level failure.
    pub fn fail_contains(mut self, pattern: &str) -> Self {
        self.rules.push(Rule {
            pattern: pattern.to_string(),
            outcome: Outcome::Fail(
                StatusCode::INTERNAL_SERVER_ERROR,
                "injected failure".to_string(),
            ),
        });
        self
    }

    /// Every prompt sent so far, in call order. Joined calls are logged in
    /// whichever order they were polled.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn route(&self, prompt: &str) -> Result<String, GenerateError> {
        self.calls.lock().unwrap().push(prompt.to_string());
        for rule in &self.rules {
            if prompt.contains(&rule.pattern) {
                return match &rule.outcome {
                    Outcome::Respond(text) => Ok(text.clone()),
                    Outcome::Fail(status, body) => Err(GenerateError::Api {
                        status: *status,
                        body: body.clone(),
                    }),
                };
            }
        }
        Err(GenerateError::Api {
            status: StatusCode::NOT_IMPLEMENTED,
            body: format!(
                "no mock rule matches prompt: {}",
                prompt.chars().take(80).collect::<String>()
            ),
        })
    }
}

impl Default for MockGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GenerateError> {
        self.route(prompt)
    }

    async fn generate_json(&self, prompt: &str) -> Result<String, GenerateError> {
        self.route(prompt)
    }
}
