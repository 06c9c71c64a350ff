mod client;
mod error;
pub(crate) mod types;

pub use client::GeminiClient;
pub use error::GenerateError;
pub use reqwest::StatusCode;

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
